//! Variable Catalog Builder
//!
//! Every file-scope and block-scope declaration with a value type is
//! cataloged. Function parameters are not. Arrays are keyed `name[size]`
//! with the element type as value; pointers and functions are skipped.

use std::convert::Infallible;

use crate::features::sync_analysis::domain::VariableCatalog;
use crate::shared::models::{walk_unit, AstVisitor, CType, Decl, TranslationUnit};

#[derive(Debug, Default)]
pub struct VariableCatalogBuilder;

impl VariableCatalogBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn build(&self, unit: &TranslationUnit) -> VariableCatalog {
        let mut visitor = CatalogVisitor::default();
        match walk_unit(&mut visitor, unit) {
            Ok(()) => visitor.catalog,
            Err(never) => match never {},
        }
    }
}

/// Catalog key and type text for one declaration
pub fn catalog_entry(decl: &Decl) -> Option<(String, String)> {
    match &decl.ty {
        CType::Named { .. } | CType::Tagged { .. } => {
            Some((decl.name.clone(), decl.ty.to_string()))
        }
        CType::Array { element, size } => {
            if matches!(element.as_ref(), CType::Pointer { .. } | CType::Function { .. }) {
                return None;
            }
            let key = match size {
                Some(size) => format!("{}[{}]", decl.name, size),
                None => format!("{}[]", decl.name),
            };
            Some((key, element.to_string()))
        }
        CType::Pointer { .. } | CType::Function { .. } => None,
    }
}

#[derive(Default)]
struct CatalogVisitor {
    catalog: VariableCatalog,
}

impl<'ast> AstVisitor<'ast> for CatalogVisitor {
    type Error = Infallible;

    fn visit_decl(&mut self, decl: &'ast Decl) -> Result<(), Infallible> {
        if let Some((key, ty)) = catalog_entry(decl) {
            self.catalog.insert(key, ty);
        }
        Ok(())
    }
}
