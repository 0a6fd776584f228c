//! Dependency Extractor
//!
//! An intention token names a file-scope intentions record, e.g.
//!
//! ```c
//! xAutoSyncIntentions xIntentionN = {
//!     .pvDependsOn[0] = &Global->id,
//!     .bConstantInitByMain = 1,
//! };
//! ```
//!
//! `pvDependsOn` entries become dependencies, `bConstantInitByMain` sets the
//! constant flag, other designated fields are ignored. A record that is not
//! declared, or declared without initializer, yields a note and no
//! dependencies.

use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use tracing::info;

use super::error::{Result, SyncAnalysisError};
use super::expression_resolver::resolve_dependency;
use crate::features::sync_analysis::domain::{
    DependencyNote, IntentionToken, NoteReason, SharedVariableName,
};
use crate::shared::models::{Decl, Expr, Initializer, TranslationUnit};
use crate::shared::utils::dedup_preserving_order;

pub const DEPENDS_ON_FIELD: &str = "pvDependsOn";
pub const CONSTANT_INIT_FIELD: &str = "bConstantInitByMain";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DependencyInfo {
    pub dependencies: BTreeMap<SharedVariableName, Vec<SharedVariableName>>,
    pub constant_init: BTreeMap<SharedVariableName, bool>,
    pub notes: Vec<DependencyNote>,
}

/// Contents of one intentions record
#[derive(Debug, Default, PartialEq)]
struct RecordFields {
    depends_on: Vec<SharedVariableName>,
    constant_init_by_main: bool,
}

pub struct DependencyExtractor<'a> {
    /// File-scope declarations by name; an initialized one shadows a bare `extern`
    records: FxHashMap<&'a str, &'a Decl>,
}

impl<'a> DependencyExtractor<'a> {
    pub fn new(unit: &'a TranslationUnit) -> Self {
        let mut records: FxHashMap<&'a str, &'a Decl> = FxHashMap::default();
        for decl in unit.declarations() {
            let replace = match records.get(decl.name.as_str()) {
                Some(existing) => existing.init.is_none() && decl.init.is_some(),
                None => true,
            };
            if replace {
                records.insert(decl.name.as_str(), decl);
            }
        }
        Self { records }
    }

    /// Dependencies and constant flags for every variable of `resolved`
    pub fn extract(
        &self,
        resolved: &BTreeMap<SharedVariableName, IntentionToken>,
    ) -> Result<DependencyInfo> {
        let mut extracted = DependencyInfo::default();

        for (variable, intention) in resolved {
            let reason = match self.records.get(intention.as_str()) {
                None => Some(NoteReason::MissingDeclaration),
                Some(decl) => match &decl.init {
                    None => Some(NoteReason::MissingInitializer),
                    Some(init) => {
                        let fields = read_record(intention, init)?;
                        extracted.dependencies.insert(
                            variable.clone(),
                            dedup_preserving_order(fields.depends_on),
                        );
                        extracted.constant_init
                            .insert(variable.clone(), fields.constant_init_by_main);
                        None
                    }
                },
            };

            if let Some(reason) = reason {
                let note = DependencyNote {
                    variable: variable.clone(),
                    intention: intention.clone(),
                    reason,
                };
                info!("{}", note);
                extracted.dependencies.insert(variable.clone(), Vec::new());
                extracted.constant_init.insert(variable.clone(), false);
                extracted.notes.push(note);
            }
        }
        Ok(extracted)
    }
}

fn unrecognized(intention: &str, expression: impl ToString) -> SyncAnalysisError {
    SyncAnalysisError::UnrecognizedDependencyExpression {
        intention: intention.to_string(),
        expression: expression.to_string(),
    }
}

fn read_record(intention: &str, init: &Initializer) -> Result<RecordFields> {
    let entries = match init {
        Initializer::List { entries } => entries,
        Initializer::Expr { .. } => return Err(unrecognized(intention, init)),
    };

    let mut fields = RecordFields::default();
    for entry in entries {
        match entry.field_name() {
            Some(DEPENDS_ON_FIELD) => {
                let dependency = match &entry.value {
                    Initializer::Expr { expr } => resolve_dependency(expr),
                    Initializer::List { .. } => None,
                };
                fields
                    .depends_on
                    .push(dependency.ok_or_else(|| unrecognized(intention, entry))?);
            }
            Some(CONSTANT_INIT_FIELD) => {
                if let Initializer::Expr { expr } = &entry.value {
                    fields.constant_init_by_main |= is_true(expr);
                }
            }
            Some(_) => {}
            None => return Err(unrecognized(intention, entry)),
        }
    }
    Ok(fields)
}

/// `1` after preprocessing, or the `true` keyword when left as written
fn is_true(expr: &Expr) -> bool {
    match expr {
        Expr::Constant { value } => value == "1" || value == "true",
        Expr::Identifier { name } => name == "true",
        _ => false,
    }
}
