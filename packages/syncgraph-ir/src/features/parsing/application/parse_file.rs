//! Parse file use case

use std::path::Path;

use crate::errors::Result;
use crate::features::parsing::infrastructure::{JsonTreeFrontEnd, TreeSitterCFrontEnd};
use crate::features::parsing::ports::FrontEnd;
use crate::shared::models::TranslationUnit;

/// Pick the front end for an input path: `.json` is a serialized tree,
/// anything else is C source
pub fn front_end_for_path(path: &Path) -> Box<dyn FrontEnd> {
    let json = JsonTreeFrontEnd::new();
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if json.supports_extension(ext) => Box::new(json),
        _ => Box::new(TreeSitterCFrontEnd::new()),
    }
}

/// Parse file use case
pub struct ParseFileUseCase<F: FrontEnd> {
    front_end: F,
}

impl<F: FrontEnd> ParseFileUseCase<F> {
    pub fn new(front_end: F) -> Self {
        Self { front_end }
    }

    /// Execute the parse operation
    pub fn execute(&self, source: &str, file_path: &str) -> Result<TranslationUnit> {
        self.front_end.parse(source, file_path)
    }
}

impl<F: FrontEnd + ?Sized> FrontEnd for Box<F> {
    fn parse(&self, source: &str, file_path: &str) -> Result<TranslationUnit> {
        (**self).parse(source, file_path)
    }

    fn supports_extension(&self, ext: &str) -> bool {
        (**self).supports_extension(ext)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
