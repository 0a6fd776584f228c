//! Front-end port (interface)
//!
//! Defines the contract for turning an input file into a C translation unit.

use crate::errors::Result;
use crate::shared::models::TranslationUnit;

/// FrontEnd trait - abstraction over how the C tree is obtained
pub trait FrontEnd: Send + Sync {
    /// Produce the translation unit for `source`
    fn parse(&self, source: &str, file_path: &str) -> Result<TranslationUnit>;

    /// Check if this front end handles the given file extension
    fn supports_extension(&self, ext: &str) -> bool;

    /// Front-end name (for logs)
    fn name(&self) -> &'static str;
}
