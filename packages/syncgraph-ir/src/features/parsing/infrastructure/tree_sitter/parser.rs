//! Tree-sitter C front end
//!
//! This is where the tree-sitter dependency lives.

use tracing::debug;
use tree_sitter::{Node as TSNode, Parser as TSParser};

use super::c_lowering::{line_of, CLowering};
use crate::errors::{Result, SyncGraphError};
use crate::features::parsing::ports::FrontEnd;
use crate::shared::models::TranslationUnit;

/// Tree-sitter based C front end
///
/// Expects preprocessed source, or source whose macros do not hide syntax
/// (include guards and `#include` lines are fine).
#[derive(Debug, Default, Clone, Copy)]
pub struct TreeSitterCFrontEnd;

/// First syntax error found in the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub line: u32,
    pub column: u32,
    pub near: String,
}

impl TreeSitterCFrontEnd {
    pub fn new() -> Self {
        Self
    }

    /// Get the tree-sitter language
    fn get_ts_language(&self) -> tree_sitter::Language {
        tree_sitter_c::language()
    }

    /// Find the first error or missing node (pre-order)
    fn first_error(&self, node: &TSNode, source: &str) -> Option<SyntaxError> {
        if node.is_error() || node.is_missing() {
            let near = if node.is_missing() {
                format!("missing {}", node.kind())
            } else {
                source
                    .get(node.byte_range())
                    .unwrap_or("")
                    .lines()
                    .next()
                    .unwrap_or("")
                    .to_string()
            };
            return Some(SyntaxError {
                line: line_of(node),
                column: node.start_position().column as u32 + 1,
                near,
            });
        }
        if !node.has_error() {
            return None;
        }

        (0..node.child_count())
            .filter_map(|i| node.child(i))
            .find_map(|child| self.first_error(&child, source))
    }
}

impl FrontEnd for TreeSitterCFrontEnd {
    fn parse(&self, source: &str, file_path: &str) -> Result<TranslationUnit> {
        let mut parser = TSParser::new();
        parser
            .set_language(&self.get_ts_language())
            .map_err(|e| SyncGraphError::parse(format!("Failed to set language: {}", e)))?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| SyncGraphError::parse("Failed to parse source code"))?;
        let root = tree.root_node();

        if let Some(err) = self.first_error(&root, source) {
            return Err(SyncGraphError::parse(format!(
                "{}:{}:{}: syntax error near `{}`",
                file_path, err.line, err.column, err.near
            )));
        }

        let items = CLowering::new(source).lower_unit(&root);
        debug!(file = file_path, items = items.len(), "C source lowered");
        Ok(TranslationUnit::new(file_path, items))
    }

    fn supports_extension(&self, ext: &str) -> bool {
        matches!(ext, "c" | "h" | "i")
    }

    fn name(&self) -> &'static str {
        "tree-sitter-c"
    }
}
