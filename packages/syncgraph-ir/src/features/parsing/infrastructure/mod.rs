//! Parsing infrastructure - external dependencies

pub mod json_tree;
pub mod tree_sitter;

pub use json_tree::JsonTreeFrontEnd;
pub use tree_sitter::TreeSitterCFrontEnd;
