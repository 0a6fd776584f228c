//! Tree-sitter based C front end

pub mod c_lowering;
mod parser;

pub use c_lowering::CLowering;
pub use parser::{SyntaxError, TreeSitterCFrontEnd};
