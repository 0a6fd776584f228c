//! Shared models

pub mod ast_walk;
pub mod c_ast;

pub use ast_walk::{walk_function, walk_stmts, walk_unit, AstVisitor, LoopKind};
pub use c_ast::{
    CType, CallExpr, Decl, Designator, Expr, ExternalDecl, FunctionDef, InitEntry, Initializer,
    Line, MemberOp, Stmt, TranslationUnit,
};
