//! Source-order traversal over the C tree
//!
//! Visitors override only the hooks they need. Traversal is fallible so an
//! analysis stage can abort on the first offending node.
//!
//! Calls are visited post-order: every call nested in a call's arguments is
//! visited before the call itself.

use super::c_ast::{
    CallExpr, Decl, Designator, Expr, ExternalDecl, FunctionDef, InitEntry, Initializer, Stmt,
    TranslationUnit,
};

/// Loop construct kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopKind {
    For,
    While,
    DoWhile,
}

/// Visitor hooks (all default to no-ops)
pub trait AstVisitor<'ast> {
    type Error;

    fn visit_call(&mut self, _call: &'ast CallExpr) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called once per loop before its parts are walked
    fn visit_loop(&mut self, _kind: LoopKind, _body: &'ast Stmt) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called for every file-scope and block-scope declaration
    fn visit_decl(&mut self, _decl: &'ast Decl) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called for each function parameter, before the body is walked
    fn visit_param(&mut self, _param: &'ast Decl) -> Result<(), Self::Error> {
        Ok(())
    }
}

pub fn walk_unit<'ast, V: AstVisitor<'ast> + ?Sized>(
    visitor: &mut V,
    unit: &'ast TranslationUnit,
) -> Result<(), V::Error> {
    for item in &unit.items {
        match item {
            ExternalDecl::Function(func) => walk_function(visitor, func)?,
            ExternalDecl::Declaration(decl) => walk_decl(visitor, decl)?,
        }
    }
    Ok(())
}

pub fn walk_function<'ast, V: AstVisitor<'ast> + ?Sized>(
    visitor: &mut V,
    func: &'ast FunctionDef,
) -> Result<(), V::Error> {
    for param in &func.params {
        visitor.visit_param(param)?;
    }
    walk_stmts(visitor, &func.body)
}

pub fn walk_stmts<'ast, V: AstVisitor<'ast> + ?Sized>(
    visitor: &mut V,
    stmts: &'ast [Stmt],
) -> Result<(), V::Error> {
    for stmt in stmts {
        walk_stmt(visitor, stmt)?;
    }
    Ok(())
}

pub fn walk_decl<'ast, V: AstVisitor<'ast> + ?Sized>(
    visitor: &mut V,
    decl: &'ast Decl,
) -> Result<(), V::Error> {
    visitor.visit_decl(decl)?;
    if let Some(init) = &decl.init {
        walk_initializer(visitor, init)?;
    }
    Ok(())
}

fn walk_initializer<'ast, V: AstVisitor<'ast> + ?Sized>(
    visitor: &mut V,
    init: &'ast Initializer,
) -> Result<(), V::Error> {
    match init {
        Initializer::Expr { expr } => walk_expr(visitor, expr),
        Initializer::List { entries } => {
            for InitEntry { designators, value } in entries {
                for designator in designators {
                    if let Designator::Index { index } = designator {
                        walk_expr(visitor, index)?;
                    }
                }
                walk_initializer(visitor, value)?;
            }
            Ok(())
        }
    }
}

pub fn walk_stmt<'ast, V: AstVisitor<'ast> + ?Sized>(
    visitor: &mut V,
    stmt: &'ast Stmt,
) -> Result<(), V::Error> {
    match stmt {
        Stmt::Expr { expr } => walk_expr(visitor, expr),
        Stmt::Decl { decls } => {
            for decl in decls {
                walk_decl(visitor, decl)?;
            }
            Ok(())
        }
        Stmt::Compound { items } => walk_stmts(visitor, items),
        Stmt::If {
            cond,
            then,
            otherwise,
        } => {
            walk_expr(visitor, cond)?;
            walk_stmt(visitor, then)?;
            if let Some(otherwise) = otherwise {
                walk_stmt(visitor, otherwise)?;
            }
            Ok(())
        }
        Stmt::For {
            init,
            cond,
            step,
            body,
        } => {
            visitor.visit_loop(LoopKind::For, body)?;
            if let Some(init) = init {
                walk_stmt(visitor, init)?;
            }
            if let Some(cond) = cond {
                walk_expr(visitor, cond)?;
            }
            if let Some(step) = step {
                walk_expr(visitor, step)?;
            }
            walk_stmt(visitor, body)
        }
        Stmt::While { cond, body } => {
            visitor.visit_loop(LoopKind::While, body)?;
            walk_expr(visitor, cond)?;
            walk_stmt(visitor, body)
        }
        Stmt::DoWhile { body, cond } => {
            visitor.visit_loop(LoopKind::DoWhile, body)?;
            walk_stmt(visitor, body)?;
            walk_expr(visitor, cond)
        }
        Stmt::Switch { cond, body } => {
            walk_expr(visitor, cond)?;
            walk_stmt(visitor, body)
        }
        Stmt::Case { value, body } => {
            if let Some(value) = value {
                walk_expr(visitor, value)?;
            }
            walk_stmts(visitor, body)
        }
        Stmt::Return { value } => match value {
            Some(value) => walk_expr(visitor, value),
            None => Ok(()),
        },
        Stmt::Labeled { body, .. } => walk_stmt(visitor, body),
        Stmt::Goto { .. } | Stmt::Break | Stmt::Continue | Stmt::Empty => Ok(()),
    }
}

pub fn walk_expr<'ast, V: AstVisitor<'ast> + ?Sized>(
    visitor: &mut V,
    expr: &'ast Expr,
) -> Result<(), V::Error> {
    match expr {
        Expr::Identifier { .. } | Expr::Constant { .. } | Expr::SizeofType { .. } => Ok(()),
        Expr::Call(call) => {
            walk_expr(visitor, &call.callee)?;
            for arg in &call.args {
                walk_expr(visitor, arg)?;
            }
            visitor.visit_call(call)
        }
        Expr::Unary { operand, .. } => walk_expr(visitor, operand),
        Expr::Binary { lhs, rhs, .. } => {
            walk_expr(visitor, lhs)?;
            walk_expr(visitor, rhs)
        }
        Expr::Assign { target, value, .. } => {
            walk_expr(visitor, target)?;
            walk_expr(visitor, value)
        }
        Expr::Member { base, .. } => walk_expr(visitor, base),
        Expr::Index { base, index } => {
            walk_expr(visitor, base)?;
            walk_expr(visitor, index)
        }
        Expr::Cast { expr, .. } => walk_expr(visitor, expr),
        Expr::Conditional {
            cond,
            then,
            otherwise,
        } => {
            walk_expr(visitor, cond)?;
            walk_expr(visitor, then)?;
            walk_expr(visitor, otherwise)
        }
        Expr::Comma { exprs } => {
            for expr in exprs {
                walk_expr(visitor, expr)?;
            }
            Ok(())
        }
        Expr::Opaque { operands, .. } => {
            for operand in operands {
                walk_expr(visitor, operand)?;
            }
            Ok(())
        }
    }
}
