//! Expression Resolver
//!
//! Maps a call-argument expression to the canonical name of the shared
//! variable it denotes. Struct-field paths are `base + op + field` where `op`
//! is the member operator actually written (`->` or `.`), so `a->x`, `b->x`
//! and `a.x` stay distinct. Array indices are dropped: `&G->times[0]` and
//! `&G->times[k]` are both `G->times`.
//!
//! Anything outside the five recognized shapes is an error, never a skip.

use serde::{Deserialize, Serialize};

use super::error::{Result, SyncAnalysisError};
use crate::features::sync_analysis::domain::{
    IntentionToken, SharedVariableName, SyncPrimitive, INTENTION_ARG_POSITION,
};
use crate::shared::models::{CallExpr, Expr, MemberOp};

/// Recognized argument shapes, in resolution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpressionShape {
    /// `p` (pointer passed directly)
    Identifier,
    /// `p->field` / `s.field`
    FieldAccess,
    /// `&x`
    AddressOfIdentifier,
    /// `&p->arr[i]`
    AddressOfIndexedField,
    /// `&p->field`
    AddressOfField,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVariable {
    pub name: SharedVariableName,
    pub shape: ExpressionShape,
}

fn field_path(base: &str, op: MemberOp, field: &str) -> SharedVariableName {
    format!("{}{}{}", base, op.as_str(), field)
}

/// `ident->field` / `ident.field` with an identifier base
fn as_field_of_identifier(expr: &Expr) -> Option<SharedVariableName> {
    match expr {
        Expr::Member { base, op, field } => {
            base.as_identifier().map(|name| field_path(name, *op, field))
        }
        _ => None,
    }
}

/// Resolve an argument expression, or `None` if its shape is not recognized
pub fn resolve(expr: &Expr) -> Option<ResolvedVariable> {
    let resolved = |name: SharedVariableName, shape| Some(ResolvedVariable { name, shape });

    if let Some(name) = expr.as_identifier() {
        return resolved(name.to_string(), ExpressionShape::Identifier);
    }
    if let Some(name) = as_field_of_identifier(expr) {
        return resolved(name, ExpressionShape::FieldAccess);
    }

    let operand = expr.as_address_of()?;
    if let Some(name) = operand.as_identifier() {
        return resolved(name.to_string(), ExpressionShape::AddressOfIdentifier);
    }
    if let Expr::Index { base, .. } = operand {
        return as_field_of_identifier(base)
            .and_then(|name| resolved(name, ExpressionShape::AddressOfIndexedField));
    }
    as_field_of_identifier(operand).and_then(|name| resolved(name, ExpressionShape::AddressOfField))
}

fn require_args(call: &CallExpr, primitive: SyncPrimitive) -> Result<()> {
    let expected = primitive.min_args();
    if call.args.len() < expected {
        return Err(SyncAnalysisError::MissingArgument {
            primitive: primitive.name().to_string(),
            expected,
            found: call.args.len(),
            line: call.line,
        });
    }
    Ok(())
}

/// Shared variable named by a data-access call
pub fn resolve_access(call: &CallExpr, primitive: SyncPrimitive) -> Result<SharedVariableName> {
    let kind = primitive
        .access_kind()
        .ok_or_else(|| SyncAnalysisError::UnknownSynchronizationPrimitive {
            name: primitive.name().to_string(),
            line: call.line,
        })?;
    require_args(call, primitive)?;

    let arg = &call.args[kind.shared_var_position()];
    resolve(arg)
        .map(|resolved| resolved.name)
        .ok_or_else(|| SyncAnalysisError::UnrecognizedExpressionShape {
            context: "shared-variable".to_string(),
            expression: arg.to_string(),
            line: call.line,
        })
}

/// Intention token of a data-access call (fourth argument, an identifier)
pub fn intention_token(call: &CallExpr, primitive: SyncPrimitive) -> Result<IntentionToken> {
    require_args(call, primitive)?;

    let arg = &call.args[INTENTION_ARG_POSITION];
    arg.as_identifier()
        .map(str::to_string)
        .ok_or_else(|| SyncAnalysisError::UnrecognizedExpressionShape {
            context: "intention".to_string(),
            expression: arg.to_string(),
            line: call.line,
        })
}

/// Event name and waiting-thread count of an event-wait call, verbatim
pub fn event_wait_operands(call: &CallExpr) -> Result<(String, String)> {
    require_args(call, SyncPrimitive::ProceedOnEvent)?;
    let operand = |index| call.arg_text(index).unwrap_or_default();
    Ok((operand(0), operand(1)))
}

/// Function name passed as a thread-creation target (`&func` or `func`)
pub fn thread_target(call: &CallExpr) -> Result<String> {
    require_args(call, SyncPrimitive::ThreadCreate)?;

    let arg = &call.args[2];
    arg.as_address_of()
        .unwrap_or(arg)
        .as_identifier()
        .map(str::to_string)
        .ok_or_else(|| SyncAnalysisError::UnrecognizedThreadTarget {
            expression: arg.to_string(),
            line: call.line,
        })
}

/// Dependency named in intentions metadata: `&x` or `&p->field`
///
/// The indexed shape is not accepted here.
pub fn resolve_dependency(expr: &Expr) -> Option<SharedVariableName> {
    let operand = expr.as_address_of()?;
    operand
        .as_identifier()
        .map(str::to_string)
        .or_else(|| as_field_of_identifier(operand))
}
