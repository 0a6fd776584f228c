/// Synchronization analysis errors
///
/// Every variant is fatal: the pass stops at the first one and no artifact
/// is written.
use thiserror::Error;

use crate::shared::models::Line;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncAnalysisError {
    #[error("line {line}: unrecognized {context} expression `{expression}`")]
    UnrecognizedExpressionShape {
        context: String,
        expression: String,
        line: Line,
    },

    #[error("line {line}: `{name}` is not a data-access primitive")]
    UnknownSynchronizationPrimitive { name: String, line: Line },

    #[error("intentions for {variable} are not plausible: {tokens:?}")]
    ConflictingIntentions {
        variable: String,
        tokens: Vec<String>,
    },

    #[error("intention {intention}: unrecognized dependency expression `{expression}`")]
    UnrecognizedDependencyExpression {
        intention: String,
        expression: String,
    },

    #[error("line {line}: {primitive} needs {expected} arguments, found {found}")]
    MissingArgument {
        primitive: String,
        expected: usize,
        found: usize,
        line: Line,
    },

    #[error("line {line}: thread creation target `{expression}` is not a function name")]
    UnrecognizedThreadTarget { expression: String, line: Line },
}

pub type Result<T> = std::result::Result<T, SyncAnalysisError>;
