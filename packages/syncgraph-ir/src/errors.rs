//! Error types for syncgraph-ir
//!
//! Provides unified error handling across the crate. Each layer keeps its own
//! error enum (`SyncAnalysisError`, `ConfigError`); this type wraps them for
//! the pipeline and the CLI.

use thiserror::Error;

use crate::config::ConfigError;
use crate::features::sync_analysis::SyncAnalysisError;

/// Main error type for syncgraph-ir operations
#[derive(Debug, Error)]
pub enum SyncGraphError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Front-end error (C text or JSON tree could not be turned into a tree)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Fatal analysis inconsistency
    #[error("Analysis error: {0}")]
    Analysis(#[from] SyncAnalysisError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Report (de)serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SyncGraphError {
    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        SyncGraphError::Parse(msg.into())
    }
}

/// Result type alias for syncgraph operations
pub type Result<T> = std::result::Result<T, SyncGraphError>;
