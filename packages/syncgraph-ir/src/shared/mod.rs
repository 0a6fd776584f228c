//! Shared module - Common types and utilities
//!
//! This module contains types that are shared across all features.
//! No tree-sitter here: front ends lower into these models.

pub mod models;
pub mod utils;

// Re-exports for convenience
pub use models::*;
pub use utils::dedup_preserving_order;
