/*
 * Syncgraph IR - static analysis of AutoSync-instrumented C code
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : C syntax tree model and its walker
 * - features/    : Vertical slices (parsing → sync_analysis)
 * - pipeline/    : Orchestration (input → artifact)
 * - config/      : Versioned YAML configuration
 */

// Crate-level lint configuration
#![allow(clippy::module_inception)] // Module naming intentional
#![allow(clippy::new_without_default)] // Default impl not always needed
#![allow(clippy::upper_case_acronyms)] // JSON, AST naming

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models and utilities
pub mod shared;

/// Feature modules (parsing, synchronization analysis)
pub mod features;

/// Pipeline orchestration
pub mod pipeline;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::AnalysisConfig;
pub use errors::{Result, SyncGraphError};
pub use features::parsing::{FrontEnd, JsonTreeFrontEnd, TreeSitterCFrontEnd};
pub use features::sync_analysis::{SyncAnalysisError, SyncAnalysisUseCase, SyncReport, SyncSummary};
pub use pipeline::{ProcessResult, SyncPipeline};
pub use shared::models::TranslationUnit;
