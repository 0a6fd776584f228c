//! Feature modules - Each feature follows Hexagonal Architecture
//!
//! Each feature contains:
//! - domain/     - Pure business logic (no external dependencies)
//! - ports/      - Interface definitions (traits)
//! - application/ - Use cases
//! - infrastructure/ - External dependency implementations

/// C front ends (tree-sitter, serialized JSON tree)
pub mod parsing;

/// Shared-variable usage, intentions and dependencies
pub mod sync_analysis;
