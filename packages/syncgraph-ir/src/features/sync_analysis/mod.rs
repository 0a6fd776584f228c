pub mod application;
/// Synchronization Analysis Feature
///
/// Static extraction of shared-variable usage from C sources written against
/// the AutoSync API.
///
/// ## Stages
/// - **Thread Inventory**: `pthread_create` targets and loop multiplicities
/// - **Variable Catalog**: declared names and types
/// - **Access Extraction**: per-function access logs, call-site log, intentions
/// - **Intention Check**: one intention token per shared variable
/// - **Dependency Extraction**: `pvDependsOn` / `bConstantInitByMain` metadata
/// - **Report Assembly**: quantities merged, artifact serialized
///
/// ## Architecture
/// - **Domain**: Models (SyncPrimitive, AccessKind, ThreadUsage, SyncReport, etc.)
/// - **Infrastructure**: Stage implementations
/// - **Application**: SyncAnalysisUseCase
/// - **Ports**: SyncAnalyzerPort trait
///
/// Every stage is fatal on malformed input: no partial report is produced.
pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-export application layer (primary interface)
pub use application::*;

// Re-export domain types
pub use domain::*;

// Re-export infrastructure (internal use - prefer application layer)
#[doc(hidden)]
pub use infrastructure::*;

pub use ports::*;
