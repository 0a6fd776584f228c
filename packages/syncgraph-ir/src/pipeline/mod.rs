//! Pipeline orchestration

pub mod orchestrator;
pub mod result;

pub use orchestrator::SyncPipeline;
pub use result::ProcessResult;
