/// Synchronization analyzer port trait
use crate::features::sync_analysis::{Result, SyncReport};
use crate::shared::models::TranslationUnit;

/// Port trait for synchronization analyzers
///
/// The pipeline depends only on this trait, so alternative analyzers (or test
/// doubles) can be swapped in.
pub trait SyncAnalyzerPort {
    /// Analyze one translation unit
    fn analyze(&self, unit: &TranslationUnit) -> Result<SyncReport>;
}
