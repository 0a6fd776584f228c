//! Pipeline result types

use crate::features::sync_analysis::SyncReport;

#[derive(Debug, Clone)]
pub struct ProcessResult {
    pub report: SyncReport,
    /// Serialized artifact, indented per the run's config
    pub artifact: String,
}

impl ProcessResult {
    /// Number of recognized call sites
    pub fn call_site_count(&self) -> usize {
        self.report.call_site_count()
    }
}
