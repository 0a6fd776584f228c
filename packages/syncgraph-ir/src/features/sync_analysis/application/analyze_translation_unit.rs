//! Synchronization Analysis Use Case
//!
//! ## Algorithm
//! 1. Build the variable catalog and the thread inventory (independent)
//! 2. Extract accesses from thread bodies (and helpers)
//! 3. Check that each shared variable has a single intention
//! 4. Read dependency metadata for the consistent intentions
//! 5. Assemble the report
//!
//! Any stage error aborts the whole pass.

use tracing::info;

use crate::config::AnalysisConfig;
use crate::features::sync_analysis::{
    check_intentions, AccessExtractor, DependencyExtractor, ReportAssembler, Result,
    SyncAnalyzerPort, SyncReport, ThreadInventoryBuilder, VariableCatalogBuilder,
};
use crate::shared::models::TranslationUnit;

/// Analyze one translation unit into a [`SyncReport`]
pub struct SyncAnalysisUseCase {
    thread_inventory: ThreadInventoryBuilder,
    variable_catalog: VariableCatalogBuilder,
    assembler: ReportAssembler,
    include_helper_functions: bool,
}

impl SyncAnalysisUseCase {
    /// Create new use case (helper functions included)
    pub fn new() -> Self {
        Self {
            thread_inventory: ThreadInventoryBuilder::new(),
            variable_catalog: VariableCatalogBuilder::new(),
            assembler: ReportAssembler::new(),
            include_helper_functions: true,
        }
    }

    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new().with_helper_functions(config.include_helper_functions)
    }

    pub fn with_helper_functions(mut self, enabled: bool) -> Self {
        self.include_helper_functions = enabled;
        self
    }

    /// Run every stage over `unit`
    pub fn analyze(&self, unit: &TranslationUnit) -> Result<SyncReport> {
        let catalog = self.variable_catalog.build(unit);
        let inventory = self.thread_inventory.build(unit)?;

        let log = AccessExtractor::new(&inventory)
            .with_helper_functions(self.include_helper_functions)
            .extract(unit)?;

        let resolved = check_intentions(&log.intentions)?;
        let dependencies = DependencyExtractor::new(unit).extract(&resolved)?;

        let report = self
            .assembler
            .assemble(&inventory, catalog, log, dependencies);

        let summary = self.get_summary(&report);
        info!(
            file = %unit.file_path,
            threads = summary.threads,
            call_sites = summary.call_sites,
            shared_variables = summary.shared_variables,
            "synchronization analysis complete"
        );
        Ok(report)
    }

    /// Get summary statistics
    pub fn get_summary(&self, report: &SyncReport) -> SyncSummary {
        let threads = report.usage.values().filter(|u| u.quantity > 0).count();
        SyncSummary {
            threads,
            helper_functions: report.usage.len() - threads,
            call_sites: report.call_site_count(),
            accesses: report.events.len(),
            shared_variables: report.shared_variables.len(),
            notes: report.notes.len(),
        }
    }
}

impl Default for SyncAnalysisUseCase {
    fn default() -> Self {
        Self::new()
    }
}

impl SyncAnalyzerPort for SyncAnalysisUseCase {
    fn analyze(&self, unit: &TranslationUnit) -> Result<SyncReport> {
        SyncAnalysisUseCase::analyze(self, unit)
    }
}

/// Synchronization analysis summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncSummary {
    /// Functions with a non-zero multiplicity
    pub threads: usize,
    pub helper_functions: usize,
    pub call_sites: usize,
    pub accesses: usize,
    pub shared_variables: usize,
    pub notes: usize,
}
