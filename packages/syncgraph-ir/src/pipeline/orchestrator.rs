//! Pipeline orchestrator
//!
//! Front end → analysis → artifact. Nothing touches the output path until
//! every stage has succeeded, so a fatal error never leaves a partial file.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use super::result::ProcessResult;
use crate::config::{AnalysisConfig, Validatable};
use crate::errors::Result;
use crate::features::parsing::{front_end_for_path, FrontEnd};
use crate::features::sync_analysis::{SyncAnalysisUseCase, SyncAnalyzerPort};

/// Pipeline orchestrator
pub struct SyncPipeline<P, A>
where
    P: FrontEnd,
    A: SyncAnalyzerPort,
{
    front_end: P,
    analyzer: A,
    config: AnalysisConfig,
}

impl SyncPipeline<Box<dyn FrontEnd>, SyncAnalysisUseCase> {
    /// Default wiring for an input path (front end picked by extension)
    pub fn for_path(input: &Path, config: AnalysisConfig) -> Self {
        let analyzer = SyncAnalysisUseCase::from_config(&config);
        Self::new(front_end_for_path(input), analyzer, config)
    }
}

impl<P, A> SyncPipeline<P, A>
where
    P: FrontEnd,
    A: SyncAnalyzerPort,
{
    pub fn new(front_end: P, analyzer: A, config: AnalysisConfig) -> Self {
        Self {
            front_end,
            analyzer,
            config,
        }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyze in-memory source; no I/O
    pub fn process(&self, source: &str, file_path: &str) -> Result<ProcessResult> {
        self.config.validate()?;

        let unit = self.front_end.parse(source, file_path)?;
        debug!(front_end = self.front_end.name(), file = file_path, "tree ready");

        let report = self.analyzer.analyze(&unit)?;
        let artifact = report.to_json_with_indent(self.config.indent)?;

        Ok(ProcessResult { report, artifact })
    }

    /// Read `input`, analyze it and write the artifact to the configured path
    pub fn run(&self, input: &Path) -> Result<ProcessResult> {
        let source = fs::read_to_string(input)?;
        let result = self.process(&source, &input.to_string_lossy())?;

        let output = &self.config.output_path;
        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(output, &result.artifact)?;

        info!(
            input = %input.display(),
            output = %output.display(),
            call_sites = result.call_site_count(),
            "artifact written"
        );
        Ok(result)
    }
}
