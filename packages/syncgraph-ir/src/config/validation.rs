//! Configuration validation

use super::analysis_config::AnalysisConfig;
use super::error::{ConfigError, ConfigResult};

/// Smallest accepted indentation width
pub const MIN_INDENT: usize = 1;

/// Largest accepted indentation width
pub const MAX_INDENT: usize = 8;

// ═══════════════════════════════════════════════════════════════════════════
// Validatable Trait
// ═══════════════════════════════════════════════════════════════════════════

/// Trait for validatable configuration objects
///
/// # Example
/// ```rust,ignore
/// use syncgraph_ir::config::{AnalysisConfig, Validatable};
///
/// let config = AnalysisConfig::default().with_indent(4);
/// config.validate()?;
/// ```
pub trait Validatable {
    /// Validate the configuration
    ///
    /// Returns `Ok(())` if valid, `Err(ConfigError)` with details if invalid.
    fn validate(&self) -> ConfigResult<()>;

    /// Get the configuration name for error messages
    fn config_name(&self) -> &'static str {
        "Config"
    }
}

impl Validatable for AnalysisConfig {
    fn validate(&self) -> ConfigResult<()> {
        if !(MIN_INDENT..=MAX_INDENT).contains(&self.indent) {
            return Err(ConfigError::range_with_hint(
                "indent",
                self.indent,
                MIN_INDENT,
                MAX_INDENT,
                "Use 2 for the default artifact layout.",
            ));
        }

        if self.output_path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(format!(
                "{}: output_path must not be empty",
                self.config_name()
            )));
        }

        if self.output_path.is_dir() {
            return Err(ConfigError::Validation(format!(
                "{}: output_path {} is a directory",
                self.config_name(),
                self.output_path.display()
            )));
        }

        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "AnalysisConfig"
    }
}
