//! Configuration I/O (YAML loading)
//!
//! Defines the versioned YAML schema and the load/export methods of
//! [`AnalysisConfig`].

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::analysis_config::{AnalysisConfig, ConfigOverrides};
use super::error::{ConfigError, ConfigResult};
use super::validation::Validatable;

/// Schema versions this build can read
pub const SUPPORTED_VERSIONS: &[u32] = &[1];

/// Top-level keys accepted by schema v1
const V1_FIELDS: &[&str] = &[
    "version",
    "include_helper_functions",
    "output_path",
    "echo_report",
    "indent",
];

/// YAML Schema v1
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFileV1 {
    /// Schema version (always 1 for v1)
    pub version: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_helper_functions: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub echo_report: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub indent: Option<usize>,
}

impl ConfigFileV1 {
    /// Settings present in the file
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            include_helper_functions: self.include_helper_functions,
            output_path: self.output_path.clone(),
            echo_report: self.echo_report,
            indent: self.indent,
        }
    }

    /// Parse and version-check a YAML document
    pub fn parse(yaml: &str) -> ConfigResult<Self> {
        let value: serde_yaml::Value = serde_yaml::from_str(yaml)?;
        let mapping = match value.as_mapping() {
            Some(mapping) => mapping,
            None => return Err(ConfigError::MissingVersion),
        };

        for key in mapping.keys() {
            let key = key.as_str().unwrap_or_default();
            if !V1_FIELDS.contains(&key) {
                return Err(ConfigError::unknown_field_with_suggestion(
                    key,
                    V1_FIELDS.iter().map(|f| f.to_string()).collect(),
                ));
            }
        }

        let version = match mapping.get("version") {
            Some(version) => version,
            None => return Err(ConfigError::MissingVersion),
        };
        let found = version
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| ConfigError::Validation(format!("version must be a positive integer, got {:?}", version)))?;
        if !SUPPORTED_VERSIONS.contains(&found) {
            return Err(ConfigError::UnsupportedVersion {
                found,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        Ok(serde_yaml::from_value(value)?)
    }
}

impl From<&AnalysisConfig> for ConfigFileV1 {
    fn from(config: &AnalysisConfig) -> Self {
        Self {
            version: 1,
            include_helper_functions: Some(config.include_helper_functions),
            output_path: Some(config.output_path.clone()),
            echo_report: Some(config.echo_report),
            indent: Some(config.indent),
        }
    }
}

impl AnalysisConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&content)?;
        debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Load configuration from YAML text (defaults fill absent fields)
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let file = ConfigFileV1::parse(yaml)?;
        let config = Self::default().apply(&file.overrides());
        config.validate()?;
        Ok(config)
    }

    /// Export configuration as YAML (schema v1)
    pub fn to_yaml(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(&ConfigFileV1::from(self))?)
    }
}
