//! Analysis configuration
//!
//! Defaults reproduce the command-line tool's historical behavior: helpers
//! are analyzed, the artifact goes to `parser_out.json`, two-space indent.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default artifact location
pub const DEFAULT_OUTPUT_PATH: &str = "parser_out.json";

/// Default artifact indentation
pub const DEFAULT_INDENT: usize = 2;

/// Settings for one analysis run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Also scan functions that are neither threads nor `main`
    #[serde(default = "default_true")]
    pub include_helper_functions: bool,

    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Echo the artifact to stdout after writing it
    #[serde(default)]
    pub echo_report: bool,

    /// Artifact indentation width (1..=8)
    #[serde(default = "default_indent")]
    pub indent: usize,
}

fn default_true() -> bool {
    true
}

fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_PATH)
}

fn default_indent() -> usize {
    DEFAULT_INDENT
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            include_helper_functions: true,
            output_path: default_output_path(),
            echo_report: false,
            indent: DEFAULT_INDENT,
        }
    }
}

impl AnalysisConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_helper_functions(mut self, enabled: bool) -> Self {
        self.include_helper_functions = enabled;
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn with_echo_report(mut self, enabled: bool) -> Self {
        self.echo_report = enabled;
        self
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Apply overrides on top of this config (set fields win)
    pub fn apply(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(enabled) = overrides.include_helper_functions {
            self.include_helper_functions = enabled;
        }
        if let Some(path) = &overrides.output_path {
            self.output_path = path.clone();
        }
        if let Some(enabled) = overrides.echo_report {
            self.echo_report = enabled;
        }
        if let Some(indent) = overrides.indent {
            self.indent = indent;
        }
        self
    }
}

/// Partial config: a YAML file's settings or command-line flags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub include_helper_functions: Option<bool>,
    pub output_path: Option<PathBuf>,
    pub echo_report: Option<bool>,
    pub indent: Option<usize>,
}

impl ConfigOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
