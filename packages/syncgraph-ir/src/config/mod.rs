//! Configuration
//!
//! Settings for one analysis run, loadable from a versioned YAML file and
//! overridable from the command line.
//!
//! # Examples
//!
//! ```rust,ignore
//! use syncgraph_ir::config::{AnalysisConfig, ConfigOverrides};
//!
//! let config = AnalysisConfig::from_yaml("syncgraph.yaml")?
//!     .apply(&ConfigOverrides { echo_report: Some(true), ..Default::default() });
//! ```
//!
//! ```yaml
//! version: 1
//! include_helper_functions: true
//! output_path: parser_out.json
//! echo_report: false
//! indent: 2
//! ```

pub mod analysis_config;
pub mod error;
pub mod io;
pub mod validation;

// Re-exports
pub use analysis_config::{AnalysisConfig, ConfigOverrides, DEFAULT_INDENT, DEFAULT_OUTPUT_PATH};
pub use error::{ConfigError, ConfigResult};
pub use io::{ConfigFileV1, SUPPORTED_VERSIONS};
pub use validation::{Validatable, MAX_INDENT, MIN_INDENT};
