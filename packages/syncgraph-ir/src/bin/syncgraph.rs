//! syncgraph CLI
//!
//! # Usage
//!
//! ```bash
//! # Analyze C source, write parser_out.json
//! cargo run --bin syncgraph -- fft_auto_sync.c
//!
//! # Analyze a pre-parsed tree, custom output, echo the artifact
//! cargo run --bin syncgraph -- tree.json -o out/sync.json --print
//!
//! # Settings from a YAML file (flags still win)
//! cargo run --bin syncgraph -- main.c -c syncgraph.yaml --no-helpers
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use syncgraph_ir::config::{AnalysisConfig, ConfigOverrides};
use syncgraph_ir::errors::Result;
use syncgraph_ir::pipeline::SyncPipeline;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "syncgraph")]
#[command(about = "Extract shared-variable usage, intentions and dependencies from AutoSync C code", long_about = None)]
struct Cli {
    /// C source file, or a JSON tree (`.json`)
    input: PathBuf,

    /// Artifact path [default: parser_out.json]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Only analyze thread functions and main
    #[arg(long)]
    no_helpers: bool,

    /// Echo the artifact to stdout
    #[arg(long)]
    print: bool,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            include_helper_functions: self.no_helpers.then_some(false),
            output_path: self.output.clone(),
            echo_report: self.print.then_some(true),
            indent: None,
        }
    }

    fn analysis_config(&self) -> Result<AnalysisConfig> {
        let base = match &self.config {
            Some(path) => AnalysisConfig::from_yaml(path)?,
            None => AnalysisConfig::default(),
        };
        Ok(base.apply(&self.overrides()))
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.analysis_config()?;
    let echo = config.echo_report;

    let result = SyncPipeline::for_path(&cli.input, config).run(&cli.input)?;

    if echo {
        println!("{}", result.artifact);
    }
    println!("Quantity of AutoSync calls: {}", result.call_site_count());
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
