//! Trace Decompress CLI
//!
//! Expands a compressed radio-stack trace into the event log used for
//! timing analysis.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

use trace_decompress::commands::{execute_decompress, validate_args, DecompressArgs};
use trace_decompress::utils::config::DEFAULT_OUTPUT_DIR;

/// Trace Decompress - expand compressed execution traces
#[derive(Parser, Debug)]
#[command(name = "decompress-trace")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Compressed trace file to expand
    input: PathBuf,

    /// Directory receiving processed-<input name>
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// JSON mapping file to use instead of the built-in templates
    #[arg(short, long)]
    templates: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let args = DecompressArgs {
        input: cli.input,
        output_dir: cli.output_dir,
        templates: cli.templates,
    };

    // Validate args first
    validate_args(&args)?;

    execute_decompress(args)?;

    Ok(())
}
