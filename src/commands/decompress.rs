//! Decompress command implementation.
//!
//! The decompress command:
//! 1. Opens the compressed trace
//! 2. Expands it through the selected template table
//! 3. Writes the framed result to `processed-<input name>`

use super::models::DecompressArgs;
use crate::decompress::{decompress, DecompressedTrace};
use crate::output::{output_path_for, write_trace};
use crate::registry::{BuiltinTemplates, MappedTemplates};
use anyhow::{Context, Result};
use log::{debug, info};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::Instant;

/// Execute the decompress command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - Decompress command arguments
///
/// # Returns
/// Path of the written output file
///
/// # Errors
/// * Input file cannot be opened or read
/// * Mapping file cannot be loaded
/// * Output file cannot be written
///
/// # Example
/// ```ignore
/// let args = DecompressArgs {
///     input: PathBuf::from("traces/rx-burst.trace"),
///     ..Default::default()
/// };
///
/// let written = execute_decompress(args)?;
/// ```
pub fn execute_decompress(args: DecompressArgs) -> Result<PathBuf> {
    let start_time = Instant::now();

    info!("Decompressing trace: {}", args.input.display());

    // Step 1: Open input
    info!("Step 1/3: Opening compressed trace...");
    let file = File::open(&args.input)
        .with_context(|| format!("Failed to open trace file {}", args.input.display()))?;
    let reader = BufReader::new(file);

    // Step 2: Expand records
    info!("Step 2/3: Expanding records...");
    let trace = expand(reader, &args)?;

    let summary = trace.summary();
    info!("Expansion: {}", summary.summary());
    debug!("Output size: {} bytes", trace.as_bytes().len());

    // Step 3: Write output
    info!("Step 3/3: Writing expanded trace...");
    let output_path = output_path_for(&args.input, &args.output_dir)
        .context("Failed to derive output path")?;

    write_trace(trace.as_bytes(), &output_path).context("Failed to write expanded trace")?;

    info!("✓ Expanded trace written to: {}", output_path.display());

    let elapsed = start_time.elapsed();
    info!("Decompression completed in {:.2}s", elapsed.as_secs_f64());

    Ok(output_path)
}

/// Expand the trace with the template table selected by `args`
///
/// **Private** - internal helper for execute_decompress
fn expand(reader: BufReader<File>, args: &DecompressArgs) -> Result<DecompressedTrace> {
    let trace = match &args.templates {
        Some(path) => {
            let mapped = MappedTemplates::load(path)
                .with_context(|| format!("Failed to load template mapping {}", path.display()))?;
            info!("Using {} mapped templates", mapped.len());
            decompress(&mapped, reader)
        }
        None => {
            debug!("Using built-in templates");
            decompress(&BuiltinTemplates, reader)
        }
    };

    trace.context("Failed to read compressed trace")
}

/// Validate decompress arguments
///
/// **Public** - can be called before execute_decompress for early validation
///
/// # Arguments
/// * `args` - Arguments to validate
///
/// # Returns
/// Ok if arguments are valid, Err with message if not
pub fn validate_args(args: &DecompressArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input trace path cannot be empty");
    }

    if args.input.file_name().is_none() {
        anyhow::bail!(
            "Input trace path must name a file: {}",
            args.input.display()
        );
    }

    if args.output_dir.as_os_str().is_empty() {
        anyhow::bail!("Output directory cannot be empty");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_args_valid() {
        let args = DecompressArgs {
            input: PathBuf::from("traces/run.trace"),
            ..Default::default()
        };

        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_validate_args_empty_input() {
        let args = DecompressArgs::default();

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_input_without_file_name() {
        let args = DecompressArgs {
            input: PathBuf::from("traces/.."),
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_empty_output_dir() {
        let args = DecompressArgs {
            input: PathBuf::from("run.trace"),
            output_dir: PathBuf::new(),
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }
}
