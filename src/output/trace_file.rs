//! Expanded trace file writer.
//!
//! Derives the output path from the input name and writes the framed
//! trace to disk in one piece.

use crate::utils::config::OUTPUT_PREFIX;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::ffi::OsString;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Derive the output path for an input trace
///
/// **Public** - used by commands to name the output file
///
/// # Arguments
/// * `input_path` - Path of the compressed trace
/// * `output_dir` - Directory receiving the expanded trace
///
/// # Returns
/// `output_dir/processed-<input base name>`
///
/// # Errors
/// * `OutputError::InvalidPath` - The input path has no file name
pub fn output_path_for(
    input_path: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
) -> Result<PathBuf, OutputError> {
    let input_path = input_path.as_ref();

    let base_name = input_path.file_name().ok_or_else(|| {
        OutputError::InvalidPath(format!(
            "Input path has no file name: {}",
            input_path.display()
        ))
    })?;

    let mut file_name = OsString::from(OUTPUT_PREFIX);
    file_name.push(base_name);

    Ok(output_dir.as_ref().join(file_name))
}

/// Write an expanded trace to a file
///
/// **Public** - main entry point for trace output
///
/// # Arguments
/// * `contents` - Framed trace bytes from the decompressor
/// * `output_path` - Path to the output file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::InvalidPath` - Path is empty, a directory, or its
///   parent cannot be created
pub fn write_trace(contents: &[u8], output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing expanded trace to: {}", output_path.display());

    validate_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    writer.write_all(contents).map_err(OutputError::WriteFailed)?;
    writer.flush().map_err(OutputError::WriteFailed)?;

    info!("Expanded trace written successfully ({} bytes)", contents.len());

    Ok(())
}

/// Validate that an output path is writable
///
/// **Public** - reused by commands and tests
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    // Check if we're trying to overwrite a directory
    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_uses_base_name() {
        let path = output_path_for("traces/run-3.trace", "output").unwrap();
        assert_eq!(path, Path::new("output/processed-run-3.trace"));
    }

    #[test]
    fn test_output_path_without_file_name() {
        assert!(output_path_for("..", "output").is_err());
        assert!(output_path_for("", "output").is_err());
    }

    #[test]
    fn test_validate_path_empty() {
        assert!(validate_path(Path::new("")).is_err());
    }
}
