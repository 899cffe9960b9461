use crate::utils::config::DEFAULT_OUTPUT_DIR;
use std::path::PathBuf;

/// Arguments for the decompress command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct DecompressArgs {
    /// Compressed trace to expand
    pub input: PathBuf,

    /// Directory receiving `processed-<input name>`
    pub output_dir: PathBuf,

    /// JSON mapping file replacing the built-in templates (optional)
    pub templates: Option<PathBuf>,
}

impl Default for DecompressArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            templates: None,
        }
    }
}
