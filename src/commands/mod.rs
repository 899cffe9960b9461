//! CLI command implementations.
//!
//! Commands orchestrate the library components to perform user tasks.

pub mod decompress;
pub mod models;

// Re-export main command functions
pub use decompress::{execute_decompress, validate_args};
pub use models::DecompressArgs;
