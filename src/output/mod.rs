//! Output writer for expanded traces.
//!
//! This module handles naming and writing the `processed-*` files
//! consumed by the timing-analysis tooling.

pub mod trace_file;

// Re-export main functions
pub use trace_file::{output_path_for, validate_path, write_trace};
