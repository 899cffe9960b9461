//! Expansion of compressed traces into framed event logs.
//!
//! This module handles:
//! - Parsing compressed records and correcting their cycle counts
//! - Expanding records through a template source, in order
//! - Framing the result with the sentinel lines

pub mod record;
pub mod stream;

// Re-export main types
pub use record::TraceRecord;
pub use stream::{decompress, decompress_str, DecompressSummary, DecompressedTrace, Decompressor};
