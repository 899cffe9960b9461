//! Configuration and constants for the trace format.

/// Instrumentation overhead (in reported units) added by every record
/// of the compressed trace
pub const OVERHEAD_CYCLES_PER_RECORD: i64 = 40;

/// Native cycles per reported unit in the compressed format
pub const CYCLE_SCALE: i64 = 4;

/// Token substituted with the scaled cycle value in every template line
pub const CYCLES_PLACEHOLDER: &str = "[CPU_CYCLES]";

// Framing lines expected by the downstream analysis tool
pub const LEADING_SENTINEL: &str = "EOD";
pub const TRAILING_SENTINEL: &str = "H\t\t";

/// Prefix prepended to the input base name to form the output file name
pub const OUTPUT_PREFIX: &str = "processed-";

/// Directory (relative to the working directory) receiving output files
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Number of slots in the built-in template table (codes 0..=91)
pub const TEMPLATE_SLOTS: usize = 92;
