//! Compressed trace records.
//!
//! Each line of a compressed trace is `<cycles> <event code> [ignored...]`.
//! Parsing is deliberately lenient: a token that is not a base-10 integer
//! reads as zero, and only a line with fewer than two tokens is rejected.

use crate::utils::config::{CYCLE_SCALE, OVERHEAD_CYCLES_PER_RECORD};

/// One (cycle count, event code) pair from the compressed trace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceRecord {
    /// Cycle count as recorded, including accumulated instrumentation overhead
    pub raw_cycles: i64,

    /// Event code selecting the template
    pub event_code: i64,
}

impl TraceRecord {
    pub fn new(raw_cycles: i64, event_code: i64) -> Self {
        Self {
            raw_cycles,
            event_code,
        }
    }

    /// Parse a record from one line of text
    ///
    /// # Returns
    /// `None` if the line has fewer than two whitespace-separated tokens,
    /// which ends the stream
    pub fn parse(line: &str) -> Option<Self> {
        let mut tokens = line.split_whitespace();
        let cycles = tokens.next()?;
        let code = tokens.next()?;

        Some(Self::new(parse_lenient(cycles), parse_lenient(code)))
    }

    /// Cycle value substituted into this record's template
    ///
    /// Removes the overhead accumulated over `record_index` records
    /// (1-based) and converts reported units to native cycles. The result
    /// may be negative and is never clamped.
    pub fn scaled_cycles(&self, record_index: u64) -> i64 {
        let overhead = OVERHEAD_CYCLES_PER_RECORD.wrapping_mul(record_index as i64);
        self.raw_cycles
            .wrapping_sub(overhead)
            .wrapping_mul(CYCLE_SCALE)
    }
}

/// Parse a decimal integer, reading anything unparseable as zero
///
/// **Private** - internal helper for TraceRecord::parse
fn parse_lenient(token: &str) -> i64 {
    token.parse::<i64>().unwrap_or(0)
}
