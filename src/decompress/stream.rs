//! Streaming expansion of compressed traces.
//!
//! Records are expanded strictly in input order into a single buffer
//! framed by the leading and trailing sentinel lines. The only state
//! carried between records is the 1-based record index.

use super::record::TraceRecord;
use crate::registry::TemplateSource;
use crate::utils::config::{CYCLES_PLACEHOLDER, LEADING_SENTINEL, TRAILING_SENTINEL};
use crate::utils::error::InputError;
use log::debug;
use std::io::BufRead;

/// Counters describing one decompression run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecompressSummary {
    /// Records expanded (including those with empty templates)
    pub records: u64,

    /// Template lines written, excluding sentinels
    pub lines_emitted: u64,

    /// Records whose template was empty
    pub suppressed_records: u64,

    /// Whether a short line ended the stream before end of input
    pub stopped_early: bool,
}

impl DecompressSummary {
    /// One-line human-readable summary for logs
    pub fn summary(&self) -> String {
        format!(
            "{} records, {} lines emitted, {} suppressed{}",
            self.records,
            self.lines_emitted,
            self.suppressed_records,
            if self.stopped_early {
                ", stopped at short line"
            } else {
                ""
            }
        )
    }
}

/// A fully framed expanded trace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecompressedTrace {
    text: String,
    summary: DecompressSummary,
}

impl DecompressedTrace {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.text.into_bytes()
    }

    pub fn summary(&self) -> &DecompressSummary {
        &self.summary
    }
}

/// Incremental expander over a template source
///
/// The leading sentinel is written on construction; [`finish`](Self::finish)
/// appends the trailing one.
pub struct Decompressor<'a, S: TemplateSource> {
    source: &'a S,
    record_index: u64,
    buffer: String,
    summary: DecompressSummary,
}

impl<'a, S: TemplateSource> Decompressor<'a, S> {
    pub fn new(source: &'a S) -> Self {
        let mut buffer = String::new();
        push_line(&mut buffer, LEADING_SENTINEL);

        Self {
            source,
            record_index: 0,
            buffer,
            summary: DecompressSummary::default(),
        }
    }

    /// Number of records expanded so far
    pub fn record_index(&self) -> u64 {
        self.record_index
    }

    /// Expand one record and append its lines
    pub fn push_record(&mut self, record: &TraceRecord) {
        self.record_index += 1;
        let cycles = record.scaled_cycles(self.record_index).to_string();

        debug!(
            "Record {}: event {} -> {} cycles",
            self.record_index, record.event_code, cycles
        );

        let template = self.source.lookup(record.event_code);
        if template.is_empty() {
            self.summary.suppressed_records += 1;
        }

        for line in template {
            let line: &str = line.as_ref();
            push_line(&mut self.buffer, &line.replace(CYCLES_PLACEHOLDER, &cycles));
        }

        self.summary.records += 1;
        self.summary.lines_emitted += template.len() as u64;
    }

    /// Mark that the stream ended on a short line
    pub fn stop_early(&mut self) {
        self.summary.stopped_early = true;
    }

    /// Append the trailing sentinel and hand over the buffer
    pub fn finish(mut self) -> DecompressedTrace {
        push_line(&mut self.buffer, TRAILING_SENTINEL);

        DecompressedTrace {
            text: self.buffer,
            summary: self.summary,
        }
    }
}

/// Decompress a trace read from `input`
///
/// **Public** - main entry point for decompression
///
/// # Arguments
/// * `source` - Template table to expand event codes with
/// * `input` - Compressed trace, one record per `\n`-terminated line
///
/// # Returns
/// The framed expanded trace. Reading stops at the first line with fewer
/// than two tokens; lines after it are not read.
///
/// # Errors
/// * `InputError::ReadFailed` - The underlying reader failed
pub fn decompress<S, R>(source: &S, input: R) -> Result<DecompressedTrace, InputError>
where
    S: TemplateSource,
    R: BufRead,
{
    let mut decompressor = Decompressor::new(source);

    for line in input.split(b'\n') {
        let line = line?;
        let line = String::from_utf8_lossy(&line);

        match TraceRecord::parse(&line) {
            Some(record) => decompressor.push_record(&record),
            None => {
                decompressor.stop_early();
                break;
            }
        }
    }

    Ok(decompressor.finish())
}

/// Decompress an in-memory trace
///
/// Same behavior as [`decompress`], without the possibility of a read error.
pub fn decompress_str<S: TemplateSource>(source: &S, input: &str) -> DecompressedTrace {
    let mut decompressor = Decompressor::new(source);

    for line in input.lines() {
        match TraceRecord::parse(line) {
            Some(record) => decompressor.push_record(&record),
            None => {
                decompressor.stop_early();
                break;
            }
        }
    }

    decompressor.finish()
}

/// Append a line followed by `\n`
///
/// **Private** - internal helper for buffer construction
fn push_line(buffer: &mut String, line: &str) {
    buffer.push_str(line);
    buffer.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::BuiltinTemplates;

    #[test]
    fn test_new_writes_leading_sentinel_only() {
        let trace = Decompressor::new(&BuiltinTemplates).finish();
        assert_eq!(trace.as_str(), "EOD\nH\t\t\n");
        assert_eq!(trace.summary(), &DecompressSummary::default());
    }

    #[test]
    fn test_record_index_advances_on_suppressed_codes() {
        let mut decompressor = Decompressor::new(&BuiltinTemplates);
        decompressor.push_record(&TraceRecord::new(5, 12));
        decompressor.push_record(&TraceRecord::new(5, 1000));
        assert_eq!(decompressor.record_index(), 2);

        let trace = decompressor.finish();
        assert_eq!(trace.summary().suppressed_records, 2);
        assert_eq!(trace.summary().lines_emitted, 0);
    }

    #[test]
    fn test_summary_text() {
        let summary = DecompressSummary {
            records: 3,
            lines_emitted: 5,
            suppressed_records: 1,
            stopped_early: true,
        };
        assert_eq!(
            summary.summary(),
            "3 records, 5 lines emitted, 1 suppressed, stopped at short line"
        );
    }
}
