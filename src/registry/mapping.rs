//! Template tables loaded from JSON mapping files.
//!
//! A mapping file replaces the built-in table for traces produced by a
//! differently instrumented build. Expected shape:
//!
//! ```json
//! {
//!   "traceIdsToCSEMEvents": {
//!     "0": { "csemEvents": "HIRQENTRY 0 1 [CPU_CYCLES] 1 0 0 fired s\n" },
//!     "12": { "csemEvents": "" }
//!   }
//! }
//! ```
//!
//! Entries may carry extra fields; only `csemEvents` is read.

use super::TemplateSource;
use crate::utils::error::TemplateError;
use log::{debug, info, warn};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Top-level mapping document
#[derive(Debug, Deserialize)]
struct MappingDocument {
    #[serde(rename = "traceIdsToCSEMEvents")]
    trace_ids_to_events: HashMap<String, MappingEntry>,
}

/// One event code's entry
#[derive(Debug, Deserialize)]
struct MappingEntry {
    /// Newline-separated template text
    #[serde(default, rename = "csemEvents")]
    events: String,
}

/// Template table built from a mapping file
#[derive(Debug, Clone, Default)]
pub struct MappedTemplates {
    entries: HashMap<i64, Vec<String>>,
}

impl MappedTemplates {
    /// Parse a mapping document from a JSON string
    ///
    /// # Errors
    /// * `TemplateError::JsonError` - Malformed JSON or missing `traceIdsToCSEMEvents`
    /// * `TemplateError::InvalidCode` - A key that is not a base-10 integer
    pub fn from_json_str(json: &str) -> Result<Self, TemplateError> {
        let document: MappingDocument = serde_json::from_str(json)?;

        let mut entries = HashMap::with_capacity(document.trace_ids_to_events.len());
        for (key, entry) in document.trace_ids_to_events {
            let code = key
                .trim()
                .parse::<i64>()
                .map_err(|_| TemplateError::InvalidCode(key.clone()))?;

            let lines = split_template(&entry.events);
            debug!("Mapped code {} to {} line(s)", code, lines.len());
            entries.insert(code, lines);
        }

        if entries.values().all(Vec::is_empty) {
            warn!("Mapping file defines no non-empty templates; every record will be dropped");
        }

        Ok(Self { entries })
    }

    /// Load a mapping document from disk
    ///
    /// # Errors
    /// * `TemplateError::ReadFailed` - File cannot be read
    /// * Any error from [`MappedTemplates::from_json_str`]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TemplateError> {
        let path = path.as_ref();
        info!("Loading template mapping from: {}", path.display());

        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Number of codes defined by the file, including empty ones
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TemplateSource for MappedTemplates {
    type Line = String;

    fn lookup(&self, code: i64) -> &[String] {
        self.entries.get(&code).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Split template text into lines, dropping the trailing empty segment
///
/// **Private** - internal helper for from_json_str
fn split_template(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let text = text.strip_suffix('\n').unwrap_or(text);
    text.split('\n').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_template() {
        assert!(split_template("").is_empty());
        assert_eq!(split_template("A [CPU_CYCLES]\n"), vec!["A [CPU_CYCLES]"]);
        assert_eq!(
            split_template("A [CPU_CYCLES]\nB [CPU_CYCLES]"),
            vec!["A [CPU_CYCLES]", "B [CPU_CYCLES]"]
        );
    }

    #[test]
    fn test_missing_events_field_is_empty_template() {
        let mapped =
            MappedTemplates::from_json_str(r#"{"traceIdsToCSEMEvents": {"4": {"type": 2}}}"#)
                .unwrap();

        assert_eq!(mapped.len(), 1);
        assert!(mapped.lookup(4).is_empty());
    }
}
