//! Event templates keyed by compressed-trace event code.
//!
//! This module provides:
//! - The built-in template table for the radio receive/transmit pipeline
//! - Alternative tables loaded from JSON mapping files
//! - The `TemplateSource` trait the decompressor is generic over

pub mod builtin;
pub mod mapping;

// Re-export main types
pub use builtin::{lookup, BuiltinTemplates, CONTEXT_SWITCH_CODE};
pub use mapping::MappedTemplates;

/// A read-only table mapping event codes to line templates.
///
/// Codes with no entry (including negative codes) resolve to an empty
/// slice; `lookup` never fails.
pub trait TemplateSource {
    /// Line type stored by the table
    type Line: AsRef<str>;

    /// Template lines for `code`, in emission order
    fn lookup(&self, code: i64) -> &[Self::Line];
}
