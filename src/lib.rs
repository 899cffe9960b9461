//! Trace Decompress
//!
//! Expands compressed execution traces of the CC2420 radio stack
//! (interrupt-driven receive/transmit pipeline plus its scheduler tasks)
//! into the event log read by the timing-analysis tooling.
//!
//! This crate provides the core implementation for the
//! `decompress-trace` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! decompress-trace traces/rx-burst.trace
//! # writes output/processed-rx-burst.trace
//! ```
//!
//! Library use:
//!
//! ```
//! use trace_decompress::decompress::decompress_str;
//! use trace_decompress::registry::BuiltinTemplates;
//!
//! let trace = decompress_str(&BuiltinTemplates, "100 0\n");
//! assert_eq!(
//!     trace.as_str(),
//!     "EOD\nHIRQENTRY 0 1 240 1 0 0 interruptfifop_fired s\nH\t\t\n"
//! );
//! ```

pub mod commands;
pub mod decompress;
pub mod output;
pub mod registry;
pub mod utils;
