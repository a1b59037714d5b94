//! Event Sink Implementations
//!
//! Concrete implementations of ResolveEventSink:
//! - ConsoleEventSink: human-readable marker report
//! - JsonEventSink: NDJSON output for scripts/CI

mod console;
mod json;

pub use console::{render_markers, ConsoleEventSink};
pub use json::JsonEventSink;
