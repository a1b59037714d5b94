//! Resolve Event Port
//!
//! Observable interface for the conflict resolver. The console sink prints
//! the marker report; the JSON sink emits NDJSON for scripts.

use std::path::PathBuf;

use crate::domain::services::MarkerHit;

/// Event emitted while resolving or inspecting files
#[derive(Debug, Clone)]
pub enum ResolveEvent {
    /// A file was rewritten with its conflicts resolved
    FileResolved {
        path: PathBuf,
        blocks: usize,
        dropped_lines: usize,
    },

    /// Inspection of a file finished
    MarkersFound { path: PathBuf, hits: Vec<MarkerHit> },
}

/// Trait for receiving resolve events
pub trait ResolveEventSink {
    /// Handle an event. Output failures surface as errors so a closed stdout
    /// stops the run.
    fn on_event(&self, event: ResolveEvent) -> std::io::Result<()>;
}

/// Sink that discards everything
pub struct NoopEventSink;

impl ResolveEventSink for NoopEventSink {
    fn on_event(&self, _event: ResolveEvent) -> std::io::Result<()> {
        Ok(())
    }
}
