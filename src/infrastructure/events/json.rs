//! JSON Event Sink
//!
//! Outputs resolve events as NDJSON for scripts and CI.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{ResolveEvent, ResolveEventSink};

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) -> io::Result<()> {
        let mut writer = self.writer.lock().unwrap_or_else(|e| e.into_inner());
        writeln!(writer, "{}", event)?;
        writer.flush()
    }
}

impl ResolveEventSink for JsonEventSink {
    fn on_event(&self, event: ResolveEvent) -> io::Result<()> {
        let json = match event {
            ResolveEvent::FileResolved {
                path,
                blocks,
                dropped_lines,
            } => serde_json::json!({
                "event": "resolved",
                "path": path.display().to_string(),
                "blocks": blocks,
                "dropped_lines": dropped_lines,
            }),

            ResolveEvent::MarkersFound { path, hits } => serde_json::json!({
                "event": "markers",
                "path": path.display().to_string(),
                "count": hits.len(),
                "markers": hits,
            }),
        };

        self.write_event(json)
    }
}
