//! Console Event Sink
//!
//! Plain-text report for humans. Resolve events only go to the log; marker
//! reports are printed as
//!
//! ```text
//! Markers in path/to/file:
//! 3 <<<<<<< HEAD
//! 5 =======
//! ```

use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use crate::domain::ports::{ResolveEvent, ResolveEventSink};
use crate::domain::services::MarkerHit;

pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }
}

/// Render the marker report for one file.
pub fn render_markers(path: &Path, hits: &[MarkerHit]) -> String {
    let mut out = format!("Markers in {}:\n", path.display());
    for hit in hits {
        out.push_str(&format!("{} {}\n", hit.line, hit.text));
    }
    out
}

impl ResolveEventSink for ConsoleEventSink {
    fn on_event(&self, event: ResolveEvent) -> io::Result<()> {
        match event {
            ResolveEvent::FileResolved {
                path,
                blocks,
                dropped_lines,
            } => {
                tracing::debug!(
                    path = %path.display(),
                    blocks,
                    dropped_lines,
                    "resolved"
                );
                Ok(())
            }
            ResolveEvent::MarkersFound { path, hits } => {
                let mut writer = self.writer.lock().unwrap_or_else(|e| e.into_inner());
                writer.write_all(render_markers(&path, &hits).as_bytes())?;
                writer.flush()
            }
        }
    }
}
