//! Resolve Use Case
//!
//! Rewrites every file with its conflicts resolved, then (with `check`)
//! reports any marker lines that remain.

use std::path::Path;

use tracing::{debug, info};

use crate::domain::ports::{FileSystem, ResolveEvent, ResolveEventSink};
use crate::domain::services::{find_markers, resolve_text};
use crate::error::{TextfixError, TextfixResult};

use super::options::ResolveOptions;
use super::result::{InspectedFile, ResolveResult, ResolvedFile};

/// Resolve use case - keeps the local side of every conflict block
pub struct ResolveUseCase<FS>
where
    FS: FileSystem,
{
    fs: FS,
}

impl<FS> ResolveUseCase<FS>
where
    FS: FileSystem,
{
    /// Create a new resolve use case
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    /// Run resolve mode over every path, then inspect mode if requested.
    ///
    /// Files are handled one at a time. The first failure stops the run;
    /// files already rewritten stay rewritten.
    pub fn execute(
        &self,
        options: &ResolveOptions,
        sink: &dyn ResolveEventSink,
    ) -> TextfixResult<ResolveResult> {
        let mut result = ResolveResult::new();

        for path in &options.paths {
            let resolved = self.resolve_file(path)?;
            sink.on_event(ResolveEvent::FileResolved {
                path: resolved.path.clone(),
                blocks: resolved.blocks,
                dropped_lines: resolved.dropped_lines,
            })?;
            result.resolved.push(resolved);
        }

        if options.check {
            for path in &options.paths {
                let inspected = self.inspect_file(path)?;
                sink.on_event(ResolveEvent::MarkersFound {
                    path: inspected.path.clone(),
                    hits: inspected.hits.clone(),
                })?;
                result.inspected.push(inspected);
            }
        }

        info!(
            files = result.resolved.len(),
            blocks = result.total_blocks(),
            "resolve finished"
        );
        Ok(result)
    }

    /// Resolve one file in place.
    pub fn resolve_file(&self, path: &Path) -> TextfixResult<ResolvedFile> {
        let text = self
            .fs
            .read(path)
            .map_err(|e| TextfixError::from_read(path, e))?;

        let resolution = resolve_text(&text);
        if resolution.unterminated {
            debug!(path = %path.display(), "file ends inside a conflict block");
        }

        self.fs
            .write(path, &resolution.content)
            .map_err(|e| TextfixError::from_write(path, e))?;

        debug!(
            path = %path.display(),
            blocks = resolution.blocks,
            dropped_lines = resolution.dropped_lines,
            "rewrote file"
        );

        Ok(ResolvedFile {
            path: path.to_path_buf(),
            blocks: resolution.blocks,
            dropped_lines: resolution.dropped_lines,
            unterminated: resolution.unterminated,
        })
    }

    /// List marker lines in one file without touching it.
    pub fn inspect_file(&self, path: &Path) -> TextfixResult<InspectedFile> {
        let text = self
            .fs
            .read(path)
            .map_err(|e| TextfixError::from_read(path, e))?;

        let hits = find_markers(&text);
        debug!(path = %path.display(), markers = hits.len(), "inspected file");

        Ok(InspectedFile {
            path: path.to_path_buf(),
            hits,
        })
    }
}
