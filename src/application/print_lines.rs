//! Print Lines Use Case
//!
//! Opens a file and streams the requested line range to a writer.

use std::io::Write;
use std::path::PathBuf;

use tracing::debug;

use crate::domain::ports::FileSystem;
use crate::domain::services::{print_range, StreamError};
use crate::domain::value_objects::LineRange;
use crate::error::{TextfixError, TextfixResult};

/// Options for the line printer
#[derive(Debug, Clone)]
pub struct PrintLinesOptions {
    pub path: PathBuf,
    pub range: LineRange,
}

impl PrintLinesOptions {
    pub fn new(path: impl Into<PathBuf>, start: i64, end: i64) -> Self {
        Self {
            path: path.into(),
            range: LineRange::new(start, end),
        }
    }
}

pub struct PrintLinesUseCase<FS>
where
    FS: FileSystem,
{
    fs: FS,
}

impl<FS> PrintLinesUseCase<FS>
where
    FS: FileSystem,
{
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    /// Print the selected lines to `out`, returning how many were printed.
    ///
    /// The file is opened before anything is written, so a missing file
    /// produces no output at all.
    pub fn execute(
        &self,
        options: &PrintLinesOptions,
        out: &mut dyn Write,
    ) -> TextfixResult<usize> {
        let path = options.path.as_path();
        let mut reader = self
            .fs
            .open(path)
            .map_err(|e| TextfixError::from_read(path, e))?;

        let printed = print_range(&mut reader, options.range, &mut *out).map_err(|e| match e {
            StreamError::Read(source) => TextfixError::ReadFailed {
                path: path.to_path_buf(),
                source,
            },
            StreamError::Write(source) => TextfixError::Output(source),
        })?;
        out.flush()?;

        debug!(path = %path.display(), range = %options.range, printed, "printed lines");
        Ok(printed)
    }
}
