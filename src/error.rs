//! Error types for textfix
//!
//! Uses `thiserror` for library errors; binaries wrap these in `anyhow`.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::ports::FsError;

/// Result type alias for textfix operations
pub type TextfixResult<T> = Result<T, TextfixError>;

/// Main error type for textfix operations
#[derive(Error, Debug)]
pub enum TextfixError {
    /// Input file does not exist
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Input file exists but could not be read
    #[error("failed to read {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Rewriting a file in place failed
    #[error("failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File content is not valid UTF-8 text
    #[error("{path} is not valid UTF-8 text")]
    InvalidUtf8 { path: PathBuf },

    /// Writing to standard output failed
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl TextfixError {
    /// Attach a path to a read-side file system error.
    pub fn from_read(path: &Path, err: FsError) -> Self {
        match err {
            FsError::NotFound => TextfixError::FileNotFound {
                path: path.to_path_buf(),
            },
            FsError::InvalidUtf8 => TextfixError::InvalidUtf8 {
                path: path.to_path_buf(),
            },
            other => TextfixError::ReadFailed {
                path: path.to_path_buf(),
                source: other.into_io(),
            },
        }
    }

    /// Attach a path to a write-side file system error.
    pub fn from_write(path: &Path, err: FsError) -> Self {
        TextfixError::WriteFailed {
            path: path.to_path_buf(),
            source: err.into_io(),
        }
    }

    /// The file this error is about, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            TextfixError::FileNotFound { path }
            | TextfixError::ReadFailed { path, .. }
            | TextfixError::WriteFailed { path, .. }
            | TextfixError::InvalidUtf8 { path } => Some(path),
            TextfixError::Output(_) => None,
        }
    }
}
