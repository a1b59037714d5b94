//! FileSystem port - abstraction over file I/O operations
//!
//! Lets the use cases read and rewrite files without depending on the
//! concrete implementation (local disk, in-memory for tests).

use std::io::BufRead;
use std::path::Path;

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
///
/// Carries no path; callers attach it when converting into `TextfixError`.
#[derive(Debug)]
pub enum FsError {
    /// File not found
    NotFound,
    /// Permission denied
    PermissionDenied,
    /// Content is not valid UTF-8
    InvalidUtf8,
    /// Any other I/O error
    Io(std::io::Error),
}

impl FsError {
    /// Convert back into an `io::Error`, keeping the error kind.
    pub fn into_io(self) -> std::io::Error {
        match self {
            FsError::NotFound => std::io::Error::from(std::io::ErrorKind::NotFound),
            FsError::PermissionDenied => {
                std::io::Error::from(std::io::ErrorKind::PermissionDenied)
            }
            FsError::InvalidUtf8 => std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "stream did not contain valid UTF-8",
            ),
            FsError::Io(err) => err,
        }
    }
}

impl From<std::io::Error> for FsError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound,
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied,
            std::io::ErrorKind::InvalidData => FsError::InvalidUtf8,
            _ => FsError::Io(err),
        }
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound => write!(f, "file not found"),
            FsError::PermissionDenied => write!(f, "permission denied"),
            FsError::InvalidUtf8 => write!(f, "invalid UTF-8"),
            FsError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for FsError {}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O, rewrites in place
/// - `MemoryFs` - in-memory, for tests
pub trait FileSystem {
    /// Read a whole file as UTF-8 text
    fn read(&self, path: &Path) -> FsResult<String>;

    /// Replace a file's content
    fn write(&self, path: &Path, content: &str) -> FsResult<()>;

    /// Open a file for buffered, line-at-a-time reading
    fn open(&self, path: &Path) -> FsResult<Box<dyn BufRead>>;
}
