//! In-memory file system
//!
//! Uses `Arc<Mutex<>>` internally so it can be cloned and shared between a
//! use case and the test that inspects its results.

use std::collections::HashMap;
use std::io::{BufRead, Cursor};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    files: Arc<Mutex<HashMap<PathBuf, Vec<u8>>>>,
    read_only: Arc<Mutex<Vec<PathBuf>>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        self.lock_files().insert(path.into(), content.into());
        self
    }

    /// Make writes to `path` fail with `PermissionDenied`
    pub fn with_read_only(self, path: impl Into<PathBuf>) -> Self {
        self.read_only
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(path.into());
        self
    }

    /// Current content of a file, if present and valid UTF-8
    pub fn content(&self, path: impl AsRef<Path>) -> Option<String> {
        self.lock_files()
            .get(path.as_ref())
            .and_then(|bytes| String::from_utf8(bytes.clone()).ok())
    }

    fn lock_files(&self) -> MutexGuard<'_, HashMap<PathBuf, Vec<u8>>> {
        self.files.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn get(&self, path: &Path) -> FsResult<Vec<u8>> {
        self.lock_files().get(path).cloned().ok_or(FsError::NotFound)
    }
}

impl FileSystem for MemoryFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        String::from_utf8(self.get(path)?).map_err(|_| FsError::InvalidUtf8)
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        let denied = self
            .read_only
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .any(|p| p == path);
        if denied {
            return Err(FsError::PermissionDenied);
        }
        self.lock_files()
            .insert(path.to_path_buf(), content.as_bytes().to_vec());
        Ok(())
    }

    fn open(&self, path: &Path) -> FsResult<Box<dyn BufRead>> {
        Ok(Box::new(Cursor::new(self.get(path)?)))
    }
}
