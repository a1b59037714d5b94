//! Resolve options

use std::path::PathBuf;

/// Options for the conflict resolver
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Files to resolve, in order
    pub paths: Vec<PathBuf>,
    /// Report leftover markers after resolving
    pub check: bool,
}

impl ResolveOptions {
    /// Create new resolve options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the files to process
    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = paths;
        self
    }

    /// Set check (inspect after resolving)
    pub fn with_check(mut self, check: bool) -> Self {
        self.check = check;
        self
    }
}
