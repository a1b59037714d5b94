//! Resolve result types

use std::path::PathBuf;

use crate::domain::services::MarkerHit;

/// What happened to one rewritten file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFile {
    pub path: PathBuf,
    /// Conflict blocks found
    pub blocks: usize,
    /// Lines removed
    pub dropped_lines: usize,
    /// The file ended inside a conflict block
    pub unterminated: bool,
}

/// Markers still present in one file after resolving
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectedFile {
    pub path: PathBuf,
    pub hits: Vec<MarkerHit>,
}

/// Result of a resolve run
#[derive(Debug, Clone, Default)]
pub struct ResolveResult {
    /// Files rewritten, in order
    pub resolved: Vec<ResolvedFile>,
    /// Inspection reports (empty unless check was requested)
    pub inspected: Vec<InspectedFile>,
}

impl ResolveResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total conflict blocks resolved across all files
    pub fn total_blocks(&self) -> usize {
        self.resolved.iter().map(|f| f.blocks).sum()
    }

    /// Total marker lines reported by inspection
    pub fn total_markers(&self) -> usize {
        self.inspected.iter().map(|f| f.hits.len()).sum()
    }
}
