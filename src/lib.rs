//! textfix - small text-file utilities
//!
//! Two command-line tools share this library:
//!
//! - `print-lines` prints a numbered, inclusive range of lines from a file.
//! - `resolve-conflicts` rewrites files in place, keeping the local side of
//!   every merge conflict block, and can list leftover marker lines.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    PrintLinesOptions, PrintLinesUseCase, ResolveOptions, ResolveResult, ResolveUseCase,
};
pub use domain::services::{
    find_markers, print_range, resolve_text, split_lines, MarkerHit, Resolution,
};
pub use domain::value_objects::{LineRange, Marker};
pub use error::{TextfixError, TextfixResult};
