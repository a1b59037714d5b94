//! Domain Services
//!
//! Pure text transformations. No file system access happens here; callers
//! hand in text or readers.

mod conflict_resolver;
mod lines;
mod marker_inspector;
mod range_printer;

pub use conflict_resolver::{resolve_text, ConflictResolver, LineAction, ResolveState, Resolution};
pub use lines::{read_line_bytes, split_lines, Lines};
pub use marker_inspector::{find_markers, MarkerHit};
pub use range_printer::{print_range, StreamError};
