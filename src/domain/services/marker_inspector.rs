//! Finds leftover conflict markers without changing anything.

use serde::Serialize;

use super::lines::split_lines;
use crate::domain::value_objects::Marker;

/// A line that still carries a conflict marker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkerHit {
    /// 1-based line number
    pub line: usize,
    /// Line content with surrounding whitespace trimmed
    pub text: String,
}

/// Every line of `text` containing any marker literal, in file order.
///
/// Line numbers count `\n`, `\r\n` and lone `\r` endings alike, matching
/// [`resolve_text`](super::resolve_text).
pub fn find_markers(text: &str) -> Vec<MarkerHit> {
    split_lines(text)
        .enumerate()
        .filter(|(_, line)| Marker::appears_in(line))
        .map(|(idx, line)| MarkerHit {
            line: idx + 1,
            text: line.trim().to_string(),
        })
        .collect()
}
