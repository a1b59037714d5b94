//! Closed range of 1-based line numbers

/// Inclusive `[start, end]` range of line numbers.
///
/// Bounds are taken as given: `start > end` is a valid, empty range, and
/// bounds below 1 simply match nothing before line 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    start: i64,
    end: i64,
}

impl LineRange {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// True when `line` lies inside the range
    pub fn contains(&self, line: i64) -> bool {
        self.start <= line && line <= self.end
    }

    /// True when no line number at or after `line` can match
    pub fn is_past(&self, line: i64) -> bool {
        line > self.end
    }

    /// True when no line number can ever match
    pub fn is_empty(&self) -> bool {
        self.start > self.end || self.end < 1
    }
}

impl std::fmt::Display for LineRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}
