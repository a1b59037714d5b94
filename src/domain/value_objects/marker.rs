//! Conflict marker value object
//!
//! Version control tools delimit a conflict with three fixed marker lines:
//!
//! ```text
//! <<<<<<< HEAD
//! local side
//! =======
//! incoming side
//! >>>>>>> branch
//! ```

/// One of the three conflict marker kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// `<<<<<<<` opens a conflict block
    Start,
    /// `=======` separates the local and incoming sections
    Separator,
    /// `>>>>>>>` closes a conflict block
    End,
}

impl Marker {
    /// All marker kinds, in block order
    pub const ALL: [Marker; 3] = [Marker::Start, Marker::Separator, Marker::End];

    /// The literal text that identifies this marker
    pub fn literal(&self) -> &'static str {
        match self {
            Marker::Start => "<<<<<<<",
            Marker::Separator => "=======",
            Marker::End => ">>>>>>>",
        }
    }

    /// Classify a line by its leading marker literal.
    ///
    /// Only a marker at the very start of the line counts; this is what the
    /// resolver acts on.
    pub fn at_line_start(line: &str) -> Option<Marker> {
        Self::ALL
            .into_iter()
            .find(|marker| line.starts_with(marker.literal()))
    }

    /// True when the line contains any marker literal anywhere.
    ///
    /// Looser than [`Marker::at_line_start`]; used when reporting leftovers.
    pub fn appears_in(line: &str) -> bool {
        Self::ALL
            .into_iter()
            .any(|marker| line.contains(marker.literal()))
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.literal())
    }
}
