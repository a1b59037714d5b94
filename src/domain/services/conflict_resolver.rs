//! Conflict resolver
//!
//! Single forward pass over a file's lines. Inside a conflict block the local
//! ("ours") section is kept; the incoming section and all three marker lines
//! are dropped. Blocks do not nest: a start marker inside a block is plain
//! text, and separator/end markers outside a block are plain text.

use super::lines::split_lines;
use crate::domain::value_objects::Marker;

/// Position of the scanner relative to conflict blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolveState {
    /// Not inside a conflict block
    #[default]
    Outside,
    /// Inside a block, in the local section (lines kept)
    InLocalKeep,
    /// Inside a block, in the incoming section (lines dropped)
    InLocalDiscard,
}

impl ResolveState {
    pub fn in_block(&self) -> bool {
        !matches!(self, ResolveState::Outside)
    }
}

/// What to do with the line just fed to the resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineAction {
    Keep,
    Drop,
}

/// The resolver state machine.
///
/// Feed lines in order with [`ConflictResolver::step`]; or resolve a whole
/// text at once with [`resolve_text`].
#[derive(Debug, Clone, Default)]
pub struct ConflictResolver {
    state: ResolveState,
    blocks_opened: usize,
    blocks_closed: usize,
}

impl ConflictResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ResolveState {
        self.state
    }

    /// Advance by one line and report whether it survives.
    pub fn step(&mut self, line: &str) -> LineAction {
        let marker = Marker::at_line_start(line);

        let (next, action) = match (self.state, marker) {
            (ResolveState::Outside, Some(Marker::Start)) => {
                self.blocks_opened += 1;
                (ResolveState::InLocalKeep, LineAction::Drop)
            }
            (ResolveState::Outside, _) => (ResolveState::Outside, LineAction::Keep),
            (_, Some(Marker::Separator)) => (ResolveState::InLocalDiscard, LineAction::Drop),
            (_, Some(Marker::End)) => {
                self.blocks_closed += 1;
                (ResolveState::Outside, LineAction::Drop)
            }
            (ResolveState::InLocalKeep, _) => (ResolveState::InLocalKeep, LineAction::Keep),
            (ResolveState::InLocalDiscard, _) => {
                (ResolveState::InLocalDiscard, LineAction::Drop)
            }
        };

        self.state = next;
        action
    }

    /// Number of start markers acted on so far
    pub fn blocks_opened(&self) -> usize {
        self.blocks_opened
    }

    /// Number of end markers that closed a block so far
    pub fn blocks_closed(&self) -> usize {
        self.blocks_closed
    }
}

/// Outcome of resolving one file's text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Surviving lines, terminators included
    pub content: String,
    /// Conflict blocks encountered
    pub blocks: usize,
    /// Lines removed (markers plus incoming sections)
    pub dropped_lines: usize,
    /// The text ended while still inside a block
    pub unterminated: bool,
}

impl Resolution {
    /// True when resolving left the text untouched
    pub fn is_unchanged(&self) -> bool {
        self.dropped_lines == 0
    }
}

/// Resolve every conflict block in `text`, keeping the local side.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`. Terminators (or none on the
/// last line) are carried through unchanged for every kept line.
pub fn resolve_text(text: &str) -> Resolution {
    let mut resolver = ConflictResolver::new();
    let mut content = String::with_capacity(text.len());
    let mut dropped_lines = 0;

    for line in split_lines(text) {
        match resolver.step(line) {
            LineAction::Keep => content.push_str(line),
            LineAction::Drop => dropped_lines += 1,
        }
    }

    Resolution {
        content,
        blocks: resolver.blocks_opened(),
        dropped_lines,
        unterminated: resolver.state().in_block(),
    }
}
