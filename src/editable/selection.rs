//! Mark (selection) state machine.
//!
//! `Unmarked -> Marking` on start, `Marking -> Marked | Unmarked` on stop,
//! and any state `-> Unmarked` on clear. The two stored points are cell
//! edges; the normalized range is inclusive of cells.

use super::cursor::Position;
use super::document::Document;

/// Selection lifecycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MarkState {
    #[default]
    Unmarked,
    /// The end point follows the cursor
    Marking,
    /// Fixed selection, ready for copy or cut
    Marked,
}

/// Normalized selection: every cell from `min` to `max`, both included.
///
/// `max.col` may equal the row length, naming the row's terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkRange {
    pub min: Position,
    pub max: Position,
}

impl MarkRange {
    pub fn contains(&self, pos: Position) -> bool {
        pos >= self.min && pos <= self.max
    }

    /// Rows touched by the range
    pub fn rows(&self) -> std::ops::RangeInclusive<usize> {
        self.min.row..=self.max.row
    }
}

/// Selection anchored at `start` and extended to `end`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mark {
    state: MarkState,
    start: Position,
    end: Position,
}

impl Mark {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MarkState {
        self.state
    }

    /// Marking or Marked
    pub fn is_active(&self) -> bool {
        self.state != MarkState::Unmarked
    }

    pub fn is_marking(&self) -> bool {
        self.state == MarkState::Marking
    }

    pub fn start_point(&self) -> Position {
        self.start
    }

    pub fn end_point(&self) -> Position {
        self.end
    }

    /// Begin a selection at `pos`
    pub fn start(&mut self, pos: Position) {
        self.start = pos;
        self.end = pos;
        self.state = MarkState::Marking;
    }

    /// Move the end point while marking
    pub fn extend(&mut self, pos: Position) {
        if self.state == MarkState::Marking {
            self.end = pos;
        }
    }

    /// Fix the selection, or drop it if nothing was covered
    pub fn stop(&mut self) {
        if self.state != MarkState::Marking {
            return;
        }
        self.state = if self.end != self.start {
            MarkState::Marked
        } else {
            MarkState::Unmarked
        };
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Inclusive cell range covered, None when unmarked or empty
    pub fn range(&self, doc: &Document) -> Option<MarkRange> {
        if !self.is_active() || self.start == self.end {
            return None;
        }
        let (min, after) = if self.start < self.end {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        };
        let max = if after.col > 0 {
            Position::new(after.row, after.col - 1)
        } else {
            // after.row > min.row here, so the previous row exists
            let row = after.row - 1;
            Position::new(row, doc.row_len(row))
        };
        Some(MarkRange { min, max })
    }

    /// Renderer predicate: is the cell at (row, col) selected
    pub fn contains(&self, doc: &Document, row: usize, col: usize) -> bool {
        self.range(doc)
            .is_some_and(|range| range.contains(Position::new(row, col)))
    }
}
