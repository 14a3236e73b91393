//! Cursor and position types for the row buffer.

/// A cell position in a document (row and column, both 0-indexed).
///
/// A position names the left edge of a character cell; column `len` of a
/// row is the cell holding its terminator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub const fn zero() -> Self {
        Self { row: 0, col: 0 }
    }
}

/// The document cursor with an optional desired column for vertical movement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
    /// Column to return to when moving up/down through shorter rows.
    pub desired_col: Option<usize>,
}

impl Cursor {
    pub const fn new(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            desired_col: None,
        }
    }

    pub fn at_position(pos: Position) -> Self {
        Self::new(pos.row, pos.col)
    }

    pub const fn to_position(&self) -> Position {
        Position::new(self.row, self.col)
    }

    /// Clear desired column (call after horizontal movement or edits)
    pub fn clear_desired_col(&mut self) {
        self.desired_col = None;
    }

    /// Remember the current column (call before vertical movement)
    pub fn set_desired_col(&mut self) {
        if self.desired_col.is_none() {
            self.desired_col = Some(self.col);
        }
    }

    /// Column to aim for when landing on a new row
    pub fn effective_col(&self) -> usize {
        self.desired_col.unwrap_or(self.col)
    }
}

impl From<Position> for Cursor {
    fn from(pos: Position) -> Self {
        Self::at_position(pos)
    }
}

impl From<Cursor> for Position {
    fn from(cursor: Cursor) -> Self {
        cursor.to_position()
    }
}
