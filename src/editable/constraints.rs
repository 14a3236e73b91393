//! Document geometry and character constraints.
//!
//! Constraints fix the size of a document's row store for its whole lifetime
//! and restrict which bytes may be typed into it.

/// Byte filter function type
pub type CharFilter = fn(u8) -> bool;

/// Row count of the main document (one slot is the append sentinel)
pub const EDITOR_ROWS: usize = 704;
/// Bytes per row slot, terminator included
pub const EDITOR_COLS: usize = 80;
/// Longest filename accepted by the filename field
pub const MAX_FILENAME: usize = 30;

/// Smallest geometry that still leaves one usable row and one usable column
pub const MIN_ROWS: usize = 2;
pub const MIN_COLS: usize = 2;

/// Largest geometry: row indices fit 16 bits and columns fit 8 bits
pub const MAX_ROWS: usize = u16::MAX as usize;
pub const MAX_COLS: usize = u8::MAX as usize;

/// Fixed capacity and input rules of a document.
#[derive(Debug, Clone)]
pub struct DocConstraints {
    /// Number of row slots. The last slot is never used for content.
    pub rows: usize,

    /// Bytes per row slot. One byte is reserved for the terminator.
    pub cols: usize,

    /// Byte filter (None = all printable ASCII allowed)
    /// Returns true if the byte is allowed
    pub char_filter: Option<CharFilter>,
}

impl Default for DocConstraints {
    fn default() -> Self {
        Self::editor()
    }
}

impl DocConstraints {
    /// Main document constraints
    pub fn editor() -> Self {
        Self {
            rows: EDITOR_ROWS,
            cols: EDITOR_COLS,
            char_filter: None,
        }
    }

    /// Main document with a configured geometry, clamped to the supported range
    pub fn with_geometry(rows: usize, cols: usize) -> Self {
        Self {
            rows: rows.clamp(MIN_ROWS, MAX_ROWS),
            cols: cols.clamp(MIN_COLS, MAX_COLS),
            char_filter: None,
        }
    }

    /// Single-line filename entry (open / save-as prompts)
    pub fn filename() -> Self {
        Self {
            rows: MIN_ROWS,
            cols: MAX_FILENAME + 1,
            char_filter: Some(|b| b.is_ascii_graphic()),
        }
    }

    /// Longest row content in bytes
    pub fn max_row_len(&self) -> usize {
        self.cols - 1
    }

    /// Highest row index that may hold content
    pub fn max_last_row(&self) -> usize {
        self.rows - 2
    }

    /// Check if a byte may be typed into the document
    pub fn is_char_allowed(&self, ch: u8) -> bool {
        if !(ch == b' ' || ch.is_ascii_graphic()) {
            return false;
        }
        match self.char_filter {
            Some(filter) => filter(ch),
            None => true,
        }
    }
}
