//! Fixed-capacity row buffer engine.
//!
//! Text lives in a pre-allocated arena of fixed-width rows. Every operation
//! validates against the capacity limits before touching any byte, so a
//! failed edit leaves the document exactly as it was.
//!
//! # Architecture
//!
//! - [`RowStore`]: the raw arena of row slots (byte copies only)
//! - [`Document`]: rows, cursor, viewport and the editing operations
//! - [`Viewport`]: visible window, scrolling and redraw tracking
//! - [`Mark`] / [`MarkRange`]: selection state machine
//! - [`Clipboard`]: bounded copy/cut/paste buffer
//! - [`DocConstraints`]: geometry and input filter of a document
//!
//! # Example
//!
//! ```
//! use tedit::editable::{Document, Cursor};
//!
//! let mut doc = Document::with_text("hello");
//! doc.cursor = Cursor::new(0, 5);
//! doc.insert_char(b'!', true).unwrap();
//!
//! assert_eq!(doc.text(), "hello!");
//! ```

mod clipboard;
mod constraints;
mod cursor;
mod document;
mod selection;
mod store;
mod viewport;

pub use clipboard::{Clipboard, DEFAULT_CAPACITY};
pub use constraints::{
    CharFilter, DocConstraints, EDITOR_COLS, EDITOR_ROWS, MAX_COLS, MAX_FILENAME, MAX_ROWS,
    MIN_COLS, MIN_ROWS,
};
pub use cursor::{Cursor, Position};
pub use document::{Document, LoadedLine, Row, TERMINATOR};
pub use selection::{Mark, MarkRange, MarkState};
pub use store::RowStore;
pub use viewport::{ScreenLine, Viewport, DEFAULT_HEIGHT};
