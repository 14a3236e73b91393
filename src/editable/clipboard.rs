//! Internal clipboard: a bounded byte buffer filled from the mark.

use super::document::{Document, TERMINATOR};
use super::selection::{Mark, MarkRange, MarkState};
use crate::error::{EditError, EditResult};

/// Default clipboard size in bytes
pub const DEFAULT_CAPACITY: usize = 4096;

/// Copied text with `\n` between rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clipboard {
    bytes: Vec<u8>,
    capacity: usize,
}

impl Default for Clipboard {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl Clipboard {
    pub fn new(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn contents(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    fn fixed_range(doc: &Document, mark: &Mark) -> EditResult<MarkRange> {
        if mark.state() != MarkState::Marked {
            return Err(EditError::NoSelection);
        }
        mark.range(doc).ok_or(EditError::NoSelection)
    }

    /// Bytes of the range, terminators included, without touching the buffer
    fn capture(&self, doc: &Document, range: &MarkRange) -> EditResult<Vec<u8>> {
        let len = doc.range_len(range.min, range.max)?;
        if len > self.capacity {
            return Err(EditError::ClipboardOverflow);
        }

        let mut out = Vec::with_capacity(len);
        let (min, max) = (range.min, range.max);
        if min.row == max.row {
            out.extend_from_slice(&doc.row_with_terminator(min.row)[min.col..=max.col]);
        } else {
            out.extend_from_slice(&doc.row_with_terminator(min.row)[min.col..]);
            for row in min.row + 1..max.row {
                out.extend_from_slice(doc.row_with_terminator(row));
            }
            out.extend_from_slice(&doc.row_with_terminator(max.row)[..=max.col]);
        }
        Ok(out)
    }

    /// Copy the fixed selection. Returns the number of bytes copied.
    pub fn copy(&mut self, doc: &Document, mark: &Mark) -> EditResult<usize> {
        let range = Self::fixed_range(doc, mark)?;
        self.bytes = self.capture(doc, &range)?;
        Ok(self.bytes.len())
    }

    /// Copy the fixed selection and delete it from the document.
    ///
    /// Fails without changes if the rows around the selection cannot be
    /// joined into one row.
    pub fn cut(&mut self, doc: &mut Document, mark: &mut Mark) -> EditResult<usize> {
        let range = Self::fixed_range(doc, mark)?;
        let captured = self.capture(doc, &range)?;
        doc.delete_range(range.min, range.max)?;
        self.bytes = captured;
        mark.clear();
        Ok(self.bytes.len())
    }

    /// Type the clipboard into the document at the cursor.
    ///
    /// Best effort: stops at the first byte that does not fit and returns
    /// that error, keeping everything pasted before it.
    pub fn paste(&self, doc: &mut Document, mark: &mut Mark) -> EditResult<usize> {
        mark.clear();
        for (pasted, &byte) in self.bytes.iter().enumerate() {
            let result = if byte == TERMINATOR {
                doc.split_line()
            } else {
                doc.insert_char(byte, true)
            };
            if let Err(err) = result {
                tracing::warn!(pasted, total = self.bytes.len(), %err, "paste stopped early");
                return Err(err);
            }
        }
        Ok(self.bytes.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editable::{Cursor, DocConstraints, Position};

    fn marked(start: Position, end: Position) -> Mark {
        let mut mark = Mark::new();
        mark.start(start);
        mark.extend(end);
        mark.stop();
        mark
    }

    #[test]
    fn test_copy_requires_fixed_mark() {
        let doc = Document::with_text("abc");
        let mut clipboard = Clipboard::default();
        let mut mark = Mark::new();
        assert_eq!(clipboard.copy(&doc, &mark), Err(EditError::NoSelection));

        mark.start(Position::new(0, 0));
        mark.extend(Position::new(0, 2));
        assert_eq!(clipboard.copy(&doc, &mark), Err(EditError::NoSelection));
    }

    #[test]
    fn test_copy_single_row() {
        let doc = Document::with_text("hello world");
        let mut clipboard = Clipboard::default();
        let mark = marked(Position::new(0, 6), Position::new(0, 11));
        assert_eq!(clipboard.copy(&doc, &mark), Ok(5));
        assert_eq!(clipboard.contents(), b"world");
    }

    #[test]
    fn test_copy_multi_row_includes_terminators() {
        let doc = Document::with_text("hello\nbig\nworld");
        let mut clipboard = Clipboard::default();
        let mark = marked(Position::new(0, 3), Position::new(2, 2));
        clipboard.copy(&doc, &mark).unwrap();
        assert_eq!(clipboard.contents(), b"lo\nbig\nwo");
    }

    #[test]
    fn test_copy_overflow_keeps_old_contents() {
        let doc = Document::with_text("abcdefgh");
        let mut clipboard = Clipboard::new(4);
        clipboard
            .copy(&doc, &marked(Position::new(0, 0), Position::new(0, 2)))
            .unwrap();
        assert_eq!(
            clipboard.copy(&doc, &marked(Position::new(0, 0), Position::new(0, 6))),
            Err(EditError::ClipboardOverflow)
        );
        assert_eq!(clipboard.contents(), b"ab");
    }

    #[test]
    fn test_cut_deletes_and_moves_cursor() {
        let mut doc = Document::with_text("hello\nbig\nworld");
        doc.cursor = Cursor::new(2, 2);
        let mut clipboard = Clipboard::default();
        let mut mark = marked(Position::new(0, 3), Position::new(2, 2));

        clipboard.cut(&mut doc, &mut mark).unwrap();
        assert_eq!(doc.text(), "helrld");
        assert_eq!(doc.cursor, Cursor::new(0, 3));
        assert_eq!(mark.state(), MarkState::Unmarked);
        assert_eq!(clipboard.contents(), b"lo\nbig\nwo");
    }

    #[test]
    fn test_cut_overflow_changes_nothing() {
        let mut doc = Document::new(DocConstraints::with_geometry(8, 6), 4);
        doc.load_text("abcd\nx\nefgh");
        let mut clipboard = Clipboard::default();
        let mut mark = marked(Position::new(0, 3), Position::new(2, 0));

        assert_eq!(
            clipboard.cut(&mut doc, &mut mark),
            Err(EditError::RowOverflow)
        );
        assert_eq!(doc.text(), "abcd\nx\nefgh");
        assert!(clipboard.is_empty());
        assert_eq!(mark.state(), MarkState::Marked);
    }

    #[test]
    fn test_copy_paste_round_trip() {
        let mut doc = Document::with_text("one\ntwo\nthree");
        let mut clipboard = Clipboard::default();
        let mut mark = marked(Position::new(0, 1), Position::new(2, 2));
        clipboard.copy(&doc, &mark).unwrap();

        doc.cursor = Cursor::new(2, 5);
        clipboard.paste(&mut doc, &mut mark).unwrap();
        assert_eq!(doc.text(), "one\ntwo\nthreene\ntwo\nth");
        assert_eq!(doc.cursor, Cursor::new(4, 2));
    }

    #[test]
    fn test_paste_stops_at_first_failure() {
        let mut doc = Document::new(DocConstraints::with_geometry(8, 6), 4);
        doc.load_text("abc");
        let mut clipboard = Clipboard::default();
        let mut mark = marked(Position::new(0, 0), Position::new(0, 3));
        clipboard.copy(&doc, &mark).unwrap();

        doc.cursor = Cursor::new(0, 3);
        assert_eq!(
            clipboard.paste(&mut doc, &mut mark),
            Err(EditError::RowFull)
        );
        assert_eq!(doc.line(0), "abcab");
    }
}
