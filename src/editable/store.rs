//! Row store - a fixed arena of fixed-width row slots.
//!
//! The store is the only place that touches raw backing bytes. It is a
//! narrow byte-copy primitive: it knows nothing about row lengths,
//! terminators, cursors or dirtiness. Validation is the document's job.

use crate::error::{EditError, EditResult};

/// Backing storage for a document, allocated once and never resized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowStore {
    bytes: Vec<u8>,
    rows: usize,
    cols: usize,
}

impl RowStore {
    /// Allocate `rows` zeroed slots of `cols` bytes each
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            bytes: vec![0; rows * cols],
            rows,
            cols,
        }
    }

    /// Number of slots
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Width of every slot in bytes
    pub fn cols(&self) -> usize {
        self.cols
    }

    fn slot_range(&self, row: usize, len: usize) -> EditResult<std::ops::Range<usize>> {
        if row >= self.rows || len > self.cols {
            return Err(EditError::InvalidRange);
        }
        let start = row * self.cols;
        Ok(start..start + len)
    }

    /// Copy `len` bytes of slot `row` into `buf`
    pub fn read_row(&self, row: usize, buf: &mut [u8], len: usize) -> EditResult<()> {
        if buf.len() < len {
            return Err(EditError::InvalidRange);
        }
        let range = self.slot_range(row, len)?;
        buf[..len].copy_from_slice(&self.bytes[range]);
        Ok(())
    }

    /// Copy `len` bytes from `buf` into slot `row`
    pub fn write_row(&mut self, row: usize, buf: &[u8], len: usize) -> EditResult<()> {
        if buf.len() < len {
            return Err(EditError::InvalidRange);
        }
        let range = self.slot_range(row, len)?;
        self.bytes[range].copy_from_slice(&buf[..len]);
        Ok(())
    }

    /// Borrow a whole slot
    pub fn row_bytes(&self, row: usize) -> &[u8] {
        match self.slot_range(row, self.cols) {
            Ok(range) => &self.bytes[range],
            Err(_) => &[],
        }
    }

    /// Zero a whole slot
    pub fn clear_row(&mut self, row: usize) {
        if let Ok(range) = self.slot_range(row, self.cols) {
            self.bytes[range].fill(0);
        }
    }

    /// Zero every slot
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    /// Copy slot `from` over slot `to`
    pub fn copy_row(&mut self, from: usize, to: usize) {
        if from >= self.rows || to >= self.rows || from == to {
            return;
        }
        let src = from * self.cols;
        self.bytes.copy_within(src..src + self.cols, to * self.cols);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_read() {
        let mut store = RowStore::new(4, 8);
        store.write_row(2, b"abc\n", 4).unwrap();

        let mut buf = [0u8; 8];
        store.read_row(2, &mut buf, 4).unwrap();
        assert_eq!(&buf[..4], b"abc\n");
        assert_eq!(&store.row_bytes(2)[..4], b"abc\n");
    }

    #[test]
    fn test_out_of_range_slot_fails() {
        let mut store = RowStore::new(2, 8);
        let mut buf = [0u8; 8];
        assert_eq!(store.read_row(2, &mut buf, 1), Err(EditError::InvalidRange));
        assert_eq!(store.write_row(5, b"x", 1), Err(EditError::InvalidRange));
        assert!(store.row_bytes(9).is_empty());
    }

    #[test]
    fn test_short_buffer_fails() {
        let mut store = RowStore::new(2, 8);
        let mut buf = [0u8; 2];
        assert_eq!(store.read_row(0, &mut buf, 4), Err(EditError::InvalidRange));
        assert_eq!(store.write_row(0, b"ab", 3), Err(EditError::InvalidRange));
    }

    #[test]
    fn test_len_wider_than_slot_fails() {
        let mut store = RowStore::new(2, 4);
        assert_eq!(store.write_row(0, b"abcde", 5), Err(EditError::InvalidRange));
    }

    #[test]
    fn test_copy_and_clear_row() {
        let mut store = RowStore::new(3, 4);
        store.write_row(0, b"hi\n", 3).unwrap();
        store.copy_row(0, 2);
        assert_eq!(&store.row_bytes(2)[..3], b"hi\n");

        store.clear_row(0);
        assert_eq!(store.row_bytes(0), &[0, 0, 0, 0]);
    }
}
