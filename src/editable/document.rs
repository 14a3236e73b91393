//! Document engine - row-level editing on top of the row store.
//!
//! Every operation either succeeds with all invariants holding afterwards,
//! or fails and leaves the document byte-identical to before:
//!
//! - `row.len <= cols - 1`, with the terminator stored at `row.len`
//! - `cursor.row <= last_row` and `cursor.col <= rows[cursor.row].len`
//! - `last_row <= rows - 2` (the final slot is never used for content)

use super::constraints::DocConstraints;
use super::cursor::{Cursor, Position};
use super::store::RowStore;
use super::viewport::Viewport;
use crate::error::{EditError, EditResult};

/// Line terminator stored one past the last content byte of every row
pub const TERMINATOR: u8 = b'\n';

/// Per-row bookkeeping. Content lives in the store slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Row {
    /// Slot in the row store
    pub slot: usize,
    /// Content bytes, terminator excluded
    pub len: usize,
    /// Needs redrawing
    pub dirty: bool,
}

/// Result of feeding one input line to [`Document::load_line`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadedLine {
    /// Rows the line occupies
    pub rows: usize,
    /// The line was longer than a row and continues on the next row(s)
    pub wrapped: bool,
}

/// A fixed-capacity, row-oriented text document.
///
/// Equality compares content, cursor, scroll and file state. Redraw flags
/// and the working buffers are ignored.
#[derive(Debug, Clone)]
pub struct Document {
    rows: Vec<Row>,
    store: RowStore,
    /// Capacity and input rules, fixed for the document's lifetime
    pub constraints: DocConstraints,
    /// Cursor position
    pub cursor: Cursor,
    /// Scroll offset and visible height
    pub viewport: Viewport,
    last_row: usize,
    last_col: usize,
    /// Rows written so far by `load_line`
    rows_loaded: usize,
    /// Whether the document has unsaved changes
    pub is_modified: bool,
    /// Bumped by every change to the content
    revision: u64,
    /// File the document was loaded from / will be saved to
    pub filename: Option<String>,
    // Working row buffers, `cols` bytes each
    work: Vec<u8>,
    spare: Vec<u8>,
}

impl Document {
    /// Create an empty document with the given constraints and visible height
    pub fn new(constraints: DocConstraints, viewport_height: usize) -> Self {
        let rows = (0..constraints.rows)
            .map(|slot| Row {
                slot,
                len: 0,
                dirty: true,
            })
            .collect();
        let mut doc = Self {
            rows,
            store: RowStore::new(constraints.rows, constraints.cols),
            cursor: Cursor::default(),
            viewport: Viewport::new(viewport_height),
            last_row: 0,
            last_col: 0,
            rows_loaded: 0,
            is_modified: false,
            revision: 0,
            filename: None,
            work: vec![0; constraints.cols],
            spare: vec![0; constraints.cols],
            constraints,
        };
        doc.reset(false);
        doc
    }

    /// Create an editor-sized document holding `text` (rows split at `\n`)
    pub fn with_text(text: &str) -> Self {
        let mut doc = Self::new(DocConstraints::editor(), 25);
        doc.load_text(text);
        doc
    }

    /// Replace the content with `text`, ignoring lines that do not fit
    pub fn load_text(&mut self, text: &str) {
        self.reset(true);
        let mut lines: Vec<&str> = text.split('\n').collect();
        if lines.len() > 1 && lines.last() == Some(&"") {
            lines.pop();
        }
        for line in lines {
            if self.load_line(line.trim_end_matches('\r').as_bytes()).is_err() {
                break;
            }
        }
        self.is_modified = false;
    }

    /// Clear all content, cursor, scroll and high-water marks
    pub fn reset(&mut self, keep_filename: bool) {
        self.store.clear();
        for row in &mut self.rows {
            row.len = 0;
            row.dirty = true;
        }
        // Every slot holds an empty, terminated row
        for slot in 0..self.store.rows() {
            let _ = self.store.write_row(slot, &[TERMINATOR], 1);
        }
        self.cursor = Cursor::default();
        self.viewport.offset = 0;
        self.last_row = 0;
        self.last_col = 0;
        self.rows_loaded = 0;
        self.is_modified = false;
        self.revision = self.revision.wrapping_add(1);
        if !keep_filename {
            self.filename = None;
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Index of the last row holding content
    pub fn last_row(&self) -> usize {
        self.last_row
    }

    /// Edit counter, changes whenever the content does
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Clear the modified flag if the content is still at `revision`.
    /// Returns false when the document changed after that revision.
    pub fn mark_saved(&mut self, revision: u64) -> bool {
        if self.revision != revision {
            return false;
        }
        self.is_modified = false;
        true
    }

    /// Longest row length ever reached
    pub fn last_col(&self) -> usize {
        self.last_col
    }

    /// Number of logical rows (`last_row + 1`)
    pub fn row_count(&self) -> usize {
        self.last_row + 1
    }

    /// Bookkeeping for a row slot
    pub fn row(&self, row: usize) -> Option<&Row> {
        self.rows.get(row)
    }

    pub(crate) fn row_mut(&mut self, row: usize) -> Option<&mut Row> {
        self.rows.get_mut(row)
    }

    /// Content length of a row (0 for rows past the end)
    pub fn row_len(&self, row: usize) -> usize {
        self.rows.get(row).map(|r| r.len).unwrap_or(0)
    }

    /// Row content without the terminator
    pub fn row_content(&self, row: usize) -> &[u8] {
        match self.rows.get(row) {
            Some(r) => &self.store.row_bytes(r.slot)[..r.len],
            None => &[],
        }
    }

    /// Row content followed by its terminator byte, as stored
    pub fn row_with_terminator(&self, row: usize) -> &[u8] {
        match self.rows.get(row) {
            Some(r) => &self.store.row_bytes(r.slot)[..r.len + 1],
            None => &[],
        }
    }

    /// Copy a row's stored bytes (content and terminator) into `buf`
    pub fn read_row(&self, row: usize, buf: &mut [u8]) -> EditResult<usize> {
        let r = self.rows.get(row).ok_or(EditError::InvalidRange)?;
        self.store.read_row(r.slot, buf, r.len + 1)?;
        Ok(r.len + 1)
    }

    /// Row content as a lossy string (ASCII in practice)
    pub fn line(&self, row: usize) -> String {
        String::from_utf8_lossy(self.row_content(row)).into_owned()
    }

    /// Whole document, rows joined with `\n`
    pub fn text(&self) -> String {
        (0..=self.last_row)
            .map(|r| self.line(r))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Check if `pos` addresses a cell of the document (terminator cell included)
    pub fn contains_position(&self, pos: Position) -> bool {
        pos.row <= self.last_row && pos.col <= self.row_len(pos.row)
    }

    /// Verify the structural invariants, describing the first violation
    pub fn check_invariants(&self) -> Result<(), String> {
        let max_len = self.constraints.max_row_len();
        if self.last_row > self.constraints.max_last_row() {
            return Err(format!("last_row {} beyond capacity", self.last_row));
        }
        if self.cursor.row > self.last_row {
            return Err(format!(
                "cursor row {} past last_row {}",
                self.cursor.row, self.last_row
            ));
        }
        if self.cursor.col > self.row_len(self.cursor.row) {
            return Err(format!(
                "cursor col {} past row length {}",
                self.cursor.col,
                self.row_len(self.cursor.row)
            ));
        }
        for (i, row) in self.rows.iter().enumerate() {
            if row.len > max_len {
                return Err(format!("row {} length {} > {}", i, row.len, max_len));
            }
            if self.store.row_bytes(row.slot)[row.len] != TERMINATOR {
                return Err(format!("row {} missing terminator", i));
            }
            if i > self.last_row && row.len != 0 {
                return Err(format!("row {} past last_row holds content", i));
            }
        }
        Ok(())
    }

    // =========================================================================
    // Row-level helpers
    // =========================================================================

    fn fetch(store: &RowStore, row: &Row, buf: &mut [u8]) -> EditResult<usize> {
        store.read_row(row.slot, buf, row.len)?;
        Ok(row.len)
    }

    fn commit(store: &mut RowStore, row: &mut Row, buf: &mut [u8], len: usize) -> EditResult<()> {
        buf[len] = TERMINATOR;
        buf[len + 1..].fill(0);
        store.write_row(row.slot, buf, buf.len())?;
        row.len = len;
        row.dirty = true;
        Ok(())
    }

    fn note_row_width(&mut self, row: usize) {
        let len = self.row_len(row);
        if self.last_col < len {
            self.last_col = len;
        }
        if self.last_row < row {
            self.last_row = row;
        }
    }

    fn touch(&mut self) {
        self.is_modified = true;
        self.revision = self.revision.wrapping_add(1);
    }

    fn clear_slot(&mut self, row: usize) -> EditResult<()> {
        self.store.clear_row(self.rows[row].slot);
        Self::commit(&mut self.store, &mut self.rows[row], &mut self.work, 0)
    }

    fn clamp_cursor(&mut self) {
        if self.cursor.row > self.last_row {
            self.cursor.row = self.last_row;
        }
        let len = self.row_len(self.cursor.row);
        if self.cursor.col > len {
            self.cursor.col = len;
        }
    }

    // =========================================================================
    // Character editing
    // =========================================================================

    /// Type `ch` at the cursor, shifting the rest of the row right in insert mode
    pub fn insert_char(&mut self, ch: u8, insert_mode: bool) -> EditResult<()> {
        if !self.constraints.is_char_allowed(ch) {
            return Err(EditError::InvalidChar);
        }
        let (row, col) = (self.cursor.row, self.cursor.col);
        let len = self.row_len(row);
        let max_len = self.constraints.max_row_len();
        if col > len {
            return Err(EditError::InvalidRange);
        }
        if insert_mode && len + 1 > max_len {
            return Err(EditError::RowFull);
        }
        if !insert_mode && col >= max_len {
            return Err(EditError::RowFull);
        }

        Self::fetch(&self.store, &self.rows[row], &mut self.work)?;
        let new_len = if insert_mode {
            self.work.copy_within(col..len, col + 1);
            len + 1
        } else {
            len.max(col + 1)
        };
        self.work[col] = ch;
        Self::commit(&mut self.store, &mut self.rows[row], &mut self.work, new_len)?;

        self.cursor.col += 1;
        self.cursor.clear_desired_col();
        self.note_row_width(row);
        self.touch();
        Ok(())
    }

    /// Insert spaces up to the next tab stop (insert mode only)
    pub fn insert_tab(&mut self, tab_size: usize, insert_mode: bool) -> EditResult<()> {
        if !insert_mode {
            return Ok(());
        }
        let tab_size = tab_size.max(1);
        let spaces = tab_size - self.cursor.col % tab_size;
        if self.row_len(self.cursor.row) + spaces > self.constraints.max_row_len() {
            return Err(EditError::RowFull);
        }
        for _ in 0..spaces {
            self.insert_char(b' ', true)?;
        }
        Ok(())
    }

    /// Delete the character before (backspace) or under (forward) the cursor.
    ///
    /// At a row boundary the two rows are joined; the join fails with
    /// `RowOverflow` if the result would not fit in one row.
    pub fn delete_char(&mut self, backspace: bool) -> EditResult<()> {
        let (row, col) = (self.cursor.row, self.cursor.col);
        let len = self.row_len(row);
        if col > len {
            return Err(EditError::InvalidRange);
        }

        if backspace {
            if col > 0 {
                Self::fetch(&self.store, &self.rows[row], &mut self.work)?;
                self.work.copy_within(col..len, col - 1);
                Self::commit(&mut self.store, &mut self.rows[row], &mut self.work, len - 1)?;
                self.cursor.col -= 1;
            } else if row > 0 {
                let prev_len = self.row_len(row - 1);
                self.join_rows(row - 1, row)?;
                self.delete_row(row)?;
                self.cursor.row = row - 1;
                self.cursor.col = prev_len;
            } else {
                return Ok(());
            }
        } else if col < len {
            Self::fetch(&self.store, &self.rows[row], &mut self.work)?;
            self.work.copy_within(col + 1..len, col);
            Self::commit(&mut self.store, &mut self.rows[row], &mut self.work, len - 1)?;
        } else if row < self.last_row {
            self.join_rows(row, row + 1)?;
            self.delete_row(row + 1)?;
        } else {
            return Ok(());
        }

        self.cursor.clear_desired_col();
        self.touch();
        Ok(())
    }

    /// Append the content of row `src` onto row `dst`
    fn join_rows(&mut self, dst: usize, src: usize) -> EditResult<()> {
        let dst_len = self.row_len(dst);
        let src_len = self.row_len(src);
        if dst_len + src_len > self.constraints.max_row_len() {
            return Err(EditError::RowOverflow);
        }
        Self::fetch(&self.store, &self.rows[src], &mut self.spare)?;
        Self::fetch(&self.store, &self.rows[dst], &mut self.work)?;
        self.work[dst_len..dst_len + src_len].copy_from_slice(&self.spare[..src_len]);
        Self::commit(
            &mut self.store,
            &mut self.rows[dst],
            &mut self.work,
            dst_len + src_len,
        )?;
        self.note_row_width(dst);
        Ok(())
    }

    // =========================================================================
    // Row editing
    // =========================================================================

    /// Split the cursor row at the cursor (Enter key)
    pub fn split_line(&mut self) -> EditResult<()> {
        if self.last_row + 1 > self.constraints.max_last_row() {
            return Err(EditError::DocumentFull);
        }
        let (row, col) = (self.cursor.row, self.cursor.col);
        let len = self.row_len(row);
        if col > len {
            return Err(EditError::InvalidRange);
        }

        self.insert_row(row + 1)?;

        Self::fetch(&self.store, &self.rows[row], &mut self.work)?;
        let tail = len - col;
        self.spare[..tail].copy_from_slice(&self.work[col..len]);
        Self::commit(&mut self.store, &mut self.rows[row + 1], &mut self.spare, tail)?;
        Self::commit(&mut self.store, &mut self.rows[row], &mut self.work, col)?;

        self.cursor = Cursor::new(row + 1, 0);
        self.touch();
        Ok(())
    }

    /// Insert an empty row at `at`, shifting the rows below down one slot
    pub fn insert_row(&mut self, at: usize) -> EditResult<()> {
        if at > self.last_row + 1 {
            return Err(EditError::InvalidRange);
        }
        if self.last_row + 1 > self.constraints.max_last_row() {
            return Err(EditError::DocumentFull);
        }

        for r in (at..=self.last_row).rev() {
            self.store.copy_row(self.rows[r].slot, self.rows[r + 1].slot);
            self.rows[r + 1].len = self.rows[r].len;
            self.rows[r + 1].dirty = true;
        }
        self.clear_slot(at)?;

        self.last_row += 1;
        self.touch();
        Ok(())
    }

    /// Remove row `at`, shifting the rows below up one slot
    pub fn delete_row(&mut self, at: usize) -> EditResult<()> {
        if at > self.last_row {
            return Err(EditError::InvalidRange);
        }

        for r in at..self.last_row {
            self.store.copy_row(self.rows[r + 1].slot, self.rows[r].slot);
            self.rows[r].len = self.rows[r + 1].len;
            self.rows[r].dirty = true;
        }
        self.clear_slot(self.last_row)?;

        if self.last_row > 0 {
            self.last_row -= 1;
        }
        self.clamp_cursor();
        self.touch();
        Ok(())
    }

    /// Append `text` (no terminator) to the end of `row`
    pub fn append_string(&mut self, row: usize, text: &[u8]) -> EditResult<()> {
        if row > self.last_row {
            return Err(EditError::InvalidRange);
        }
        if text.contains(&TERMINATOR) {
            return Err(EditError::InvalidChar);
        }
        if text.is_empty() {
            return Ok(());
        }
        let len = self.row_len(row);
        if len + text.len() > self.constraints.max_row_len() {
            return Err(EditError::RowOverflow);
        }

        Self::fetch(&self.store, &self.rows[row], &mut self.work)?;
        self.work[len..len + text.len()].copy_from_slice(text);
        Self::commit(
            &mut self.store,
            &mut self.rows[row],
            &mut self.work,
            len + text.len(),
        )?;
        self.note_row_width(row);
        self.touch();
        Ok(())
    }

    /// Delete the inclusive cell range `start..=end` in one step.
    ///
    /// `end.col == len` names the terminator of `end.row`, which joins the
    /// following row. Same result as one forward delete at `start` per byte.
    pub fn delete_range(&mut self, start: Position, end: Position) -> EditResult<()> {
        let after = self.position_after(start, end)?;
        let head = start.col;
        let tail = self.row_len(after.row) - after.col;
        if head + tail > self.constraints.max_row_len() {
            return Err(EditError::RowOverflow);
        }

        Self::fetch(&self.store, &self.rows[after.row], &mut self.spare)?;
        self.spare.copy_within(after.col..after.col + tail, 0);
        for _ in start.row..after.row {
            self.delete_row(start.row + 1)?;
        }
        Self::fetch(&self.store, &self.rows[start.row], &mut self.work)?;
        self.work[head..head + tail].copy_from_slice(&self.spare[..tail]);
        Self::commit(
            &mut self.store,
            &mut self.rows[start.row],
            &mut self.work,
            head + tail,
        )?;

        self.cursor = Cursor::at_position(start);
        self.touch();
        Ok(())
    }

    /// Validate an inclusive range and return the first cell after it
    fn position_after(&self, start: Position, end: Position) -> EditResult<Position> {
        if start > end || !self.contains_position(start) || !self.contains_position(end) {
            return Err(EditError::InvalidRange);
        }
        if end.col < self.row_len(end.row) {
            Ok(Position::new(end.row, end.col + 1))
        } else if end.row < self.last_row {
            Ok(Position::new(end.row + 1, 0))
        } else {
            // terminator of the final row
            Err(EditError::InvalidRange)
        }
    }

    /// Number of bytes in the inclusive range, terminators counted
    pub fn range_len(&self, start: Position, end: Position) -> EditResult<usize> {
        self.position_after(start, end)?;
        if start.row == end.row {
            return Ok(end.col - start.col + 1);
        }
        let first = self.row_len(start.row) + 1 - start.col;
        let middle: usize = (start.row + 1..end.row).map(|r| self.row_len(r) + 1).sum();
        Ok(first + middle + end.col + 1)
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Store one input line (no terminator) as the next row.
    ///
    /// Lines longer than a row are wrapped: each full piece keeps one byte
    /// short of the row limit and the rest continues on the next row. The
    /// whole line is rejected with `DocumentFull` if the rows run out.
    pub fn load_line(&mut self, line: &[u8]) -> EditResult<LoadedLine> {
        let max_len = self.constraints.max_row_len();
        let piece = max_len.saturating_sub(1).max(1);

        let mut needed = 1;
        let mut remaining = line.len();
        while remaining > max_len {
            remaining -= piece;
            needed += 1;
        }
        if self.rows_loaded + needed > self.constraints.max_last_row() + 1 {
            return Err(EditError::DocumentFull);
        }

        let mut rest = line;
        loop {
            let take = if rest.len() > max_len { piece } else { rest.len() };
            let row = self.rows_loaded;
            self.work[..take].copy_from_slice(&rest[..take]);
            Self::commit(&mut self.store, &mut self.rows[row], &mut self.work, take)?;
            self.note_row_width(row);
            self.last_row = row;
            self.rows_loaded += 1;
            rest = &rest[take..];
            if rest.is_empty() {
                break;
            }
        }

        self.revision = self.revision.wrapping_add(1);
        let wrapped = needed > 1;
        if wrapped {
            self.is_modified = true;
        }
        Ok(LoadedLine {
            rows: needed,
            wrapped,
        })
    }
}

impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        let layout = |doc: &Document| -> Vec<(usize, usize)> {
            doc.rows.iter().map(|r| (r.slot, r.len)).collect()
        };
        layout(self) == layout(other)
            && self.store == other.store
            && self.constraints.rows == other.constraints.rows
            && self.constraints.cols == other.constraints.cols
            && self.cursor == other.cursor
            && self.viewport == other.viewport
            && self.last_row == other.last_row
            && self.last_col == other.last_col
            && self.rows_loaded == other.rows_loaded
            && self.is_modified == other.is_modified
            && self.revision == other.revision
            && self.filename == other.filename
    }
}

impl Eq for Document {}
