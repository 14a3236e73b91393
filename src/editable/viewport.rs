//! Viewport and cursor navigation.
//!
//! The viewport is a vertical window of `height` rows starting at `offset`.
//! There is no horizontal scrolling: rows never exceed the screen width.

use super::cursor::Position;
use super::document::Document;

/// Default number of text rows on screen
pub const DEFAULT_HEIGHT: usize = 28;

/// Visible window over the document rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// First visible row
    pub offset: usize,
    /// Number of visible rows (at least 1)
    pub height: usize,
}

impl Viewport {
    pub fn new(height: usize) -> Self {
        Self {
            offset: 0,
            height: height.max(1),
        }
    }

    /// Last visible row index
    pub fn bottom(&self) -> usize {
        self.offset + self.height - 1
    }

    pub fn is_row_visible(&self, row: usize) -> bool {
        row >= self.offset && row <= self.bottom()
    }

    /// Rows moved by one page
    pub fn page_step(&self) -> usize {
        self.height.saturating_sub(1).max(1)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_HEIGHT)
    }
}

/// One screen line as seen by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLine<'a> {
    /// Line on screen, 0 at the top of the text area
    pub screen_row: usize,
    /// Document row shown on this line
    pub row: usize,
    /// Line needs redrawing
    pub dirty: bool,
    /// Row content, empty past the last row
    pub content: &'a [u8],
}

impl Document {
    // =========================================================================
    // Vertical movement (may scroll)
    // =========================================================================

    /// Move up one row. Returns true if the view scrolled.
    pub fn move_up(&mut self) -> bool {
        let target = self.cursor.row.saturating_sub(1);
        self.move_to_row(target);
        self.ensure_cursor_visible()
    }

    /// Move down one row. Returns true if the view scrolled.
    pub fn move_down(&mut self) -> bool {
        let target = self.cursor.row + 1;
        self.move_to_row(target);
        self.ensure_cursor_visible()
    }

    /// Move up one page. The view shifts a page only if the cursor left it.
    pub fn page_up(&mut self) -> bool {
        let step = self.viewport.page_step();
        let target = self.cursor.row.saturating_sub(step);
        self.move_to_row(target);
        if self.cursor.row >= self.viewport.offset {
            return false;
        }
        let preferred = self.viewport.offset.saturating_sub(step);
        self.scroll_towards(preferred)
    }

    /// Move down one page. The view shifts a page only if the cursor left it.
    pub fn page_down(&mut self) -> bool {
        let step = self.viewport.page_step();
        let target = self.cursor.row.saturating_add(step);
        self.move_to_row(target);
        if self.cursor.row <= self.viewport.bottom() {
            return false;
        }
        let preferred = self.viewport.offset + step;
        self.scroll_towards(preferred)
    }

    fn move_to_row(&mut self, target: usize) {
        self.cursor.set_desired_col();
        self.cursor.row = target.min(self.last_row());
        self.cursor.col = self.cursor.effective_col().min(self.row_len(self.cursor.row));
    }

    // =========================================================================
    // Horizontal movement (never scrolls)
    // =========================================================================

    pub fn move_left(&mut self) {
        self.cursor.col = self.cursor.col.saturating_sub(1);
        self.cursor.clear_desired_col();
    }

    pub fn move_right(&mut self) {
        if self.cursor.col < self.row_len(self.cursor.row) {
            self.cursor.col += 1;
        }
        self.cursor.clear_desired_col();
    }

    pub fn move_line_start(&mut self) {
        self.cursor.col = 0;
        self.cursor.clear_desired_col();
    }

    pub fn move_line_end(&mut self) {
        self.cursor.col = self.row_len(self.cursor.row);
        self.cursor.clear_desired_col();
    }

    /// Place the cursor at a screen cell, clamped to the document
    pub fn click(&mut self, screen_row: usize, screen_col: usize) {
        let row = self.viewport.offset + screen_row.min(self.viewport.height - 1);
        self.set_cursor(Position::new(row, screen_col));
    }

    /// Move the cursor to `pos`, clamped to the document, and scroll to it
    pub fn set_cursor(&mut self, pos: Position) {
        self.cursor.row = pos.row.min(self.last_row());
        self.cursor.col = pos.col.min(self.row_len(self.cursor.row));
        self.cursor.clear_desired_col();
        self.ensure_cursor_visible();
    }

    // =========================================================================
    // Scrolling
    // =========================================================================

    /// Scroll the minimum needed to show the cursor. Returns true if scrolled.
    pub fn ensure_cursor_visible(&mut self) -> bool {
        self.scroll_towards(self.viewport.offset)
    }

    /// Move the offset to `preferred`, clamped so the cursor stays visible
    fn scroll_towards(&mut self, preferred: usize) -> bool {
        let row = self.cursor.row;
        let lowest = row.saturating_sub(self.viewport.height - 1);
        let offset = preferred.clamp(lowest, row).min(self.last_row());
        if offset == self.viewport.offset {
            return false;
        }
        self.viewport.offset = offset;
        self.mark_all_visible_dirty();
        true
    }

    /// Change the visible height (terminal resize)
    pub fn set_viewport_height(&mut self, height: usize) {
        self.viewport.height = height.max(1);
        self.ensure_cursor_visible();
        self.mark_all_visible_dirty();
    }

    // =========================================================================
    // Redraw tracking
    // =========================================================================

    pub fn is_row_visible(&self, row: usize) -> bool {
        self.viewport.is_row_visible(row)
    }

    pub fn mark_row_dirty(&mut self, row: usize) {
        if let Some(r) = self.row_mut(row) {
            r.dirty = true;
        }
    }

    /// Mark `row` through the bottom of the view dirty (rows shifted)
    pub fn mark_rows_dirty_from(&mut self, row: usize) {
        let start = row.max(self.viewport.offset);
        for r in start..=self.viewport.bottom() {
            self.mark_row_dirty(r);
        }
    }

    /// Mark every row between two rows dirty, in either order
    pub fn mark_rows_dirty_between(&mut self, a: usize, b: usize) {
        for r in a.min(b)..=a.max(b) {
            self.mark_row_dirty(r);
        }
    }

    pub fn mark_all_visible_dirty(&mut self) {
        self.mark_rows_dirty_from(self.viewport.offset);
    }

    /// Renderer only: the row has been drawn
    pub fn clear_dirty(&mut self, row: usize) {
        if let Some(r) = self.row_mut(row) {
            r.dirty = false;
        }
    }

    /// Visible lines from top to bottom
    pub fn screen_lines(&self) -> Vec<ScreenLine<'_>> {
        (self.viewport.offset..=self.viewport.bottom())
            .filter_map(|row| {
                self.row(row).map(|r| ScreenLine {
                    screen_row: row - self.viewport.offset,
                    row,
                    dirty: r.dirty,
                    content: self.row_content(row),
                })
            })
            .collect()
    }

    /// Cursor as (screen row, screen column) within the text area
    pub fn cursor_screen_position(&self) -> (usize, usize) {
        (
            self.cursor.row.saturating_sub(self.viewport.offset),
            self.cursor.col,
        )
    }
}
