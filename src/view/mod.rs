//! View module - terminal rendering
//!
//! Layout, top to bottom: a title line, the text area (one screen line per
//! visible row) and a status line that doubles as the prompt line. Only rows
//! flagged dirty are redrawn; everything else is left on screen.

pub mod helpers;

use std::io::Write;

use anyhow::Result;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::queue;
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{Clear, ClearType};

use tedit::editable::{Document, Mark};
use tedit::model::AppModel;

use crate::runtime::input::TEXT_TOP;
use helpers::{compose_status_line, display_char, fit_to_width};

pub struct Renderer {
    /// Next frame repaints every line
    full_redraw: bool,
    /// Text lines drawn by the previous frame
    drawn_lines: usize,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            full_redraw: true,
            drawn_lines: 0,
        }
    }

    /// Repaint everything on the next frame (after a resize)
    pub fn invalidate(&mut self) {
        self.full_redraw = true;
    }

    pub fn render<W: Write>(&mut self, out: &mut W, model: &mut AppModel) -> Result<()> {
        let (cols, rows) = model.window_size;
        let width = cols as usize;
        queue!(out, Hide)?;

        if self.full_redraw {
            queue!(out, Clear(ClearType::All))?;
            model.document.mark_all_visible_dirty();
        }

        self.render_title(out, model, width)?;
        self.render_text(out, &mut model.document, &model.mark, width)?;

        let status_row = rows.saturating_sub(1);
        let cursor = self.render_status(out, model, width, status_row)?;

        queue!(out, MoveTo(cursor.0, cursor.1), Show)?;
        self.full_redraw = false;
        Ok(())
    }

    fn render_title<W: Write>(&self, out: &mut W, model: &AppModel, width: usize) -> Result<()> {
        let title = format!("{:<width$}", fit_to_width(&model.title(), width));
        queue!(
            out,
            MoveTo(0, 0),
            SetAttribute(Attribute::Reverse),
            Print(title),
            SetAttribute(Attribute::Reset)
        )?;
        Ok(())
    }

    fn render_text<W: Write>(
        &mut self,
        out: &mut W,
        doc: &mut Document,
        mark: &Mark,
        width: usize,
    ) -> Result<()> {
        let mut drawn = Vec::new();
        let lines = doc.screen_lines();
        let line_count = lines.len();

        for line in lines.iter().filter(|l| l.dirty || self.full_redraw) {
            let y = TEXT_TOP + line.screen_row as u16;
            queue!(out, MoveTo(0, y))?;

            let mut selected = false;
            // The terminator cell shows a marked line break
            for col in 0..=line.content.len().min(width.saturating_sub(1)) {
                let in_mark = mark.contains(doc, line.row, col);
                if in_mark != selected {
                    let attr = if in_mark {
                        Attribute::Reverse
                    } else {
                        Attribute::NoReverse
                    };
                    queue!(out, SetAttribute(attr))?;
                    selected = in_mark;
                }
                let ch = line.content.get(col).copied().map_or(' ', display_char);
                if col < line.content.len() || in_mark {
                    queue!(out, Print(ch))?;
                }
            }
            if selected {
                queue!(out, SetAttribute(Attribute::NoReverse))?;
            }
            queue!(out, Clear(ClearType::UntilNewLine))?;
            drawn.push(line.row);
        }

        // Rows removed since the last frame leave blank lines behind
        if self.full_redraw || line_count < self.drawn_lines {
            for screen_row in line_count..doc.viewport.height {
                queue!(
                    out,
                    MoveTo(0, TEXT_TOP + screen_row as u16),
                    Clear(ClearType::UntilNewLine)
                )?;
            }
        }
        self.drawn_lines = line_count;

        for row in drawn {
            doc.clear_dirty(row);
        }
        Ok(())
    }

    /// Draw the status or prompt line, returning where the cursor belongs
    fn render_status<W: Write>(
        &self,
        out: &mut W,
        model: &AppModel,
        width: usize,
        status_row: u16,
    ) -> Result<(u16, u16)> {
        queue!(out, MoveTo(0, status_row), SetAttribute(Attribute::Reverse))?;

        let cursor = match &model.ui.active_modal {
            Some(modal) => {
                let label = modal.label();
                let (field, field_col) = match modal.prompt() {
                    Some(prompt) => (prompt.filename(), prompt.field.cursor.col),
                    None => (String::new(), 0),
                };
                let text = format!("{}{}", label, field);
                queue!(out, Print(format!("{:<width$}", fit_to_width(&text, width))))?;
                let col = (label.chars().count() + field_col).min(width.saturating_sub(1));
                (col as u16, status_row)
            }
            None => {
                let layout = model.ui.status_bar.layout(width);
                queue!(out, Print(compose_status_line(&layout, width)))?;
                let (screen_row, screen_col) = model.document.cursor_screen_position();
                (screen_col as u16, TEXT_TOP + screen_row as u16)
            }
        };

        queue!(out, SetAttribute(Attribute::Reset))?;
        Ok(cursor)
    }
}
