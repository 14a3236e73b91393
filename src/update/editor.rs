//! Editor update functions for cursor movement and viewport scrolling.

use crate::commands::Cmd;
use crate::editable::Document;
use crate::error::EditResult;
use crate::messages::{Direction, EditorMsg};
use crate::model::AppModel;

use super::selection::{clear_mark, extend_to_cursor, stop_marking};

fn move_cursor(doc: &mut Document, direction: Direction) {
    match direction {
        Direction::Up => {
            doc.move_up();
        }
        Direction::Down => {
            doc.move_down();
        }
        Direction::Left => doc.move_left(),
        Direction::Right => doc.move_right(),
    }
}

/// Run a cursor movement, redrawing the rows crossed while a mark is shown
fn with_mark_redraw(model: &mut AppModel, movement: impl FnOnce(&mut Document)) {
    let before = model.document.cursor.row;
    movement(&mut model.document);
    if model.mark.is_active() {
        let after = model.document.cursor.row;
        model.document.mark_rows_dirty_between(before, after);
    }
}

/// Handle editor messages (cursor movement, viewport scrolling)
pub fn update_editor(model: &mut AppModel, msg: EditorMsg) -> EditResult<Option<Cmd>> {
    match msg {
        EditorMsg::MoveCursor(direction) => {
            stop_marking(model);
            with_mark_redraw(model, |doc| move_cursor(doc, direction));
        }

        EditorMsg::MoveCursorWithSelection(direction) => {
            if !model.mark.is_marking() {
                clear_mark(model);
                let cursor = model.document.cursor.to_position();
                model.mark.start(cursor);
            }
            with_mark_redraw(model, |doc| move_cursor(doc, direction));
            extend_to_cursor(model);
        }

        EditorMsg::PageUp => {
            stop_marking(model);
            with_mark_redraw(model, |doc| {
                doc.page_up();
            });
        }

        EditorMsg::PageDown => {
            stop_marking(model);
            with_mark_redraw(model, |doc| {
                doc.page_down();
            });
        }

        EditorMsg::LineStart => {
            stop_marking(model);
            with_mark_redraw(model, Document::move_line_start);
        }

        EditorMsg::LineEnd => {
            stop_marking(model);
            with_mark_redraw(model, Document::move_line_end);
        }

        EditorMsg::Click {
            screen_row,
            screen_col,
        } => {
            with_mark_redraw(model, |doc| doc.click(screen_row, screen_col));
        }

        EditorMsg::ToggleOverwrite => {
            model.insert_mode = !model.insert_mode;
            let mode = if model.insert_mode {
                "Insert mode"
            } else {
                "Overwrite mode"
            };
            tracing::debug!(insert_mode = model.insert_mode, "typing mode toggled");
            model.ui.set_status(mode);
        }
    }
    Ok(Some(Cmd::Redraw))
}
