//! Mark and clipboard update functions

use crate::commands::Cmd;
use crate::error::EditResult;
use crate::messages::SelectionMsg;
use crate::model::AppModel;

/// Drop the mark, redrawing the rows it highlighted
pub(super) fn clear_mark(model: &mut AppModel) {
    if let Some(range) = model.mark.range(&model.document) {
        model
            .document
            .mark_rows_dirty_between(range.min.row, range.max.row);
    }
    model.mark.clear();
}

/// Fix a mark that is still following the cursor
pub(super) fn stop_marking(model: &mut AppModel) {
    if model.mark.is_marking() {
        model.mark.stop();
    }
}

/// Move the mark end to the cursor, redrawing the rows in between
pub(super) fn extend_to_cursor(model: &mut AppModel) {
    let before = model.mark.end_point().row;
    let cursor = model.document.cursor.to_position();
    model.mark.extend(cursor);
    model.document.mark_rows_dirty_between(before, cursor.row);
}

/// Handle mark and clipboard messages
pub fn update_selection(model: &mut AppModel, msg: SelectionMsg) -> EditResult<Option<Cmd>> {
    match msg {
        SelectionMsg::StartMark => {
            clear_mark(model);
            let cursor = model.document.cursor.to_position();
            model.mark.start(cursor);
            model.document.mark_row_dirty(cursor.row);
        }

        SelectionMsg::ExtendMark => {
            if model.mark.is_marking() {
                extend_to_cursor(model);
            }
        }

        SelectionMsg::StopMark => {
            stop_marking(model);
        }

        SelectionMsg::ClearMark => {
            clear_mark(model);
        }

        SelectionMsg::Copy => {
            stop_marking(model);
            let copied = model.clipboard.copy(&model.document, &model.mark)?;
            tracing::debug!(copied, "copied selection");
            model.ui.set_status(format!("Copied {} bytes", copied));
        }

        SelectionMsg::Cut => {
            stop_marking(model);
            let first_row = model
                .mark
                .range(&model.document)
                .map(|range| range.min.row);
            let cut = model.clipboard.cut(&mut model.document, &mut model.mark)?;
            tracing::debug!(cut, "cut selection");
            if let Some(row) = first_row {
                model.document.mark_rows_dirty_from(row);
            }
            model.document.ensure_cursor_visible();
            model.ui.set_status(format!("Cut {} bytes", cut));
        }

        SelectionMsg::Paste => {
            clear_mark(model);
            let first_row = model.document.cursor.row;
            let result = model
                .clipboard
                .paste(&mut model.document, &mut model.mark);
            // rows after the cursor shift even when the paste stops early
            model.document.mark_rows_dirty_from(first_row);
            model.document.ensure_cursor_visible();
            result?;
        }
    }
    Ok(Some(Cmd::Redraw))
}
