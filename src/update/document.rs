//! Document update functions for text editing

use crate::commands::Cmd;
use crate::error::{EditError, EditResult};
use crate::messages::DocumentMsg;
use crate::model::AppModel;

use super::selection::clear_mark;

/// Handle document messages (text editing)
pub fn update_document(model: &mut AppModel, msg: DocumentMsg) -> EditResult<Option<Cmd>> {
    // Any edit drops the mark
    clear_mark(model);

    let insert_mode = model.insert_mode;
    let tab_size = model.tab_size();
    let doc = &mut model.document;
    let row_before = doc.cursor.row;
    let rows_before = doc.row_count();

    match msg {
        DocumentMsg::InsertChar(ch) => {
            let byte = u8::try_from(ch).map_err(|_| EditError::InvalidChar)?;
            doc.insert_char(byte, insert_mode)?;
        }
        DocumentMsg::InsertTab => doc.insert_tab(tab_size, insert_mode)?,
        DocumentMsg::DeleteBackward => doc.delete_char(true)?,
        DocumentMsg::DeleteForward => doc.delete_char(false)?,
        DocumentMsg::InsertNewline => doc.split_line()?,
    }

    // Joins and splits shift every row below the edit
    if doc.row_count() != rows_before {
        let first = row_before.min(doc.cursor.row);
        doc.mark_rows_dirty_from(first);
    }
    doc.ensure_cursor_visible();
    Ok(Some(Cmd::Redraw))
}
