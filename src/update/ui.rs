//! UI message handlers (status bar, transient messages, prompts)

use std::path::PathBuf;
use std::time::Duration;

use crate::commands::Cmd;
use crate::error::{EditError, EditResult};
use crate::messages::{Direction, ModalMsg, UiMsg};
use crate::model::{AppModel, FilePromptState, ModalId, ModalState};

use super::app::{load_cmd, open_prompt, run_pending, save_cmd};

/// Handle UI messages (status bar, prompts)
pub fn update_ui(model: &mut AppModel, msg: UiMsg) -> EditResult<Option<Cmd>> {
    match msg {
        UiMsg::SetStatus(message) => {
            model.ui.set_status(message);
            Ok(Some(Cmd::Redraw))
        }

        UiMsg::SetTransientMessage { text, duration_ms } => {
            model
                .ui
                .set_transient(text, Duration::from_millis(duration_ms));
            Ok(Some(Cmd::Redraw))
        }

        UiMsg::ClearTransientMessage => {
            model.ui.transient_message = None;
            Ok(Some(Cmd::Redraw))
        }

        UiMsg::Tick => {
            if model.ui.expire_transient() {
                Ok(Some(Cmd::Redraw))
            } else {
                Ok(None)
            }
        }

        UiMsg::Modal(modal_msg) => update_modal(model, modal_msg),
    }
}

/// Handle prompt-specific messages
fn update_modal(model: &mut AppModel, msg: ModalMsg) -> EditResult<Option<Cmd>> {
    match msg {
        ModalMsg::OpenFilePrompt => {
            open_prompt(model, ModalState::OpenFile(FilePromptState::new()));
            return Ok(Some(Cmd::Redraw));
        }
        ModalMsg::SaveAsPrompt => {
            open_prompt(model, ModalState::SaveAs(FilePromptState::new()));
            return Ok(Some(Cmd::Redraw));
        }
        ModalMsg::Close => {
            model.ui.close_modal();
            model.ui.status_message.clear();
            return Ok(Some(Cmd::Redraw));
        }
        ModalMsg::Confirm => return confirm_modal(model),
        _ => {}
    }

    let Some(active) = model.ui.active_modal.as_ref() else {
        return Ok(None);
    };

    // Discard confirmation takes y/n only
    if active.id() == ModalId::ConfirmDiscard {
        return match msg {
            ModalMsg::InsertChar('y' | 'Y') => confirm_modal(model),
            ModalMsg::InsertChar('n' | 'N') => {
                model.ui.close_modal();
                model.ui.set_status("Cancelled");
                Ok(Some(Cmd::Redraw))
            }
            _ => Ok(None),
        };
    }

    let Some(prompt) = model.ui.active_modal.as_mut().and_then(|m| m.prompt_mut()) else {
        return Ok(None);
    };
    let field = &mut prompt.field;
    match msg {
        ModalMsg::InsertChar(ch) => {
            let byte = u8::try_from(ch).map_err(|_| EditError::InvalidChar)?;
            field.insert_char(byte, true)?;
        }
        ModalMsg::DeleteBackward => field.delete_char(true)?,
        ModalMsg::DeleteForward => field.delete_char(false)?,
        ModalMsg::MoveCursor(Direction::Left) => field.move_left(),
        ModalMsg::MoveCursor(Direction::Right) => field.move_right(),
        ModalMsg::MoveCursor(_) => {}
        ModalMsg::LineStart => field.move_line_start(),
        ModalMsg::LineEnd => field.move_line_end(),
        ModalMsg::OpenFilePrompt
        | ModalMsg::SaveAsPrompt
        | ModalMsg::Close
        | ModalMsg::Confirm => {}
    }
    Ok(Some(Cmd::Redraw))
}

/// Accept the active prompt
fn confirm_modal(model: &mut AppModel) -> EditResult<Option<Cmd>> {
    let Some(active) = model.ui.active_modal.take() else {
        return Ok(None);
    };

    if active.prompt().is_some_and(|p| p.filename().is_empty()) {
        model.ui.active_modal = Some(active);
        model.ui.set_status("Filename needs to be specified!");
        return Ok(Some(Cmd::Redraw));
    }

    match active {
        ModalState::ConfirmDiscard(action) => {
            tracing::info!(?action, "discarding unsaved changes");
            Ok(run_pending(model, action))
        }
        ModalState::OpenFile(prompt) => {
            let path = PathBuf::from(prompt.filename());
            Ok(Some(load_cmd(model, path)))
        }
        ModalState::SaveAs(prompt) => {
            let path = PathBuf::from(prompt.filename());
            Ok(Some(save_cmd(model, path, false)))
        }
    }
}
