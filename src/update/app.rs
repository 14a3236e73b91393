//! App message handlers (file operations, terminal events)

use std::path::PathBuf;

use crate::commands::Cmd;
use crate::file_io;
use crate::messages::AppMsg;
use crate::model::{AppModel, FilePromptState, ModalState, PendingAction};

use super::selection::clear_mark;

/// Handle app messages (file operations, terminal events)
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Resize(cols, rows) => {
            model.resize(cols, rows);
            Some(Cmd::Redraw)
        }

        AppMsg::SaveFile => match model.document.filename.clone() {
            Some(name) => Some(save_cmd(model, PathBuf::from(name), true)),
            None => {
                open_prompt(model, ModalState::SaveAs(FilePromptState::new()));
                model.ui.set_status("Filename needs to be specified!");
                Some(Cmd::Redraw)
            }
        },

        AppMsg::SaveFileAs => {
            open_prompt(model, ModalState::SaveAs(FilePromptState::new()));
            Some(Cmd::Redraw)
        }

        AppMsg::LoadFile(path) => Some(load_cmd(model, path)),

        AppMsg::OpenFile => guard_unsaved(model, PendingAction::OpenFile),
        AppMsg::NewFile => guard_unsaved(model, PendingAction::NewFile),
        AppMsg::CloseFile => guard_unsaved(model, PendingAction::CloseFile),
        AppMsg::Quit => guard_unsaved(model, PendingAction::Quit),

        AppMsg::SaveCompleted {
            path,
            revision,
            result,
        } => {
            model.ui.is_saving = false;
            match result {
                Ok(bytes) => {
                    model.document.filename = Some(path.display().to_string());
                    if !model.document.mark_saved(revision) {
                        tracing::debug!(revision, "document edited while saving");
                    }
                    model
                        .ui
                        .set_status(format!("Saved: {} ({} bytes)", path.display(), bytes));
                }
                Err(e) => {
                    tracing::warn!("Failed to save {}: {}", path.display(), e);
                    model.ui.set_status(format!("Error: {}", e));
                }
            }
            Some(Cmd::Redraw)
        }

        AppMsg::FileLoaded { path, result } => {
            model.ui.is_loading = false;
            match result {
                Ok(content) => {
                    clear_mark(model);
                    match file_io::load(&mut model.document, content.as_slice()) {
                        Ok(report) => {
                            model.document.filename = Some(path.display().to_string());
                            let status = report
                                .warning()
                                .unwrap_or_else(|| format!("Loaded: {}", path.display()));
                            model.ui.set_status(status);
                        }
                        Err(e) => {
                            model.ui.set_status(format!("Error: {}", e));
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!("Failed to load {}: {}", path.display(), e);
                    model.ui.set_status(format!("Error: {}", e));
                }
            }
            Some(Cmd::Redraw)
        }
    }
}

/// Ask the host to write the document to `path`
pub(super) fn save_cmd(model: &mut AppModel, path: PathBuf, overwrite: bool) -> Cmd {
    model.ui.is_saving = true;
    model.ui.set_status("Saving...");
    Cmd::SaveFile {
        content: file_io::to_bytes(&model.document),
        path,
        overwrite,
        revision: model.document.revision(),
    }
}

/// Ask the host to read `path` into the document
pub(super) fn load_cmd(model: &mut AppModel, path: PathBuf) -> Cmd {
    model.ui.is_loading = true;
    model.ui.set_status("Loading...");
    Cmd::LoadFile { path }
}

/// Show a prompt, dropping the mark
pub(super) fn open_prompt(model: &mut AppModel, state: ModalState) {
    clear_mark(model);
    model.ui.open_modal(state);
}

/// Run `action`, or ask first if it would lose unsaved changes
fn guard_unsaved(model: &mut AppModel, action: PendingAction) -> Option<Cmd> {
    if model.document.is_modified {
        open_prompt(model, ModalState::ConfirmDiscard(action));
        model.ui.set_status("File has changed! Save before close.");
        return Some(Cmd::Redraw);
    }
    run_pending(model, action)
}

/// Carry out an action that may discard the document
pub(super) fn run_pending(model: &mut AppModel, action: PendingAction) -> Option<Cmd> {
    match action {
        PendingAction::NewFile => {
            clear_mark(model);
            model.document.reset(false);
            model.ui.set_status("New file");
            Some(Cmd::Redraw)
        }
        PendingAction::CloseFile => {
            clear_mark(model);
            model.document.reset(false);
            model.ui.set_status("File closed");
            Some(Cmd::Redraw)
        }
        PendingAction::OpenFile => {
            open_prompt(model, ModalState::OpenFile(FilePromptState::new()));
            Some(Cmd::Redraw)
        }
        PendingAction::Quit => Some(Cmd::Quit),
    }
}
