//! Prompt and file command tests - save as, open, discard confirmation

mod common;

use std::path::PathBuf;

use common::{doc_text, test_model, type_text};
use tedit::commands::Cmd;
use tedit::messages::{AppMsg, ModalMsg, Msg, UiMsg};
use tedit::model::{AppModel, ModalId};
use tedit::update::update;

fn type_in_prompt(model: &mut AppModel, text: &str) {
    for ch in text.chars() {
        update(model, Msg::modal(ModalMsg::InsertChar(ch)));
    }
}

fn active_modal(model: &AppModel) -> Option<ModalId> {
    model.ui.active_modal.as_ref().map(|m| m.id())
}

fn prompt_text(model: &AppModel) -> String {
    model
        .ui
        .active_modal
        .as_ref()
        .and_then(|m| m.prompt())
        .map(|p| p.filename())
        .unwrap_or_default()
}

// ========================================================================
// Save
// ========================================================================

#[test]
fn test_save_without_name_asks_for_one() {
    let mut model = test_model("hello", 0, 0);
    let cmd = update(&mut model, Msg::App(AppMsg::SaveFile));

    assert_eq!(cmd, Some(Cmd::Redraw));
    assert_eq!(active_modal(&model), Some(ModalId::SaveAs));
    assert_eq!(model.ui.status_message, "Filename needs to be specified!");
}

#[test]
fn test_save_with_name_overwrites() {
    let mut model = test_model("hello", 0, 0);
    model.document.filename = Some("notes.txt".to_string());

    let cmd = update(&mut model, Msg::App(AppMsg::SaveFile));

    assert_eq!(
        cmd,
        Some(Cmd::SaveFile {
            path: PathBuf::from("notes.txt"),
            content: b"hello\n".to_vec(),
            overwrite: true,
            revision: model.document.revision(),
        })
    );
    assert!(model.ui.is_saving);
}

#[test]
fn test_save_as_prompt_emits_save_command() {
    let mut model = test_model("one\ntwo", 0, 0);
    update(&mut model, Msg::App(AppMsg::SaveFileAs));
    type_in_prompt(&mut model, "out.txt");
    assert_eq!(prompt_text(&model), "out.txt");

    let cmd = update(&mut model, Msg::modal(ModalMsg::Confirm));

    assert_eq!(
        cmd,
        Some(Cmd::SaveFile {
            path: PathBuf::from("out.txt"),
            content: b"one\ntwo\n".to_vec(),
            overwrite: false,
            revision: model.document.revision(),
        })
    );
    assert_eq!(active_modal(&model), None);
    assert_eq!(model.ui.status_message, "Saving...");
}

#[test]
fn test_confirm_empty_name_keeps_prompt() {
    let mut model = test_model("hello", 0, 0);
    update(&mut model, Msg::App(AppMsg::SaveFileAs));

    let cmd = update(&mut model, Msg::modal(ModalMsg::Confirm));

    assert_eq!(cmd, Some(Cmd::Redraw));
    assert_eq!(active_modal(&model), Some(ModalId::SaveAs));
    assert_eq!(model.ui.status_message, "Filename needs to be specified!");
}

#[test]
fn test_save_completed_clears_modified() {
    let mut model = test_model("hello", 0, 0);
    type_text(&mut model, "x");
    assert!(model.document.is_modified);

    let revision = model.document.revision();
    update(
        &mut model,
        Msg::App(AppMsg::SaveCompleted {
            path: PathBuf::from("out.txt"),
            revision,
            result: Ok(7),
        }),
    );

    assert!(!model.document.is_modified);
    assert!(!model.ui.is_saving);
    assert_eq!(model.document.filename.as_deref(), Some("out.txt"));
    assert_eq!(model.ui.status_message, "Saved: out.txt (7 bytes)");
}

#[test]
fn test_edits_during_save_stay_modified() {
    let mut model = test_model("hello", 0, 5);
    model.document.filename = Some("notes.txt".to_string());
    type_text(&mut model, "x");

    let Some(Cmd::SaveFile {
        path,
        content,
        revision,
        ..
    }) = update(&mut model, Msg::App(AppMsg::SaveFile))
    else {
        panic!("expected a save command");
    };
    assert_eq!(content, b"hellox\n".to_vec());

    // Typed while the file is being written
    type_text(&mut model, "y");
    update(
        &mut model,
        Msg::App(AppMsg::SaveCompleted {
            path,
            revision,
            result: Ok(content.len()),
        }),
    );

    assert_eq!(doc_text(&model), "helloxy");
    assert!(model.document.is_modified);

    let cmd = update(&mut model, Msg::App(AppMsg::Quit));
    assert_eq!(cmd, Some(Cmd::Redraw));
    assert_eq!(active_modal(&model), Some(ModalId::ConfirmDiscard));
}

#[test]
fn test_save_failure_keeps_modified() {
    let mut model = test_model("hello", 0, 0);
    type_text(&mut model, "x");

    let revision = model.document.revision();
    update(
        &mut model,
        Msg::App(AppMsg::SaveCompleted {
            path: PathBuf::from("out.txt"),
            revision,
            result: Err("File already exists".to_string()),
        }),
    );

    assert!(model.document.is_modified);
    assert_eq!(model.document.filename, None);
    assert_eq!(model.ui.status_message, "Error: File already exists");
}

// ========================================================================
// Prompt editing
// ========================================================================

#[test]
fn test_prompt_captures_typing() {
    let mut model = test_model("hello", 0, 0);
    update(&mut model, Msg::App(AppMsg::SaveFileAs));

    // Document messages are ignored while the prompt is open
    let cmd = update(&mut model, Msg::insert_char('z'));
    assert_eq!(cmd, None);
    assert_eq!(doc_text(&model), "hello");

    type_in_prompt(&mut model, "ab");
    update(&mut model, Msg::modal(ModalMsg::DeleteBackward));
    type_in_prompt(&mut model, "c");
    assert_eq!(prompt_text(&model), "ac");
}

#[test]
fn test_prompt_rejects_spaces() {
    let mut model = test_model("", 0, 0);
    update(&mut model, Msg::App(AppMsg::SaveFileAs));
    type_in_prompt(&mut model, "a b");

    assert_eq!(prompt_text(&model), "ab");
    assert_eq!(model.ui.status_message, "Character not allowed here!");
}

#[test]
fn test_prompt_length_is_limited() {
    let mut model = test_model("", 0, 0);
    update(&mut model, Msg::App(AppMsg::SaveFileAs));
    type_in_prompt(&mut model, &"x".repeat(40));

    assert_eq!(prompt_text(&model).len(), 30);
}

#[test]
fn test_escape_closes_prompt() {
    let mut model = test_model("hello", 0, 0);
    update(&mut model, Msg::App(AppMsg::SaveFileAs));
    update(&mut model, Msg::modal(ModalMsg::Close));

    assert_eq!(active_modal(&model), None);
    type_text(&mut model, "x");
    assert_eq!(doc_text(&model), "xhello");
}

// ========================================================================
// Open
// ========================================================================

#[test]
fn test_open_prompt_emits_load_command() {
    let mut model = test_model("", 0, 0);
    update(&mut model, Msg::App(AppMsg::OpenFile));
    assert_eq!(active_modal(&model), Some(ModalId::OpenFile));

    type_in_prompt(&mut model, "in.txt");
    let cmd = update(&mut model, Msg::modal(ModalMsg::Confirm));

    assert_eq!(
        cmd,
        Some(Cmd::LoadFile {
            path: PathBuf::from("in.txt")
        })
    );
    assert!(model.ui.is_loading);
}

#[test]
fn test_file_loaded_replaces_document() {
    let mut model = test_model("old text", 0, 3);
    update(
        &mut model,
        Msg::App(AppMsg::FileLoaded {
            path: PathBuf::from("in.txt"),
            result: Ok(b"new\ncontent\n".to_vec()),
        }),
    );

    assert_eq!(doc_text(&model), "new\ncontent");
    assert_eq!(model.document.filename.as_deref(), Some("in.txt"));
    assert_eq!((model.document.cursor.row, model.document.cursor.col), (0, 0));
    assert!(!model.document.is_modified);
    assert_eq!(model.ui.status_message, "Loaded: in.txt");
}

#[test]
fn test_file_load_failure_keeps_document() {
    let mut model = test_model("old text", 0, 0);
    update(
        &mut model,
        Msg::App(AppMsg::FileLoaded {
            path: PathBuf::from("in.txt"),
            result: Err("No such file or directory".to_string()),
        }),
    );

    assert_eq!(doc_text(&model), "old text");
    assert_eq!(model.ui.status_message, "Error: No such file or directory");
}

// ========================================================================
// Discard confirmation
// ========================================================================

#[test]
fn test_quit_unmodified_quits() {
    let mut model = test_model("hello", 0, 0);
    let cmd = update(&mut model, Msg::App(AppMsg::Quit));
    assert_eq!(cmd, Some(Cmd::Quit));
}

#[test]
fn test_quit_modified_asks_first() {
    let mut model = test_model("hello", 0, 0);
    type_text(&mut model, "x");

    let cmd = update(&mut model, Msg::App(AppMsg::Quit));
    assert_eq!(cmd, Some(Cmd::Redraw));
    assert_eq!(active_modal(&model), Some(ModalId::ConfirmDiscard));
    assert_eq!(
        model.ui.status_message,
        "File has changed! Save before close."
    );

    let cmd = update(&mut model, Msg::modal(ModalMsg::InsertChar('n')));
    assert_eq!(cmd, Some(Cmd::Redraw));
    assert_eq!(active_modal(&model), None);
    assert_eq!(doc_text(&model), "xhello");

    update(&mut model, Msg::App(AppMsg::Quit));
    let cmd = update(&mut model, Msg::modal(ModalMsg::InsertChar('y')));
    assert_eq!(cmd, Some(Cmd::Quit));
}

#[test]
fn test_discard_prompt_ignores_other_keys() {
    let mut model = test_model("hello", 0, 0);
    type_text(&mut model, "x");
    update(&mut model, Msg::App(AppMsg::Quit));

    let cmd = update(&mut model, Msg::modal(ModalMsg::InsertChar('q')));
    assert_eq!(cmd, None);
    assert_eq!(active_modal(&model), Some(ModalId::ConfirmDiscard));
}

#[test]
fn test_new_file_after_discard() {
    let mut model = test_model("hello", 0, 0);
    model.document.filename = Some("a.txt".to_string());
    type_text(&mut model, "x");

    update(&mut model, Msg::App(AppMsg::NewFile));
    update(&mut model, Msg::modal(ModalMsg::Confirm));

    assert_eq!(doc_text(&model), "");
    assert_eq!(model.document.filename, None);
    assert!(!model.document.is_modified);
    assert_eq!(model.ui.status_message, "New file");
}

#[test]
fn test_close_unmodified_file() {
    let mut model = test_model("hello", 0, 0);
    model.document.filename = Some("a.txt".to_string());

    update(&mut model, Msg::App(AppMsg::CloseFile));

    assert_eq!(doc_text(&model), "");
    assert_eq!(model.title(), "tedit - [No Name]");
    assert_eq!(model.ui.status_message, "File closed");
}

// ========================================================================
// Transient messages
// ========================================================================

#[test]
fn test_transient_message_expires_on_tick() {
    let mut model = test_model("", 0, 0);
    update(
        &mut model,
        Msg::Ui(UiMsg::SetTransientMessage {
            text: "Hi".to_string(),
            duration_ms: 0,
        }),
    );
    assert!(model.ui.transient_message.is_some());

    let cmd = update(&mut model, Msg::Ui(UiMsg::Tick));
    assert_eq!(cmd, Some(Cmd::Redraw));
    assert!(model.ui.transient_message.is_none());

    let cmd = update(&mut model, Msg::Ui(UiMsg::Tick));
    assert_eq!(cmd, None);
}
