//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod document;
mod editor;
mod selection;
mod ui;

use crate::commands::Cmd;
use crate::error::EditResult;
use crate::messages::Msg;
use crate::model::sync_status_bar;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::CursorSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use document::update_document;
pub use editor::update_editor;
pub use selection::update_selection;
pub use ui::update_ui;

/// Main update function - dispatches to sub-handlers
///
/// Failures are shown on the status bar. In debug builds, this wraps with
/// tracing instrumentation.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    let result = update_traced(model, msg);
    #[cfg(not(debug_assertions))]
    let result = try_update(model, msg);

    result.unwrap_or(Some(Cmd::Redraw))
}

/// Like [`update`], but also returns the failure of a rejected edit
pub fn try_update(model: &mut AppModel, msg: Msg) -> EditResult<Option<Cmd>> {
    let result = update_inner(model, msg);
    if let Err(err) = result {
        model.report_error(err);
    }
    sync_status_bar(model);
    result
}

/// Inner update logic (no status handling)
fn update_inner(model: &mut AppModel, msg: Msg) -> EditResult<Option<Cmd>> {
    // Prompts take all keyboard input
    if model.ui.has_modal() && matches!(msg, Msg::Editor(_) | Msg::Document(_) | Msg::Selection(_))
    {
        return Ok(None);
    }

    match msg {
        Msg::Editor(m) => {
            model.ui.status_message.clear();
            editor::update_editor(model, m)
        }
        Msg::Document(m) => {
            model.ui.status_message.clear();
            document::update_document(model, m)
        }
        Msg::Selection(m) => {
            model.ui.status_message.clear();
            selection::update_selection(model, m)
        }
        Msg::Ui(m) => ui::update_ui(model, m),
        Msg::App(m) => Ok(app::update_app(model, m)),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after cursor state and logs diffs for debugging.
/// Filters out the periodic tick from logging.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> EditResult<Option<Cmd>> {
    use crate::messages::UiMsg;

    let is_noisy = matches!(&msg, Msg::Ui(UiMsg::Tick));

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = CursorSnapshot::from_document(&model.document, &model.mark);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = try_update(model, msg);

    let after = CursorSnapshot::from_document(&model.document, &model.mark);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "cursor", %diff, "state changed");
    }

    let invariants = model.document.check_invariants();
    debug_assert!(
        invariants.is_ok(),
        "invariant violated after {}: {:?}",
        msg_name,
        invariants
    );

    result
}

/// Get a display name for a message type
///
/// Uses Debug formatting to include variant names and arguments.
/// Example outputs:
/// - `Editor::MoveCursor(Up)`
/// - `Document::InsertChar('x')`
/// - `App::Resize(80, 24)`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Editor(m) => format!("Editor::{:?}", m),
        Msg::Document(m) => format!("Document::{:?}", m),
        Msg::Selection(m) => format!("Selection::{:?}", m),
        Msg::Ui(m) => format!("Ui::{:?}", m),
        Msg::App(m) => format!("App::{:?}", m),
    }
}
