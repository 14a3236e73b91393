//! UI state - status messages and prompts

use super::status_bar::{StatusBar, TransientMessage};
use crate::editable::{DocConstraints, Document};
use std::time::Duration;

// ============================================================================
// Modal System
// ============================================================================

/// Identifies which prompt is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalId {
    /// Filename to open (Ctrl+O)
    OpenFile,
    /// Filename to save to (Ctrl+A)
    SaveAs,
    /// Unsaved changes would be lost
    ConfirmDiscard,
}

/// Action waiting on a discard confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    NewFile,
    CloseFile,
    OpenFile,
    Quit,
}

/// A single-line filename entry field
#[derive(Debug, Clone)]
pub struct FilePromptState {
    /// One usable row, printable non-space ASCII only
    pub field: Document,
}

impl FilePromptState {
    pub fn new() -> Self {
        Self {
            field: Document::new(DocConstraints::filename(), 1),
        }
    }

    /// Entered filename
    pub fn filename(&self) -> String {
        self.field.line(0)
    }
}

impl Default for FilePromptState {
    fn default() -> Self {
        Self::new()
    }
}

/// Union of all prompt states
#[derive(Debug, Clone)]
pub enum ModalState {
    OpenFile(FilePromptState),
    SaveAs(FilePromptState),
    ConfirmDiscard(PendingAction),
}

impl ModalState {
    /// Get the modal ID for this state
    pub fn id(&self) -> ModalId {
        match self {
            ModalState::OpenFile(_) => ModalId::OpenFile,
            ModalState::SaveAs(_) => ModalId::SaveAs,
            ModalState::ConfirmDiscard(_) => ModalId::ConfirmDiscard,
        }
    }

    /// Text shown before the input field
    pub fn label(&self) -> &'static str {
        match self {
            ModalState::OpenFile(_) => "Open file: ",
            ModalState::SaveAs(_) => "Save as: ",
            ModalState::ConfirmDiscard(_) => "File has changed! Discard changes? (y/n) ",
        }
    }

    /// Filename field of a file prompt
    pub fn prompt(&self) -> Option<&FilePromptState> {
        match self {
            ModalState::OpenFile(p) | ModalState::SaveAs(p) => Some(p),
            ModalState::ConfirmDiscard(_) => None,
        }
    }

    pub fn prompt_mut(&mut self) -> Option<&mut FilePromptState> {
        match self {
            ModalState::OpenFile(p) | ModalState::SaveAs(p) => Some(p),
            ModalState::ConfirmDiscard(_) => None,
        }
    }
}

/// UI state - status messages and prompts
#[derive(Debug, Clone)]
pub struct UiState {
    /// Message displayed in the status bar
    pub status_message: String,
    /// Structured status bar with segments
    pub status_bar: StatusBar,
    /// Transient message with auto-expiry
    pub transient_message: Option<TransientMessage>,
    /// Whether a file is currently being loaded
    pub is_loading: bool,
    /// Whether a file is currently being saved
    pub is_saving: bool,
    /// Currently active prompt (if any)
    pub active_modal: Option<ModalState>,
}

impl UiState {
    /// Create a new UI state with default settings
    pub fn new() -> Self {
        Self {
            status_message: String::new(),
            status_bar: StatusBar::new(),
            transient_message: None,
            is_loading: false,
            is_saving: false,
            active_modal: None,
        }
    }

    /// Create a UI state with an initial status message
    pub fn with_status(message: impl Into<String>) -> Self {
        Self {
            status_message: message.into(),
            ..Self::new()
        }
    }

    /// Check if a prompt is currently active
    pub fn has_modal(&self) -> bool {
        self.active_modal.is_some()
    }

    /// Open a prompt
    pub fn open_modal(&mut self, state: ModalState) {
        self.active_modal = Some(state);
    }

    /// Close the active prompt
    pub fn close_modal(&mut self) {
        self.active_modal = None;
    }

    /// Set the status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    /// Show a message that disappears after `duration`
    pub fn set_transient(&mut self, message: impl Into<String>, duration: Duration) {
        self.transient_message = Some(TransientMessage::new(message, duration));
    }

    /// Drop the transient message once expired. Returns true if dropped.
    pub fn expire_transient(&mut self) -> bool {
        if self
            .transient_message
            .as_ref()
            .is_some_and(|m| m.is_expired())
        {
            self.transient_message = None;
            return true;
        }
        false
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
