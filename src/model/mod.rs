//! Application model - the complete state of the editor
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod status_bar;
pub mod ui;

pub use status_bar::{
    sync_status_bar, RenderedSegment, SegmentContent, SegmentId, SegmentPosition, StatusBar,
    StatusBarLayout, StatusSegment, TransientMessage,
};
pub use ui::{FilePromptState, ModalId, ModalState, PendingAction, UiState};

use std::path::Path;

use crate::config::EditorConfig;
use crate::editable::{Clipboard, Document, Position};
use crate::error::EditError;
use crate::file_io;

/// Screen rows used by the title line and the status line
pub const CHROME_ROWS: usize = 2;

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    /// The document being edited
    pub document: Document,
    /// Selection over `document`
    pub mark: crate::editable::Mark,
    /// Copy/cut buffer
    pub clipboard: Clipboard,
    /// Typing inserts (true) or overwrites (false)
    pub insert_mode: bool,
    /// UI state (status bar, prompts)
    pub ui: UiState,
    /// Persisted editor configuration
    pub config: EditorConfig,
    /// Terminal size (columns, rows)
    pub window_size: (u16, u16),
}

impl AppModel {
    /// Create a new application model for a terminal of the given size
    pub fn new(config: EditorConfig, cols: u16, rows: u16) -> Self {
        let document = Document::new(config.constraints(), Self::text_rows(rows));
        let mut model = Self {
            document,
            mark: Default::default(),
            clipboard: Clipboard::new(config.clipboard_limit()),
            insert_mode: config.insert_mode,
            ui: UiState::with_status("New file"),
            config,
            window_size: (cols, rows),
        };
        sync_status_bar(&mut model);
        model
    }

    /// Rows available for text on a terminal `rows` high
    pub fn text_rows(rows: u16) -> usize {
        (rows as usize).saturating_sub(CHROME_ROWS).max(1)
    }

    /// Update the terminal size
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.window_size = (cols, rows);
        self.document.set_viewport_height(Self::text_rows(rows));
    }

    /// Load a file named on the command line, reporting problems on the status bar
    pub fn open_startup_file(&mut self, path: &Path, initial_row: Option<usize>) {
        if !path.exists() {
            self.document.filename = Some(path.display().to_string());
            self.ui.set_status(format!("New file: {}", path.display()));
            sync_status_bar(self);
            return;
        }
        match file_io::load_file(&mut self.document, path) {
            Ok(report) => {
                let status = report
                    .warning()
                    .unwrap_or_else(|| format!("Loaded: {}", path.display()));
                self.ui.set_status(status);
            }
            Err(e) => {
                tracing::warn!("Failed to load {}: {}", path.display(), e);
                self.ui
                    .set_status(format!("Error loading {}: {}", path.display(), e));
            }
        }
        if let Some(row) = initial_row {
            self.document.set_cursor(Position::new(row, 0));
        }
        sync_status_bar(self);
    }

    /// Record an engine failure on the status bar
    pub fn report_error(&mut self, err: EditError) {
        tracing::warn!(%err, "edit rejected");
        self.ui.set_status(format!("{}!", err));
    }

    /// Title line text
    pub fn title(&self) -> String {
        let name = self.document.filename.as_deref().unwrap_or("[No Name]");
        let modified = if self.document.is_modified { " *" } else { "" };
        format!("tedit - {}{}", name, modified)
    }

    /// Tab stop distance from the config
    pub fn tab_size(&self) -> usize {
        self.config.tab_size()
    }
}
