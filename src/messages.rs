//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::path::PathBuf;

/// Direction for cursor movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Editor-specific messages (cursor movement, viewport scrolling)
#[derive(Debug, Clone)]
pub enum EditorMsg {
    /// Move cursor in a direction
    MoveCursor(Direction),
    /// Move cursor while marking (Shift+Arrow)
    MoveCursorWithSelection(Direction),
    /// Page up
    PageUp,
    /// Page down
    PageDown,
    /// Move cursor to start of line (Home key)
    LineStart,
    /// Move cursor to end of line (End key)
    LineEnd,
    /// Place cursor at a cell of the text area (mouse click)
    Click { screen_row: usize, screen_col: usize },
    /// Switch between insert and overwrite typing (Insert key)
    ToggleOverwrite,
}

/// Document-specific messages (text editing)
#[derive(Debug, Clone)]
pub enum DocumentMsg {
    /// Insert (or overwrite) a character at cursor
    InsertChar(char),
    /// Insert spaces up to the next tab stop
    InsertTab,
    /// Delete character before cursor (Backspace)
    DeleteBackward,
    /// Delete character at cursor (Delete)
    DeleteForward,
    /// Split the line at cursor (Enter)
    InsertNewline,
}

/// Mark and clipboard messages
#[derive(Debug, Clone)]
pub enum SelectionMsg {
    /// Begin marking at the cursor
    StartMark,
    /// Move the mark end to the cursor
    ExtendMark,
    /// Fix the mark
    StopMark,
    /// Drop the mark (Escape)
    ClearMark,
    /// Copy the marked text (Ctrl+C)
    Copy,
    /// Cut the marked text (Ctrl+X)
    Cut,
    /// Paste at the cursor (Ctrl+V)
    Paste,
}

/// Prompt messages (filename entry, discard confirmation)
#[derive(Debug, Clone)]
pub enum ModalMsg {
    /// Ask for a file to open
    OpenFilePrompt,
    /// Ask for a filename to save to
    SaveAsPrompt,
    /// Close the active prompt without acting
    Close,
    /// Type into the prompt
    InsertChar(char),
    /// Delete character before the prompt cursor
    DeleteBackward,
    /// Delete character at the prompt cursor
    DeleteForward,
    /// Move the prompt cursor
    MoveCursor(Direction),
    /// Prompt cursor to start
    LineStart,
    /// Prompt cursor to end
    LineEnd,
    /// Accept the prompt (Enter)
    Confirm,
}

/// UI-specific messages (status bar, prompts)
#[derive(Debug, Clone)]
pub enum UiMsg {
    /// Set status bar message
    SetStatus(String),
    /// Set a transient message that auto-expires
    SetTransientMessage { text: String, duration_ms: u64 },
    /// Clear the transient message
    ClearTransientMessage,
    /// Periodic tick from the host loop
    Tick,
    /// Modal messages
    Modal(ModalMsg),
}

/// Application-level messages (file operations, terminal events)
#[derive(Debug, Clone)]
pub enum AppMsg {
    /// Terminal resized (columns, rows)
    Resize(u16, u16),
    /// Save current file (asks for a name if there is none)
    SaveFile,
    /// Save under a new name
    SaveFileAs,
    /// Open a file (asks for a name)
    OpenFile,
    /// Load a file by path
    LoadFile(PathBuf),
    /// Start an empty document
    NewFile,
    /// Close the current file
    CloseFile,
    /// File save completed
    SaveCompleted {
        path: PathBuf,
        /// Revision carried by the `Cmd::SaveFile` that was written
        revision: u64,
        result: Result<usize, String>,
    },
    /// File load completed
    FileLoaded {
        path: PathBuf,
        result: Result<Vec<u8>, String>,
    },
    /// Quit the application
    Quit,
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    /// Editor messages (cursor, viewport)
    Editor(EditorMsg),
    /// Document messages (text editing)
    Document(DocumentMsg),
    /// Mark and clipboard messages
    Selection(SelectionMsg),
    /// UI messages (status, prompts)
    Ui(UiMsg),
    /// App messages (file I/O, terminal)
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    /// Create a cursor movement message
    pub fn move_cursor(direction: Direction) -> Self {
        Msg::Editor(EditorMsg::MoveCursor(direction))
    }

    /// Create an insert character message
    pub fn insert_char(ch: char) -> Self {
        Msg::Document(DocumentMsg::InsertChar(ch))
    }

    /// Create a resize message
    pub fn resize(cols: u16, rows: u16) -> Self {
        Msg::App(AppMsg::Resize(cols, rows))
    }

    /// Create a prompt message
    pub fn modal(msg: ModalMsg) -> Self {
        Msg::Ui(UiMsg::Modal(msg))
    }
}
