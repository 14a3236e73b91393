//! Side-effect commands returned by update functions
//!
//! The update layer never touches the filesystem or the terminal. It asks
//! the host to do so with a `Cmd`, and the host reports back with a `Msg`.

use std::path::PathBuf;

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Redraw dirty rows, title and status line
    Redraw,
    /// Write bytes to a file, then send `AppMsg::SaveCompleted`
    SaveFile {
        path: PathBuf,
        content: Vec<u8>,
        /// Replace an existing file (false for save-as)
        overwrite: bool,
        /// Document revision the content was taken from
        revision: u64,
    },
    /// Read a file, then send `AppMsg::FileLoaded`
    LoadFile { path: PathBuf },
    /// Execute multiple commands
    Batch(Vec<Cmd>),
    /// Request application exit
    Quit,
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::SaveFile { .. } => true,
            Cmd::LoadFile { .. } => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
            // Quit doesn't need redraw - app is exiting
            Cmd::Quit => false,
        }
    }

    /// Check if this command (or any in a batch) asks to quit
    pub fn is_quit(&self) -> bool {
        match self {
            Cmd::Quit => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.is_quit()),
            _ => false,
        }
    }
}
