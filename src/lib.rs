//! tedit - a small screen-oriented text editor
//!
//! The editing engine lives in [`editable`]: a fixed-capacity row store with
//! a cursor, a viewport and a mark. The rest of the crate follows the Elm
//! Architecture: [`messages::Msg`] values flow through [`update::update`],
//! which mutates the [`model::AppModel`] and returns a [`commands::Cmd`] for
//! the host to execute.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod error;
pub mod file_io;
pub mod messages;
pub mod model;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use error::{EditError, EditResult};
pub use messages::Msg;
pub use model::AppModel;
