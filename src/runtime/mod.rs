//! Runtime module - terminal integration
//!
//! - `app` - event loop, command execution and terminal setup
//! - `input` - keyboard/mouse event to message mapping

pub mod app;
pub mod input;

pub use app::App;
