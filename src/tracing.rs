//! Debug tracing infrastructure for development diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=cursor=trace,message=debug` - scoped filtering
//! - `RUST_LOG=tedit::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/tedit/logs/tedit.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::editable::{Document, Mark, MarkState};

/// Initialize tracing subscriber with console and file logging
///
/// With `console` false only the file layer is installed; the terminal host
/// uses this while it owns the screen.
pub fn init(console: bool) {
    let console_layer = console.then(|| {
        let console_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_line_number(true)
            .with_filter(console_filter)
    });

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender =
                tracing_appender::rolling::daily(logs_dir, crate::config_paths::LOG_FILE_PREFIX);
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of cursor/mark state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorSnapshot {
    pub row: usize,
    pub col: usize,
    pub offset: usize,
    pub last_row: usize,
    pub mark: MarkState,
    pub mark_start: (usize, usize),
    pub mark_end: (usize, usize),
}

impl CursorSnapshot {
    pub fn from_document(doc: &Document, mark: &Mark) -> Self {
        let start = mark.start_point();
        let end = mark.end_point();
        Self {
            row: doc.cursor.row,
            col: doc.cursor.col,
            offset: doc.viewport.offset,
            last_row: doc.last_row(),
            mark: mark.state(),
            mark_start: (start.row, start.col),
            mark_end: (end.row, end.col),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &CursorSnapshot) -> Option<String> {
        let mut changes = Vec::new();
        if self.row != other.row || self.col != other.col {
            changes.push(format!(
                "cursor: ({},{}) → ({},{})",
                self.row, self.col, other.row, other.col
            ));
        }
        if self.offset != other.offset {
            changes.push(format!("offset: {} → {}", self.offset, other.offset));
        }
        if self.last_row != other.last_row {
            changes.push(format!("last_row: {} → {}", self.last_row, other.last_row));
        }
        if self.mark != other.mark {
            changes.push(format!("mark: {:?} → {:?}", self.mark, other.mark));
        } else if other.mark != MarkState::Unmarked && self.mark_end != other.mark_end {
            changes.push(format!(
                "mark: ({},{})..({},{})",
                other.mark_start.0, other.mark_start.1, other.mark_end.0, other.mark_end.1
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
