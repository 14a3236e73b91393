//! Editor configuration
//!
//! User preferences are read from `~/.config/tedit/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::editable::{DocConstraints, DEFAULT_CAPACITY, EDITOR_COLS, EDITOR_ROWS};

/// Editor configuration shared by every session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Row slots of the main document (one is never used for content)
    #[serde(default = "default_rows")]
    pub rows: usize,

    /// Bytes per row, terminator included
    #[serde(default = "default_cols")]
    pub cols: usize,

    /// Clipboard size in bytes
    #[serde(default = "default_clipboard_capacity")]
    pub clipboard_capacity: usize,

    /// Tab stop distance
    #[serde(default = "default_tab_size")]
    pub tab_size: usize,

    /// Start in insert mode (false = overwrite)
    #[serde(default = "default_insert_mode")]
    pub insert_mode: bool,
}

fn default_rows() -> usize {
    EDITOR_ROWS
}

fn default_cols() -> usize {
    EDITOR_COLS
}

fn default_clipboard_capacity() -> usize {
    DEFAULT_CAPACITY
}

fn default_tab_size() -> usize {
    4
}

fn default_insert_mode() -> bool {
    true
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            cols: default_cols(),
            clipboard_capacity: default_clipboard_capacity(),
            tab_size: default_tab_size(),
            insert_mode: default_insert_mode(),
        }
    }
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, or return defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Constraints for the main document, clamped to the supported geometry
    pub fn constraints(&self) -> DocConstraints {
        let constraints = DocConstraints::with_geometry(self.rows, self.cols);
        if constraints.rows != self.rows || constraints.cols != self.cols {
            tracing::warn!(
                rows = self.rows,
                cols = self.cols,
                clamped_rows = constraints.rows,
                clamped_cols = constraints.cols,
                "document geometry out of range, clamped"
            );
        }
        constraints
    }

    /// Clipboard size, at most the whole document
    pub fn clipboard_limit(&self) -> usize {
        let constraints = DocConstraints::with_geometry(self.rows, self.cols);
        let limit = constraints.rows * constraints.cols;
        if self.clipboard_capacity > limit {
            tracing::warn!(
                capacity = self.clipboard_capacity,
                limit,
                "clipboard capacity larger than the document, clamped"
            );
        }
        self.clipboard_capacity.min(limit)
    }

    /// Tab stop distance, at least 1
    pub fn tab_size(&self) -> usize {
        self.tab_size.max(1)
    }
}
