//! Command-line argument parsing for the editor
//!
//! Supports:
//! - Opening a file
//! - Jump to line
//! - Starting in overwrite mode
//! - New empty buffer mode

use clap::Parser;
use std::path::PathBuf;

/// A small fixed-capacity text editor
#[derive(Parser, Debug)]
#[command(name = "tedit", version, about = "A small fixed-capacity text editor")]
pub struct CliArgs {
    /// File to open
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Start with an empty buffer (ignore PATH)
    #[arg(short = 'n', long)]
    pub new: bool,

    /// Go to line N in the file
    #[arg(long, value_name = "N")]
    pub line: Option<usize>,

    /// Start in overwrite mode
    #[arg(long)]
    pub overwrite: bool,
}

/// The startup mode determines what to open
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupMode {
    /// Start with an empty buffer
    Empty,
    /// Open a single file
    SingleFile(PathBuf),
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// What file to open
    pub mode: StartupMode,
    /// Initial cursor row - 1-indexed from user, converted to 0-indexed
    pub initial_row: Option<usize>,
    /// Override the configured typing mode with overwrite
    pub overwrite: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        let mode = match self.path {
            Some(path) if !self.new => {
                if path.is_dir() {
                    return Err(format!("{} is a directory", path.display()));
                }
                StartupMode::SingleFile(path)
            }
            _ => StartupMode::Empty,
        };

        Ok(StartupConfig {
            mode,
            initial_row: self.line.map(|line| line.saturating_sub(1)),
            overwrite: self.overwrite,
        })
    }
}

impl StartupConfig {
    /// File to open, if any
    pub fn file_path(&self) -> Option<&PathBuf> {
        match &self.mode {
            StartupMode::Empty => None,
            StartupMode::SingleFile(path) => Some(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(path: Option<&str>, new: bool, line: Option<usize>) -> CliArgs {
        CliArgs {
            path: path.map(PathBuf::from),
            new,
            line,
            overwrite: false,
        }
    }

    #[test]
    fn test_empty_args_gives_empty_mode() {
        let config = args(None, false, None).into_config().unwrap();
        assert_eq!(config.mode, StartupMode::Empty);
        assert!(config.file_path().is_none());
    }

    #[test]
    fn test_new_flag_gives_empty_mode() {
        let config = args(Some("file.txt"), true, None).into_config().unwrap();
        assert_eq!(config.mode, StartupMode::Empty);
    }

    #[test]
    fn test_single_file() {
        let config = args(Some("file.txt"), false, None).into_config().unwrap();
        assert_eq!(config.file_path(), Some(&PathBuf::from("file.txt")));
    }

    #[test]
    fn test_line_conversion() {
        // 1-indexed to 0-indexed
        let config = args(Some("file.txt"), false, Some(42)).into_config().unwrap();
        assert_eq!(config.initial_row, Some(41));

        let config = args(Some("file.txt"), false, Some(0)).into_config().unwrap();
        assert_eq!(config.initial_row, Some(0));
    }

    #[test]
    fn test_directory_rejected() {
        let dir = std::env::temp_dir();
        let result = CliArgs {
            path: Some(dir),
            new: false,
            line: None,
            overwrite: false,
        }
        .into_config();
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_from_command_line() {
        let args = CliArgs::parse_from(["tedit", "--overwrite", "--line", "3", "notes.txt"]);
        assert!(args.overwrite);
        assert_eq!(args.line, Some(3));
        assert_eq!(args.path, Some(PathBuf::from("notes.txt")));
    }
}
