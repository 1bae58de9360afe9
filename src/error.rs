//! Error types for memomail

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for memomail
#[derive(Debug, Error)]
pub enum MemomailError {
    #[error("Invalid note id: {0}")]
    InvalidNoteId(String),

    #[error("Unknown config key: {0}")]
    UnknownConfigKey(String),

    #[error("Config file already exists: {0}")]
    ConfigExists(PathBuf),

    #[error("Send error: {0}")]
    Send(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Logging error: {0}")]
    Logging(String),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl MemomailError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MemomailError::Config(_)
            | MemomailError::UnknownConfigKey(_)
            | MemomailError::ConfigExists(_) => 2,
            MemomailError::InvalidNoteId(_) => 3,
            MemomailError::Send(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MemomailError::InvalidNoteId(input) => {
                format!(
                    "Invalid note id: '{}'\n\n\
                    Suggestions:\n\
                    • Note ids are positive whole numbers (e.g., 3)\n\
                    • Use 'Show all Notes' to see existing ids",
                    input
                )
            }
            MemomailError::UnknownConfigKey(key) => {
                format!(
                    "Unknown config key: '{}'\n\n\
                    Valid keys: from_addr, headers, log_level, date_format\n\
                    Example: memomail config from_addr",
                    key
                )
            }
            MemomailError::ConfigExists(path) => {
                format!(
                    "Config file already exists: {}\n\n\
                    Suggestions:\n\
                    • Edit the existing file directly\n\
                    • Choose another path: memomail config init other.toml",
                    path.display()
                )
            }
            MemomailError::Config(msg) => {
                if msg.contains("MEMOMAIL_CONFIG") {
                    format!(
                        "{}\n\n\
                        Suggestions:\n\
                        • Point MEMOMAIL_CONFIG at an existing file\n\
                        • Unset MEMOMAIL_CONFIG to use built-in defaults",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MemomailError
pub type Result<T> = std::result::Result<T, MemomailError>;
