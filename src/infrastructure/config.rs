//! Configuration management

use crate::error::{MemomailError, Result};
use crate::infrastructure::mailer::Headers;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "MEMOMAIL_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Sender address used for mailings
    pub from_addr: String,
    /// Extra headers attached to every mailing
    pub headers: Headers,
    pub log_level: String,
    /// chrono format string for note creation dates
    pub date_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            from_addr: "noreply@localhost".to_string(),
            headers: Headers::new(),
            log_level: "warn".to_string(),
            date_format: "%d-%m-%Y".to_string(),
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MemomailError::Config(format!("Config file not found: {}", path.display()))
            } else {
                MemomailError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            MemomailError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would fail later at display time
    pub fn validate(&self) -> Result<()> {
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(MemomailError::Config(format!(
                "Invalid date format: {}",
                self.date_format
            )));
        }
        Ok(())
    }

    /// Write config to a new TOML file, refusing to overwrite
    pub fn save(&self, path: &Path) -> Result<()> {
        if path.exists() {
            return Err(MemomailError::ConfigExists(path.to_path_buf()));
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }

    /// Resolve the effective config: explicit path, then MEMOMAIL_CONFIG,
    /// then built-in defaults
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match std::env::var_os(CONFIG_ENV) {
            Some(value) if !value.is_empty() => {
                let path = PathBuf::from(value);
                if !path.is_file() {
                    return Err(MemomailError::Config(format!(
                        "{} is set to '{}' but no such file exists",
                        CONFIG_ENV,
                        path.display()
                    )));
                }
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }
}
