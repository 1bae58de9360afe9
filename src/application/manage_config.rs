//! Config management use case

use crate::cli::output::format_config;
use crate::error::{MemomailError, Result};
use crate::infrastructure::Config;
use log::info;
use std::path::Path;

/// Service for inspecting the effective configuration
pub struct ConfigService {
    config: Config,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(config: Config) -> Self {
        ConfigService { config }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "from_addr" => Ok(self.config.from_addr.clone()),
            "log_level" => Ok(self.config.log_level.clone()),
            "date_format" => Ok(self.config.date_format.clone()),
            "headers" => Ok(self
                .config
                .headers
                .iter()
                .map(|(name, value)| format!("{}: {}", name, value))
                .collect::<Vec<_>>()
                .join("\n")),
            _ => Err(MemomailError::UnknownConfigKey(key.to_string())),
        }
    }

    /// List all config values
    pub fn list(&self) -> String {
        format_config(&self.config)
    }

    /// Write a default config file at `path`
    pub fn init(path: &Path) -> Result<()> {
        Config::default().save(path)?;
        info!("wrote default config to {}", path.display());
        Ok(())
    }
}
