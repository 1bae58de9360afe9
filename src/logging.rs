//! Logger bootstrap
//!
//! Logs go to stderr so they never mix with session output on stdout.
//! Initialization happens at most once per process; later calls with the
//! same level are no-ops.

use crate::error::{MemomailError, Result};
use flexi_logger::{Logger, LoggerHandle};
use log::info;
use once_cell::sync::OnceCell;

/// Environment variable overriding the configured log level
pub const LOG_ENV: &str = "MEMOMAIL_LOG";

const SUPPORTED_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    level: String,
    _logger: LoggerHandle,
}

/// Start the stderr logger at `level`.
///
/// Re-initialization with a different level is rejected.
pub fn init_logging(level: &str) -> Result<()> {
    let level = normalize_level(level)?;

    if let Some(state) = LOGGING_STATE.get() {
        if state.level != level {
            return Err(MemomailError::Logging(format!(
                "logging already initialized with level `{}`; refusing to switch to `{}`",
                state.level, level
            )));
        }
        return Ok(());
    }

    LOGGING_STATE.get_or_try_init(|| -> Result<LoggingState> {
        let logger = Logger::try_with_str(&level)
            .map_err(|e| MemomailError::Logging(format!("invalid log level `{}`: {}", level, e)))?
            .log_to_stderr()
            .start()
            .map_err(|e| MemomailError::Logging(format!("failed to start logger: {}", e)))?;

        info!(
            "memomail {} started, log level {}",
            env!("CARGO_PKG_VERSION"),
            level
        );

        Ok(LoggingState {
            level,
            _logger: logger,
        })
    })?;

    Ok(())
}

/// Pick the effective level: explicit flag, then MEMOMAIL_LOG, then config
pub fn effective_level(flag: Option<&str>, configured: &str) -> String {
    flag.map(str::to_string)
        .or_else(|| std::env::var(LOG_ENV).ok().filter(|v| !v.trim().is_empty()))
        .unwrap_or_else(|| configured.to_string())
}

fn normalize_level(level: &str) -> Result<String> {
    let normalized = level.trim().to_ascii_lowercase();
    if SUPPORTED_LEVELS.contains(&normalized.as_str()) {
        Ok(normalized)
    } else {
        Err(MemomailError::Logging(format!(
            "unsupported log level `{}`; expected one of {}",
            level,
            SUPPORTED_LEVELS.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_level() {
        assert_eq!(normalize_level(" DEBUG ").unwrap(), "debug");
        assert_eq!(normalize_level("off").unwrap(), "off");
        assert!(normalize_level("loud").is_err());
    }

    #[test]
    fn test_effective_level_prefers_flag() {
        assert_eq!(effective_level(Some("trace"), "warn"), "trace");
    }

    #[test]
    fn test_init_is_idempotent_and_rejects_switch() {
        init_logging("warn").unwrap();
        init_logging("WARN").unwrap();
        assert!(matches!(
            init_logging("debug"),
            Err(MemomailError::Logging(_))
        ));
    }
}
