// Configuration for the dictionary client
//
// There is no config file and nothing is read from the environment at runtime.
// Configuration is resolved in order of precedence:
// 1. Command-line flags (highest priority)
// 2. Built-in defaults (lowest priority)

use crate::cli::Cli;
use std::path::PathBuf;
use std::time::Duration;

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Commit hash, stamped by the release build
pub const COMMIT: &str = match option_env!("DT_COMMIT") {
    Some(commit) => commit,
    None => "none",
};

/// Build date, stamped by the release build
pub const BUILD_DATE: &str = match option_env!("DT_BUILD_DATE") {
    Some(date) => date,
    None => "unknown",
};

/// Public dictionary endpoint (English entries)
pub const DEFAULT_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

// ─────────────────────────────────────────────────────────────────────────────
// API
// ─────────────────────────────────────────────────────────────────────────────

/// Remote dictionary settings
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL; the word is appended as the last path segment
    pub base_url: String,

    /// Per-request timeout (connect + read)
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// UI
// ─────────────────────────────────────────────────────────────────────────────

/// Interactive session and output settings
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Maximum number of remembered searches
    pub history_capacity: usize,

    /// Maximum characters accepted by the search input
    pub input_char_limit: usize,

    /// Total width of the one-shot output panel, borders included
    pub panel_width: u16,

    /// Redraw interval for the spinner and cursor
    pub tick_rate: Duration,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            history_capacity: 10,
            input_char_limit: 50,
            panel_width: 80,
            tick_rate: Duration::from_millis(200),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Logging
// ─────────────────────────────────────────────────────────────────────────────

/// Log file rotation strategy
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LogRotation {
    /// Rotate log files hourly
    Hourly,
    /// Rotate log files daily (default)
    #[default]
    Daily,
    /// Never rotate - single log file
    Never,
}

impl LogRotation {
    /// Parse rotation string from a flag value
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "hourly" => Self::Hourly,
            "never" => Self::Never,
            _ => Self::Daily, // Default to daily for unknown values
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    pub level: String,
    /// Directory for log files; file logging is off when unset
    pub file_dir: Option<PathBuf>,
    /// Log file rotation strategy
    pub file_rotation: LogRotation,
    /// Prefix for log file names (e.g., "dt" -> "dt.2024-01-15")
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file_dir: None, // Opt-in feature
            file_rotation: LogRotation::Daily,
            file_prefix: "dt".to_string(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Remote dictionary settings
    pub api: ApiConfig,

    /// Session and rendering settings
    pub ui: UiConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration: flags -> defaults
    pub fn from_cli(cli: &Cli) -> Self {
        let defaults = Self::default();

        let logging = LoggingConfig {
            level: cli
                .log_level
                .clone()
                .unwrap_or(defaults.logging.level),
            file_dir: cli.log_dir.clone(),
            file_rotation: cli
                .log_rotation
                .as_deref()
                .map(LogRotation::parse)
                .unwrap_or(defaults.logging.file_rotation),
            file_prefix: defaults.logging.file_prefix,
        };

        Self {
            api: defaults.api,
            ui: defaults.ui,
            logging,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn defaults_match_public_api() {
        let config = Config::default();
        assert_eq!(
            config.api.base_url,
            "https://api.dictionaryapi.dev/api/v2/entries/en"
        );
        assert_eq!(config.api.timeout, Duration::from_secs(10));
        assert_eq!(config.ui.history_capacity, 10);
        assert_eq!(config.logging.level, "warn");
        assert!(config.logging.file_dir.is_none());
    }

    #[test]
    fn flags_override_logging() {
        let cli = Cli::try_parse_from([
            "dt",
            "--log-level",
            "debug",
            "--log-dir",
            "/tmp/dt-logs",
            "--log-rotation",
            "hourly",
        ])
        .unwrap();
        let config = Config::from_cli(&cli);

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.file_dir, Some(PathBuf::from("/tmp/dt-logs")));
        assert_eq!(config.logging.file_rotation, LogRotation::Hourly);
    }

    #[test]
    fn rotation_parse_falls_back_to_daily() {
        assert_eq!(LogRotation::parse("NEVER"), LogRotation::Never);
        assert_eq!(LogRotation::parse("weekly"), LogRotation::Daily);
    }
}
