// Tracing subscriber setup
//
// One-shot lookups log to stderr so stdout carries only the result.
// The interactive session owns the terminal, so nothing is written there;
// its logs only go to the optional JSON file under --log-dir.

use crate::config::{LogRotation, LoggingConfig};
use anyhow::{Context, Result};
use std::io::IsTerminal;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Which entry path is running; decides where console output may go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    OneShot,
    Interactive,
}

/// Filter directive for this crate at `level`; unknown levels become `warn`
pub fn filter_directive(level: &str) -> String {
    let level = match level.to_lowercase().as_str() {
        l @ ("trace" | "debug" | "info" | "warn" | "error" | "off") => l.to_string(),
        _ => "warn".to_string(),
    };
    format!("{}={level}", env!("CARGO_CRATE_NAME"))
}

/// Install the global subscriber
///
/// The returned guard flushes the file writer on drop and must be held
/// until the process exits.
pub fn init(config: &LoggingConfig, mode: Mode) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_new(filter_directive(&config.level))
        .context("Failed to build log filter")?;

    let console = (mode == Mode::OneShot).then(|| {
        tracing_subscriber::fmt::layer()
            .compact()
            .with_target(false)
            .with_ansi(std::io::stderr().is_terminal())
            .with_writer(std::io::stderr)
    });

    let (file, guard) = match &config.file_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

            let appender = match config.file_rotation {
                LogRotation::Hourly => tracing_appender::rolling::hourly(dir, &config.file_prefix),
                LogRotation::Daily => tracing_appender::rolling::daily(dir, &config.file_prefix),
                LogRotation::Never => tracing_appender::rolling::never(dir, &config.file_prefix),
            };

            // Writes happen on a background thread
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_scopes_to_crate() {
        let krate = env!("CARGO_CRATE_NAME");
        assert_eq!(filter_directive("debug"), format!("{krate}=debug"));
        assert_eq!(filter_directive("INFO"), format!("{krate}=info"));
    }

    #[test]
    fn unknown_level_falls_back_to_warn() {
        assert!(filter_directive("loud").ends_with("=warn"));
        assert!(EnvFilter::try_new(filter_directive("loud")).is_ok());
    }
}
