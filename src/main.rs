// Dictionary-TUI - word definitions in the terminal
//
// `dt` looks words up on dictionaryapi.dev, either in an interactive
// session with search history or as a single command-line lookup.
//
// Architecture:
// - Dictionary: serde model + HTTP clients (async and blocking)
// - Format/Panel: entry -> styled text -> ANSI panel for stdout
// - TUI (ratatui): session state machine, event loop, lookup tasks
// - CLI (clap): flags, help/version, one-shot lookup

mod cli;
mod config;
mod dictionary;
mod format;
mod history;
mod logging;
mod panel;
mod theme;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Action, Cli};
use config::Config;
use std::io::IsTerminal;
use std::process::ExitCode;
use theme::Theme;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    // Bad flags print the usage panel and exit cleanly, like --help
    let Ok(cli) = Cli::try_parse() else {
        let config = Config::default();
        cli::print_help(&config, &stdout_theme())?;
        return Ok(ExitCode::SUCCESS);
    };
    let config = Config::from_cli(&cli);

    match cli.action() {
        Action::Help => {
            cli::print_help(&config, &stdout_theme())?;
            Ok(ExitCode::SUCCESS)
        }
        Action::Version => {
            println!("{}", cli::version_text());
            Ok(ExitCode::SUCCESS)
        }
        Action::Lookup(word) => {
            // The guard flushes file logs when dropped at the end of this arm
            let _log_guard = logging::init(&config.logging, logging::Mode::OneShot)?;
            cli::run_lookup(&word, &config, &stdout_theme())
        }
        Action::Interactive => {
            let _log_guard = logging::init(&config.logging, logging::Mode::Interactive)?;

            // Only the interactive session needs a runtime; the blocking
            // client used above must not run inside one
            let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
            runtime.block_on(tui::run_tui(config, Theme::dark()))?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn stdout_theme() -> Theme {
    Theme::for_stdout(std::io::stdout().is_terminal())
}
