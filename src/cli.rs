// CLI module - command-line argument parsing and one-shot handlers
//
// `dt` with no word starts the interactive session. Everything else is
// handled here without a terminal UI or async runtime:
// - dt <word> / dt -w <word>: look up once and print a panel
// - dt --version: build info
// - dt -h / --help / bad flags: usage panel

use crate::config::{Config, BUILD_DATE, COMMIT, VERSION};
use crate::dictionary::{BlockingDictionaryClient, WordEntry};
use crate::format::format_first;
use crate::panel::{render_line, render_panel};
use crate::theme::Theme;
use anyhow::{Context, Result};
use clap::Parser;
use ratatui::text::{Line, Span, Text};
use std::fmt;
use std::path::PathBuf;
use std::process::ExitCode;

/// Dictionary-TUI - look up English word definitions
///
/// Help and version are handled by hand so both print the styled panel
/// instead of clap's generated text.
#[derive(Parser, Debug)]
#[command(name = "dt", disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Word to look up; only the first is used
    #[arg(value_name = "WORD")]
    pub words: Vec<String>,

    /// Word to look up (takes precedence over WORD)
    #[arg(short = 'w', long = "word", value_name = "WORD")]
    pub word_flag: Option<String>,

    /// Show the usage panel
    #[arg(short = 'h', long = "help")]
    pub help: bool,

    /// Show version information
    #[arg(long = "version")]
    pub version: bool,

    /// Log level: trace, debug, info, warn, error
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Write JSON logs to this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Log file rotation: hourly, daily, never
    #[arg(long, value_name = "ROTATION")]
    pub log_rotation: Option<String>,
}

/// What the process should do after parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Help,
    Version,
    Lookup(String),
    Interactive,
}

impl Cli {
    /// Word for a one-shot lookup, if any
    ///
    /// An empty `-w` is treated as absent so the positional word still applies.
    pub fn lookup_word(&self) -> Option<&str> {
        self.word_flag
            .as_deref()
            .filter(|w| !w.is_empty())
            .or_else(|| self.words.first().map(String::as_str))
    }

    pub fn action(&self) -> Action {
        if self.help {
            Action::Help
        } else if self.version {
            Action::Version
        } else if let Some(word) = self.lookup_word() {
            Action::Lookup(word.to_string())
        } else {
            Action::Interactive
        }
    }
}

/// Three-line build information
pub fn version_text() -> String {
    format!("dictionary-tui version {VERSION}\ncommit: {COMMIT}\nbuilt at: {BUILD_DATE}")
}

/// Usage text shown inside the help panel
pub fn help_text(theme: &Theme) -> Text<'static> {
    let text = |s: &str| Span::styled(s.to_string(), theme.help_text);
    let command = |s: &str| Span::styled(s.to_string(), theme.help_command);
    let example = |s: &str| Span::styled(s.to_string(), theme.help_example);
    let section = |s: &str| Span::styled(s.to_string(), theme.help_section);
    let indent = |n: usize| Span::raw(" ".repeat(n));

    let flag = |lead: Span<'static>, name: &str, about: &str| {
        Line::from(vec![lead, command(name), Span::raw("  "), text(about)])
    };

    Text::from(vec![
        Line::from(Span::styled(
            format!("Dictionary-TUI {VERSION}"),
            theme.help_header,
        )),
        Line::from(text(
            "A dictionary application with interactive TUI and CLI interfaces.",
        )),
        Line::default(),
        Line::from(vec![section("USAGE: "), text("dt [FLAGS] [WORD]")]),
        Line::from(text("       dt [WORD]")),
        flag(section("FLAGS: "), "-w, --word", "Specify a word to look up"),
        flag(indent(7), "-h, --help", "Show this help message"),
        flag(indent(7), "--version", "Show version information"),
        flag(indent(7), "--log-level", "Log level (trace, debug, info, warn, error)"),
        flag(indent(7), "--log-dir", "Write JSON logs to a directory"),
        flag(indent(7), "--log-rotation", "Log file rotation (hourly, daily, never)"),
        Line::from(vec![section("MODES: "), text("1. Interactive Mode (TUI):")]),
        Line::from(text(
            "       Launch without arguments to enter the interactive interface.",
        )),
        Line::from(text("       • Use Ctrl+H to access search history")),
        Line::from(text("       • Use Ctrl+C to quit")),
        Line::from(text("       2. Command-Line Mode:")),
        Line::from(text(
            "       Provide a word as an argument for quick definition lookup.",
        )),
        Line::from(vec![section("EXAMPLES: "), command("dt")]),
        Line::from(example("          # Launch interactive mode")),
        Line::from(command("          dt serendipity")),
        Line::from(example("          # Look up 'serendipity' directly")),
        Line::from(command("          dt -w ephemeral")),
        Line::from(example("          # Look up 'ephemeral' using flag syntax")),
    ])
}

/// Print the usage panel to stdout
pub fn print_help(config: &Config, theme: &Theme) -> Result<()> {
    let panel = render_panel(&help_text(theme), config.ui.panel_width, theme)
        .context("Failed to render help")?;
    print!("{panel}");
    Ok(())
}

/// Title banner and definition panel for a successful lookup
///
/// Returns `None` when there is nothing to show, which the client already
/// reports as an error.
pub fn render_result(
    word: &str,
    entries: &[WordEntry],
    theme: &Theme,
    width: u16,
) -> Result<Option<String>, fmt::Error> {
    let Some(body) = format_first(entries, theme) else {
        return Ok(None);
    };

    let title = render_line(&Line::styled(
        format!("Dictionary-TUI: {word}"),
        theme.title,
    ))?;
    let panel = render_panel(&body, width, theme)?;

    Ok(Some(format!("\n{title}\n\n{panel}")))
}

/// Look up `word` once and print the result
///
/// Lookup failures are reported on stderr and turn into a failing exit
/// code; only infrastructure problems come back as `Err`.
pub fn run_lookup(word: &str, config: &Config, theme: &Theme) -> Result<ExitCode> {
    let client = BlockingDictionaryClient::new(&config.api)?;

    let entries = match client.lookup(word) {
        Ok(entries) => entries,
        Err(e) => {
            // The error line below is the user-facing report
            tracing::debug!(word, error = %e, "Lookup failed");
            eprintln!("Error: {e}");
            return Ok(ExitCode::FAILURE);
        }
    };

    let rendered = render_result(word, &entries, theme, config.ui.panel_width)
        .context("Failed to render definition")?;
    if let Some(output) = rendered {
        print!("{output}");
    }

    Ok(ExitCode::SUCCESS)
}
