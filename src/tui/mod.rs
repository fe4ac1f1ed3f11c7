// TUI module - Terminal User Interface
//
// This module manages the interactive session using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, resizes, timer ticks)
// - Spawning lookups and feeding their results back to App

pub mod app;
pub mod components;
pub mod input;
pub mod layout;
pub mod scroll;
pub mod traits;
pub mod ui;

use crate::config::Config;
use crate::dictionary::DictionaryClient;
use crate::theme::Theme;
use anyhow::{Context, Result};
use app::{App, LookupOutcome, LookupRequest};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

/// Run the TUI
///
/// This function sets up the terminal, runs the event loop, and cleans up
/// when done.
pub async fn run_tui(config: Config, theme: Theme) -> Result<()> {
    let client = DictionaryClient::new(&config.api)?;

    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(&config, theme);
    tracing::info!(theme = app.theme.name, "Interactive session started");

    // Run the event loop
    let result = run_event_loop(&mut terminal, &mut app, &client, config.ui.tick_rate).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    tracing::info!("Interactive session ended");
    result
}

/// Main event loop
///
/// This loop handles three types of events:
/// 1. Terminal input (keys and resizes)
/// 2. Timer ticks (spinner animation)
/// 3. Finished lookups
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    client: &DictionaryClient,
    tick_rate: Duration,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(tick_rate);
    let (outcome_tx, mut outcome_rx) = mpsc::channel::<LookupOutcome>(16);

    let size = terminal.size().context("Failed to read terminal size")?;
    app.resize(size.width, size.height);

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard input and resizes
            event = poll_event() => {
                match event {
                    Some(Event::Key(key)) => {
                        if let Some(request) = app.handle_key(key) {
                            spawn_lookup(client.clone(), request, outcome_tx.clone());
                        }
                    }
                    Some(Event::Resize(width, height)) => app.resize(width, height),
                    _ => {}
                }
            }

            // Periodic tick for the spinner
            _ = tick_interval.tick() => {
                app.tick_animation();
            }

            // Finished lookups
            Some(outcome) = outcome_rx.recv() => {
                app.apply_outcome(outcome);
            }
        }

        // Check if we should quit
        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Wait briefly for a terminal event
async fn poll_event() -> Option<Event> {
    if event::poll(Duration::from_millis(10)).unwrap_or(false) {
        event::read().ok()
    } else {
        None
    }
}

/// Run one lookup in the background and post the outcome
fn spawn_lookup(
    client: DictionaryClient,
    request: LookupRequest,
    outcome_tx: mpsc::Sender<LookupOutcome>,
) {
    tokio::spawn(async move {
        let result = client.lookup(&request.word).await;
        let outcome = LookupOutcome {
            seq: request.seq,
            word: request.word,
            result,
        };

        // Receiver is gone once the session has ended
        if outcome_tx.send(outcome).await.is_err() {
            tracing::debug!("Session closed before lookup finished");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::dictionary::tests::SERENDIPITY_JSON;
    use mockito::Server;

    #[tokio::test]
    async fn lookup_outcome_carries_request_seq() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/v2/entries/en/serendipity")
            .with_status(200)
            .with_body(SERENDIPITY_JSON)
            .create_async()
            .await;

        let client = DictionaryClient::new(&ApiConfig {
            base_url: format!("{}/api/v2/entries/en", server.url()),
            ..ApiConfig::default()
        })
        .unwrap();
        let (tx, mut rx) = mpsc::channel(1);

        spawn_lookup(
            client,
            LookupRequest {
                seq: 7,
                word: "serendipity".to_string(),
            },
            tx,
        );

        let outcome = rx.recv().await.unwrap();
        assert_eq!(outcome.seq, 7);
        assert_eq!(outcome.word, "serendipity");
        assert_eq!(outcome.result.unwrap()[0].word, "serendipity");
    }

    #[tokio::test]
    async fn failed_lookup_is_still_posted() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/v2/entries/en/xyzzy")
            .with_status(404)
            .create_async()
            .await;

        let client = DictionaryClient::new(&ApiConfig {
            base_url: format!("{}/api/v2/entries/en", server.url()),
            ..ApiConfig::default()
        })
        .unwrap();
        let (tx, mut rx) = mpsc::channel(1);

        spawn_lookup(
            client,
            LookupRequest {
                seq: 3,
                word: "xyzzy".to_string(),
            },
            tx,
        );

        let outcome = rx.recv().await.unwrap();
        assert_eq!(outcome.seq, 3);
        assert!(outcome.result.is_err());
    }
}
