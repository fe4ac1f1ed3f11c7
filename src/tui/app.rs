// TUI application state
//
// App is the session state machine: Search and History modes, focus,
// the definition/status text and lookup sequencing. It never touches the
// terminal or the network. Key handlers return a LookupRequest for the
// event loop to spawn, and finished lookups come back through
// apply_outcome, so the whole flow is testable with synthetic events.

use super::components::{DefinitionPanel, HistoryPanel};
use super::input::SearchInput;
use super::layout;
use super::traits::{ComponentId, Interactive};
use crate::config::Config;
use crate::dictionary::{LookupError, WordEntry};
use crate::format::format_first;
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Which panel fills the content area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Search,
    History,
}

/// A lookup the event loop should start
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub seq: u64,
    pub word: String,
}

/// A finished lookup, tagged with the request it answers
#[derive(Debug)]
pub struct LookupOutcome {
    pub seq: u64,
    pub word: String,
    pub result: Result<Vec<WordEntry>, LookupError>,
}

/// Main application state for the TUI
pub struct App {
    pub mode: Mode,

    pub input: SearchInput,

    pub definition: DefinitionPanel,

    pub history: HistoryPanel,

    /// Most recently submitted word
    pub last_word: Option<String>,

    /// Error from the most recent lookup, cleared on success
    pub last_error: Option<LookupError>,

    /// Set once the first size is known
    pub ready: bool,

    /// Content area inside the border (width, height)
    pub viewport: (u16, u16),

    /// Sequence number of the newest dispatched lookup
    latest_seq: u64,

    /// Whether the newest lookup is still running
    in_flight: bool,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Animation frame counter for the spinner
    pub animation_frame: usize,

    pub theme: Theme,
}

impl App {
    pub fn new(config: &Config, theme: Theme) -> Self {
        Self {
            mode: Mode::Search,
            input: SearchInput::new(config.ui.input_char_limit),
            definition: DefinitionPanel::new(),
            history: HistoryPanel::new(config.ui.history_capacity),
            last_word: None,
            last_error: None,
            ready: false,
            viewport: (0, 0),
            latest_seq: 0,
            in_flight: false,
            should_quit: false,
            animation_frame: 0,
            theme,
        }
    }

    /// Component receiving keys that aren't global
    pub fn focus(&self) -> ComponentId {
        match self.mode {
            Mode::History => ComponentId::History,
            Mode::Search if self.input.is_focused() => ComponentId::SearchInput,
            Mode::Search => ComponentId::Definition,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight
    }

    /// Advance animation frame (called on tick)
    pub fn tick_animation(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
    }

    /// Recompute panel sizes for a terminal of `width` x `height`
    pub fn resize(&mut self, width: u16, height: u16) {
        let (content_width, content_height) = layout::content_size(width, height);
        tracing::trace!(width, height, content_width, content_height, "Resize");

        self.viewport = (content_width, content_height);
        self.definition.set_size(content_width, content_height);
        self.history.set_size(content_width, content_height);
        self.input.set_width(usize::from(content_width / 3));
        self.ready = true;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Key handling
    // ─────────────────────────────────────────────────────────────────────────

    /// Handle one key press
    ///
    /// Layered dispatch: global keys, then submit/cancel for the current
    /// mode, then the focused component.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<LookupRequest> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                return None;
            }
            KeyCode::Char('h') if ctrl => {
                self.toggle_mode();
                return None;
            }
            KeyCode::Tab => {
                self.toggle_mode();
                return None;
            }
            _ => {}
        }

        match self.mode {
            Mode::Search => self.handle_search_key(key),
            Mode::History => self.handle_history_key(key),
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> Option<LookupRequest> {
        if key.code == KeyCode::Enter {
            return self.submit_search();
        }

        if !self.input.handle_key(key).was_handled() {
            self.definition.handle_key(key);
        }
        None
    }

    fn handle_history_key(&mut self, key: KeyEvent) -> Option<LookupRequest> {
        match key.code {
            KeyCode::Enter => self.submit_history(),
            KeyCode::Esc => {
                self.enter_search_mode();
                None
            }
            _ => {
                self.history.handle_key(key);
                None
            }
        }
    }

    pub fn toggle_mode(&mut self) {
        match self.mode {
            Mode::Search => {
                self.mode = Mode::History;
                self.input.blur();
            }
            Mode::History => self.enter_search_mode(),
        }
    }

    fn enter_search_mode(&mut self) {
        self.mode = Mode::Search;
        self.input.focus();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Lookups
    // ─────────────────────────────────────────────────────────────────────────

    fn submit_search(&mut self) -> Option<LookupRequest> {
        let word = self.input.value().trim().to_string();
        if word.is_empty() {
            return None;
        }

        self.last_word = Some(word.clone());
        self.input.clear();
        self.input.blur();
        self.history.add(word.clone());
        self.definition.set_status("Searching...");

        Some(self.dispatch(word))
    }

    fn submit_history(&mut self) -> Option<LookupRequest> {
        let word = self.history.selected_item()?.word().to_string();

        self.enter_search_mode();
        self.last_word = Some(word.clone());
        self.definition
            .set_status(format!("Reviewing definition for: {word}..."));

        Some(self.dispatch(word))
    }

    fn dispatch(&mut self, word: String) -> LookupRequest {
        self.latest_seq += 1;
        self.in_flight = true;
        tracing::debug!(seq = self.latest_seq, word = %word, "Dispatching lookup");

        LookupRequest {
            seq: self.latest_seq,
            word,
        }
    }

    /// Apply a finished lookup
    ///
    /// Completions for anything but the newest request are dropped, so a
    /// slow earlier lookup can't overwrite a later one.
    pub fn apply_outcome(&mut self, outcome: LookupOutcome) {
        if outcome.seq != self.latest_seq {
            tracing::debug!(
                seq = outcome.seq,
                latest = self.latest_seq,
                word = %outcome.word,
                "Discarding stale lookup"
            );
            return;
        }
        self.in_flight = false;

        let formatted = outcome.result.and_then(|entries| {
            format_first(&entries, &self.theme).ok_or_else(|| LookupError::NoData {
                word: outcome.word.clone(),
            })
        });

        match formatted {
            Ok(text) => {
                tracing::debug!(word = %outcome.word, "Lookup completed");
                self.definition.set_text(text);
                self.last_error = None;
            }
            Err(e) => {
                tracing::warn!(word = %outcome.word, error = %e, "Lookup failed");
                self.definition.set_status(format!(
                    "Error fetching definition: {e}\nPress Enter to try again."
                ));
                self.last_error = Some(e);
            }
        }

        self.input.focus();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{interpret_response, tests::SERENDIPITY_JSON};
    use crate::tui::traits::{Scrollable, Selectable};

    fn app() -> App {
        let mut app = App::new(&Config::default(), Theme::plain());
        app.resize(80, 24);
        app
    }

    fn press(app: &mut App, code: KeyCode) -> Option<LookupRequest> {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(app: &mut App, c: char) -> Option<LookupRequest> {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn search(app: &mut App, word: &str) -> LookupRequest {
        type_word(app, word);
        press(app, KeyCode::Enter).expect("submit dispatches a lookup")
    }

    fn serendipity(request: &LookupRequest) -> LookupOutcome {
        LookupOutcome {
            seq: request.seq,
            word: request.word.clone(),
            result: interpret_response(&request.word, 200, SERENDIPITY_JSON.as_bytes()),
        }
    }

    #[test]
    fn starts_in_search_with_welcome() {
        let app = app();
        assert_eq!(app.mode, Mode::Search);
        assert_eq!(app.focus(), ComponentId::SearchInput);
        assert!(app.definition.plain_lines()[0].starts_with("Welcome!"));
        assert!(app.ready);
    }

    #[test]
    fn toggling_twice_restores_mode_and_focus() {
        let mut app = app();

        ctrl(&mut app, 'h');
        assert_eq!(app.mode, Mode::History);
        assert_eq!(app.focus(), ComponentId::History);
        assert!(!app.input.is_focused());

        ctrl(&mut app, 'h');
        assert_eq!(app.mode, Mode::Search);
        assert_eq!(app.focus(), ComponentId::SearchInput);

        // Tab is an alias
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.mode, Mode::Search);
        assert!(app.input.is_focused());
    }

    #[test]
    fn escape_returns_to_search() {
        let mut app = app();
        ctrl(&mut app, 'h');
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, Mode::Search);
        assert!(app.input.is_focused());
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = app();
        ctrl(&mut app, 'c');
        assert!(app.should_quit);
    }

    #[test]
    fn search_shows_placeholder_then_definition() {
        let mut app = app();
        let request = search(&mut app, "serendipity");

        assert_eq!(request.word, "serendipity");
        assert_eq!(app.definition.plain_lines(), vec!["Searching..."]);
        assert_eq!(app.last_word.as_deref(), Some("serendipity"));
        assert_eq!(app.input.value(), "");
        assert!(!app.input.is_focused());
        assert!(app.is_loading());
        assert_eq!(app.history.history().len(), 1);

        app.apply_outcome(serendipity(&request));

        assert!(app.definition.plain_lines()[0].contains("serendipity"));
        assert!(app.input.is_focused());
        assert!(!app.is_loading());
        assert!(app.last_error.is_none());
    }

    #[test]
    fn blank_input_does_not_dispatch() {
        let mut app = app();
        type_word(&mut app, "   ");
        assert!(press(&mut app, KeyCode::Enter).is_none());
        assert!(app.history.history().is_empty());
    }

    #[test]
    fn submitted_word_is_trimmed() {
        let mut app = app();
        let request = search(&mut app, "  ephemeral ");
        assert_eq!(request.word, "ephemeral");
        assert_eq!(app.history.selected_item().unwrap().word(), "ephemeral");
    }

    #[test]
    fn failure_shows_error_and_refocuses() {
        let mut app = app();
        let request = search(&mut app, "xyzzy");

        app.apply_outcome(LookupOutcome {
            seq: request.seq,
            word: request.word.clone(),
            result: interpret_response("xyzzy", 404, b""),
        });

        assert_eq!(
            app.definition.plain_lines(),
            vec![
                "Error fetching definition: definition for 'xyzzy' not found",
                "Press Enter to try again."
            ]
        );
        assert!(matches!(app.last_error, Some(LookupError::NotFound { .. })));
        assert!(app.input.is_focused());
        assert!(!app.should_quit);
    }

    #[test]
    fn stale_outcome_is_discarded() {
        let mut app = app();
        let first = search(&mut app, "slow");
        // Input stays blurred while the lookup runs; a round trip through
        // history mode gives it focus back
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        let second = search(&mut app, "serendipity");
        assert!(second.seq > first.seq);

        app.apply_outcome(serendipity(&second));
        let shown = app.definition.plain_lines();

        // The earlier lookup finishes last and fails
        app.apply_outcome(LookupOutcome {
            seq: first.seq,
            word: first.word.clone(),
            result: interpret_response("slow", 503, b""),
        });

        assert_eq!(app.definition.plain_lines(), shown);
        assert!(app.last_error.is_none());
    }

    #[test]
    fn history_submit_reviews_without_recording() {
        let mut app = app();
        let first = search(&mut app, "alpha");
        app.apply_outcome(serendipity(&first));
        let second = search(&mut app, "beta");
        app.apply_outcome(serendipity(&second));

        ctrl(&mut app, 'h');
        press(&mut app, KeyCode::Down);
        assert_eq!(app.history.selected_index(), Some(1));

        let request = press(&mut app, KeyCode::Enter).unwrap();
        assert_eq!(request.word, "alpha");
        assert_eq!(app.mode, Mode::Search);
        assert!(app.input.is_focused());
        assert_eq!(app.last_word.as_deref(), Some("alpha"));
        assert_eq!(
            app.definition.plain_lines(),
            vec!["Reviewing definition for: alpha..."]
        );
        assert_eq!(app.history.history().len(), 2);
    }

    #[test]
    fn history_submit_with_nothing_selected_is_ignored() {
        let mut app = app();
        ctrl(&mut app, 'h');
        assert!(press(&mut app, KeyCode::Enter).is_none());
        assert_eq!(app.mode, Mode::History);
    }

    #[test]
    fn history_is_capped() {
        let mut app = app();
        for i in 0..11 {
            let request = search(&mut app, &format!("word{i}"));
            app.apply_outcome(serendipity(&request));
        }

        let history = app.history.history();
        assert_eq!(history.len(), 10);
        assert_eq!(history.get(0).unwrap().word(), "word10");
        assert_eq!(history.get(9).unwrap().word(), "word1");
    }

    #[test]
    fn resize_sizes_panels_and_input() {
        let mut app = App::new(&Config::default(), Theme::plain());
        assert!(!app.ready);

        app.resize(100, 30);
        assert!(app.ready);
        assert_eq!(app.viewport, (94, 24));
        assert_eq!(app.input.display_width(), 2 + 94 / 3 + 1);
    }

    #[test]
    fn arrow_keys_scroll_definition_in_search_mode() {
        let mut app = app();
        app.resize(80, 10);
        let request = search(&mut app, "serendipity");
        app.apply_outcome(serendipity(&request));

        press(&mut app, KeyCode::Down);
        assert_eq!(app.definition.scroll_state().offset(), 1);
    }
}
