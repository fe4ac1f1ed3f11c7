// Single-line search input
//
// Holds the query being typed, a character limit and a cursor. Keys are
// ignored while the input is blurred (a lookup is in flight, or the history
// list has focus).

use super::traits::{Component, ComponentId, Handled, Interactive, RenderContext};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

const PROMPT: &str = "> ";
const PLACEHOLDER: &str = "Enter word...";

/// Text input component
#[derive(Debug, Clone)]
pub struct SearchInput {
    value: String,

    /// Cursor position in chars, 0..=len
    cursor: usize,

    /// Maximum number of chars accepted
    char_limit: usize,

    /// Visible text columns (prompt excluded)
    width: usize,

    focused: bool,
}

impl SearchInput {
    pub fn new(char_limit: usize) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            char_limit,
            width: 20,
            focused: true,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_width(&mut self, width: usize) {
        self.width = width;
    }

    /// Columns the rendered input occupies: prompt, text and cursor cell
    pub fn display_width(&self) -> u16 {
        (PROMPT.width() + self.width + 1) as u16
    }

    fn len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map_or(self.value.len(), |(i, _)| i)
    }

    fn insert(&mut self, c: char) {
        if self.len() >= self.char_limit {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    fn delete_before_cursor(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let at = self.byte_index(self.cursor - 1);
        self.value.remove(at);
        self.cursor -= 1;
    }

    fn delete_at_cursor(&mut self) {
        if self.cursor < self.len() {
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    /// Chars visible in the window, and the cursor column within it
    fn visible(&self) -> (String, usize) {
        let start = self.cursor.saturating_sub(self.width);
        let shown: String = self.value.chars().skip(start).take(self.width.max(1)).collect();
        let before: String = self.value.chars().skip(start).take(self.cursor - start).collect();
        (shown, before.width())
    }
}

impl Component for SearchInput {
    fn id(&self) -> ComponentId {
        ComponentId::SearchInput
    }

    fn render(&mut self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let mut spans = vec![Span::styled(PROMPT, ctx.theme.title)];

        let (shown, cursor_col) = self.visible();
        if self.value.is_empty() {
            spans.push(Span::styled(PLACEHOLDER, ctx.theme.placeholder));
        } else {
            spans.push(Span::raw(shown));
        }

        f.render_widget(Paragraph::new(Line::from(spans)), area);

        if ctx.is_focused(self.id()) {
            let x = area.x + (PROMPT.width() + cursor_col) as u16;
            if x < area.right() {
                f.set_cursor_position(Position::new(x, area.y));
            }
        }
    }
}

impl Interactive for SearchInput {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        if !self.focused {
            return Handled::No;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('u') if ctrl => {
                let at = self.byte_index(self.cursor);
                self.value.replace_range(..at, "");
                self.cursor = 0;
            }
            KeyCode::Char('k') if ctrl => {
                let at = self.byte_index(self.cursor);
                self.value.truncate(at);
            }
            KeyCode::Char('a') if ctrl => self.cursor = 0,
            KeyCode::Char('e') if ctrl => self.cursor = self.len(),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.insert(c)
            }
            KeyCode::Backspace => self.delete_before_cursor(),
            KeyCode::Delete => self.delete_at_cursor(),
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.len(),
            _ => return Handled::No,
        }

        Handled::Yes
    }
}
