//! Definition panel component
//!
//! Shows the formatted definition, or a status line while a lookup is in
//! flight or after it failed. Text wraps at the panel width and scrolls
//! vertically by wrapped row.

use super::scrollbar::render_scrollbar;
use crate::panel::wrapped_height;
use crate::tui::scroll::ScrollState;
use crate::tui::traits::{
    Component, ComponentId, Handled, Interactive, RenderContext, Scrollable,
    ScrollableInteractive,
};
use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Margin, Rect},
    text::Text,
    widgets::{Block, Paragraph, Wrap},
    Frame,
};

/// Shown before the first search
pub const WELCOME: &str = "Welcome! Search for a word to see its definition here.";

pub struct DefinitionPanel {
    text: Text<'static>,

    /// Vertical scroll over wrapped rows
    scroll: ScrollState,

    /// Wrap width and visible rows, inside the border
    width: u16,
    height: u16,
}

impl DefinitionPanel {
    pub fn new() -> Self {
        Self {
            text: Text::raw(WELCOME),
            scroll: ScrollState::new(),
            width: 0,
            height: 0,
        }
    }

    /// Replace the content with a formatted definition
    pub fn set_text(&mut self, text: Text<'static>) {
        self.text = text;
        self.scroll.scroll_to_top();
        self.sync_dimensions();
    }

    /// Replace the content with an unstyled status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.set_text(Text::raw(message.into()));
    }

    /// Content as plain lines, styles dropped
    #[cfg(test)]
    pub fn plain_lines(&self) -> Vec<String> {
        self.text
            .lines
            .iter()
            .map(crate::format::line_text)
            .collect()
    }

    /// Set the area inside the border
    pub fn set_size(&mut self, width: u16, height: u16) {
        if (width, height) != (self.width, self.height) {
            self.width = width;
            self.height = height;
            self.sync_dimensions();
        }
    }

    fn sync_dimensions(&mut self) {
        let rows = wrapped_height(&self.text, self.width);
        self.scroll
            .update_dimensions(usize::from(rows), usize::from(self.height));
    }
}

impl Default for DefinitionPanel {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Trait Implementations
// ═══════════════════════════════════════════════════════════════════════════

impl Component for DefinitionPanel {
    fn id(&self) -> ComponentId {
        ComponentId::Definition
    }

    fn render(&mut self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let inner = area.inner(Margin::new(1, 1));
        self.set_size(inner.width, inner.height);

        let block = Block::bordered()
            .border_type(ctx.theme.border_type)
            .border_style(ctx.theme.border);

        let offset = u16::try_from(self.scroll.offset()).unwrap_or(u16::MAX);
        let paragraph = Paragraph::new(self.text.clone())
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((offset, 0));

        f.render_widget(paragraph, area);
        render_scrollbar(f, area, &self.scroll, ctx.theme);
    }
}

impl Scrollable for DefinitionPanel {
    fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    fn scroll_state_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }
}

impl Interactive for DefinitionPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        self.handle_scroll_keys(key)
    }
}
