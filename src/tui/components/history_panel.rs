//! History panel component
//!
//! Owns the search history and a selection cursor over it. Entries are
//! drawn through the `ListEntry` trait, newest first.

use super::scrollbar::render_scrollbar;
use crate::history::{History, HistoryItem, ListEntry};
use crate::tui::scroll::ScrollState;
use crate::tui::traits::{
    Component, ComponentId, Handled, Interactive, RenderContext, Scrollable, Selectable,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Margin, Rect},
    text::{Line, Span},
    widgets::{Block, List, ListItem},
    Frame,
};

const TITLE: &str = " Search History (Ctrl+H to switch) ";

pub struct HistoryPanel {
    history: History,

    /// Scroll over items, one row each
    scroll: ScrollState,

    selected: Option<usize>,
}

impl HistoryPanel {
    pub fn new(capacity: usize) -> Self {
        Self {
            history: History::new(capacity),
            scroll: ScrollState::new(),
            selected: None,
        }
    }

    #[cfg(test)]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Record a search; the new entry becomes the selection
    pub fn add(&mut self, word: impl Into<String>) {
        self.history.add(word);
        self.selected = Some(0);
        self.sync();
        self.scroll.scroll_to_top();
    }

    /// The selected entry, if any
    pub fn selected_item(&self) -> Option<&HistoryItem> {
        self.selected.and_then(|i| self.history.get(i))
    }

    /// Set the area inside the border
    pub fn set_size(&mut self, _width: u16, height: u16) {
        self.scroll
            .update_dimensions(self.history.len(), usize::from(height));
        if let Some(i) = self.selected {
            self.scroll.ensure_visible(i);
        }
    }

    fn sync(&mut self) {
        let viewport = self.scroll.viewport();
        self.scroll.update_dimensions(self.history.len(), viewport);
    }

    fn page_size(&self) -> usize {
        self.scroll.viewport().max(1)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Trait Implementations
// ═══════════════════════════════════════════════════════════════════════════

impl Component for HistoryPanel {
    fn id(&self) -> ComponentId {
        ComponentId::History
    }

    fn render(&mut self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let inner = area.inner(Margin::new(1, 1));
        self.set_size(inner.width, inner.height);

        let block = Block::bordered()
            .border_type(ctx.theme.border_type)
            .border_style(ctx.theme.border)
            .title(Span::styled(TITLE, ctx.theme.title));

        let focused = ctx.is_focused(self.id());
        let (start, end) = self.scroll.visible_range();
        let items: Vec<ListItem> = if self.history.is_empty() {
            vec![ListItem::new(Span::styled("No items.", ctx.theme.muted))]
        } else {
            self.history.items()[start..end]
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    let selected = self.selected == Some(start + i);
                    let marker = if selected { "> " } else { "  " };
                    let mut spans = vec![Span::raw(marker), Span::raw(item.title().to_string())];
                    if !item.description().is_empty() {
                        spans.push(Span::styled(
                            format!("  {}", item.description()),
                            ctx.theme.muted,
                        ));
                    }

                    let line = Line::from(spans);
                    if selected && focused {
                        ListItem::new(line).style(ctx.theme.selected)
                    } else {
                        ListItem::new(line)
                    }
                })
                .collect()
        };

        f.render_widget(List::new(items).block(block), area);
        render_scrollbar(f, area, &self.scroll, ctx.theme);
    }
}

impl Scrollable for HistoryPanel {
    fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    fn scroll_state_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }
}

impl Selectable for HistoryPanel {
    fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    fn select(&mut self, index: usize) {
        if self.history.is_empty() {
            self.selected = None;
            return;
        }
        let index = index.min(self.history.len() - 1);
        self.selected = Some(index);
        self.scroll.ensure_visible(index);
    }

    fn item_count(&self) -> usize {
        self.history.len()
    }
}

impl Interactive for HistoryPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Home => self.select_first(),
            KeyCode::End => self.select_last(),
            KeyCode::PageUp => {
                let current = self.selected.unwrap_or(0);
                self.select(current.saturating_sub(self.page_size()));
            }
            KeyCode::PageDown => {
                let current = self.selected.unwrap_or(0);
                self.select(current + self.page_size());
            }
            _ => return Handled::No,
        }
        Handled::Yes
    }
}
