//! Scrollbar rendering helper
//!
//! Draws a thumb on the right border of a panel from its `ScrollState`.

use crate::theme::Theme;
use crate::tui::scroll::ScrollState;
use ratatui::{
    layout::{Margin, Rect},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Render a vertical scrollbar over the right border of `area`
///
/// Only renders if content exceeds viewport.
pub fn render_scrollbar(f: &mut Frame, area: Rect, scroll: &ScrollState, theme: &Theme) {
    if !scroll.needs_scrollbar() {
        return;
    }

    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(None)
        .end_symbol(None)
        .track_symbol(None)
        .thumb_style(theme.border);

    // ScrollbarState wants: content_length (how much can scroll) and position
    let content_length = scroll.total().saturating_sub(scroll.viewport());
    let mut scrollbar_state = ScrollbarState::new(content_length).position(scroll.offset());

    // Keep the corners of the border intact
    let track = area.inner(Margin::new(0, 1));
    f.render_stateful_widget(scrollbar, track, &mut scrollbar_state);
}
