// Status bar component
//
// Footer row: key hints for the current mode on the left, definition
// scroll position on the right.

use crate::tui::app::Mode;
use crate::tui::layout::Breakpoint;
use crate::tui::traits::RenderContext;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    widgets::Paragraph,
    Frame,
};

/// Key hints for `mode`, shortened on narrow terminals
pub fn hint_text(mode: Mode, width: u16) -> &'static str {
    let wide = Breakpoint::from_width(width).at_least(Breakpoint::Normal);
    match (mode, wide) {
        (Mode::Search, true) => "Press Ctrl+C to quit (Ctrl+H for History)",
        (Mode::History, true) => "Press Ctrl+C to quit (Esc to Search)",
        (Mode::Search, false) => "^C quit  ^H history",
        (Mode::History, false) => "^C quit  Esc search",
    }
}

/// Render the footer row
pub fn render(f: &mut Frame, area: Rect, mode: Mode, scroll_percent: u16, ctx: &RenderContext) {
    let [hint_area, info_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(5)]).areas(area);

    f.render_widget(
        Paragraph::new(hint_text(mode, area.width)).style(ctx.theme.muted),
        hint_area,
    );
    f.render_widget(
        Paragraph::new(format!("{scroll_percent}%"))
            .style(ctx.theme.muted)
            .alignment(Alignment::Right),
        info_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_follow_mode_and_width() {
        assert_eq!(
            hint_text(Mode::Search, 80),
            "Press Ctrl+C to quit (Ctrl+H for History)"
        );
        assert_eq!(
            hint_text(Mode::History, 80),
            "Press Ctrl+C to quit (Esc to Search)"
        );
        assert_eq!(hint_text(Mode::Search, 40), "^C quit  ^H history");
    }
}
