// Title bar component
//
// Header row: search input on the left, last searched word on the right.
// A spinner precedes the word while a lookup is in flight.

use crate::tui::input::SearchInput;
use crate::tui::traits::{Component, RenderContext};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the header row
pub fn render(
    f: &mut Frame,
    area: Rect,
    input: &mut SearchInput,
    last_word: Option<&str>,
    ctx: &RenderContext,
) {
    let [input_area, status_area] =
        Layout::horizontal([Constraint::Length(input.display_width()), Constraint::Min(0)])
            .areas(area);

    input.render(f, input_area, ctx);
    f.render_widget(
        Paragraph::new(status_line(last_word, ctx)).alignment(Alignment::Right),
        status_area,
    );
}

fn status_line(last_word: Option<&str>, ctx: &RenderContext) -> Line<'static> {
    let mut spans = Vec::new();
    if ctx.loading {
        spans.push(Span::styled(format!("{} ", ctx.spinner_char()), ctx.theme.muted));
    }

    match last_word {
        Some(word) => {
            spans.push(Span::raw("Last Search: "));
            spans.push(Span::styled(word.to_string(), ctx.theme.keyword));
        }
        None => spans.push(Span::styled("Dictionary TUI", ctx.theme.title)),
    }

    Line::from(spans)
}
