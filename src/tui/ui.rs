// UI rendering
//
// One frame: header (input + last word), the active panel inside a border,
// footer (hints + scroll position), all inset by the screen padding.

use super::app::{App, Mode};
use super::components::{status_bar, title_bar};
use super::layout;
use super::traits::{Component, RenderContext, Scrollable};
use ratatui::{widgets::Paragraph, Frame};

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    let areas = layout::split(f.area());

    if !app.ready {
        f.render_widget(Paragraph::new("Initializing..."), areas.content);
        return;
    }

    let ctx = RenderContext::new(
        &app.theme,
        app.focus(),
        app.animation_frame,
        app.is_loading(),
    );

    title_bar::render(
        f,
        areas.header,
        &mut app.input,
        app.last_word.as_deref(),
        &ctx,
    );

    match app.mode {
        Mode::Search => app.definition.render(f, areas.content, &ctx),
        Mode::History => app.history.render(f, areas.content, &ctx),
    }

    status_bar::render(
        f,
        areas.footer,
        app.mode,
        app.definition.scroll_percent(),
        &ctx,
    );
}
