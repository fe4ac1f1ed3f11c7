// ANSI panel renderer for one-shot output
//
// Draws styled text into an off-screen ratatui Buffer (bordered, padded,
// word-wrapped) and serializes the cells to a string with crossterm escape
// sequences. Cells with the default style emit no escapes, so a plain theme
// produces plain text.

use crate::theme::Theme;
use crossterm::style::{
    Attribute, Color as CColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::Command;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, Padding, Paragraph, Widget, Wrap};
use std::fmt;
use unicode_width::UnicodeWidthStr;

/// Horizontal padding inside the border, per side
const PAD_X: u16 = 2;
/// Vertical padding inside the border, per side
const PAD_Y: u16 = 1;

/// Render `text` inside a rounded panel `width` columns wide
///
/// Height is whatever the wrapped text needs; trailing blank rows are dropped.
pub fn render_panel(text: &Text<'_>, width: u16, theme: &Theme) -> Result<String, fmt::Error> {
    let width = width.max(2 + 2 * PAD_X + 1);
    let inner_width = width - 2 - 2 * PAD_X;
    let content_rows = wrapped_height(text, inner_width);

    let area = Rect::new(0, 0, width, content_rows + 2 + 2 * PAD_Y);
    let mut buf = Buffer::empty(area);

    let block = Block::bordered()
        .border_type(theme.border_type)
        .border_style(theme.border)
        .padding(Padding::symmetric(PAD_X, PAD_Y));

    Paragraph::new(text.clone())
        .block(block)
        .wrap(Wrap { trim: false })
        .render(area, &mut buf);

    let mut out = String::new();
    write_buffer(&buf, &mut out)?;
    Ok(out)
}

/// Render a single line without any frame
pub fn render_line(line: &Line<'_>) -> Result<String, fmt::Error> {
    let width = (line.width() as u16).max(1);
    let area = Rect::new(0, 0, width, 1);
    let mut buf = Buffer::empty(area);
    line.clone().render(area, &mut buf);

    let mut out = String::new();
    write_buffer(&buf, &mut out)?;
    Ok(out.trim_end_matches('\n').to_string())
}

/// Count the rows `text` occupies once wrapped at `width`
///
/// Renders into a scratch buffer sized for the worst case and finds the
/// last non-blank row. The TUI uses the same count to bound scrolling.
pub fn wrapped_height(text: &Text<'_>, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    let w = usize::from(width);
    // Word wrapping can leave rows half empty; double the naive estimate
    let estimate: usize = text
        .lines
        .iter()
        .map(|line| (line.width() / w + 1) * 2)
        .sum();
    let height = estimate.clamp(1, usize::from(u16::MAX / 2)) as u16;

    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    Paragraph::new(text.clone())
        .wrap(Wrap { trim: false })
        .render(area, &mut buf);

    let row_is_blank = |y: u16| {
        let start = usize::from(y) * w;
        buf.content[start..start + w]
            .iter()
            .all(|cell| cell.symbol().trim().is_empty())
    };

    (0..height)
        .rev()
        .find(|&y| !row_is_blank(y))
        .map_or(1, |y| y + 1)
}

/// Serialize every row of `buf`, one line per row
fn write_buffer(buf: &Buffer, out: &mut String) -> fmt::Result {
    let width = usize::from(buf.area.width);
    if width == 0 {
        return Ok(());
    }

    for row in buf.content.chunks(width) {
        let mut current: Option<(Color, Color, Modifier)> = None;
        let mut skip = 0usize;

        for cell in row {
            // Cells covered by the previous wide glyph
            if skip > 0 {
                skip -= 1;
                continue;
            }

            let style = (cell.fg, cell.bg, cell.modifier);
            if current != Some(style) {
                if current.is_some_and(|c| c != (Color::Reset, Color::Reset, Modifier::empty())) {
                    SetAttribute(Attribute::Reset).write_ansi(out)?;
                }
                write_style(style, out)?;
                current = Some(style);
            }

            let symbol = cell.symbol();
            out.push_str(symbol);
            skip = symbol.width().saturating_sub(1);
        }

        if current.is_some_and(|c| c != (Color::Reset, Color::Reset, Modifier::empty())) {
            SetAttribute(Attribute::Reset).write_ansi(out)?;
        }
        out.push('\n');
    }

    Ok(())
}

fn write_style((fg, bg, modifier): (Color, Color, Modifier), out: &mut String) -> fmt::Result {
    if fg != Color::Reset {
        SetForegroundColor(to_crossterm_color(fg)).write_ansi(out)?;
    }
    if bg != Color::Reset {
        SetBackgroundColor(to_crossterm_color(bg)).write_ansi(out)?;
    }

    const ATTRIBUTES: [(Modifier, Attribute); 9] = [
        (Modifier::BOLD, Attribute::Bold),
        (Modifier::DIM, Attribute::Dim),
        (Modifier::ITALIC, Attribute::Italic),
        (Modifier::UNDERLINED, Attribute::Underlined),
        (Modifier::SLOW_BLINK, Attribute::SlowBlink),
        (Modifier::RAPID_BLINK, Attribute::RapidBlink),
        (Modifier::REVERSED, Attribute::Reverse),
        (Modifier::HIDDEN, Attribute::Hidden),
        (Modifier::CROSSED_OUT, Attribute::CrossedOut),
    ];
    for (flag, attribute) in ATTRIBUTES {
        if modifier.contains(flag) {
            SetAttribute(attribute).write_ansi(out)?;
        }
    }

    Ok(())
}

/// Same mapping the crossterm backend uses when drawing to the terminal
fn to_crossterm_color(color: Color) -> CColor {
    match color {
        Color::Reset => CColor::Reset,
        Color::Black => CColor::Black,
        Color::Red => CColor::DarkRed,
        Color::Green => CColor::DarkGreen,
        Color::Yellow => CColor::DarkYellow,
        Color::Blue => CColor::DarkBlue,
        Color::Magenta => CColor::DarkMagenta,
        Color::Cyan => CColor::DarkCyan,
        Color::Gray => CColor::Grey,
        Color::DarkGray => CColor::DarkGrey,
        Color::LightRed => CColor::Red,
        Color::LightGreen => CColor::Green,
        Color::LightBlue => CColor::Blue,
        Color::LightYellow => CColor::Yellow,
        Color::LightMagenta => CColor::Magenta,
        Color::LightCyan => CColor::Cyan,
        Color::White => CColor::White,
        Color::Indexed(i) => CColor::AnsiValue(i),
        Color::Rgb(r, g, b) => CColor::Rgb { r, g, b },
    }
}
