// Screen layout: breakpoints and the fixed header / content / footer split
//
// The same numbers drive drawing (`split`) and the size handed to the
// panels on resize (`content_size`), so wrapping and scrolling agree with
// what is actually on screen.

use ratatui::layout::{Constraint, Layout, Margin, Rect};

/// Columns of padding on the left and right of the screen
pub const H_PADDING: u16 = 2;
/// Rows of padding above and below
pub const V_PADDING: u16 = 1;

const HEADER_HEIGHT: u16 = 1;
const FOOTER_HEIGHT: u16 = 1;
const BORDER: u16 = 1;

/// Width thresholds for layout decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// < 60 cols: Split pane, minimal terminal
    Compact,
    /// 60-99 cols: Half-screen
    Normal,
    /// 100+ cols: Full terminal
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        self.ordinal() >= min.ordinal()
    }

    fn ordinal(&self) -> u8 {
        match self {
            Breakpoint::Compact => 0,
            Breakpoint::Normal => 1,
            Breakpoint::Wide => 2,
        }
    }
}

/// Areas of one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub header: Rect,
    /// Bordered panel, border included
    pub content: Rect,
    pub footer: Rect,
}

impl AppLayout {
    /// Area inside the content border
    #[cfg(test)]
    pub fn content_inner(&self) -> Rect {
        self.content.inner(Margin::new(BORDER, BORDER))
    }
}

/// Split the terminal area into header, bordered content and footer
pub fn split(area: Rect) -> AppLayout {
    let padded = area.inner(Margin::new(H_PADDING, V_PADDING));
    let [header, content, footer] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .areas(padded);

    AppLayout {
        header,
        content,
        footer,
    }
}

/// Size inside the content border for a terminal of `width` x `height`
pub fn content_size(width: u16, height: u16) -> (u16, u16) {
    let w = width.saturating_sub(2 * H_PADDING + 2 * BORDER);
    let h = height.saturating_sub(2 * V_PADDING + HEADER_HEIGHT + FOOTER_HEIGHT + 2 * BORDER);
    (w, h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_thresholds() {
        assert_eq!(Breakpoint::from_width(40), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(59), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(60), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(99), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(100), Breakpoint::Wide);
    }

    #[test]
    fn at_least_comparisons() {
        let normal = Breakpoint::Normal;
        assert!(normal.at_least(Breakpoint::Compact));
        assert!(normal.at_least(Breakpoint::Normal));
        assert!(!normal.at_least(Breakpoint::Wide));
    }

    #[test]
    fn content_size_matches_drawn_layout() {
        let (w, h) = content_size(80, 24);
        assert_eq!((w, h), (74, 18));

        let layout = split(Rect::new(0, 0, 80, 24));
        let inner = layout.content_inner();
        assert_eq!((inner.width, inner.height), (w, h));
        assert_eq!(layout.header, Rect::new(2, 1, 76, 1));
        assert_eq!(layout.footer, Rect::new(2, 22, 76, 1));
    }

    #[test]
    fn tiny_terminal_does_not_underflow() {
        assert_eq!(content_size(3, 2), (0, 0));
    }
}
