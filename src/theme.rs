// Theme support for the TUI and one-shot output
//
// A theme is built once at startup and passed by reference to everything
// that draws: the formatter, the ANSI panel renderer and the TUI widgets.
// Colors use the 256-color ANSI palette so they look the same in both paths.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

/// Style table for all rendered text
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,

    // Definition text
    pub keyword: Style,
    pub phonetic: Style,
    pub part_of_speech: Style,
    pub definition_index: Style,
    pub example: Style,

    // Chrome
    pub title: Style,
    pub border: Style,
    pub border_type: BorderType,
    pub muted: Style,
    pub selected: Style,
    pub placeholder: Style,

    // Help panel
    pub help_header: Style,
    pub help_section: Style,
    pub help_text: Style,
    pub help_command: Style,
    pub help_example: Style,
}

impl Theme {
    /// Pick a theme for stdout: colors on a terminal, plain text when piped
    pub fn for_stdout(is_terminal: bool) -> Self {
        if is_terminal {
            Self::dark()
        } else {
            Self::plain()
        }
    }

    /// Default theme - pink headwords, cyan borders
    pub fn dark() -> Self {
        let fg = |n: u8| Style::default().fg(Color::Indexed(n));

        Self {
            name: "dark",
            keyword: fg(205).add_modifier(Modifier::BOLD),
            phonetic: fg(246).add_modifier(Modifier::ITALIC),
            part_of_speech: fg(213).add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            definition_index: fg(240),
            example: fg(246).add_modifier(Modifier::ITALIC),
            title: fg(205).add_modifier(Modifier::BOLD),
            border: fg(51),
            border_type: BorderType::Rounded,
            muted: fg(241),
            selected: fg(205)
                .add_modifier(Modifier::BOLD)
                .add_modifier(Modifier::REVERSED),
            placeholder: fg(240),
            help_header: fg(205).add_modifier(Modifier::BOLD),
            help_section: fg(213).add_modifier(Modifier::BOLD),
            help_text: fg(252),
            help_command: fg(39).add_modifier(Modifier::BOLD),
            help_example: fg(246).add_modifier(Modifier::ITALIC),
        }
    }

    /// No colors or attributes; output is safe to pipe into files
    pub fn plain() -> Self {
        let none = Style::default();

        Self {
            name: "plain",
            keyword: none,
            phonetic: none,
            part_of_speech: none,
            definition_index: none,
            example: none,
            title: none,
            border: none,
            border_type: BorderType::Rounded,
            muted: none,
            selected: none.add_modifier(Modifier::REVERSED),
            placeholder: none,
            help_header: none,
            help_section: none,
            help_text: none,
            help_command: none,
            help_example: none,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stdout_theme_follows_tty() {
        assert_eq!(Theme::for_stdout(true).name, "dark");
        assert_eq!(Theme::for_stdout(false).name, "plain");
    }

    #[test]
    fn plain_theme_has_no_colors() {
        let theme = Theme::plain();
        for style in [theme.keyword, theme.part_of_speech, theme.border, theme.help_command] {
            assert_eq!(style.fg, None);
            assert!(style.add_modifier.is_empty());
        }
    }
}
