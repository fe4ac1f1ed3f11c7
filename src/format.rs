//! Definition formatter
//!
//! Turns a [`WordEntry`] into styled [`Text`]. The same text is shown in the
//! TUI definition panel and, through [`crate::panel`], printed in one-shot mode.

use crate::dictionary::WordEntry;
use crate::theme::Theme;
use ratatui::text::{Line, Span, Text};

/// Format a single entry
///
/// Layout:
/// ```text
/// word /phonetic/
///
/// 1. noun
///    1. first definition
///       • example sentence
///    2. second definition
///
/// 2. verb
///    ...
/// ```
pub fn format_entry(entry: &WordEntry, theme: &Theme) -> Text<'static> {
    let mut lines: Vec<Line<'static>> = Vec::new();

    let mut headline = vec![Span::styled(entry.word.clone(), theme.keyword)];
    if let Some(phonetic) = entry.display_phonetic() {
        headline.push(Span::raw(" "));
        headline.push(Span::styled(phonetic.to_string(), theme.phonetic));
    }
    lines.push(Line::from(headline));
    lines.push(Line::default());

    for (i, meaning) in entry.meanings.iter().enumerate() {
        lines.push(Line::from(Span::styled(
            format!("{}. {}", i + 1, meaning.part_of_speech),
            theme.part_of_speech,
        )));

        for (j, def) in meaning.definitions.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::raw("   "),
                Span::styled(format!("{}.", j + 1), theme.definition_index),
                Span::raw(" "),
                Span::raw(def.definition.clone()),
            ]));

            if let Some(example) = def.example.as_deref().filter(|e| !e.is_empty()) {
                lines.push(Line::from(vec![
                    Span::raw("      "),
                    Span::styled(format!("• {example}"), theme.example),
                ]));
            }
        }
        lines.push(Line::default());
    }

    Text::from(lines)
}

/// Format the first entry of a lookup result
///
/// Later entries (alternate etymologies, other sources) are dropped.
pub fn format_first(entries: &[WordEntry], theme: &Theme) -> Option<Text<'static>> {
    entries.first().map(|entry| format_entry(entry, theme))
}

/// Concatenate span contents of one line
#[cfg(test)]
pub fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{interpret_response, tests::SERENDIPITY_JSON, Definition, Meaning};

    fn plain_lines(text: &Text<'_>) -> Vec<String> {
        text.lines.iter().map(line_text).collect()
    }

    fn is_pos_header(line: &str) -> bool {
        // "1. noun" - starts at column 0 with a number
        line.chars().next().is_some_and(|c| c.is_ascii_digit())
    }

    fn is_definition_item(line: &str) -> bool {
        line.starts_with("   ")
            && line
                .trim_start()
                .chars()
                .next()
                .is_some_and(|c| c.is_ascii_digit())
    }

    #[test]
    fn formats_headword_and_phonetic() {
        let entries = interpret_response("serendipity", 200, SERENDIPITY_JSON.as_bytes()).unwrap();
        let text = format_entry(&entries[0], &Theme::plain());
        let lines = plain_lines(&text);

        assert_eq!(lines[0], "serendipity /ˌsɛɹ.ənˈdɪp.ɪ.ti/");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "1. noun");
        assert!(lines[3].starts_with("   1. A combination of events"));
        assert!(lines[4].starts_with("   2. An unsought"));
        assert_eq!(lines[5], "      • It was pure serendipity that we met.");
    }

    #[test]
    fn only_first_entry_is_formatted() {
        let entries = interpret_response("serendipity", 200, SERENDIPITY_JSON.as_bytes()).unwrap();
        let text = format_first(&entries, &Theme::plain()).unwrap();
        let lines = plain_lines(&text);

        // Second entry's "verb" meaning must not leak in
        assert!(!lines.iter().any(|l| l.contains("verb")));
        assert!(format_first(&[], &Theme::plain()).is_none());
    }

    #[test]
    fn header_and_item_counts_follow_meanings() {
        let entry = WordEntry {
            word: "run".into(),
            meanings: vec![
                Meaning {
                    part_of_speech: "verb".into(),
                    definitions: vec![
                        Definition {
                            definition: "To move swiftly.".into(),
                            example: Some("She runs every day.".into()),
                        },
                        Definition {
                            definition: "To operate.".into(),
                            example: Some(String::new()),
                        },
                        Definition {
                            definition: "To flow.".into(),
                            example: None,
                        },
                    ],
                },
                Meaning {
                    part_of_speech: "noun".into(),
                    definitions: vec![Definition {
                        definition: "An act of running.".into(),
                        example: None,
                    }],
                },
                Meaning {
                    part_of_speech: "adjective".into(),
                    definitions: vec![],
                },
            ],
            ..Default::default()
        };

        let lines = plain_lines(&format_entry(&entry, &Theme::plain()));

        // No phonetic at all: headline is just the word
        assert_eq!(lines[0], "run");

        let headers: Vec<&String> = lines.iter().filter(|l| is_pos_header(l)).collect();
        assert_eq!(headers, ["1. verb", "2. noun", "3. adjective"]);

        // Count numbered items under each header, in order
        let mut counts = Vec::new();
        for line in &lines {
            if is_pos_header(line) {
                counts.push(Vec::new());
            } else if is_definition_item(line) {
                let n: String = line.trim_start().chars().take_while(char::is_ascii_digit).collect();
                counts.last_mut().unwrap().push(n.parse::<usize>().unwrap());
            }
        }
        assert_eq!(counts, vec![vec![1, 2, 3], vec![1], vec![]]);

        // Empty and missing examples are skipped; only one bullet rendered
        assert_eq!(lines.iter().filter(|l| l.contains('•')).count(), 1);
    }

    #[test]
    fn styles_come_from_theme() {
        let entries = interpret_response("serendipity", 200, SERENDIPITY_JSON.as_bytes()).unwrap();
        let theme = Theme::dark();
        let text = format_entry(&entries[0], &theme);

        assert_eq!(text.lines[0].spans[0].style, theme.keyword);
        assert_eq!(text.lines[0].spans[2].style, theme.phonetic);
        assert_eq!(text.lines[2].spans[0].style, theme.part_of_speech);
        assert_eq!(text.lines[3].spans[1].style, theme.definition_index);
    }
}
