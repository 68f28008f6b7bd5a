// ABOUTME: Entry log widget — renders wave entries as labelled cards of styled ratatui Lines.
// ABOUTME: Cards appear in EntryLog order with a blank separator between them.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::session::Entry;

/// Render the entry log into styled Lines, one three-line card per entry.
pub fn render_entry_lines(entries: &[Entry]) -> Vec<Line<'static>> {
    let label = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let mut lines = Vec::with_capacity(entries.len() * 4);

    for (idx, entry) in entries.iter().enumerate() {
        if idx > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(vec![
            Span::styled("Address: ", label),
            Span::styled(entry.address.clone(), Style::default().fg(Color::Cyan)),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Time: ", label),
            Span::styled(
                entry.formatted_timestamp(),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Message: ", label),
            Span::raw(entry.message.clone()),
        ]));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.to_string()).collect()
    }

    #[test]
    fn empty_log_renders_nothing() {
        assert!(render_entry_lines(&[]).is_empty());
    }

    #[test]
    fn single_entry_is_a_three_line_card() {
        let lines = render_entry_lines(&[Entry::new("0xAbC", 0, "gm")]);
        assert_eq!(lines.len(), 3);
        assert_eq!(text(&lines[0]), "Address: 0xAbC");
        assert_eq!(text(&lines[1]), "Time: Thu Jan 01 1970 00:00:00 UTC");
        assert_eq!(text(&lines[2]), "Message: gm");
    }

    #[test]
    fn cards_are_separated_and_ordered() {
        let entries = vec![Entry::new("0xA", 2, "second"), Entry::new("0xB", 1, "first")];
        let lines = render_entry_lines(&entries);
        // card, blank separator, card
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[3].spans.len(), 0);
        assert_eq!(text(&lines[2]), "Message: second");
        assert_eq!(text(&lines[6]), "Message: first");
    }

    #[test]
    fn labels_are_bold_yellow() {
        let lines = render_entry_lines(&[Entry::new("0xA", 0, "hi")]);
        let label = &lines[0].spans[0];
        assert_eq!(label.style.fg, Some(Color::Yellow));
        assert!(label.style.add_modifier.contains(Modifier::BOLD));
    }
}
