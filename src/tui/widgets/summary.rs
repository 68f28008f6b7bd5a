// ABOUTME: Summary widgets — header, bio, error banner, total counter and connect hint.
// ABOUTME: Pure functions returning ratatui Lines so the layout code stays small.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub const BIO: &str = "Connect your Ethereum wallet and wave at me!";

/// Header and bio.
pub fn header_lines() -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::raw(" 👋 "),
            Span::styled(
                "Hey there!",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!(" {BIO}"),
            Style::default().fg(Color::Gray),
        )),
    ]
}

/// The error banner text for a failed write.
pub fn error_line(reason: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            " ✗ ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::styled(reason.to_string(), Style::default().fg(Color::Red)),
    ])
}

/// The counter line: a loading state until the first read resolves.
pub fn total_line(total: Option<u64>) -> Line<'static> {
    match total {
        Some(n) => Line::from(Span::styled(
            format!(" Total waves number is: {n}"),
            Style::default().fg(Color::White),
        )),
        None => Line::from(Span::styled(
            " Loading waves number...",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
    }
}

/// Shown in place of the counter and input while a write is pending.
pub fn pending_line() -> Line<'static> {
    Line::from(Span::styled(
        " Waving, please wait...",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))
}

/// The wallet-connect control, shown while disconnected.
pub fn connect_line() -> Line<'static> {
    Line::from(vec![
        Span::styled(
            " [ Connect Wallet ] ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" press Enter", Style::default().fg(Color::DarkGray)),
    ])
}
