// ABOUTME: Status bar widget — renders account, contract, elapsed time, and pending indicator.
// ABOUTME: Displayed at the bottom of the TUI as a single-line summary.

use std::time::Instant;

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

/// Inputs for the status bar.
pub struct StatusBarParams<'a> {
    pub account: Option<&'a str>,
    pub contract_address: &'a str,
    pub session_start: Instant,
    pub pending: bool,
}

/// Render the status bar line.
pub fn status_line(params: &StatusBarParams<'_>) -> Line<'static> {
    let dim = Style::default().fg(Color::DarkGray);
    let account = match params.account {
        Some(account) => Span::styled(
            format!(" {} ", short_address(account)),
            Style::default().fg(Color::Green),
        ),
        None => Span::styled(" not connected ", Style::default().fg(Color::Red)),
    };

    let mut spans = vec![
        account,
        Span::styled("| ", dim),
        Span::styled(
            format!("contract {} ", short_address(params.contract_address)),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled("| ", dim),
        Span::styled(
            format!("{} ", format_elapsed(params.session_start.elapsed().as_secs())),
            Style::default().fg(Color::White),
        ),
    ];

    if params.pending {
        spans.push(Span::styled("| ", dim));
        spans.push(Span::styled(
            "mining... ",
            Style::default().fg(Color::Yellow),
        ));
    }

    Line::from(spans)
}

/// Shorten a hex address to `0x1234…abcd`. Short strings pass through.
pub fn short_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 12 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}…{tail}")
}

/// Format whole seconds as `Ns`, `MmSSs` or `HhMMm`.
pub fn format_elapsed(seconds: u64) -> String {
    if seconds >= 3600 {
        format!("{}h{:02}m", seconds / 3600, (seconds % 3600) / 60)
    } else if seconds >= 60 {
        format!("{}m{:02}s", seconds / 60, seconds % 60)
    } else {
        format!("{seconds}s")
    }
}
