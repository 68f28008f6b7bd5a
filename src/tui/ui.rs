// ABOUTME: Main TUI rendering function — assembles header, counter, input, entry log, and status bar.
// ABOUTME: Splits the terminal frame into vertical layout chunks and delegates to widgets.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Position};
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::tui::state::TuiState;
use crate::tui::widgets::entries::render_entry_lines;
use crate::tui::widgets::status::{StatusBarParams, status_line};
use crate::tui::widgets::summary::{
    connect_line, error_line, header_lines, pending_line, total_line,
};

const INPUT_PLACEHOLDER: &str = "Enter a message...";

/// Render the full TUI screen layout to the given frame.
pub fn render(frame: &mut Frame, state: &mut TuiState) {
    let area = frame.area();

    let has_error = state.session.last_error.is_some();
    let pending = state.session.pending;
    let connected = state.session.is_connected();
    let show_input = state.can_submit();

    // Dynamic layout: optional rows only take space when shown.
    let mut constraints = vec![Constraint::Length(2)]; // Header + bio
    if has_error {
        constraints.push(Constraint::Length(1)); // Error banner
    }
    constraints.push(Constraint::Length(1)); // Counter or pending indicator
    if show_input {
        constraints.push(Constraint::Length(3)); // Message input
    }
    if !connected {
        constraints.push(Constraint::Length(1)); // Connect control
    }
    constraints.push(Constraint::Min(3)); // Entry log
    constraints.push(Constraint::Length(1)); // Status bar

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);
    let mut next = 0;
    let mut take = || {
        let chunk = chunks[next];
        next += 1;
        chunk
    };

    frame.render_widget(Paragraph::new(header_lines()), take());

    if let Some(reason) = &state.session.last_error {
        frame.render_widget(
            Paragraph::new(error_line(reason)).wrap(Wrap { trim: true }),
            take(),
        );
    }

    let counter = if pending {
        pending_line()
    } else {
        total_line(state.session.total_waves)
    };
    frame.render_widget(Paragraph::new(counter), take());

    if show_input {
        let input_chunk = take();
        let input_block = Block::default()
            .borders(Borders::TOP | Borders::BOTTOM)
            .title(Span::styled(
                " Wave at Me (Enter) ",
                Style::default().fg(Color::Cyan),
            ));
        let input = if state.input.is_empty() {
            Span::styled(INPUT_PLACEHOLDER, Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(state.input.clone())
        };
        frame.render_widget(Paragraph::new(input).block(input_block), input_chunk);

        if input_chunk.width > 0 && input_chunk.height > 1 {
            state.clamp_cursor();
            let prefix: String = state.input.chars().take(state.cursor_pos).collect();
            let visual_col = UnicodeWidthStr::width(prefix.as_str());
            let max_visual_col = input_chunk.width.saturating_sub(1) as usize;
            let cursor_x = input_chunk
                .x
                .saturating_add(visual_col.min(max_visual_col) as u16);
            // +1 for the top border.
            let cursor_y = input_chunk.y.saturating_add(1);
            frame.set_cursor_position(Position::new(cursor_x, cursor_y));
        }
    }

    if !connected {
        frame.render_widget(Paragraph::new(connect_line()), take());
    }

    // Entry log
    let entries_chunk = take();
    let entries_paragraph =
        Paragraph::new(render_entry_lines(&state.session.entries)).wrap(Wrap { trim: false });

    // Use ratatui's own line_count() so the scroll math matches its wrapping.
    let total_lines = entries_paragraph.line_count(entries_chunk.width);
    let (scroll, offset) = scroll_window(total_lines, entries_chunk.height, state.scroll_offset);
    state.scroll_offset = offset;
    frame.render_widget(entries_paragraph.scroll((scroll, 0)), entries_chunk);

    // Status bar
    let status = status_line(&StatusBarParams {
        account: state.session.account.as_deref(),
        contract_address: &state.contract_address,
        session_start: state.session_start,
        pending,
    });
    frame.render_widget(Paragraph::new(status), take());
}

/// Scroll position for a log of `total_lines` shown in `height` rows.
///
/// `offset` counts lines up from the bottom (0 = pinned to the newest entry).
/// Returns the top line to show and the offset clamped to the content.
/// Line counts beyond `u16::MAX` saturate rather than wrap.
fn scroll_window(total_lines: usize, height: u16, offset: u16) -> (u16, u16) {
    let total_lines = u16::try_from(total_lines).unwrap_or(u16::MAX);
    let max_scroll = total_lines.saturating_sub(height);
    let offset = offset.min(max_scroll);
    (max_scroll - offset, offset)
}
