// ABOUTME: TUI state — the mirrored session state plus the message input buffer and scroll.
// ABOUTME: Applies SessionEvents and implements the write-finished reset of the input.

use std::time::Instant;

use crate::session::{SessionEvent, SessionState};

/// Full TUI application state.
pub struct TuiState {
    pub session: SessionState,
    pub input: String,
    pub cursor_pos: usize,
    /// Lines scrolled up from the bottom of the entry log (0 = at bottom).
    pub scroll_offset: u16,
    pub contract_address: String,
    pub session_start: Instant,
}

impl TuiState {
    pub fn new(contract_address: String, dedupe_live_entries: bool) -> Self {
        Self {
            session: SessionState::new(dedupe_live_entries),
            input: String::new(),
            cursor_pos: 0,
            scroll_offset: 0,
            contract_address,
            session_start: Instant::now(),
        }
    }

    /// Apply a session event. A finished write clears the message
    /// unconditionally, success or failure.
    pub fn apply(&mut self, event: SessionEvent) {
        let finished = matches!(event, SessionEvent::WriteFinished);
        self.session.apply(event);
        if finished {
            self.input.clear();
            self.cursor_pos = 0;
        }
    }

    /// Whether the message input and submit control are shown.
    pub fn can_submit(&self) -> bool {
        self.session.is_connected() && !self.session.pending
    }

    /// Take the message, exactly as typed, for submission and mark the write pending.
    /// Returns `None` (and changes nothing) when the message is empty or
    /// submission is not currently possible. The buffer itself is cleared when
    /// the write finishes.
    pub fn submit_input(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        if self.input.is_empty() {
            return None;
        }
        self.session.pending = true;
        Some(self.input.clone())
    }

    /// Clamp the cursor position to the valid character range of the input buffer.
    pub fn clamp_cursor(&mut self) {
        self.cursor_pos = self.cursor_pos.min(self.input_char_len());
    }

    /// Return the current cursor byte index in the UTF-8 input buffer.
    pub fn cursor_byte_index(&self) -> usize {
        char_index_to_byte_index(&self.input, self.cursor_pos)
    }

    pub fn input_char_len(&self) -> usize {
        self.input.chars().count()
    }

    /// Insert a character at the cursor and advance by one character.
    pub fn insert_char_at_cursor(&mut self, c: char) {
        self.clamp_cursor();
        let byte_index = self.cursor_byte_index();
        self.input.insert(byte_index, c);
        self.cursor_pos += 1;
    }

    /// Insert pasted text at the cursor; newlines become spaces.
    pub fn insert_str_at_cursor(&mut self, text: &str) {
        for c in text.chars() {
            self.insert_char_at_cursor(if c == '\n' || c == '\r' { ' ' } else { c });
        }
    }

    /// Delete the character before the cursor (backspace behavior).
    pub fn backspace_char(&mut self) {
        self.clamp_cursor();
        if self.cursor_pos == 0 {
            return;
        }

        let end = self.cursor_byte_index();
        let start = char_index_to_byte_index(&self.input, self.cursor_pos - 1);
        self.input.replace_range(start..end, "");
        self.cursor_pos -= 1;
    }

    /// Delete the character at the cursor (delete behavior).
    pub fn delete_char_at_cursor(&mut self) {
        self.clamp_cursor();
        if self.cursor_pos >= self.input_char_len() {
            return;
        }

        let start = self.cursor_byte_index();
        let end = char_index_to_byte_index(&self.input, self.cursor_pos + 1);
        self.input.replace_range(start..end, "");
    }

    pub fn move_cursor_left(&mut self) {
        self.clamp_cursor();
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        self.clamp_cursor();
        if self.cursor_pos < self.input_char_len() {
            self.cursor_pos += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_pos = self.input_char_len();
    }
}

fn char_index_to_byte_index(s: &str, char_index: usize) -> usize {
    if char_index == 0 {
        return 0;
    }

    match s.char_indices().nth(char_index) {
        Some((idx, _)) => idx,
        None => s.len(),
    }
}
