// ABOUTME: Keyboard input handling for the TUI — translates key events into actions.
// ABOUTME: Enter connects while disconnected and submits a wave while connected.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::state::TuiState;

/// The result of processing a key event.
#[derive(Debug, PartialEq)]
pub enum InputResult {
    /// No action needed.
    None,
    /// User asked to connect the wallet.
    Connect,
    /// User submitted a wave message.
    Submit(String),
    /// User wants to quit.
    Quit,
}

/// Process a key event against the current TUI state and return the resulting action.
pub fn handle_key(state: &mut TuiState, key: KeyEvent) -> InputResult {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return InputResult::Quit;
    }

    // Scroll keys work in every mode.
    if handle_scroll_key(state, key.code) {
        return InputResult::None;
    }

    if key.code == KeyCode::Esc {
        return InputResult::Quit;
    }

    if !state.session.is_connected() {
        return match key.code {
            KeyCode::Enter => InputResult::Connect,
            _ => InputResult::None,
        };
    }

    // The input is hidden while a write is pending.
    if state.session.pending {
        return InputResult::None;
    }

    match key.code {
        KeyCode::Enter => match state.submit_input() {
            Some(message) => InputResult::Submit(message),
            None => InputResult::None,
        },
        KeyCode::Char(c) => {
            state.insert_char_at_cursor(c);
            InputResult::None
        }
        KeyCode::Backspace => {
            state.backspace_char();
            InputResult::None
        }
        KeyCode::Delete => {
            state.delete_char_at_cursor();
            InputResult::None
        }
        KeyCode::Left => {
            state.move_cursor_left();
            InputResult::None
        }
        KeyCode::Right => {
            state.move_cursor_right();
            InputResult::None
        }
        KeyCode::Home => {
            state.move_cursor_home();
            InputResult::None
        }
        KeyCode::End => {
            state.move_cursor_end();
            InputResult::None
        }
        _ => InputResult::None,
    }
}

fn handle_scroll_key(state: &mut TuiState, key: KeyCode) -> bool {
    match key {
        KeyCode::PageUp => {
            state.scroll_offset = state.scroll_offset.saturating_add(10);
            true
        }
        KeyCode::PageDown => {
            state.scroll_offset = state.scroll_offset.saturating_sub(10);
            true
        }
        KeyCode::Up => {
            state.scroll_offset = state.scroll_offset.saturating_add(1);
            true
        }
        KeyCode::Down => {
            state.scroll_offset = state.scroll_offset.saturating_sub(1);
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionEvent;

    fn make_key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn connected() -> TuiState {
        let mut state = TuiState::new("0xC0ffee".to_string(), true);
        state.apply(SessionEvent::AccountConnected("0xA".to_string()));
        state
    }

    #[test]
    fn enter_while_disconnected_connects() {
        let mut state = TuiState::new("0xC0ffee".to_string(), true);
        assert_eq!(handle_key(&mut state, make_key(KeyCode::Enter)), InputResult::Connect);
    }

    #[test]
    fn typing_while_disconnected_is_ignored() {
        let mut state = TuiState::new("0xC0ffee".to_string(), true);
        handle_key(&mut state, make_key(KeyCode::Char('g')));
        assert_eq!(state.input, "");
    }

    #[test]
    fn typing_appends_to_input() {
        let mut state = connected();
        handle_key(&mut state, make_key(KeyCode::Char('g')));
        handle_key(&mut state, make_key(KeyCode::Char('m')));
        assert_eq!(state.input, "gm");
        assert_eq!(state.cursor_pos, 2);
    }

    #[test]
    fn enter_submits_input() {
        let mut state = connected();
        state.input = "gm".to_string();
        state.cursor_pos = 2;
        let result = handle_key(&mut state, make_key(KeyCode::Enter));
        assert_eq!(result, InputResult::Submit("gm".to_string()));
        assert!(state.session.pending);
    }

    #[test]
    fn enter_on_empty_does_nothing() {
        let mut state = connected();
        assert_eq!(handle_key(&mut state, make_key(KeyCode::Enter)), InputResult::None);
        assert!(!state.session.pending);
    }

    #[test]
    fn pending_ignores_input() {
        let mut state = connected();
        state.apply(SessionEvent::WriteStarted);
        handle_key(&mut state, make_key(KeyCode::Char('x')));
        assert_eq!(state.input, "");
        assert_eq!(handle_key(&mut state, make_key(KeyCode::Enter)), InputResult::None);
    }

    #[test]
    fn backspace_deletes() {
        let mut state = connected();
        state.input = "gmm".to_string();
        state.cursor_pos = 3;
        handle_key(&mut state, make_key(KeyCode::Backspace));
        assert_eq!(state.input, "gm");
    }

    #[test]
    fn ctrl_c_quits() {
        let mut state = connected();
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(&mut state, key), InputResult::Quit);
    }

    #[test]
    fn esc_quits_in_every_mode() {
        let mut state = TuiState::new("0xC0ffee".to_string(), true);
        assert_eq!(handle_key(&mut state, make_key(KeyCode::Esc)), InputResult::Quit);
        let mut state = connected();
        state.apply(SessionEvent::WriteStarted);
        assert_eq!(handle_key(&mut state, make_key(KeyCode::Esc)), InputResult::Quit);
    }

    #[test]
    fn scroll_keys_work_while_pending() {
        let mut state = connected();
        state.apply(SessionEvent::WriteStarted);
        handle_key(&mut state, make_key(KeyCode::PageUp));
        assert_eq!(state.scroll_offset, 10);
        handle_key(&mut state, make_key(KeyCode::Down));
        assert_eq!(state.scroll_offset, 9);
        handle_key(&mut state, make_key(KeyCode::PageDown));
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn unicode_editing_through_key_events() {
        let mut state = connected();
        handle_key(&mut state, make_key(KeyCode::Char('a')));
        handle_key(&mut state, make_key(KeyCode::Char('👋')));
        handle_key(&mut state, make_key(KeyCode::Char('b')));
        handle_key(&mut state, make_key(KeyCode::Left));
        handle_key(&mut state, make_key(KeyCode::Backspace));
        assert_eq!(state.input, "ab");
        handle_key(&mut state, make_key(KeyCode::Home));
        handle_key(&mut state, make_key(KeyCode::Delete));
        assert_eq!(state.input, "b");
        handle_key(&mut state, make_key(KeyCode::End));
        assert_eq!(state.cursor_pos, 1);
    }
}
