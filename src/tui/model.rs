// ABOUTME: Elm-style TUI model — WaveApp turns terminal and session messages into commands.
// ABOUTME: update() is pure over TuiState; the event loop in app.rs executes the commands.

use crossterm::event::{KeyEvent, KeyEventKind};
use ratatui::Frame;

use crate::session::{SessionCommand, SessionEvent};
use crate::tui::input::{InputResult, handle_key};
use crate::tui::state::TuiState;
use crate::tui::ui;

/// Messages that drive the WaveApp update cycle.
#[derive(Debug)]
pub enum Msg {
    Key(KeyEvent),
    Paste(String),
    Resize,
    Session(SessionEvent),
}

/// What the event loop should do after an update.
#[derive(Debug, PartialEq)]
pub enum Command {
    None,
    Send(SessionCommand),
    Quit,
}

/// The top-level TUI application.
pub struct WaveApp {
    pub state: TuiState,
}

impl WaveApp {
    pub fn new(contract_address: String, dedupe_live_entries: bool) -> Self {
        Self {
            state: TuiState::new(contract_address, dedupe_live_entries),
        }
    }

    pub fn update(&mut self, msg: Msg) -> Command {
        match msg {
            Msg::Session(event) => {
                self.state.apply(event);
                Command::None
            }
            // Release and repeat events would double-type on some terminals.
            Msg::Key(key) if key.kind != KeyEventKind::Press => Command::None,
            Msg::Key(key) => match handle_key(&mut self.state, key) {
                InputResult::None => Command::None,
                InputResult::Connect => Command::Send(SessionCommand::Connect),
                InputResult::Submit(message) => Command::Send(SessionCommand::Submit(message)),
                InputResult::Quit => Command::Quit,
            },
            Msg::Paste(text) => {
                if self.state.can_submit() {
                    self.state.insert_str_at_cursor(&text);
                }
                Command::None
            }
            Msg::Resize => Command::None,
        }
    }

    pub fn view(&mut self, frame: &mut Frame) {
        ui::render(frame, &mut self.state);
    }
}
