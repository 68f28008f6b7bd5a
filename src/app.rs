// ABOUTME: App orchestrator — wires together the chain binding, session manager, and TUI.
// ABOUTME: Spawns the session task then runs the terminal event loop until quit.

use std::time::Duration;

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste, EventStream};
use futures::StreamExt;
use futures::stream::BoxStream;
use ratatui::DefaultTerminal;
use tokio::sync::mpsc;

use crate::chain;
use crate::config::Config;
use crate::session::{SessionCommand, SessionEvent, SessionManager, run_session};
use crate::tui::TuiState;
use crate::tui::model::{Command, Msg, WaveApp};
use crate::tui::subscriptions::{app_messages, session_messages, terminal_messages};

/// How long the session task gets to release its listener after `Quit`.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(3);

/// Top-level application that orchestrates all subsystems.
pub struct App {
    config: Config,
}

impl App {
    /// Create a new app with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run the application: bind the contract, launch the session task, and drive the TUI.
    pub async fn run(self) -> anyhow::Result<()> {
        let binding = chain::create_binding(&self.config.chain)?;
        match &binding {
            Some(_) => tracing::info!(
                contract = %self.config.chain.contract_address,
                "wallet provider configured"
            ),
            None => tracing::warn!("no wallet provider configured; running read-only"),
        }

        // Channels for session <-> TUI communication.
        let (command_tx, command_rx) = mpsc::channel::<SessionCommand>(16);
        let (event_tx, event_rx) = mpsc::channel::<SessionEvent>(64);

        let manager = SessionManager::new(binding, event_tx);
        let mut session_handle = tokio::spawn(run_session(manager, command_rx));

        let mut app = WaveApp::new(
            self.config.chain.contract_address.clone(),
            self.config.session.dedupe_live_entries,
        );

        let mut terminal = ratatui::try_init()?;
        let _ = crossterm::execute!(std::io::stdout(), EnableBracketedPaste);

        let messages = app_messages(
            terminal_messages(EventStream::new()),
            session_messages(event_rx),
        );
        let result = run_loop(&mut terminal, &mut app, messages, &command_tx).await;

        let _ = crossterm::execute!(std::io::stdout(), DisableBracketedPaste);
        ratatui::restore();

        // Signal the session to quit and wait for it to release its listener.
        let shutdown = async {
            let _ = command_tx.send(SessionCommand::Quit).await;
            drop(command_tx);
            (&mut session_handle).await
        };
        let outcome = tokio::time::timeout(SHUTDOWN_GRACE, shutdown).await;
        match outcome {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::error!(error = %e, "session task failed"),
            Err(_) => {
                tracing::warn!("session task did not stop in time; aborting");
                session_handle.abort();
            }
        }

        if result.is_ok() {
            print_exit_screen(&app.state);
        }
        result
    }
}

/// Draw, wait for the next message, update, repeat until the model asks to quit
/// or every message source is exhausted.
async fn run_loop(
    terminal: &mut DefaultTerminal,
    app: &mut WaveApp,
    mut messages: BoxStream<'static, Msg>,
    commands: &mpsc::Sender<SessionCommand>,
) -> anyhow::Result<()> {
    terminal.draw(|frame| app.view(frame))?;

    while let Some(msg) = messages.next().await {
        match app.update(msg) {
            Command::None => {}
            Command::Send(command) => {
                tracing::debug!(?command, "sending session command");
                if commands.send(command).await.is_err() {
                    tracing::error!("session task has stopped; exiting");
                    break;
                }
            }
            Command::Quit => break,
        }
        terminal.draw(|frame| app.view(frame))?;
    }

    Ok(())
}

/// Print a farewell screen after the TUI exits.
fn print_exit_screen(state: &TuiState) {
    let elapsed_secs = state.session_start.elapsed().as_secs();
    let elapsed = if elapsed_secs >= 3600 {
        format!("{}h {:02}m", elapsed_secs / 3600, (elapsed_secs % 3600) / 60)
    } else {
        format!("{}m {:02}s", elapsed_secs / 60, elapsed_secs % 60)
    };
    let account = state
        .session
        .account
        .as_deref()
        .unwrap_or("no wallet connected");
    let entry_count = state.session.entries.len();

    println!();
    println!("  \u{1f44b} \x1b[1mThanks for waving!\x1b[0m");
    println!();
    println!("  \u{1f45b} Account: {account}");
    println!("  \u{1f550} Session lasted {elapsed} with {entry_count} waves on the board.");
    println!();
}
