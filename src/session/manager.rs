// ABOUTME: Session manager — connects the wallet, hydrates state, keeps the NewWave listener, submits waves.
// ABOUTME: Runs as a background task driven by SessionCommands and reports through SessionEvents.

use tokio::sync::mpsc;

use crate::chain::{Binding, ChainError};
use crate::session::entry::Entry;
use crate::session::state::{SessionCommand, SessionEvent};
use crate::session::subscription::Subscription;

/// Owns the wallet binding and mirrors its state to the UI through events.
///
/// Connection and read failures are logged and otherwise swallowed; only
/// write failures reach the user (as `SessionEvent::WriteFailed`).
pub struct SessionManager {
    binding: Option<Binding>,
    account: Option<String>,
    events: mpsc::Sender<SessionEvent>,
    subscription: Option<Subscription>,
}

impl SessionManager {
    /// `binding` is `None` when no wallet is installed.
    pub fn new(binding: Option<Binding>, events: mpsc::Sender<SessionEvent>) -> Self {
        Self {
            binding,
            account: None,
            events,
            subscription: None,
        }
    }

    pub fn account(&self) -> Option<&str> {
        self.account.as_deref()
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    /// Mount sequence: register the listener, silently look for an authorized
    /// account, and read the counter even when disconnected.
    pub async fn start(&mut self) {
        self.subscribe().await;
        self.check_connection().await;
        if self.account.is_none() {
            self.refresh_total().await;
        }
    }

    /// Adopt an already-authorized account without prompting, then hydrate.
    pub async fn check_connection(&mut self) {
        let Some(binding) = self.binding.clone() else {
            tracing::warn!("no wallet provider; make sure a wallet RPC endpoint is configured");
            return;
        };

        match binding.wallet.accounts().await {
            Ok(accounts) => match accounts.into_iter().next() {
                Some(account) => {
                    tracing::info!(%account, "found an authorized account");
                    self.adopt_account(account).await;
                    self.hydrate().await;
                }
                None => tracing::info!("no authorized account found"),
            },
            Err(e) => tracing::warn!(error = %e, "account check failed"),
        }
    }

    /// Request authorization from the wallet (may prompt), then hydrate.
    pub async fn connect(&mut self) {
        let Some(binding) = self.binding.clone() else {
            tracing::warn!("connect requested but no wallet provider is available");
            return;
        };

        match binding.wallet.request_accounts().await {
            Ok(accounts) => match accounts.into_iter().next() {
                Some(account) => {
                    tracing::info!(%account, "connected");
                    self.adopt_account(account).await;
                    self.hydrate().await;
                }
                None => tracing::warn!("wallet returned no accounts"),
            },
            Err(e) => tracing::warn!(error = %e, "account request failed"),
        }
    }

    /// Read the counter and the full log. Each read is independent; a failed
    /// read leaves the corresponding state untouched.
    pub async fn hydrate(&self) {
        self.refresh_total().await;
        self.refresh_entries().await;
    }

    pub async fn refresh_total(&self) {
        let Some(binding) = &self.binding else {
            tracing::warn!("no wallet provider; skipping total waves read");
            return;
        };
        match binding.contract.total_waves().await {
            Ok(total) => self.emit(SessionEvent::TotalWaves(total)).await,
            Err(e) => tracing::warn!(error = %e, "failed to read total waves"),
        }
    }

    pub async fn refresh_entries(&self) {
        let Some(binding) = &self.binding else {
            tracing::warn!("no wallet provider; skipping wave log read");
            return;
        };
        match binding.contract.all_waves().await {
            Ok(records) => {
                let entries: Vec<Entry> = records.into_iter().map(Entry::from_record).collect();
                tracing::debug!(count = entries.len(), "loaded waves");
                self.emit(SessionEvent::EntriesLoaded(entries)).await;
            }
            Err(e) => tracing::warn!(error = %e, "failed to read waves"),
        }
    }

    /// Register the `NewWave` listener on the current contract handle,
    /// releasing any previous one first.
    pub async fn subscribe(&mut self) {
        self.subscription = None;
        let Some(binding) = &self.binding else {
            return;
        };
        match Subscription::open(binding.contract.clone(), self.events.clone()).await {
            Ok(subscription) => {
                tracing::debug!(listener = subscription.id().0, "listening for NewWave");
                self.subscription = Some(subscription);
            }
            Err(e) => tracing::warn!(error = %e, "failed to subscribe to NewWave"),
        }
    }

    /// Swap in a new binding. The old listener is released before the new one
    /// is registered.
    ///
    /// `run_session` never calls this: the binary builds one binding per run.
    /// It is the entry point for embedders (and tests) that replace the wallet
    /// or contract handle on a live manager.
    pub async fn rebind(&mut self, binding: Binding) {
        self.subscription = None;
        self.binding = Some(binding);
        self.subscribe().await;
    }

    /// Submit a wave. Only issues a transaction when connected and `message`
    /// is non-empty; always ends with `SessionEvent::WriteFinished`.
    pub async fn submit(&self, message: &str) {
        match (&self.binding, &self.account) {
            (Some(binding), Some(account)) if !message.is_empty() => {
                self.emit(SessionEvent::WriteStarted).await;
                match write_wave(binding, account, message).await {
                    Ok(total) => self.emit(SessionEvent::TotalWaves(total)).await,
                    Err(e) => {
                        tracing::error!(error = %e, "wave failed");
                        self.emit(SessionEvent::WriteFailed(e.reason())).await;
                    }
                }
            }
            (None, _) => tracing::warn!("no wallet provider; wave not sent"),
            (_, None) => tracing::warn!("not connected; wave not sent"),
            _ => tracing::warn!("empty message; wave not sent"),
        }
        self.emit(SessionEvent::WriteFinished).await;
    }

    /// Release the listener. Also happens on drop.
    pub fn shutdown(&mut self) {
        self.subscription = None;
    }

    async fn adopt_account(&mut self, account: String) {
        self.account = Some(account.clone());
        self.emit(SessionEvent::AccountConnected(account)).await;
    }

    async fn emit(&self, event: SessionEvent) {
        let _ = self.events.send(event).await;
    }
}

/// The write path: diagnostic count read, send, wait for the receipt, re-read
/// the count. Returns the post-transaction total.
async fn write_wave(binding: &Binding, account: &str, message: &str) -> Result<u64, ChainError> {
    let before = binding.contract.total_waves().await?;
    tracing::debug!(total = before, "retrieved total wave count");

    let tx = binding.contract.wave(account, message).await?;
    tracing::info!(hash = %tx.hash, "mining");

    binding.contract.wait_for_confirmation(&tx).await?;
    tracing::info!(hash = %tx.hash, "mined");

    let after = binding.contract.total_waves().await?;
    tracing::debug!(total = after, "retrieved total wave count");
    Ok(after)
}

/// Run the manager until `Quit` or until the command channel closes.
///
/// Commands stay readable while a write is in flight, so `Quit` ends the task
/// even when confirmation never arrives. Other commands received meanwhile are
/// dropped; the UI does not offer them while pending.
pub async fn run_session(
    mut manager: SessionManager,
    mut commands: mpsc::Receiver<SessionCommand>,
) {
    manager.start().await;

    while let Some(command) = commands.recv().await {
        match command {
            SessionCommand::Quit => break,
            SessionCommand::Connect => manager.connect().await,
            SessionCommand::Submit(message) => {
                let write = manager.submit(&message);
                tokio::pin!(write);
                let quit = loop {
                    tokio::select! {
                        biased;
                        _ = &mut write => break false,
                        command = commands.recv() => match command {
                            None | Some(SessionCommand::Quit) => break true,
                            Some(other) => {
                                tracing::debug!(?other, "write in flight; command dropped")
                            }
                        },
                    }
                };
                if quit {
                    tracing::info!("quit while a write was pending");
                    break;
                }
            }
        }
    }

    manager.shutdown();
}
