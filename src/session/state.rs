// ABOUTME: Session state and the events/commands exchanged with the session manager.
// ABOUTME: SessionState is a pure reducer over SessionEvent; the UI owns one.

use crate::session::entry::Entry;

/// Events sent from the session manager to the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// An account was adopted (silent check or explicit connect).
    AccountConnected(String),
    /// Fresh value of the aggregate counter.
    TotalWaves(u64),
    /// Full entry log from hydration; replaces the current log.
    EntriesLoaded(Vec<Entry>),
    /// A live `NewWave` notification.
    EntryReceived(Entry),
    /// A write was submitted and is pending.
    WriteStarted,
    /// A write failed with the given user-facing reason.
    WriteFailed(String),
    /// A write attempt ended, whatever the outcome.
    WriteFinished,
}

/// Commands sent from the UI to the session manager.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    /// Ask the wallet to authorize an account.
    Connect,
    /// Submit a wave with the given message.
    Submit(String),
    Quit,
}

/// Local mirror of the wallet and contract state.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub account: Option<String>,
    pub total_waves: Option<u64>,
    pub entries: Vec<Entry>,
    pub pending: bool,
    pub last_error: Option<String>,
    dedupe_live_entries: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(true)
    }
}

impl SessionState {
    pub fn new(dedupe_live_entries: bool) -> Self {
        Self {
            account: None,
            total_waves: None,
            entries: Vec::new(),
            pending: false,
            last_error: None,
            dedupe_live_entries,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.account.is_some()
    }

    /// Apply one event from the session manager.
    pub fn apply(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::AccountConnected(account) => self.account = Some(account),
            SessionEvent::TotalWaves(total) => self.total_waves = Some(total),
            SessionEvent::EntriesLoaded(entries) => self.entries = entries,
            SessionEvent::EntryReceived(entry) => {
                self.append_entry(entry);
            }
            SessionEvent::WriteStarted => self.pending = true,
            SessionEvent::WriteFailed(reason) => self.last_error = Some(reason),
            SessionEvent::WriteFinished => self.pending = false,
        }
    }

    /// Append a live entry. Returns false if it was dropped as a duplicate.
    pub fn append_entry(&mut self, entry: Entry) -> bool {
        if self.dedupe_live_entries && self.entries.iter().any(|e| e.same_wave(&entry)) {
            tracing::debug!(address = %entry.address, "dropping duplicate live entry");
            return false;
        }
        self.entries.push(entry);
        true
    }
}
