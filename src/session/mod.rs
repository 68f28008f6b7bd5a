// ABOUTME: Session module — the wallet/contract session manager and the state it mirrors.
// ABOUTME: Entries, the SessionState reducer, the scoped NewWave subscription, and the manager task.

pub mod entry;
pub mod manager;
pub mod state;
pub mod subscription;

pub use entry::Entry;
pub use manager::{SessionManager, run_session};
pub use state::{SessionCommand, SessionEvent, SessionState};
pub use subscription::Subscription;
