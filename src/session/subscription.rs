// ABOUTME: Scoped NewWave subscription — registers a listener and forwards entries to the UI.
// ABOUTME: Dropping the guard deregisters the listener and stops the forwarder.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::chain::{ChainError, ListenerId, WaveContract, WaveNotification};
use crate::session::entry::Entry;
use crate::session::state::SessionEvent;

const NOTIFICATION_BUFFER: usize = 64;

/// A live `NewWave` listener on one contract handle.
pub struct Subscription {
    contract: Arc<dyn WaveContract>,
    id: ListenerId,
    forwarder: JoinHandle<()>,
}

impl Subscription {
    /// Register a listener on `contract`, forwarding each notification as
    /// `SessionEvent::EntryReceived` in delivery order.
    pub async fn open(
        contract: Arc<dyn WaveContract>,
        events: mpsc::Sender<SessionEvent>,
    ) -> Result<Self, ChainError> {
        let (tx, mut rx) = mpsc::channel::<WaveNotification>(NOTIFICATION_BUFFER);
        let id = contract.subscribe(tx).await?;

        let forwarder = tokio::spawn(async move {
            while let Some(notification) = rx.recv().await {
                tracing::info!(
                    from = %notification.from,
                    timestamp = notification.timestamp,
                    "NewWave"
                );
                let entry = Entry::from_notification(notification);
                if events.send(SessionEvent::EntryReceived(entry)).await.is_err() {
                    break;
                }
            }
        });

        Ok(Self {
            contract,
            id,
            forwarder,
        })
    }

    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.contract.unsubscribe(self.id);
        self.forwarder.abort();
        tracing::debug!(listener = self.id.0, "subscription released");
    }
}
