// ABOUTME: Message sources for the TUI loop — terminal events and session events as one stream.
// ABOUTME: Wraps the session mpsc::Receiver and crossterm's EventStream into Msg streams.

use std::io;

use crossterm::event::Event;
use futures::stream::{BoxStream, Stream};
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

use crate::session::SessionEvent;
use crate::tui::model::Msg;

/// Map raw terminal events to messages. Read errors are logged and skipped.
pub fn terminal_messages<S>(events: S) -> impl Stream<Item = Msg>
where
    S: Stream<Item = io::Result<Event>>,
{
    events.filter_map(|event| async move {
        match event {
            Ok(Event::Key(key)) => Some(Msg::Key(key)),
            Ok(Event::Paste(text)) => Some(Msg::Paste(text)),
            Ok(Event::Resize(_, _)) => Some(Msg::Resize),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!(error = %e, "terminal event read failed");
                None
            }
        }
    })
}

/// Bridge the session manager's event channel into messages.
pub fn session_messages(rx: mpsc::Receiver<SessionEvent>) -> impl Stream<Item = Msg> {
    ReceiverStream::new(rx).map(Msg::Session)
}

/// Merge both sources; whichever is ready first is delivered first.
pub fn app_messages<T, S>(terminal: T, session: S) -> BoxStream<'static, Msg>
where
    T: Stream<Item = Msg> + Send + 'static,
    S: Stream<Item = Msg> + Send + 'static,
{
    futures::stream::select(terminal, session).boxed()
}
