use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent};
use futures::StreamExt;
use tokio::sync::mpsc;

use crate::system::snapshot::Snapshot;
use crate::system::source::MetricsSource;

/// Everything the event loop reacts to. All producers post into one channel and
/// the loop handles messages one at a time, in arrival order.
#[derive(Clone, Debug)]
pub enum Message {
    Tick,
    SnapshotReady(Snapshot),
    Key(KeyEvent),
    Resize { width: u16, height: u16 },
    /// The terminal input stream failed or ended.
    InputFailed(String),
}

pub struct EventHandler {
    tx: mpsc::UnboundedSender<Message>,
    rx: mpsc::UnboundedReceiver<Message>,
    _input_task: Option<tokio::task::JoinHandle<()>>,
}

impl EventHandler {
    /// Starts forwarding terminal input into the message channel. Must be
    /// called inside a tokio runtime.
    pub fn attached() -> Self {
        let mut handler = Self::detached();
        handler._input_task = Some(spawn_input_reader(handler.tx.clone()));
        handler
    }

    /// A channel with no terminal input attached.
    pub fn detached() -> Self {
        let (tx, rx) = mpsc::unbounded_channel::<Message>();
        Self {
            tx,
            rx,
            _input_task: None,
        }
    }

    pub fn sender(&self) -> mpsc::UnboundedSender<Message> {
        self.tx.clone()
    }

    pub async fn next(&mut self) -> Option<Message> {
        self.rx.recv().await
    }
}

fn spawn_input_reader(tx: mpsc::UnboundedSender<Message>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            let message = match reader.next().await {
                Some(Ok(CrosstermEvent::Key(key))) => Message::Key(key),
                Some(Ok(CrosstermEvent::Resize(width, height))) => Message::Resize { width, height },
                Some(Ok(_)) => continue,
                Some(Err(err)) => Message::InputFailed(err.to_string()),
                None => Message::InputFailed("terminal input stream closed".to_string()),
            };
            let failed = matches!(message, Message::InputFailed(_));
            if tx.send(message).is_err() || failed {
                break;
            }
        }
    })
}

/// Posts a `Tick` once `period` has elapsed.
pub fn schedule_tick(tx: mpsc::UnboundedSender<Message>, period: Duration) {
    tokio::spawn(async move {
        tokio::time::sleep(period).await;
        let _ = tx.send(Message::Tick);
    });
}

/// Runs one sampling pass on the blocking pool and posts the result.
///
/// Requests are never de-duplicated: a slow source can have several passes in
/// flight. If the loop has already exited the result is dropped.
pub fn request_sample(tx: mpsc::UnboundedSender<Message>, source: Arc<dyn MetricsSource>) {
    tokio::spawn(async move {
        match tokio::task::spawn_blocking(move || source.sample()).await {
            Ok(snapshot) => {
                let _ = tx.send(Message::SnapshotReady(snapshot));
            }
            Err(err) => tracing::warn!(error = %err, "sampling job failed"),
        }
    });
}
