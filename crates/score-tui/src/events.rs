use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};
use std::time::Duration;
use tokio::sync::mpsc;

const POLL_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Clone)]
pub enum Event {
    Key(KeyEvent),
    Resize,
    Tick,
}

/// Forwards terminal input to the app on a channel.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
    shutdown_tx: mpsc::UnboundedSender<()>,
}

impl EventHandler {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let (shutdown_tx, mut shutdown_rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = shutdown_rx.recv() => break,
                    _ = tokio::time::sleep(POLL_INTERVAL) => {
                        let next = if event::poll(Duration::ZERO).unwrap_or(false) {
                            match event::read() {
                                Ok(CrosstermEvent::Key(key)) => Event::Key(key),
                                Ok(CrosstermEvent::Resize(_, _)) => Event::Resize,
                                Ok(_) => continue,
                                Err(e) => {
                                    tracing::warn!("Failed to read terminal event: {}", e);
                                    continue;
                                }
                            }
                        } else {
                            Event::Tick
                        };

                        if tx.send(next).is_err() {
                            break;
                        }
                    }
                }
            }
        });

        Self { rx, shutdown_tx }
    }

    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }

    pub fn stop(&self) {
        let _ = self.shutdown_tx.send(());
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
