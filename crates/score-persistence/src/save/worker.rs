use crate::repository::RowRepository;
use score_domain::Snapshot;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Outcome of a save worker's lifetime
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SaveStats {
    /// Snapshots actually written
    pub saved: usize,
    /// The worker stopped after a failed write
    pub failed: bool,
}

/// Background writer that keeps at most one pending snapshot.
///
/// Queuing never blocks. Snapshots queued while a write is in flight replace
/// each other, so only the newest one is written next. A single task does all
/// writes, which keeps them from interleaving.
pub struct SaveWorker {
    tx: watch::Sender<Option<Snapshot>>,
    handle: JoinHandle<SaveStats>,
}

impl SaveWorker {
    /// Must be called from within a tokio runtime.
    pub fn spawn(repository: RowRepository) -> Self {
        let (tx, mut rx) = watch::channel::<Option<Snapshot>>(None);

        let handle = tokio::spawn(async move {
            let mut stats = SaveStats::default();

            // Yields the pending value once more after the sender is dropped
            while rx.changed().await.is_ok() {
                let pending = rx.borrow_and_update().clone();
                let Some(snapshot) = pending else {
                    continue;
                };

                match repository.save(&snapshot).await {
                    Ok(_) => stats.saved += 1,
                    Err(e) => {
                        tracing::warn!(
                            "Save to {} failed, continuing in memory only: {}",
                            repository.location(),
                            e
                        );
                        stats.failed = true;
                        break;
                    }
                }
            }

            tracing::debug!("Save worker finished: {:?}", stats);
            stats
        });

        Self { tx, handle }
    }

    /// Queue `snapshot`, replacing any snapshot not yet written.
    /// Returns false once the worker has stopped.
    pub fn queue(&self, snapshot: Snapshot) -> bool {
        match self.tx.send(Some(snapshot)) {
            Ok(()) => true,
            Err(_) => {
                tracing::debug!("Save worker stopped - dropping snapshot");
                false
            }
        }
    }

    pub fn is_running(&self) -> bool {
        !self.tx.is_closed()
    }

    /// Flush the pending snapshot, if any, and wait for the worker to exit.
    pub async fn shutdown(self) -> SaveStats {
        let Self { tx, handle } = self;
        drop(tx);
        match handle.await {
            Ok(stats) => stats,
            Err(e) => {
                tracing::error!("Save worker panicked: {}", e);
                SaveStats {
                    saved: 0,
                    failed: true,
                }
            }
        }
    }
}
