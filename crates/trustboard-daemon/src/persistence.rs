// crates/trustboard-daemon/src/persistence.rs
//
// Snapshot restore at startup and periodic flushing while running.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use trustboard_core::TrustboardError;
use trustboard_store::{InMemoryRepository, Snapshot};

/// Build the repository from the snapshot at `path`, or empty if none exists.
pub async fn restore(path: &Path) -> Result<InMemoryRepository, TrustboardError> {
    match Snapshot::load(path).await? {
        Some(snapshot) => {
            tracing::info!(
                "Restoring snapshot from {} ({} influencers, {} claims, saved {})",
                path.display(),
                snapshot.influencers.len(),
                snapshot.claims.len(),
                snapshot.saved_at
            );
            InMemoryRepository::from_snapshot(snapshot)
        }
        None => {
            tracing::info!("No snapshot at {}; starting empty", path.display());
            Ok(InMemoryRepository::new())
        }
    }
}

/// Writes the repository to disk on an interval and once more at shutdown.
pub struct SnapshotFlusher {
    repository: Arc<InMemoryRepository>,
    path: PathBuf,
    interval: Duration,
}

impl SnapshotFlusher {
    pub fn new(repository: Arc<InMemoryRepository>, path: PathBuf, interval_secs: u64) -> Self {
        Self {
            repository,
            path,
            interval: Duration::from_secs(interval_secs.max(1)),
        }
    }

    /// Write the current repository state.
    pub async fn flush(&self) -> Result<(), TrustboardError> {
        self.repository.snapshot().await.save(&self.path).await
    }

    /// Flush every interval until `shutdown` flips or its sender is dropped,
    /// then flush a final time.
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) {
        tracing::info!(
            "Snapshot flusher started (every {}s, {})",
            self.interval.as_secs(),
            self.path.display()
        );

        let mut ticker = tokio::time::interval(self.interval);
        // The first tick completes immediately; nothing has changed yet.
        ticker.tick().await;

        loop {
            tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
                _ = ticker.tick() => {
                    if let Err(e) = self.flush().await {
                        tracing::error!("Periodic snapshot failed: {}", e);
                    }
                }
            }
        }

        match self.flush().await {
            Ok(()) => tracing::info!("Final snapshot written to {}", self.path.display()),
            Err(e) => tracing::error!("Final snapshot failed: {}", e),
        }
    }
}
