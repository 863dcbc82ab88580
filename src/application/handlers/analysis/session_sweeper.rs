//! Session Sweeper - Evicts wizard sessions nobody has touched for a while.
//!
//! Sessions are only ever created by clients, and an abandoned wizard would
//! otherwise stay in the store for the life of the process.
//!
//! ## Configuration
//!
//! | Setting | Default | Description |
//! |---------|---------|-------------|
//! | `idle_ttl` | 24h | Sessions not updated for this long are removed |
//! | `sweep_interval` | 5min | How often to look for idle sessions |

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time;
use tracing::{debug, info, warn};

use super::AnalysisError;
use crate::domain::foundation::Timestamp;
use crate::ports::AnalysisSessionRepository;

/// Sweeper timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSweeperConfig {
    pub idle_ttl: Duration,
    pub sweep_interval: Duration,
}

impl Default for SessionSweeperConfig {
    fn default() -> Self {
        Self {
            idle_ttl: Duration::from_secs(24 * 60 * 60),
            sweep_interval: Duration::from_secs(5 * 60),
        }
    }
}

/// Periodically deletes sessions idle longer than the configured TTL.
pub struct SessionSweeper {
    repository: Arc<dyn AnalysisSessionRepository>,
    config: SessionSweeperConfig,
}

impl SessionSweeper {
    pub fn new(repository: Arc<dyn AnalysisSessionRepository>, config: SessionSweeperConfig) -> Self {
        Self { repository, config }
    }

    /// Runs until `shutdown` flips to `true`.
    ///
    /// A failed sweep is logged and retried on the next tick.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        let mut interval = time::interval(self.config.sweep_interval);

        loop {
            tokio::select! {
                _ = shutdown.changed() => {
                    if *shutdown.borrow() {
                        info!("session sweeper stopping");
                        return;
                    }
                }
                _ = interval.tick() => {
                    if let Err(err) = self.sweep_once().await {
                        warn!(error = %err, "session sweep failed");
                    }
                }
            }
        }
    }

    /// Deletes every idle session now; returns how many were removed.
    pub async fn sweep_once(&self) -> Result<u64, AnalysisError> {
        let cutoff = Timestamp::now().minus(self.config.idle_ttl);
        let removed = self.repository.cleanup_idle(&cutoff).await?;

        if removed > 0 {
            info!(removed, %cutoff, "idle analysis sessions evicted");
        } else {
            debug!(%cutoff, "no idle analysis sessions");
        }
        Ok(removed)
    }
}
