use std::time::Duration;

use sqlx::SqlitePool;
use tracing::info;

use crate::auth::session;

/// Periodically purges expired session rows.
pub struct SessionSweeper {
    db: SqlitePool,
    interval: Duration,
}

impl SessionSweeper {
    pub fn new(db: SqlitePool, interval_secs: u64) -> Self {
        Self {
            db,
            interval: Duration::from_secs(interval_secs),
        }
    }

    /// Sweep in an endless loop; a failed sweep is logged and retried on the
    /// next tick.
    pub async fn start(self) {
        info!("Starting session sweeper (interval: {:?})", self.interval);

        loop {
            tokio::time::sleep(self.interval).await;

            match session::delete_expired(&self.db).await {
                Ok(0) => {}
                Ok(removed) => info!("Swept {} expired sessions", removed),
                Err(e) => {
                    tracing::warn!("Session sweep failed: {:?}", e);
                }
            }
        }
    }
}
