//! Expiry Sweeper Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::BoundedTtlCache;

// == Sweeper Handle ==
/// Scoped handle to a running sweeper task.
///
/// The sweep stops when `stop` is called or when the handle is dropped,
/// so an owner being torn down cannot leak the timer. The sweep is
/// best-effort memory hygiene only; lookups detect expiry on their own
/// regardless of sweep cadence.
#[derive(Debug)]
pub struct SweeperHandle {
    handle: JoinHandle<()>,
}

impl SweeperHandle {
    /// Stops the sweeper task.
    pub fn stop(self) {
        self.handle.abort();
    }

    /// Returns true once the task has terminated.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for SweeperHandle {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

// == Spawn Sweeper ==
/// Spawns a background task that periodically sweeps expired entries.
///
/// The task sleeps for the given interval between passes and acquires a
/// write lock on the cache for each sweep. Each pass is synchronous and
/// non-blocking, so there is no in-flight work to abort on shutdown.
///
/// # Arguments
/// * `cache` - Shared reference to the cache
/// * `interval` - Time between sweep passes
///
/// # Returns
/// A `SweeperHandle` that stops the task explicitly or on drop.
pub fn spawn_sweeper<V>(
    cache: Arc<RwLock<BoundedTtlCache<V>>>,
    interval: Duration,
) -> SweeperHandle
where
    V: Send + Sync + 'static,
{
    let handle = tokio::spawn(async move {
        info!(interval_ms = interval.as_millis() as u64, "starting expiry sweeper");

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut cache_guard = cache.write().await;
                cache_guard.cleanup_expired()
            };

            if removed > 0 {
                info!(removed, "expiry sweep removed stale entries");
            } else {
                debug!("expiry sweep found no stale entries");
            }
        }
    });

    SweeperHandle { handle }
}
