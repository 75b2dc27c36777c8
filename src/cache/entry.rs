//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// Represents a single cache entry with value and expiry metadata.
///
/// The payload type is opaque to the cache; liveness is a derived property
/// computed from the creation instant, never stored.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Creation instant, monotonic
    created_at: Instant,
    /// Duration after which the entry is considered stale
    ttl: Duration,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry with the given TTL.
    ///
    /// # Arguments
    /// * `value` - The value to store
    /// * `ttl` - Duration after which the entry expires
    pub fn new(value: V, ttl: Duration) -> Self {
        Self {
            value,
            created_at: Instant::now(),
            ttl,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// Boundary condition: an entry is expired once the elapsed time since
    /// creation is greater than or equal to its TTL. A zero TTL therefore
    /// produces an entry that is never live.
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.ttl
    }

    // == Time To Live ==
    /// Returns the remaining TTL, saturating at zero once expired.
    ///
    /// Useful for debugging and diagnostics surfaces.
    pub fn ttl_remaining(&self) -> Duration {
        self.ttl.saturating_sub(self.created_at.elapsed())
    }
}
