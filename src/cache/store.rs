//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with insertion-order eviction
//! and TTL expiration.

use std::collections::HashMap;
use std::time::Duration;

use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, InsertionTracker};
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::report::StatsReport;

// == Bounded TTL Cache ==
/// In-memory key/value cache with per-entry TTL, a maximum entry count,
/// and hit/miss accounting.
///
/// Capacity pressure is resolved by evicting the earliest-inserted entry,
/// regardless of its remaining TTL or how often it has been read. Lookups
/// never refresh an entry's TTL or its eviction position. Expired entries
/// are detected lazily, either by a lookup or by an explicit sweep; nothing
/// deletes them the instant they go stale.
#[derive(Debug)]
pub struct BoundedTtlCache<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Insertion-order tracker for eviction
    order: InsertionTracker,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_size: usize,
    /// Default TTL for entries without an explicit TTL
    default_ttl: Duration,
}

impl<V> BoundedTtlCache<V> {
    // == Constructor ==
    /// Creates a new cache with the specified capacity and default TTL.
    ///
    /// # Arguments
    /// * `max_size` - Maximum number of entries the cache can hold
    /// * `default_ttl` - TTL applied to entries inserted without an explicit TTL
    ///
    /// # Errors
    /// Returns `CacheError::InvalidConfiguration` when `max_size` is zero.
    pub fn new(max_size: usize, default_ttl: Duration) -> Result<Self> {
        if max_size == 0 {
            return Err(CacheError::InvalidConfiguration(
                "max_size must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            entries: HashMap::new(),
            order: InsertionTracker::new(),
            stats: CacheStats::new(),
            max_size,
            default_ttl,
        })
    }

    /// Creates a new cache from a validated configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        Self::new(config.max_size, config.default_ttl())
    }

    // == Set ==
    /// Stores a key-value pair with optional TTL.
    ///
    /// If the key already exists, the value and TTL are replaced but the
    /// key keeps its original insertion-order position. If the cache is at
    /// capacity and the key is new, the earliest-inserted entry is evicted
    /// first. Insertion always succeeds.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The value to store
    /// * `ttl` - Optional TTL (uses the default TTL if None)
    pub fn set(&mut self, key: String, value: V, ttl: Option<Duration>) {
        let is_overwrite = self.entries.contains_key(&key);

        // If not overwriting and at capacity, evict the earliest-inserted entry
        if !is_overwrite && self.entries.len() >= self.max_size {
            if let Some(evicted_key) = self.order.evict_oldest() {
                self.entries.remove(&evicted_key);
                self.stats.record_eviction();
                debug!(key = %evicted_key, "evicted earliest-inserted entry");
            }
        }

        // Use provided TTL or default
        let effective_ttl = ttl.unwrap_or(self.default_ttl);

        // Create and store entry; recording is a no-op for already-tracked
        // keys, so overwrites keep their eviction position
        let entry = CacheEntry::new(value, effective_ttl);
        self.entries.insert(key.clone(), entry);
        self.order.record(&key);

        // Update stats
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Runs an expiry sweep first, so an expired key and a key that never
    /// existed are indistinguishable: both count as a miss and return None.
    /// A successful lookup counts as a hit. Lookups do not refresh TTL and
    /// do not change eviction order.
    ///
    /// # Arguments
    /// * `key` - The key to retrieve
    pub fn get(&mut self, key: &str) -> Option<&V> {
        self.cleanup_expired();

        if self.entries.contains_key(key) {
            self.stats.record_hit();
        } else {
            self.stats.record_miss();
            return None;
        }

        self.entries.get(key).map(|entry| &entry.value)
    }

    // == Remove ==
    /// Removes an entry by key, returning whether it was present.
    ///
    /// Does not affect hit/miss counters.
    ///
    /// # Arguments
    /// * `key` - The key to remove
    pub fn remove(&mut self, key: &str) -> bool {
        if self.entries.remove(key).is_some() {
            self.order.remove(key);
            self.stats.set_total_entries(self.entries.len());
            true
        } else {
            false
        }
    }

    // == Clear ==
    /// Empties all entries and resets statistics to zero.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
        self.stats.reset();
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Idempotent and order-independent; safe to call at any frequency.
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in &expired_keys {
            self.entries.remove(key);
            self.order.remove(key);
        }

        self.stats.set_total_entries(self.entries.len());
        count
    }

    // == Stats ==
    /// Returns a snapshot of the current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Returns a serializable diagnostics report of the current statistics.
    pub fn report(&self) -> StatsReport {
        StatsReport::from_stats(&self.stats())
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    ///
    /// Entries that have expired but not yet been swept are included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
