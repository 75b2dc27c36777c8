//! Diagnostics Report Module
//!
//! Serializable snapshot of cache statistics for debug panels and
//! telemetry export.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cache::CacheStats;

/// Point-in-time statistics snapshot.
///
/// Exporting this to a metrics collector or rendering it in a debug panel
/// is the consumer's responsibility; the cache only produces the snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct StatsReport {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of capacity evictions
    pub evictions: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
    /// When the snapshot was taken
    pub captured_at: DateTime<Utc>,
}

impl StatsReport {
    /// Creates a report from a statistics snapshot, stamped with the
    /// current time.
    pub fn from_stats(stats: &CacheStats) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
            captured_at: Utc::now(),
        }
    }
}
