//! Bounded Cache - an in-memory TTL cache with a capacity bound
//!
//! Provides a generic key/value cache with per-entry time-to-live,
//! insertion-order eviction, lazy expiry sweeping, and hit/miss statistics,
//! plus an optional background sweeper task.

pub mod cache;
pub mod config;
pub mod error;
pub mod report;
pub mod tasks;

pub use cache::{BoundedTtlCache, CacheStats};
pub use config::Config;
pub use error::{CacheError, Result};
pub use report::StatsReport;
pub use tasks::{spawn_sweeper, SweeperHandle};
