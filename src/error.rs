//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache.
///
/// Normal cache operations are total: a missing or expired key is reported
/// as `None` (or `false` for removal), never as an error. The only failure
/// surfaced to callers is invalid configuration at construction time.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Construction-time configuration was rejected
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
