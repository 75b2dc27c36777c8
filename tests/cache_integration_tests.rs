//! Integration Tests for the Cache Library
//!
//! Exercises the public API end to end: construction from configuration,
//! full lookup/insert/evict lifecycles, shared use behind a lock with a
//! running sweeper, and the diagnostics report.

use std::sync::Arc;
use std::time::Duration;

use bounded_cache::{spawn_sweeper, BoundedTtlCache, CacheError, Config};
use tokio::sync::RwLock;

// == Helper Functions ==

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

fn test_cache(max_size: usize, default_ttl_ms: u64) -> BoundedTtlCache<u32> {
    BoundedTtlCache::new(max_size, Duration::from_millis(default_ttl_ms)).unwrap()
}

// == Construction Tests ==

#[test]
fn test_construction_from_default_config() {
    let cache = BoundedTtlCache::<String>::from_config(&Config::default()).unwrap();
    assert!(cache.is_empty());
}

#[test]
fn test_construction_rejects_zero_capacity() {
    let result = BoundedTtlCache::<String>::new(0, Duration::from_secs(1));
    assert!(matches!(result, Err(CacheError::InvalidConfiguration(_))));

    let config = Config {
        max_size: 0,
        ..Config::default()
    };
    let result = BoundedTtlCache::<String>::from_config(&config);
    assert!(matches!(result, Err(CacheError::InvalidConfiguration(_))));
}

// == Full Walkthrough ==

#[test]
fn test_full_cache_walkthrough() {
    init_tracing();
    let mut cache = test_cache(3, 1000);

    cache.set("x".to_string(), 1, None);
    cache.set("y".to_string(), 2, None);
    cache.set("z".to_string(), 3, None);

    // Reading "x" does not shield it: eviction follows insertion order
    assert_eq!(cache.get("x"), Some(&1));

    // Cache is full; inserting "w" evicts "x", the earliest-inserted key
    cache.set("w".to_string(), 4, None);

    assert_eq!(cache.get("y"), Some(&2));
    assert_eq!(cache.get("z"), Some(&3));
    assert_eq!(cache.get("w"), Some(&4));
    assert!(cache.get("x").is_none());

    assert_eq!(cache.len(), 3);
    let stats = cache.stats();
    assert_eq!(stats.hits, 4);
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.evictions, 1);
}

#[test]
fn test_expiry_is_invisible_to_callers() {
    let mut cache = test_cache(10, 300_000);

    cache.set("short".to_string(), 1, Some(Duration::from_millis(10)));

    std::thread::sleep(Duration::from_millis(20));

    // Expired key and never-present key look identical
    assert_eq!(cache.get("short"), None);
    assert_eq!(cache.get("never_set"), None);
    assert_eq!(cache.stats().misses, 2);
}

#[test]
fn test_clear_after_arbitrary_operations() {
    let mut cache = test_cache(2, 1000);

    cache.set("a".to_string(), 1, None);
    cache.set("b".to_string(), 2, None);
    cache.set("c".to_string(), 3, None);
    cache.get("b");
    cache.get("missing");
    cache.remove("c");

    cache.clear();

    assert_eq!(cache.len(), 0);
    let stats = cache.stats();
    assert_eq!(stats.hits, 0);
    assert_eq!(stats.misses, 0);
    assert_eq!(stats.evictions, 0);

    // The cache remains fully usable after clear
    cache.set("d".to_string(), 4, None);
    assert_eq!(cache.get("d"), Some(&4));
}

// == Shared Cache With Sweeper ==

#[tokio::test]
async fn test_shared_cache_with_running_sweeper() {
    init_tracing();
    let config = Config {
        max_size: 10,
        default_ttl_ms: 300_000,
        sweep_interval_secs: 60,
    };
    let cache = Arc::new(RwLock::new(
        BoundedTtlCache::<String>::from_config(&config).unwrap(),
    ));

    // Short interval in tests; production cadence comes from the config
    let sweeper = spawn_sweeper(cache.clone(), Duration::from_millis(20));

    {
        let mut cache_guard = cache.write().await;
        cache_guard.set(
            "stale".to_string(),
            "soon gone".to_string(),
            Some(Duration::from_millis(10)),
        );
        cache_guard.set("live".to_string(), "still here".to_string(), None);
    }

    tokio::time::sleep(Duration::from_millis(80)).await;

    // The sweeper reclaimed the stale entry with no lookup involved
    {
        let mut cache_guard = cache.write().await;
        assert_eq!(cache_guard.len(), 1);
        assert_eq!(cache_guard.get("live").map(String::as_str), Some("still here"));
        let stats = cache_guard.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 0);
    }

    sweeper.stop();
}

#[tokio::test]
async fn test_correctness_without_sweeper() {
    // Expiry needs no background help: the lazy check in get suffices
    let cache = Arc::new(RwLock::new(test_cache(10, 300_000)));

    {
        let mut cache_guard = cache.write().await;
        cache_guard.set("stale".to_string(), 1, Some(Duration::from_millis(10)));
    }

    tokio::time::sleep(Duration::from_millis(20)).await;

    let mut cache_guard = cache.write().await;
    assert_eq!(cache_guard.get("stale"), None);
    assert_eq!(cache_guard.len(), 0);
}

// == Diagnostics Report ==

#[test]
fn test_stats_report_shape() {
    let mut cache = test_cache(2, 1000);

    cache.set("a".to_string(), 1, None);
    cache.set("b".to_string(), 2, None);
    cache.set("c".to_string(), 3, None);
    cache.get("b");
    cache.get("missing");

    let report = cache.report();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["hits"], 1);
    assert_eq!(json["misses"], 1);
    assert_eq!(json["evictions"], 1);
    assert_eq!(json["total_entries"], 2);
    assert!((json["hit_rate"].as_f64().unwrap() - 0.5).abs() < 0.001);
    assert!(json["captured_at"].is_string());
}
