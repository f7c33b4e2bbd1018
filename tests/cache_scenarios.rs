//! Integration Tests for AgedCache
//!
//! Exercises the public API end to end: retention scenarios, lazy eviction,
//! and the sweep guarantees of len/is_empty.

use std::sync::Arc;

use aged_cache::{AgedCache, ManualClock};

// == Helper Functions ==

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aged_cache=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

fn test_cache<K, V>() -> (Arc<ManualClock>, AgedCache<K, V>)
where
    K: Eq + std::hash::Hash,
{
    init_tracing();
    let clock = Arc::new(ManualClock::new(0));
    let cache = AgedCache::with_clock(clock.clone());
    (clock, cache)
}

// == Retention Scenarios ==

#[test]
fn apple_visible_at_50ms_absent_at_100ms() {
    let (clock, mut cache) = test_cache();

    cache.put("a", "apple", 100);

    clock.set(50);
    assert_eq!(cache.get(&"a"), Some(&"apple"));

    clock.set(100);
    assert_eq!(cache.get(&"a"), None);
    assert_eq!(cache.len(), 0);
}

#[test]
fn mixed_retentions_leave_only_long_lived_entry() {
    let (clock, mut cache) = test_cache();

    cache.put("x", 1, 10);
    cache.put("y", 2, 10_000);

    // past x's retention, well under y's
    clock.advance(500);

    assert_eq!(cache.len(), 1);
    assert!(!cache.is_empty());
    assert_eq!(cache.get(&"x"), None);
    assert_eq!(cache.get(&"y"), Some(&2));
}

#[test]
fn cache_empties_once_everything_expires_and_refills_on_put() {
    let (clock, mut cache) = test_cache();

    cache.put("a", "1", 10);
    cache.put("b", "2", 25);

    clock.advance(25);
    cache.clear_expired();
    assert!(cache.is_empty());

    cache.put("c", "3", 100);
    assert!(!cache.is_empty());
    assert_eq!(cache.len(), 1);
}

#[test]
fn overwrite_restarts_the_retention_window() {
    let (clock, mut cache) = test_cache();

    cache.put("k", "old", 100);
    clock.advance(90);
    cache.put("k", "new", 100);

    // 140ms after the first put, but only 50ms into the second entry's life
    clock.advance(50);
    assert_eq!(cache.get(&"k"), Some(&"new"));

    clock.advance(50);
    assert_eq!(cache.get(&"k"), None);
}

// == Lazy Eviction Guarantees ==

#[test]
fn stale_entry_lingers_until_a_sweeping_call() {
    let (clock, mut cache) = test_cache();

    cache.put("k", "v", 10);
    clock.advance(10);

    // get reads but never evicts
    assert_eq!(cache.get(&"k"), None);
    assert_eq!(cache.stats().total_entries, 1);

    // len sweeps first, so the stale entry is gone afterwards
    assert_eq!(cache.len(), 0);
    assert_eq!(cache.stats().total_entries, 0);
}

#[test]
fn sweep_reports_how_many_entries_it_removed() {
    let (clock, mut cache) = test_cache();

    for i in 0..5 {
        cache.put(i, i, 10);
    }
    cache.put(99, 99, 10_000);

    clock.advance(10);
    assert_eq!(cache.clear_expired(), 5);
    assert_eq!(cache.clear_expired(), 0);
    assert_eq!(cache.get(&99), Some(&99));
}

#[test]
fn stats_reflect_activity_across_operations() {
    let (clock, mut cache) = test_cache();

    cache.put("k", "v", 10);
    assert_eq!(cache.get(&"k"), Some(&"v"));
    assert_eq!(cache.get(&"absent"), None);

    clock.advance(10);
    assert_eq!(cache.get(&"k"), None);
    cache.clear_expired();

    let stats = cache.stats();
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 2);
    assert_eq!(stats.evictions, 1);
    assert_eq!(stats.hit_rate(), 1.0 / 3.0);
}

// == Opaque Key and Value Types ==

#[test]
fn works_with_non_string_keys_and_owned_values() {
    #[derive(Debug, PartialEq)]
    struct Payload(Vec<u8>);

    let (clock, mut cache) = test_cache();

    cache.put((7u32, "shard"), Payload(vec![1, 2, 3]), 1_000);

    clock.advance(999);
    assert_eq!(cache.get(&(7, "shard")), Some(&Payload(vec![1, 2, 3])));

    clock.advance(1);
    assert_eq!(cache.get(&(7, "shard")), None);
}
