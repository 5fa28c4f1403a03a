//! Bounded FIFO cache preserving rendered content of inactive tabs.
//!
//! Content for a tab that loses focus is expensive to recompute, so the
//! host stashes it here and reads it back when the tab is shown as an
//! inactive placeholder. The cache is a deliberate simplicity/memory
//! tradeoff: eviction is strict first-in-first-out by *insertion* order.
//! Reads never promote an entry and value updates never reorder one, so
//! do not build on recency assumptions.

use std::collections::{HashMap, VecDeque};
use std::time::Instant;

/// Default maximum number of cached entries.
pub const DEFAULT_CACHE_LIMIT: usize = 5;

/// One cached value plus the time it was last stored.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The cached content snapshot.
    pub value: V,
    /// When the value was last written.
    pub stored_at: Instant,
}

/// Statistics about cache performance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Number of cache hits.
    pub hits: u64,
    /// Number of cache misses.
    pub misses: u64,
    /// Current number of entries.
    pub size: usize,
    /// Maximum capacity.
    pub capacity: usize,
}

impl CacheStats {
    /// Calculate hit rate (0.0 to 1.0).
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Fixed-capacity key→value cache with FIFO-on-insertion eviction.
///
/// Keys are tab ids. `len() <= capacity()` holds after every `put`; the
/// entry evicted is always the one inserted earliest among those still
/// present. Entries outlive their tabs on purpose: closing a tab does not
/// remove its entry, it simply ages out.
///
/// Not thread-safe; a single logical owner mutates it from the UI event
/// context.
#[derive(Debug)]
pub struct ContentCache<V> {
    entries: HashMap<String, CacheEntry<V>>,
    /// Insertion order, oldest at the front. Untouched by `get` and by
    /// value-updating `put`.
    order: VecDeque<String>,
    capacity: usize,
    hits: u64,
    misses: u64,
}

impl<V> ContentCache<V> {
    /// Create a cache holding at most `capacity` entries.
    ///
    /// A capacity of zero is clamped to 1 so the invariant stays
    /// satisfiable.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            order: VecDeque::new(),
            capacity: capacity.max(1),
            hits: 0,
            misses: 0,
        }
    }

    /// Store a value under `key`.
    ///
    /// An existing key is updated in place: new value, new timestamp,
    /// same slot in eviction order, and no eviction. A new key first
    /// evicts oldest-inserted entries until there is room (possibly more
    /// than one after the capacity was lowered), then lands at the
    /// most-recent end.
    pub fn put(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();

        if let Some(entry) = self.entries.get_mut(&key) {
            entry.value = value;
            entry.stored_at = Instant::now();
            return;
        }

        while self.entries.len() >= self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
                log::debug!("Evicted cache entry '{}'", oldest);
            } else {
                break;
            }
        }

        self.entries.insert(
            key.clone(),
            CacheEntry {
                value,
                stored_at: Instant::now(),
            },
        );
        self.order.push_back(key);
    }

    /// Look up the value stored under `key`.
    ///
    /// Returns `None` for absent keys and never reorders entries (a read
    /// is not a promotion).
    pub fn get(&mut self, key: &str) -> Option<&V> {
        match self.entries.get(key) {
            Some(entry) => {
                self.hits += 1;
                Some(&entry.value)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Check whether a key is present without touching hit/miss stats.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    /// Set the capacity used by future evictions.
    ///
    /// Enforcement is lazy: entries beyond a lowered capacity stay until
    /// the next inserting `put` evicts enough of the oldest ones. Zero is
    /// clamped to 1.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
    }

    /// Current maximum capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot of hit/miss statistics.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.entries.len(),
            capacity: self.capacity,
        }
    }
}

impl<V> Default for ContentCache<V> {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_LIMIT)
    }
}
