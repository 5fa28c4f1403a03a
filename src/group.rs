//! Host object bundling one tab manager with one content cache.
//!
//! The application creates a [`TabGroup`] once and injects it wherever
//! tab state is needed; there is no module-level shared state, so
//! multiple independent tab groups (and isolated tests) come for free.
//! The two stores never call into each other — this type is the single
//! coupling point between ordering/selection and content caching.

use crate::cache::ContentCache;
use crate::config::TabsConfig;
use crate::error::ConfigError;
use crate::tab::TabManager;

/// One tab surface: ordering/selection state plus the bounded cache of
/// inactive-tab content snapshots.
///
/// `V` is whatever the renderer produces as a content snapshot. The
/// underlying cache map is never exposed, only the operation surface, so
/// the eviction invariant cannot be broken from outside.
#[derive(Debug)]
pub struct TabGroup<V> {
    manager: TabManager,
    cache: ContentCache<V>,
}

impl<V> TabGroup<V> {
    /// Create a group from a validated configuration.
    ///
    /// The cache is sized from `config.cache_limit`; an invalid config is
    /// rejected here, before any store exists.
    pub fn new(config: &TabsConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            manager: TabManager::new(),
            cache: ContentCache::new(config.cache_limit),
        })
    }

    /// The ordering/selection store.
    pub fn manager(&self) -> &TabManager {
        &self.manager
    }

    /// Mutable access to the ordering/selection store.
    pub fn manager_mut(&mut self) -> &mut TabManager {
        &mut self.manager
    }

    /// The content cache.
    pub fn cache(&self) -> &ContentCache<V> {
        &self.cache
    }

    /// Mutable access to the content cache.
    pub fn cache_mut(&mut self) -> &mut ContentCache<V> {
        &mut self.cache
    }

    /// Store the rendered content of a tab that just became inactive.
    pub fn stash(&mut self, tab_id: impl Into<String>, content: V) {
        self.cache.put(tab_id, content);
    }

    /// Fetch cached content for an inactive tab, if still present.
    ///
    /// Closed tabs may still have entries here (they age out by eviction
    /// rather than being dropped on close) and recently-opened tabs may
    /// have none; the renderer falls back to a fresh render on `None`.
    pub fn restore(&mut self, tab_id: &str) -> Option<&V> {
        self.cache.get(tab_id)
    }

    /// Change the cache limit at runtime. Takes effect on future
    /// evictions; existing entries are not trimmed eagerly.
    pub fn set_cache_limit(&mut self, limit: usize) {
        self.cache.set_capacity(limit);
    }
}
