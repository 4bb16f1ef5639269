//! Bounded, thread-safe render cache with least-recently-used eviction.

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use spawner_core::{CacheKey, RenderCache, RenderedItem};

use crate::repository::{CacheError, Result};

struct Slot {
    item: RenderedItem,
    last_used: AtomicU64,
}

/// In-memory implementation of [`RenderCache`].
///
/// Reads share a read lock and only bump an atomic recency stamp, so
/// concurrent hits never serialize. Writes take the write lock and evict the
/// least recently used entry once `capacity` is reached. A capacity of zero
/// disables caching.
pub struct BoundedRenderCache {
    capacity: usize,
    entries: RwLock<HashMap<CacheKey, Slot>>,
    clock: AtomicU64,
}

impl BoundedRenderCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: RwLock::new(HashMap::with_capacity(capacity.min(1024))),
            clock: AtomicU64::new(0),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn tick(&self) -> u64 {
        self.clock.fetch_add(1, Ordering::Relaxed)
    }

    /// Returns a copy of the cached item, refreshing its recency.
    pub fn try_get(&self, key: &CacheKey) -> Result<Option<RenderedItem>> {
        let entries = self.entries.read().map_err(|_| CacheError::LockPoisoned)?;
        Ok(entries.get(key).map(|slot| {
            slot.last_used.store(self.tick(), Ordering::Relaxed);
            slot.item.clone()
        }))
    }

    /// Stores `item`, returning the key evicted to make room, if any.
    pub fn try_put(&self, key: CacheKey, item: RenderedItem) -> Result<Option<CacheKey>> {
        if self.capacity == 0 {
            return Ok(None);
        }

        let mut entries = self.entries.write().map_err(|_| CacheError::LockPoisoned)?;
        let mut evicted = None;
        if !entries.contains_key(&key) && entries.len() >= self.capacity {
            // Linear scan; capacities are small enough that a recency list
            // would cost more than it saves.
            evicted = entries
                .iter()
                .min_by_key(|(_, slot)| slot.last_used.load(Ordering::Relaxed))
                .map(|(key, _)| key.clone());
            if let Some(old) = &evicted {
                entries.remove(old);
            }
        }

        let slot = Slot {
            item,
            last_used: AtomicU64::new(self.tick()),
        };
        entries.insert(key, slot);
        Ok(evicted)
    }

    pub fn try_len(&self) -> Result<usize> {
        let entries = self.entries.read().map_err(|_| CacheError::LockPoisoned)?;
        Ok(entries.len())
    }

    pub fn try_clear(&self) -> Result<()> {
        let mut entries = self.entries.write().map_err(|_| CacheError::LockPoisoned)?;
        entries.clear();
        Ok(())
    }
}

impl Default for BoundedRenderCache {
    fn default() -> Self {
        Self::new(spawner_core::MenuConfig::DEFAULT_CACHE_CAPACITY)
    }
}

impl RenderCache for BoundedRenderCache {
    fn get(&self, key: &CacheKey) -> Option<RenderedItem> {
        self.try_get(key).unwrap_or_else(|error| {
            tracing::warn!(%error, %key, "render cache read failed; treating as miss");
            None
        })
    }

    fn put(&self, key: CacheKey, item: RenderedItem) {
        let shown = key.to_string();
        match self.try_put(key, item) {
            Ok(Some(evicted)) => {
                tracing::debug!(%evicted, stored = %shown, "evicted least recently used render");
            }
            Ok(None) => {}
            Err(error) => {
                tracing::warn!(%error, key = %shown, "render cache write dropped");
            }
        }
    }

    fn len(&self) -> usize {
        self.try_len().unwrap_or_else(|error| {
            tracing::warn!(%error, "render cache size unavailable; reporting empty");
            0
        })
    }

    fn clear(&self) {
        if let Err(error) = self.try_clear() {
            tracing::warn!(%error, "render cache clear failed");
        }
    }
}
