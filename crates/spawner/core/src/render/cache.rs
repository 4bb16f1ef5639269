//! Render cache contract.

use std::sync::Arc;

use super::{CacheKey, RenderedItem};

/// Key → rendered item store shared by concurrent renders.
///
/// # Contract
///
/// - `put` takes ownership of its item; the caller keeps no handle to the
///   stored value.
/// - `get` returns an independent copy; mutating it never affects the stored
///   value or later reads.
/// - Concurrent `get`/`put` must not corrupt state. Two writers racing on the
///   same key store identical values, so last-write-wins is acceptable.
/// - Implementations may evict at any time; a miss is always recovered by
///   re-rendering.
pub trait RenderCache: Send + Sync {
    fn get(&self, key: &CacheKey) -> Option<RenderedItem>;

    fn put(&self, key: CacheKey, item: RenderedItem);

    /// Number of entries currently stored.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every entry.
    fn clear(&self);
}

impl<C: RenderCache + ?Sized> RenderCache for Arc<C> {
    fn get(&self, key: &CacheKey) -> Option<RenderedItem> {
        (**self).get(key)
    }

    fn put(&self, key: CacheKey, item: RenderedItem) {
        (**self).put(key, item)
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn clear(&self) {
        (**self).clear()
    }
}

/// Cache that stores nothing; every render recomputes.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoCache;

impl RenderCache for NoCache {
    fn get(&self, _key: &CacheKey) -> Option<RenderedItem> {
        None
    }

    fn put(&self, _key: CacheKey, _item: RenderedItem) {}

    fn len(&self) -> usize {
        0
    }

    fn clear(&self) {}
}
