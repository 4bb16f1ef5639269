//! In-memory repository implementations.

mod render_cache;

pub use render_cache::BoundedRenderCache;
