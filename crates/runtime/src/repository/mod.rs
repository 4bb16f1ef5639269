//! Repository layer for dynamic runtime data
//!
//! Repositories hold data that CHANGES while the server runs: rendered menu
//! items memoized between opens.
//!
//! Static menu content (language, drop tables, icons) is handled by Oracles,
//! not Repositories.

mod error;
mod memory;

pub use error::{CacheError, Result};
pub use memory::BoundedRenderCache;
