//! Item rendering and memoization.
//!
//! [`ItemRenderer`] builds the storage summary and info items. Every build
//! goes through [`ItemRenderer::keyed_render`], which checks the injected
//! [`RenderCache`] under a structural [`CacheKey`] before doing any work.
mod cache;
mod item;
mod key;
mod renderer;

pub use cache::{NoCache, RenderCache};
pub use item::{Icon, ItemMeta, RenderOutcome, RenderedItem};
pub use key::{CacheKey, InfoKey, KeyVariant, RenderVariant, StorageKey};
pub use renderer::{
    ENTITY_SMALL_CAPS, INFO_LORE_KEY, INFO_LORE_NO_SHOP_KEY, INFO_NAME_KEY, ItemRenderer,
    STORAGE_LORE_KEY, STORAGE_NAME_KEY,
};
