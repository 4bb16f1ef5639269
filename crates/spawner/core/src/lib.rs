//! Storage and info menu rendering for spawners.
//!
//! `spawner-core` turns a read-only [`SpawnerState`] snapshot into the two
//! display items of the spawner menu (storage summary and spawner info) and
//! memoizes them behind a [`RenderCache`] keyed by a structural
//! [`CacheKey`]. Everything the renderer needs from the outside world
//! (localized text, drop catalogs, icons, shop integration, presentation)
//! arrives through the collaborator traits in [`env`] and [`menu`].
//!
//! Data flows leaves-first:
//! [`consolidate`] → [`LootListBuilder`] → [`ItemRenderer`] → [`MenuAssembler`].
pub mod config;
pub mod env;
pub mod error;
pub mod menu;
pub mod render;
pub mod state;
pub mod storage;
pub mod text;

pub use config::MenuConfig;
pub use env::{FormatOracle, IconOracle, LootEntry, LootOracle, MenuEnv, ShopOracle, Viewer};
pub use error::{ErrorSeverity, MenuError, PresentError};
pub use menu::{Menu, MenuAssembler, MenuPresenter, SpawnerMenu, open_menu};
pub use render::{
    CacheKey, Icon, InfoKey, ItemMeta, ItemRenderer, KeyVariant, NoCache, RenderCache,
    RenderOutcome, RenderVariant, RenderedItem, StorageKey,
};
pub use state::{
    EntityKind, ItemSignature, ItemTemplate, Material, SpawnerId, SpawnerState, StoredEntry, Tick,
};
pub use storage::{ConsolidatedHoldings, LootListBuilder, consolidate};
pub use text::Placeholders;
