//! Data-driven spawner menu content and loaders.
//!
//! This crate reads the static data the menu renderer consumes:
//! - Drop catalogs per entity kind (RON)
//! - Language packs: templates, display names, number style (TOML)
//! - Menu configuration (TOML)
//!
//! Content is consumed by runtime oracles and never appears in spawner state.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, LanguageLoader, LanguagePack, LootCatalog, LootTableLoader,
    NumberStyle, TextValue,
};
