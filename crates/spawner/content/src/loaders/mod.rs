//! Content loaders for reading menu data from files.
//!
//! Each loader turns one RON/TOML file into plain data that runtime oracles
//! are built from.

pub mod config;
pub mod factory;
pub mod language;
pub mod loot;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use language::{LanguageLoader, LanguagePack, NumberStyle, TextValue};
pub use loot::{LootCatalog, LootTableLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
