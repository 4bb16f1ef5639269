//! Content factory for building oracles from data files.

use std::path::{Path, PathBuf};

use spawner_core::MenuConfig;

use crate::loaders::{
    ConfigLoader, LanguageLoader, LanguagePack, LoadResult, LootCatalog, LootTableLoader,
};

/// Content factory that loads all menu content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── language.toml
/// └── loot.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load menu configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<MenuConfig> {
        let path = self.data_dir.join("config.toml");
        ConfigLoader::load(&path)
    }

    /// Load the language pack from `language.toml`.
    pub fn load_language(&self) -> LoadResult<LanguagePack> {
        let path = self.data_dir.join("language.toml");
        LanguageLoader::load(&path)
    }

    /// Load the drop catalog and head list from `loot.ron`.
    pub fn load_loot(&self) -> LoadResult<LootCatalog> {
        let path = self.data_dir.join("loot.ron");
        LootTableLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn bundled_data_loads() {
        let factory = ContentFactory::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data"));

        let config = factory.load_config().unwrap();
        let language = factory.load_language().unwrap();
        let loot = factory.load_loot().unwrap();

        assert_eq!(config.cache_capacity, MenuConfig::DEFAULT_CACHE_CAPACITY);
        assert!(language.template("spawner_storage_item.loot_items").is_some());
        assert!(loot.entry_count() > 0);
    }
}
