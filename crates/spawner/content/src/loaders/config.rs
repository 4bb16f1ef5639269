//! Menu configuration loader.

use std::path::Path;

use spawner_core::MenuConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for menu configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`MenuConfig::default`].
    pub fn load(path: &Path) -> LoadResult<MenuConfig> {
        let content = read_file(path)?;
        let config: MenuConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "sell_integration = true\n").unwrap();

        let config = ConfigLoader::load(&path).unwrap();

        assert!(config.sell_integration);
        assert_eq!(config.cache_capacity, MenuConfig::DEFAULT_CACHE_CAPACITY);
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.toml");

        let err = ConfigLoader::load(&path).unwrap_err();

        assert!(err.to_string().contains("absent.toml"));
    }
}
