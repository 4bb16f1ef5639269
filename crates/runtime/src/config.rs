//! Runtime configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use spawner_core::MenuConfig;

/// Configuration required to bootstrap a [`MenuService`](crate::MenuService).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub menu: MenuConfig,
    pub data_dir: PathBuf,
}

impl RuntimeConfig {
    /// Content directory used when `CONTENT_DATA_DIR` is unset.
    pub const DEFAULT_DATA_DIR: &'static str = "crates/spawner/content/data";

    pub fn new(menu: MenuConfig) -> Self {
        Self {
            menu,
            data_dir: PathBuf::from(Self::DEFAULT_DATA_DIR),
        }
    }

    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CONTENT_DATA_DIR` - Directory holding config, language and loot files
    /// - `SPAWNER_CACHE_CAPACITY` - Maximum cached renders, 0 disables (default: 1024)
    /// - `SPAWNER_SELL_INTEGRATION` - Economy plugin available (default: false)
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Applies environment overrides on top of `self`, e.g. after loading
    /// `config.toml`.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| env::var(key).ok())
    }

    /// Applies overrides read through `lookup` instead of the process
    /// environment.
    #[must_use]
    pub fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(dir) = lookup("CONTENT_DATA_DIR") {
            self.data_dir = PathBuf::from(dir);
        }

        if let Some(capacity) = read_var::<usize>(&lookup, "SPAWNER_CACHE_CAPACITY") {
            self.menu.cache_capacity = capacity;
        }

        if let Some(enable) = read_var::<bool>(&lookup, "SPAWNER_SELL_INTEGRATION") {
            self.menu.sell_integration = enable;
        } else if lookup("SPAWNER_SELL_INTEGRATION").is_some() {
            // Also accept just setting the variable without value as "true"
            self.menu.sell_integration = true;
        }

        self
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::new(MenuConfig::default())
    }
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn overrides(vars: &[(&str, &str)]) -> RuntimeConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        RuntimeConfig::default().with_overrides_from(|key| vars.get(key).cloned())
    }

    #[test]
    fn no_variables_keep_defaults() {
        assert_eq!(overrides(&[]), RuntimeConfig::default());
    }

    #[test]
    fn variables_override_menu_config() {
        let config = overrides(&[
            ("CONTENT_DATA_DIR", "/srv/spawners"),
            ("SPAWNER_CACHE_CAPACITY", "0"),
            ("SPAWNER_SELL_INTEGRATION", "true"),
        ]);

        assert_eq!(config.data_dir, PathBuf::from("/srv/spawners"));
        assert_eq!(config.menu.cache_capacity, 0);
        assert!(config.menu.sell_integration);
    }

    #[test]
    fn bare_sell_flag_enables_integration() {
        assert!(overrides(&[("SPAWNER_SELL_INTEGRATION", "")]).menu.sell_integration);
    }

    #[test]
    fn unparsable_capacity_is_ignored() {
        let config = overrides(&[("SPAWNER_CACHE_CAPACITY", "lots")]);
        assert_eq!(config.menu.cache_capacity, MenuConfig::DEFAULT_CACHE_CAPACITY);
    }
}
