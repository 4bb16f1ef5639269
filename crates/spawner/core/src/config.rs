/// Menu geometry constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MenuConfig {
    /// Upper bound on rendered items kept by bounded caches.
    /// Zero disables caching.
    pub cache_capacity: usize,

    /// Whether an economy plugin is hooked up for selling stored loot.
    /// Viewers additionally need [`MenuConfig::SELL_PERMISSION`].
    pub sell_integration: bool,
}

impl MenuConfig {
    // ===== fixed menu layout =====
    /// Number of slots in the main spawner menu (three rows of nine).
    pub const MENU_SIZE: usize = 27;
    /// Slot holding the storage summary item.
    pub const STORAGE_SLOT: usize = 11;
    /// Slot holding the spawner info item.
    pub const INFO_SLOT: usize = 13;

    /// Server ticks per wall-clock second, used to present spawn delays.
    pub const TICKS_PER_SECOND: u64 = 20;

    /// Permission node granting access to the sell shortcut.
    pub const SELL_PERMISSION: &'static str = "spawner.sellall";

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_CACHE_CAPACITY: usize = 1024;

    pub fn new() -> Self {
        Self {
            cache_capacity: Self::DEFAULT_CACHE_CAPACITY,
            sell_integration: false,
        }
    }

    pub fn with_cache_capacity(mut self, cache_capacity: usize) -> Self {
        self.cache_capacity = cache_capacity;
        self
    }

    pub fn with_sell_integration(mut self, sell_integration: bool) -> Self {
        self.sell_integration = sell_integration;
        self
    }
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self::new()
    }
}
