//! Minimal [`spawner_core::LootOracle`] backed by an in-memory map.
use std::collections::HashMap;

use spawner_content::LootCatalog;
use spawner_core::{EntityKind, LootEntry, LootOracle};

/// LootOracle implementation with static drop tables.
pub struct LootOracleImpl {
    tables: HashMap<EntityKind, Vec<LootEntry>>,
}

impl LootOracleImpl {
    pub fn new() -> Self {
        Self {
            tables: HashMap::new(),
        }
    }

    pub fn from_catalog(catalog: &LootCatalog) -> Self {
        Self {
            tables: catalog.tables.clone(),
        }
    }

    /// Add or replace the drop table of an entity kind
    pub fn add_table(&mut self, kind: EntityKind, entries: Vec<LootEntry>) {
        self.tables.insert(kind, entries);
    }
}

impl Default for LootOracleImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl LootOracle for LootOracleImpl {
    fn loot_table(&self, kind: &EntityKind) -> Vec<LootEntry> {
        self.tables.get(kind).cloned().unwrap_or_default()
    }
}
