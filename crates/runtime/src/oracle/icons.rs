//! [`spawner_core::IconOracle`] choosing between mob heads and the spawner block.
use std::collections::HashSet;

use spawner_content::LootCatalog;
use spawner_core::{EntityKind, Icon, IconOracle, Material};

/// Uses a mob head when its texture is known, else the spawner block.
pub struct IconOracleImpl {
    heads: HashSet<EntityKind>,
}

impl IconOracleImpl {
    pub fn new(heads: impl IntoIterator<Item = EntityKind>) -> Self {
        Self {
            heads: heads.into_iter().collect(),
        }
    }

    pub fn from_catalog(catalog: &LootCatalog) -> Self {
        Self::new(catalog.heads.iter().cloned())
    }
}

impl Default for IconOracleImpl {
    fn default() -> Self {
        Self::new([])
    }
}

impl IconOracle for IconOracleImpl {
    fn info_icon(&self, kind: &EntityKind) -> Icon {
        if self.heads.contains(kind) {
            Icon::Head(kind.clone())
        } else {
            Icon::Item(Material::spawner())
        }
    }
}
