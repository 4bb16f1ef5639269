//! Drop catalog loader.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use serde::{Deserialize, Serialize};
use spawner_core::{EntityKind, LootEntry};

use crate::loaders::{LoadResult, read_file};

/// Drop catalog structure for RON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LootCatalog {
    #[serde(default)]
    pub tables: HashMap<EntityKind, Vec<LootEntry>>,

    /// Entity kinds with a known head texture, shown as the info icon.
    #[serde(default)]
    pub heads: BTreeSet<EntityKind>,
}

impl LootCatalog {
    /// Rejects chances that are not finite or fall outside `0..=100`.
    pub fn validate(&self) -> LoadResult<()> {
        for (kind, entries) in &self.tables {
            for entry in entries {
                if !entry.chance.is_finite() || !(0.0..=100.0).contains(&entry.chance) {
                    anyhow::bail!(
                        "Invalid drop chance {} for {} in {} catalog (expected 0..=100)",
                        entry.chance,
                        entry.material,
                        kind
                    );
                }
            }
        }
        Ok(())
    }

    /// Total number of catalog rows across all entity kinds.
    pub fn entry_count(&self) -> usize {
        self.tables.values().map(Vec::len).sum()
    }
}

/// Loader for drop catalogs from RON files.
pub struct LootTableLoader;

impl LootTableLoader {
    /// Load and validate a drop catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<LootCatalog> {
        let content = read_file(path)?;
        let catalog: LootCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse loot catalog RON: {}", e))?;
        catalog.validate()?;

        tracing::info!(
            kinds = catalog.tables.len(),
            entries = catalog.entry_count(),
            heads = catalog.heads.len(),
            "loaded loot catalog"
        );
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn write(dir: &TempDir, body: &str) -> std::path::PathBuf {
        let path = dir.path().join("loot.ron");
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn loads_tables_by_entity() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            r#"(
                tables: {
                    "ZOMBIE": [
                        (material: "ROTTEN_FLESH", chance: 100.0),
                        (material: "IRON_INGOT", chance: 2.5),
                    ],
                },
                heads: ["ZOMBIE"],
            )"#,
        );

        let catalog = LootTableLoader::load(&path).unwrap();

        let zombie = &catalog.tables[&EntityKind::from("ZOMBIE")];
        assert_eq!(zombie.len(), 2);
        assert_eq!(zombie[1], LootEntry::new("IRON_INGOT", 2.5));
        assert!(catalog.heads.contains(&EntityKind::from("ZOMBIE")));
    }

    #[test]
    fn rejects_chance_above_hundred() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            r#"(tables: { "SKELETON": [(material: "BONE", chance: 150.0)] })"#,
        );

        let err = LootTableLoader::load(&path).unwrap_err().to_string();

        assert!(err.contains("SKELETON"), "{err}");
        assert!(err.contains("BONE"), "{err}");
    }

    #[test]
    fn rejects_non_finite_chance() {
        let catalog = LootCatalog {
            tables: HashMap::from([(
                EntityKind::from("BLAZE"),
                vec![LootEntry::new("BLAZE_ROD", f64::NAN)],
            )]),
            heads: BTreeSet::new(),
        };

        assert!(catalog.validate().is_err());
    }

    #[test]
    fn empty_catalog_is_valid() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "()");

        let catalog = LootTableLoader::load(&path).unwrap();

        assert_eq!(catalog.entry_count(), 0);
    }
}
