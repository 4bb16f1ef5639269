use crate::state::{EntityKind, Material};

/// Possible drop of an entity kind.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LootEntry {
    pub material: Material,
    /// Drop chance in percent, `0.0..=100.0`.
    pub chance: f64,
}

impl LootEntry {
    pub fn new(material: impl Into<Material>, chance: f64) -> Self {
        Self {
            material: material.into(),
            chance,
        }
    }
}

/// Static drop catalog per entity kind.
pub trait LootOracle: Send + Sync {
    /// Possible drops of `kind`; empty when the kind has no catalog.
    fn loot_table(&self, kind: &EntityKind) -> Vec<LootEntry>;
}
