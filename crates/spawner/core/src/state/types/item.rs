//! Stored item types.
//!
//! - ItemTemplate: what an item *is* (material + distinguishing metadata)
//! - StoredEntry: a template together with a held amount
//! - ItemSignature: canonical identity used to merge equal templates

use std::collections::BTreeMap;

use super::Material;

/// Distinguishing description of an item, independent of its amount.
///
/// Metadata is kept in a sorted map so that two templates built from the same
/// key/value pairs compare equal regardless of insertion order.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemTemplate {
    pub material: Material,
    #[cfg_attr(feature = "serde", serde(default))]
    pub meta: BTreeMap<String, String>,
}

impl ItemTemplate {
    pub fn new(material: impl Into<Material>) -> Self {
        Self {
            material: material.into(),
            meta: BTreeMap::new(),
        }
    }

    /// Attaches a metadata entry (builder pattern).
    #[must_use]
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }
}

/// One record in a spawner's virtual storage.
///
/// Several records may share an equal template; they are merged by
/// [`consolidate`](crate::storage::consolidate).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StoredEntry {
    pub template: ItemTemplate,
    pub amount: u64,
}

impl StoredEntry {
    pub fn new(template: ItemTemplate, amount: u64) -> Self {
        Self { template, amount }
    }

    pub fn signature(&self) -> ItemSignature {
        ItemSignature::new(self.template.clone())
    }
}

/// Canonical identity of a stored item, ignoring its amount.
///
/// Equality, ordering, and hashing are exactly those of the wrapped
/// [`ItemTemplate`], so signatures are stable across calls and processes.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemSignature(ItemTemplate);

impl ItemSignature {
    pub fn new(template: ItemTemplate) -> Self {
        Self(template)
    }

    pub fn template(&self) -> &ItemTemplate {
        &self.0
    }

    pub fn material(&self) -> &Material {
        &self.0.material
    }
}

impl From<ItemTemplate> for ItemSignature {
    fn from(template: ItemTemplate) -> Self {
        Self::new(template)
    }
}
