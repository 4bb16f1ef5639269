//! Merging of stored entries that share a template.

use std::collections::BTreeMap;

use crate::state::{ItemSignature, Material, StoredEntry};

/// Stored entries merged per [`ItemSignature`].
///
/// Each signature appears once, mapped to the sum of the amounts of every
/// entry carrying it. Iteration order is the signature order, so the result
/// (and its [`digest`](Self::digest)) does not depend on input order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConsolidatedHoldings {
    totals: BTreeMap<ItemSignature, u64>,
}

/// Merges value-equal entries into `(signature, total)` pairs.
///
/// Totals saturate at `u64::MAX`.
pub fn consolidate<'a, I>(entries: I) -> ConsolidatedHoldings
where
    I: IntoIterator<Item = &'a StoredEntry>,
{
    let mut totals: BTreeMap<ItemSignature, u64> = BTreeMap::new();
    for entry in entries {
        let total = totals.entry(entry.signature()).or_insert(0);
        *total = total.saturating_add(entry.amount);
    }
    ConsolidatedHoldings { totals }
}

impl ConsolidatedHoldings {
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Total held for `signature`, 0 when absent.
    pub fn get(&self, signature: &ItemSignature) -> u64 {
        self.totals.get(signature).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemSignature, u64)> {
        self.totals.iter().map(|(sig, total)| (sig, *total))
    }

    /// Sum over all signatures.
    pub fn total(&self) -> u64 {
        self.totals
            .values()
            .fold(0u64, |acc, total| acc.saturating_add(*total))
    }

    /// Totals merged by material, ignoring metadata differences.
    pub fn by_material(&self) -> BTreeMap<&Material, u64> {
        let mut by_material: BTreeMap<&Material, u64> = BTreeMap::new();
        for (sig, total) in &self.totals {
            let entry = by_material.entry(sig.material()).or_insert(0);
            *entry = entry.saturating_add(*total);
        }
        by_material
    }

    /// SHA-256 commitment to every `(signature, total)` pair.
    ///
    /// Every string is length-prefixed, so no choice of material or metadata
    /// text can make two different holdings serialize to the same bytes.
    pub fn digest(&self) -> [u8; 32] {
        use sha2::{Digest, Sha256};

        fn put_str(hasher: &mut Sha256, value: &str) {
            hasher.update((value.len() as u64).to_le_bytes());
            hasher.update(value.as_bytes());
        }

        let mut hasher = Sha256::new();
        hasher.update((self.totals.len() as u64).to_le_bytes());
        for (sig, total) in &self.totals {
            let template = sig.template();
            put_str(&mut hasher, template.material.as_str());
            hasher.update((template.meta.len() as u64).to_le_bytes());
            for (key, value) in &template.meta {
                put_str(&mut hasher, key);
                put_str(&mut hasher, value);
            }
            hasher.update(total.to_le_bytes());
        }
        hasher.finalize().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ItemTemplate;
    use proptest::prelude::*;

    fn entry(material: &str, amount: u64) -> StoredEntry {
        StoredEntry::new(ItemTemplate::new(material), amount)
    }

    #[test]
    fn empty_input_yields_empty_holdings() {
        let holdings = consolidate(std::iter::empty::<&StoredEntry>());
        assert!(holdings.is_empty());
        assert_eq!(holdings.total(), 0);
    }

    #[test]
    fn merges_equal_templates() {
        let entries = vec![
            entry("BONE", 64),
            entry("ARROW", 10),
            entry("BONE", 36),
        ];

        let holdings = consolidate(&entries);

        assert_eq!(holdings.len(), 2);
        assert_eq!(holdings.get(&entries[0].signature()), 100);
        assert_eq!(holdings.get(&entries[1].signature()), 10);
    }

    #[test]
    fn metadata_separates_signatures_but_not_materials() {
        let plain = entry("BOW", 1);
        let named = StoredEntry::new(ItemTemplate::new("BOW").with_meta("name", "Bent"), 2);

        let holdings = consolidate([&plain, &named]);

        assert_eq!(holdings.len(), 2);
        assert_eq!(holdings.by_material()[&Material::from("BOW")], 3);
    }

    #[test]
    fn digest_tracks_amounts() {
        let before = consolidate(&[entry("BONE", 1)]);
        let after = consolidate(&[entry("BONE", 2)]);
        assert_ne!(before.digest(), after.digest());
    }

    #[test]
    fn digest_is_not_fooled_by_shifted_text() {
        let a = StoredEntry::new(ItemTemplate::new("A").with_meta("k", "vX"), 1);
        let b = StoredEntry::new(ItemTemplate::new("A").with_meta("kv", "X"), 1);
        assert_ne!(consolidate([&a]).digest(), consolidate([&b]).digest());
    }

    fn arb_entries() -> impl Strategy<Value = Vec<StoredEntry>> {
        let material = prop::sample::select(vec!["BONE", "ARROW", "STRING", "GUNPOWDER"]);
        let meta = prop::option::of(prop::sample::select(vec!["sharp", "named"]));
        prop::collection::vec(
            (material, meta, 0u64..1_000_000).prop_map(|(material, meta, amount)| {
                let mut template = ItemTemplate::new(material);
                if let Some(tag) = meta {
                    template = template.with_meta("tag", tag);
                }
                StoredEntry::new(template, amount)
            }),
            0..40,
        )
    }

    proptest! {
        #[test]
        fn conserves_mass(entries in arb_entries()) {
            let input: u64 = entries.iter().map(|e| e.amount).sum();
            prop_assert_eq!(consolidate(&entries).total(), input);
        }

        #[test]
        fn ignores_input_order(entries in arb_entries(), seed in any::<u64>()) {
            let mut shuffled = entries.clone();
            // Deterministic rotation + reversal stands in for a permutation.
            if !shuffled.is_empty() {
                let len = shuffled.len();
                shuffled.rotate_left((seed as usize) % len);
            }
            if seed % 2 == 0 {
                shuffled.reverse();
            }

            let a = consolidate(&entries);
            let b = consolidate(&shuffled);
            prop_assert_eq!(a.digest(), b.digest());
            prop_assert_eq!(a, b);
        }
    }
}
