//! Structural cache keys.
//!
//! A key is compared and hashed field by field, never through a joined
//! string, so no identifier text can make two different states collide.

use std::fmt;

use crate::state::{EntityKind, SpawnerId, SpawnerState, Tick};
use crate::storage::ConsolidatedHoldings;

/// Which of the two menu items a key belongs to.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum RenderVariant {
    Storage,
    Info,
}

/// Fingerprint of every input that shapes the storage summary item.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StorageKey {
    pub entity: EntityKind,
    pub used_slots: u32,
    pub max_slots: u32,
    /// [`ConsolidatedHoldings::digest`] of the stored entries.
    pub holdings: [u8; 32],
}

/// Fingerprint of every input that shapes the spawner info item.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct InfoKey {
    pub entity: EntityKind,
    pub stack_size: u32,
    pub storage_percent: String,
    pub exp_percent: String,
    pub range: u32,
    pub delay: Tick,
    pub min_mobs: u32,
    pub max_mobs: u32,
    pub sell_access: bool,
    pub used_slots: u32,
    pub max_slots: u32,
    pub exp: u64,
    pub max_exp: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum KeyVariant {
    Storage(StorageKey),
    Info(InfoKey),
}

/// Identity of one cached [`RenderedItem`](super::RenderedItem).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey {
    spawner: SpawnerId,
    variant: KeyVariant,
}

impl CacheKey {
    pub fn new(spawner: SpawnerId, variant: KeyVariant) -> Self {
        Self { spawner, variant }
    }

    /// Key of the storage summary. Point balances do not participate.
    pub fn storage(state: &SpawnerState, holdings: &ConsolidatedHoldings) -> Self {
        Self::new(
            state.id.clone(),
            KeyVariant::Storage(StorageKey {
                entity: state.entity.clone(),
                used_slots: state.used_slots,
                max_slots: state.max_slots,
                holdings: holdings.digest(),
            }),
        )
    }

    /// Key of the info item. Stored entries do not participate.
    pub fn info(state: &SpawnerState, sell_access: bool) -> Self {
        Self::new(
            state.id.clone(),
            KeyVariant::Info(InfoKey {
                entity: state.entity.clone(),
                stack_size: state.stack_size,
                storage_percent: state.storage_percent_text(),
                exp_percent: state.exp_percent_text(),
                range: state.range,
                delay: state.delay,
                min_mobs: state.min_mobs,
                max_mobs: state.max_mobs,
                sell_access,
                used_slots: state.used_slots,
                max_slots: state.max_slots,
                exp: state.exp,
                max_exp: state.max_exp,
            }),
        )
    }

    pub fn spawner(&self) -> &SpawnerId {
        &self.spawner
    }

    pub fn variant(&self) -> &KeyVariant {
        &self.variant
    }

    pub fn kind(&self) -> RenderVariant {
        match self.variant {
            KeyVariant::Storage(_) => RenderVariant::Storage,
            KeyVariant::Info(_) => RenderVariant::Info,
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.spawner, self.kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ItemTemplate, StoredEntry};
    use crate::storage::consolidate;

    fn base() -> SpawnerState {
        SpawnerState::new("spawner-1", "ZOMBIE")
            .with_slots(4, 45)
            .with_exp(100, 1000)
            .with_entries(vec![StoredEntry::new(ItemTemplate::new("ROTTEN_FLESH"), 200)])
    }

    fn storage_key(state: &SpawnerState) -> CacheKey {
        CacheKey::storage(state, &consolidate(&state.entries))
    }

    #[test]
    fn identical_states_share_keys() {
        assert_eq!(storage_key(&base()), storage_key(&base()));
        assert_eq!(CacheKey::info(&base(), true), CacheKey::info(&base(), true));
    }

    #[test]
    fn variants_never_collide() {
        let state = base();
        assert_ne!(storage_key(&state), CacheKey::info(&state, false));
    }

    #[test]
    fn storage_key_follows_its_inputs() {
        let reference = storage_key(&base());

        let mut changed = base();
        changed.used_slots += 1;
        assert_ne!(storage_key(&changed), reference);

        let mut changed = base();
        changed.entries[0].amount += 1;
        assert_ne!(storage_key(&changed), reference);

        let mut changed = base();
        changed.entity = "SKELETON".into();
        assert_ne!(storage_key(&changed), reference);
    }

    #[test]
    fn storage_key_ignores_point_balance() {
        let mut changed = base();
        changed.exp = 999;
        assert_eq!(storage_key(&changed), storage_key(&base()));
    }

    #[test]
    fn info_key_follows_its_inputs() {
        let reference = CacheKey::info(&base(), false);

        assert_ne!(CacheKey::info(&base(), true), reference);
        assert_ne!(CacheKey::info(&base().with_stack_size(2), false), reference);

        let mut changed = base();
        changed.exp += 1;
        assert_ne!(CacheKey::info(&changed, false), reference);

        let mut changed = base();
        changed.delay = Tick(600);
        assert_ne!(CacheKey::info(&changed, false), reference);

        let variations: [fn(&mut SpawnerState); 9] = [
            |s| s.range += 1,
            |s| s.min_mobs += 1,
            |s| s.max_mobs += 1,
            |s| s.used_slots += 1,
            |s| s.max_slots += 1,
            |s| s.max_exp += 1,
            |s| s.entity = "SKELETON".into(),
            |s| s.id = "spawner-2".into(),
            |s| s.stack_size += 1,
        ];
        for (i, vary) in variations.iter().enumerate() {
            let mut changed = base();
            vary(&mut changed);
            assert_ne!(CacheKey::info(&changed, false), reference, "variation {i}");
        }
    }

    #[test]
    fn info_key_ignores_stored_entries() {
        let mut changed = base();
        changed.entries.clear();
        assert_eq!(CacheKey::info(&changed, false), CacheKey::info(&base(), false));
    }

    #[test]
    fn separator_text_in_ids_does_not_collide() {
        let a = SpawnerState::new("a|storage", "B");
        let b = SpawnerState::new("a", "storage|B");
        assert_ne!(storage_key(&a), storage_key(&b));
    }
}
