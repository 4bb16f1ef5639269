//! Spawner snapshot representation.
//!
//! This module owns the data structures that describe a spawner as the menu
//! renderer sees it. The host clones a snapshot out of its live spawner and
//! passes it in; nothing here is mutated by rendering.
pub mod types;

pub use types::{
    EntityKind, ItemSignature, ItemTemplate, Material, SpawnerId, SpawnerState, StoredEntry, Tick,
    decimal_percent, floor_percent, format_tenths,
};
