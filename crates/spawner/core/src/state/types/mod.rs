pub mod common;
pub mod item;
pub mod spawner;

// Re-export identifier types
pub use common::{EntityKind, Material, SpawnerId, Tick};

// Re-export item types
pub use item::{ItemSignature, ItemTemplate, StoredEntry};

// Re-export spawner snapshot and ratio helpers
pub use spawner::{SpawnerState, decimal_percent, floor_percent, format_tenths};
