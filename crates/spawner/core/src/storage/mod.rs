//! Virtual storage summarization: consolidation and loot listing.
mod consolidate;
mod loot;

pub use consolidate::{ConsolidatedHoldings, consolidate};
pub use loot::{LOOT_EMPTY_KEY, LOOT_LINE_KEY, LootListBuilder, line};
