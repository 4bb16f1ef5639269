//! Loot listing shown in the storage summary lore.

use crate::env::{FormatOracle, LootEntry};
use crate::state::format_tenths;
use crate::storage::ConsolidatedHoldings;
use crate::text::Placeholders;

/// Template key of one listing line.
pub const LOOT_LINE_KEY: &str = "spawner_storage_item.loot_items";
/// Template key of the text shown when nothing is held and nothing can drop.
pub const LOOT_EMPTY_KEY: &str = "spawner_storage_item.loot_items_empty";

/// Placeholder names available inside [`LOOT_LINE_KEY`].
pub mod line {
    pub const ITEM_NAME: &str = "item_name";
    pub const ITEM_NAME_SMALL_CAPS: &str = "ɪᴛᴇᴍ_ɴᴀᴍᴇ";
    pub const AMOUNT: &str = "amount";
    pub const RAW_AMOUNT: &str = "raw_amount";
    pub const CHANCE: &str = "chance";
}

/// Builds the multi-line loot listing for one spawner.
///
/// The line format and the empty message are fetched once per builder.
pub struct LootListBuilder<'a> {
    format: &'a dyn FormatOracle,
    line_format: String,
    empty_message: String,
}

struct Row<'r> {
    name: String,
    material: &'r crate::state::Material,
    amount: u64,
    chance: Option<f64>,
}

impl<'a> LootListBuilder<'a> {
    pub fn new(format: &'a dyn FormatOracle) -> Self {
        let none = Placeholders::new();
        Self {
            format,
            line_format: format.item_name(LOOT_LINE_KEY, &none),
            empty_message: format.item_name(LOOT_EMPTY_KEY, &none),
        }
    }

    /// Renders one line per item, newline-joined without a trailing newline.
    ///
    /// A non-empty catalog lists every possible drop (held or not) sorted by
    /// localized name, with its chance. Without a catalog the held items are
    /// listed instead, with an empty chance. With neither, the empty message
    /// is returned as-is.
    pub fn build(&self, catalog: &[LootEntry], holdings: &ConsolidatedHoldings) -> String {
        let rows = if !catalog.is_empty() {
            let held = holdings.by_material();
            let mut rows: Vec<Row<'_>> = catalog
                .iter()
                .map(|entry| Row {
                    name: self.format.material_name(&entry.material),
                    material: &entry.material,
                    amount: held.get(&entry.material).copied().unwrap_or(0),
                    chance: Some(entry.chance),
                })
                .collect();
            rows.sort_by(|a, b| a.name.cmp(&b.name));
            rows
        } else if !holdings.is_empty() {
            let mut rows: Vec<Row<'_>> = holdings
                .iter()
                .map(|(sig, amount)| Row {
                    name: self.format.material_name(sig.material()),
                    material: sig.material(),
                    amount,
                    chance: None,
                })
                .collect();
            rows.sort_by(|a, b| a.name.cmp(&b.name));
            rows
        } else {
            return self.empty_message.clone();
        };

        rows.iter()
            .map(|row| self.render_line(row))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_line(&self, row: &Row<'_>) -> String {
        let chance = row
            .chance
            .map(|chance| format!("{}%", format_tenths(chance)))
            .unwrap_or_default();

        let placeholders = Placeholders::new()
            .with(line::ITEM_NAME, row.name.as_str())
            .with(line::ITEM_NAME_SMALL_CAPS, self.format.small_caps(&row.name))
            .with(line::AMOUNT, self.format.format_number(row.amount))
            .with(line::RAW_AMOUNT, row.amount.to_string())
            .with(line::CHANCE, chance);

        tracing::trace!(material = %row.material, amount = row.amount, "loot line");
        placeholders.apply(&self.line_format)
    }
}
