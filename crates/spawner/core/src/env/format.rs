use crate::state::{EntityKind, Material};
use crate::text::Placeholders;

/// Localization and number formatting.
///
/// Template lookups never fail: implementations return something printable
/// (typically the key itself) for keys they do not know, and leave unknown
/// `%placeholders%` as literal text.
pub trait FormatOracle: Send + Sync {
    /// Formats a count for display, e.g. `1.2K` or `1,200`.
    fn format_number(&self, value: u64) -> String;

    /// Localized display name of an entity kind.
    fn entity_name(&self, kind: &EntityKind) -> String;

    /// Localized display name of an item material.
    fn material_name(&self, material: &Material) -> String;

    /// Decorative small-capitals rendering of `text`.
    fn small_caps(&self, text: &str) -> String;

    /// Menu title for a template key.
    fn title(&self, key: &str, placeholders: &Placeholders) -> String;

    /// Single-line item text (display names, loot line formats).
    fn item_name(&self, key: &str, placeholders: &Placeholders) -> String;

    /// Ordered lore lines for a template key.
    fn item_lore(&self, key: &str, placeholders: &Placeholders) -> Vec<String>;
}
