//! [`spawner_core::FormatOracle`] backed by a loaded language pack.
use spawner_content::{LanguagePack, NumberStyle};
use spawner_core::{EntityKind, FormatOracle, Material, Placeholders};

/// FormatOracle implementation over static language data.
///
/// Unknown template keys render as the key itself so a missing translation
/// is visible in the menu instead of breaking it.
pub struct LanguageOracleImpl {
    pack: LanguagePack,
}

impl LanguageOracleImpl {
    pub fn new(pack: LanguagePack) -> Self {
        Self { pack }
    }

    pub fn pack(&self) -> &LanguagePack {
        &self.pack
    }

    fn single_line(&self, key: &str, placeholders: &Placeholders) -> String {
        match self.pack.template(key) {
            Some(template) => placeholders.apply(&template.joined()),
            None => {
                tracing::debug!(key, "missing language template");
                key.to_owned()
            }
        }
    }
}

impl Default for LanguageOracleImpl {
    fn default() -> Self {
        Self::new(LanguagePack::default())
    }
}

impl FormatOracle for LanguageOracleImpl {
    fn format_number(&self, value: u64) -> String {
        match self.pack.number_style {
            NumberStyle::Compact => compact_number(value),
            NumberStyle::Grouped => grouped_number(value),
        }
    }

    fn entity_name(&self, kind: &EntityKind) -> String {
        self.pack
            .entity_names
            .get(kind)
            .cloned()
            .unwrap_or_else(|| title_case(kind.as_str()))
    }

    fn material_name(&self, material: &Material) -> String {
        self.pack
            .material_names
            .get(material)
            .cloned()
            .unwrap_or_else(|| title_case(material.as_str()))
    }

    fn small_caps(&self, text: &str) -> String {
        text.chars().map(small_cap).collect()
    }

    fn title(&self, key: &str, placeholders: &Placeholders) -> String {
        self.single_line(key, placeholders)
    }

    fn item_name(&self, key: &str, placeholders: &Placeholders) -> String {
        self.single_line(key, placeholders)
    }

    fn item_lore(&self, key: &str, placeholders: &Placeholders) -> Vec<String> {
        let Some(template) = self.pack.template(key) else {
            tracing::debug!(key, "missing language template");
            return vec![key.to_owned()];
        };

        // A substituted value spanning several lines becomes several lore lines.
        template
            .lines()
            .iter()
            .flat_map(|line| {
                placeholders
                    .apply(line)
                    .split('\n')
                    .map(str::to_owned)
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}

const COMPACT_UNITS: [(u64, char); 4] = [
    (1_000_000_000_000, 'T'),
    (1_000_000_000, 'B'),
    (1_000_000, 'M'),
    (1_000, 'K'),
];

/// `1234` → `1.2K`. Truncates to one decimal and drops a trailing `.0`.
pub fn compact_number(value: u64) -> String {
    for (unit, suffix) in COMPACT_UNITS {
        if value >= unit {
            let tenths = u128::from(value) * 10 / u128::from(unit);
            let (whole, frac) = (tenths / 10, tenths % 10);
            return if frac == 0 {
                format!("{whole}{suffix}")
            } else {
                format!("{whole}.{frac}{suffix}")
            };
        }
    }
    value.to_string()
}

/// `1234567` → `1,234,567`.
pub fn grouped_number(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `ZOMBIE_VILLAGER` → `Zombie Villager`.
pub fn title_case(identifier: &str) -> String {
    identifier
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let lower = word.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn small_cap(ch: char) -> char {
    match ch.to_ascii_lowercase() {
        'a' => 'ᴀ',
        'b' => 'ʙ',
        'c' => 'ᴄ',
        'd' => 'ᴅ',
        'e' => 'ᴇ',
        'f' => 'ꜰ',
        'g' => 'ɢ',
        'h' => 'ʜ',
        'i' => 'ɪ',
        'j' => 'ᴊ',
        'k' => 'ᴋ',
        'l' => 'ʟ',
        'm' => 'ᴍ',
        'n' => 'ɴ',
        'o' => 'ᴏ',
        'p' => 'ᴘ',
        'q' => 'ǫ',
        'r' => 'ʀ',
        's' => 'ꜱ',
        't' => 'ᴛ',
        'u' => 'ᴜ',
        'v' => 'ᴠ',
        'w' => 'ᴡ',
        'x' => 'x',
        'y' => 'ʏ',
        'z' => 'ᴢ',
        _ => ch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oracle(style: NumberStyle) -> LanguageOracleImpl {
        LanguageOracleImpl::new(
            LanguagePack::new(style)
                .with_template("gui.title", "%entity% x%amount%")
                .with_template("gui.lore", vec!["Drops:", "%loot%", "End %unknown%"])
                .with_entity_name("ZOMBIE", "Walker"),
        )
    }

    #[test]
    fn compact_numbers() {
        assert_eq!(compact_number(0), "0");
        assert_eq!(compact_number(999), "999");
        assert_eq!(compact_number(1_000), "1K");
        assert_eq!(compact_number(1_250), "1.2K");
        assert_eq!(compact_number(999_999), "999.9K");
        assert_eq!(compact_number(3_400_000), "3.4M");
        assert_eq!(compact_number(5_000_000_000), "5B");
        assert_eq!(compact_number(1_000_000_000_000), "1T");
        assert_eq!(compact_number(u64::MAX), "18446744T");
    }

    #[test]
    fn grouped_numbers() {
        assert_eq!(grouped_number(0), "0");
        assert_eq!(grouped_number(999), "999");
        assert_eq!(grouped_number(1_000), "1,000");
        assert_eq!(grouped_number(1_234_567), "1,234,567");
    }

    #[test]
    fn number_style_follows_pack() {
        assert_eq!(oracle(NumberStyle::Compact).format_number(12_345), "12.3K");
        assert_eq!(oracle(NumberStyle::Grouped).format_number(12_345), "12,345");
    }

    #[test]
    fn display_names_fall_back_to_title_case() {
        let oracle = oracle(NumberStyle::Compact);
        assert_eq!(oracle.entity_name(&EntityKind::from("ZOMBIE")), "Walker");
        assert_eq!(
            oracle.entity_name(&EntityKind::from("ZOMBIE_VILLAGER")),
            "Zombie Villager"
        );
        assert_eq!(oracle.material_name(&Material::from("IRON_INGOT")), "Iron Ingot");
    }

    #[test]
    fn small_caps_maps_ascii_letters() {
        let oracle = oracle(NumberStyle::Compact);
        assert_eq!(oracle.small_caps("Zombie 2"), "ᴢᴏᴍʙɪᴇ 2");
    }

    #[test]
    fn title_substitutes_placeholders() {
        let placeholders = Placeholders::new().with("entity", "Walker").with("amount", "3");
        assert_eq!(oracle(NumberStyle::Compact).title("gui.title", &placeholders), "Walker x3");
    }

    #[test]
    fn lore_expands_multi_line_values() {
        let placeholders = Placeholders::new().with("loot", "Bone\nArrow");

        let lore = oracle(NumberStyle::Compact).item_lore("gui.lore", &placeholders);

        assert_eq!(lore, ["Drops:", "Bone", "Arrow", "End %unknown%"]);
    }

    #[test]
    fn missing_keys_render_as_key() {
        let oracle = oracle(NumberStyle::Compact);
        assert_eq!(oracle.item_name("gui.absent", &Placeholders::new()), "gui.absent");
        assert_eq!(oracle.item_lore("gui.absent", &Placeholders::new()), ["gui.absent"]);
    }
}
