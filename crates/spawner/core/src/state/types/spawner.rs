use super::{EntityKind, SpawnerId, StoredEntry, Tick};

/// Read-only snapshot of a spawner as seen by the menu renderer.
///
/// The host owns and mutates the live spawner; the core only reads a snapshot.
/// Counts are assumed validated by the host (no negative or inverted bounds).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpawnerState {
    pub id: SpawnerId,
    pub entity: EntityKind,

    /// Number of physical spawners merged into this one (≥ 1).
    pub stack_size: u32,

    // === Virtual storage ===
    pub used_slots: u32,
    pub max_slots: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub entries: Vec<StoredEntry>,

    // === Stored experience ===
    pub exp: u64,
    pub max_exp: u64,

    // === Spawn settings ===
    pub range: u32,
    pub delay: Tick,
    pub min_mobs: u32,
    pub max_mobs: u32,
}

impl SpawnerState {
    pub const DEFAULT_MAX_SLOTS: u32 = 45;
    pub const DEFAULT_MAX_EXP: u64 = 1000;
    pub const DEFAULT_RANGE: u32 = 16;
    pub const DEFAULT_DELAY: Tick = Tick(500);
    pub const DEFAULT_MIN_MOBS: u32 = 1;
    pub const DEFAULT_MAX_MOBS: u32 = 4;

    /// Creates an empty single spawner with default spawn settings.
    pub fn new(id: impl Into<SpawnerId>, entity: impl Into<EntityKind>) -> Self {
        Self {
            id: id.into(),
            entity: entity.into(),
            stack_size: 1,
            used_slots: 0,
            max_slots: Self::DEFAULT_MAX_SLOTS,
            entries: Vec::new(),
            exp: 0,
            max_exp: Self::DEFAULT_MAX_EXP,
            range: Self::DEFAULT_RANGE,
            delay: Self::DEFAULT_DELAY,
            min_mobs: Self::DEFAULT_MIN_MOBS,
            max_mobs: Self::DEFAULT_MAX_MOBS,
        }
    }

    #[must_use]
    pub fn with_stack_size(mut self, stack_size: u32) -> Self {
        self.stack_size = stack_size;
        self
    }

    #[must_use]
    pub fn with_slots(mut self, used_slots: u32, max_slots: u32) -> Self {
        self.used_slots = used_slots;
        self.max_slots = max_slots;
        self
    }

    #[must_use]
    pub fn with_entries(mut self, entries: Vec<StoredEntry>) -> Self {
        self.entries = entries;
        self
    }

    #[must_use]
    pub fn with_exp(mut self, exp: u64, max_exp: u64) -> Self {
        self.exp = exp;
        self.max_exp = max_exp;
        self
    }

    #[must_use]
    pub fn with_spawn_settings(
        mut self,
        range: u32,
        delay: Tick,
        min_mobs: u32,
        max_mobs: u32,
    ) -> Self {
        self.range = range;
        self.delay = delay;
        self.min_mobs = min_mobs;
        self.max_mobs = max_mobs;
        self
    }

    /// Storage fill as a truncated integer percentage.
    pub fn storage_percent(&self) -> u32 {
        floor_percent(u64::from(self.used_slots), u64::from(self.max_slots))
    }

    /// Storage fill formatted with one fractional digit, e.g. `"33.3"`.
    pub fn storage_percent_text(&self) -> String {
        format_tenths(decimal_percent(
            u64::from(self.used_slots),
            u64::from(self.max_slots),
        ))
    }

    /// Experience fill formatted with one fractional digit.
    pub fn exp_percent_text(&self) -> String {
        format_tenths(decimal_percent(self.exp, self.max_exp))
    }
}

/// `floor(current / maximum * 100)`, or 0 when `maximum` is 0.
pub fn floor_percent(current: u64, maximum: u64) -> u32 {
    if maximum == 0 {
        return 0;
    }
    let percent = u128::from(current) * 100 / u128::from(maximum);
    u32::try_from(percent).unwrap_or(u32::MAX)
}

/// `current / maximum * 100` as a float, or 0 when `maximum` is 0.
pub fn decimal_percent(current: u64, maximum: u64) -> f64 {
    if maximum == 0 {
        return 0.0;
    }
    current as f64 / maximum as f64 * 100.0
}

/// Formats a value with exactly one fractional digit, rounding ties away
/// from zero (`6.25` → `6.3`, `0.25` → `0.3`).
///
/// Rounding works on the exact decimal expansion of `value`, so only values
/// that sit exactly on a tie round up.
pub fn format_tenths(value: f64) -> String {
    if !value.is_finite() {
        return format!("{value:.1}");
    }

    // Every finite f64 has a terminating decimal expansion; 1100 digits
    // covers the longest fractional part (subnormals).
    let exact = format!("{:.1100}", value.abs());
    let Some((whole, fraction)) = exact.split_once('.') else {
        return format!("{value:.1}");
    };
    let mut digits = fraction.bytes();
    let tenth = digits.next().map_or(0, |d| u32::from(d - b'0'));
    let round_up = digits.next().is_some_and(|d| d >= b'5');

    let mut whole: String = whole.to_owned();
    let mut tenth = tenth + u32::from(round_up);
    if tenth == 10 {
        tenth = 0;
        whole = increment_decimal(&whole);
    }

    let sign = if value.is_sign_negative() { "-" } else { "" };
    format!("{sign}{whole}.{tenth}")
}

/// Adds one to a string of ASCII decimal digits.
fn increment_decimal(digits: &str) -> String {
    let mut out: Vec<u8> = digits.bytes().collect();
    for d in out.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return String::from_utf8_lossy(&out).into_owned();
        }
    }
    let mut carried = String::with_capacity(out.len() + 1);
    carried.push('1');
    carried.push_str(&String::from_utf8_lossy(&out));
    carried
}
