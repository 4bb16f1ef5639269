use std::fmt;

/// Declares a string-backed identifier newtype.
///
/// Identifiers compare, hash, and order by their textual value only.
macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(pub String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

string_id!(
    /// Opaque stable identifier of a spawner, owned by the host.
    SpawnerId
);

string_id!(
    /// Entity type produced by a spawner, e.g. `ZOMBIE`.
    EntityKind
);

string_id!(
    /// Item material identifier, e.g. `ROTTEN_FLESH`.
    Material
);

impl Material {
    /// Icon of the storage summary item.
    pub fn chest() -> Self {
        Self::from("CHEST")
    }

    /// Fallback icon of the info item when no mob head is known.
    pub fn spawner() -> Self {
        Self::from("SPAWNER")
    }
}

/// Server tick count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Tick(pub u64);

impl Tick {
    /// Whole seconds covered by this many ticks (truncating).
    pub const fn as_seconds(self, ticks_per_second: u64) -> u64 {
        if ticks_per_second == 0 {
            0
        } else {
            self.0 / ticks_per_second
        }
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
