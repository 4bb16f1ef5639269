//! Traits describing the collaborators the renderer reads from.
//!
//! Oracles expose localized text, drop catalogs, icons, and shop
//! integration. The [`MenuEnv`] aggregate bundles them so the renderer can
//! access everything it needs without hard coupling to concrete
//! implementations.
mod format;
mod icons;
mod loot;
mod shop;
mod viewer;

pub use format::FormatOracle;
pub use icons::IconOracle;
pub use loot::{LootEntry, LootOracle};
pub use shop::ShopOracle;
pub use viewer::Viewer;

/// Aggregates the read-only oracles required by item rendering and menu assembly.
#[derive(Clone, Copy)]
pub struct MenuEnv<'a> {
    format: &'a dyn FormatOracle,
    loot: &'a dyn LootOracle,
    icons: &'a dyn IconOracle,
    shop: &'a dyn ShopOracle,
}

impl<'a> MenuEnv<'a> {
    pub fn new(
        format: &'a dyn FormatOracle,
        loot: &'a dyn LootOracle,
        icons: &'a dyn IconOracle,
        shop: &'a dyn ShopOracle,
    ) -> Self {
        Self {
            format,
            loot,
            icons,
            shop,
        }
    }

    pub fn format(&self) -> &'a dyn FormatOracle {
        self.format
    }

    pub fn loot(&self) -> &'a dyn LootOracle {
        self.loot
    }

    pub fn icons(&self) -> &'a dyn IconOracle {
        self.icons
    }

    pub fn shop(&self) -> &'a dyn ShopOracle {
        self.shop
    }
}

impl core::fmt::Debug for MenuEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MenuEnv").finish_non_exhaustive()
    }
}
