//! Runtime wrappers around static menu content.
//!
//! These implementations expose `spawner-core` oracle traits and bundle them
//! into an [`OracleManager`] so the service can build [`MenuEnv`] snapshots on
//! demand. The data is immutable once loaded; a content reload swaps the
//! whole manager.
mod icons;
mod language;
mod loot;
mod shop;

use std::sync::Arc;

use spawner_content::ContentFactory;
use spawner_core::{FormatOracle, IconOracle, LootOracle, MenuConfig, MenuEnv, ShopOracle};

use crate::api::Result;

pub use icons::IconOracleImpl;
pub use language::{LanguageOracleImpl, compact_number, grouped_number, title_case};
pub use loot::LootOracleImpl;
pub use shop::ShopOracleImpl;

/// Manages all oracle implementations and provides unified access
#[derive(Clone)]
pub struct OracleManager {
    pub(crate) format: Arc<dyn FormatOracle>,
    pub(crate) loot: Arc<dyn LootOracle>,
    pub(crate) icons: Arc<dyn IconOracle>,
    pub(crate) shop: Arc<dyn ShopOracle>,
}

impl OracleManager {
    /// Creates a new oracle manager
    pub fn new(
        format: Arc<dyn FormatOracle>,
        loot: Arc<dyn LootOracle>,
        icons: Arc<dyn IconOracle>,
        shop: Arc<dyn ShopOracle>,
    ) -> Self {
        Self {
            format,
            loot,
            icons,
            shop,
        }
    }

    /// Loads language and drop data from `factory` and builds every oracle.
    pub fn load(factory: &ContentFactory, config: &MenuConfig) -> Result<Self> {
        let language = factory.load_language()?;
        let catalog = factory.load_loot()?;

        Ok(Self::new(
            Arc::new(LanguageOracleImpl::new(language)),
            Arc::new(LootOracleImpl::from_catalog(&catalog)),
            Arc::new(IconOracleImpl::from_catalog(&catalog)),
            Arc::new(ShopOracleImpl::from_config(config)),
        ))
    }

    /// Borrows the oracles as the environment the renderer reads from
    pub fn as_menu_env(&self) -> MenuEnv<'_> {
        MenuEnv::new(
            self.format.as_ref(),
            self.loot.as_ref(),
            self.icons.as_ref(),
            self.shop.as_ref(),
        )
    }
}

impl std::fmt::Debug for OracleManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OracleManager").finish_non_exhaustive()
    }
}
