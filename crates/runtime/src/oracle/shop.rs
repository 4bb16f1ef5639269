//! Shop integration oracle for runtime.

use spawner_core::{MenuConfig, ShopOracle};

/// Runtime implementation of ShopOracle driven by configuration.
pub struct ShopOracleImpl {
    sell_integration: bool,
}

impl ShopOracleImpl {
    pub fn new(sell_integration: bool) -> Self {
        Self { sell_integration }
    }

    pub fn from_config(config: &MenuConfig) -> Self {
        Self::new(config.sell_integration)
    }
}

impl ShopOracle for ShopOracleImpl {
    fn has_sell_integration(&self) -> bool {
        self.sell_integration
    }
}
