/// Economy integration availability.
pub trait ShopOracle: Send + Sync {
    /// Returns true when a sell integration is hooked up.
    fn has_sell_integration(&self) -> bool;
}
