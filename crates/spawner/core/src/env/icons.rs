use crate::render::Icon;
use crate::state::EntityKind;

/// Resolves the icon shown on the spawner info item.
pub trait IconOracle: Send + Sync {
    fn info_icon(&self, kind: &EntityKind) -> Icon;
}
