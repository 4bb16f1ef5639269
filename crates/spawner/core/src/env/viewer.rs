/// The player a menu is rendered for.
pub trait Viewer: Send + Sync {
    /// Display name, used for logging and host errors.
    fn name(&self) -> &str;

    fn has_permission(&self, node: &str) -> bool;
}
