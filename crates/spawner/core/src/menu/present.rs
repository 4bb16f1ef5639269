use crate::env::Viewer;
use crate::error::PresentError;

use super::Menu;

/// Host boundary that shows menus to viewers.
pub trait MenuPresenter: Send + Sync {
    /// Shows `menu` to `viewer`, replacing whatever they have open.
    fn present(&self, viewer: &dyn Viewer, menu: Menu) -> Result<(), PresentError>;

    /// Side effect of a fresh open (e.g. the chest-open sound).
    fn notify_opened(&self, viewer: &dyn Viewer);
}

/// Presents `menu`, notifying only on a fresh open.
///
/// Nothing is notified when presentation fails.
pub fn open_menu(
    presenter: &dyn MenuPresenter,
    viewer: &dyn Viewer,
    menu: Menu,
    refresh: bool,
) -> Result<(), PresentError> {
    tracing::debug!(
        viewer = viewer.name(),
        spawner = %menu.spawner(),
        refresh,
        "presenting spawner menu"
    );
    presenter.present(viewer, menu)?;
    if !refresh {
        presenter.notify_opened(viewer);
    }
    Ok(())
}
