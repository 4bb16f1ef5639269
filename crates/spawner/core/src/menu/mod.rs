//! Main spawner menu assembly and presentation.
//!
//! [`MenuAssembler`] places the rendered items into a fixed slot grid under a
//! localized title; [`open_menu`] hands the result to the host through a
//! [`MenuPresenter`]. [`SpawnerMenu`] wires rendering and assembly together.
mod assemble;
mod present;

pub use assemble::{Menu, MenuAssembler, TITLE_SINGLE_KEY, TITLE_STACKED_KEY};
pub use present::{MenuPresenter, open_menu};

use crate::env::{MenuEnv, Viewer};
use crate::error::PresentError;
use crate::render::{ItemRenderer, RenderCache};
use crate::state::SpawnerState;

/// Renders, assembles, and presents the main spawner menu.
pub struct SpawnerMenu<'a, C: RenderCache + ?Sized> {
    renderer: ItemRenderer<'a, C>,
    assembler: MenuAssembler<'a>,
}

impl<'a, C: RenderCache + ?Sized> SpawnerMenu<'a, C> {
    pub fn new(env: MenuEnv<'a>, cache: &'a C) -> Self {
        Self {
            renderer: ItemRenderer::new(env, cache),
            assembler: MenuAssembler::new(env.format()),
        }
    }

    pub fn renderer(&self) -> &ItemRenderer<'a, C> {
        &self.renderer
    }

    /// Builds the full menu for `viewer` without presenting it.
    pub fn build(&self, state: &SpawnerState, viewer: &dyn Viewer) -> Menu {
        let storage = self.renderer.storage_item(state);
        let info = self.renderer.info_item(state, viewer);
        self.assembler.assemble(state, storage, info)
    }

    /// Builds the menu and presents it to `viewer`.
    ///
    /// `refresh` re-presents an already open menu and suppresses the open
    /// notification.
    pub fn open(
        &self,
        viewer: &dyn Viewer,
        presenter: &dyn MenuPresenter,
        state: &SpawnerState,
        refresh: bool,
    ) -> Result<(), PresentError> {
        let menu = self.build(state, viewer);
        open_menu(presenter, viewer, menu, refresh)
    }
}
