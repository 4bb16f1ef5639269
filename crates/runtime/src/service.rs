//! Menu service: the entry point hosts call to render and open spawner menus.
//!
//! The service owns the render cache and the current oracle bundle. Renders
//! hold a shared lock on the bundle for their whole duration, so a
//! [`MenuService::reload`] never races with a render that would repopulate
//! the freshly cleared cache with text from the previous content.
use std::sync::{PoisonError, RwLock, RwLockReadGuard};

use spawner_core::{
    Menu, MenuConfig, MenuPresenter, RenderCache, RenderedItem, SpawnerMenu, SpawnerState, Viewer,
};

use crate::api::Result;
use crate::oracle::OracleManager;
use crate::repository::BoundedRenderCache;

/// Renders, caches, and presents spawner menus.
pub struct MenuService<C: RenderCache = BoundedRenderCache> {
    oracles: RwLock<OracleManager>,
    cache: C,
}

impl MenuService<BoundedRenderCache> {
    /// Creates a service with a bounded cache sized from `config`.
    pub fn from_config(oracles: OracleManager, config: &MenuConfig) -> Self {
        Self::new(oracles, BoundedRenderCache::new(config.cache_capacity))
    }
}

impl<C: RenderCache> MenuService<C> {
    pub fn new(oracles: OracleManager, cache: C) -> Self {
        Self {
            oracles: RwLock::new(oracles),
            cache,
        }
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    fn oracles(&self) -> RwLockReadGuard<'_, OracleManager> {
        // Oracles are immutable between reloads; a panic elsewhere cannot
        // leave them half-written.
        self.oracles.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Storage summary item for `state`, served from the cache when possible.
    pub fn storage_item(&self, state: &SpawnerState) -> RenderedItem {
        let oracles = self.oracles();
        let menu = SpawnerMenu::new(oracles.as_menu_env(), &self.cache);
        menu.renderer().storage_item(state)
    }

    /// Info item for `state` as seen by `viewer`.
    pub fn info_item(&self, state: &SpawnerState, viewer: &dyn Viewer) -> RenderedItem {
        let oracles = self.oracles();
        let menu = SpawnerMenu::new(oracles.as_menu_env(), &self.cache);
        menu.renderer().info_item(state, viewer)
    }

    /// Builds the full menu without presenting it.
    pub fn build(&self, state: &SpawnerState, viewer: &dyn Viewer) -> Menu {
        let oracles = self.oracles();
        SpawnerMenu::new(oracles.as_menu_env(), &self.cache).build(state, viewer)
    }

    /// Opens (or with `refresh`, re-presents) the main menu for `viewer`.
    ///
    /// Only a fresh open triggers the presenter's open notification.
    pub fn open(
        &self,
        viewer: &dyn Viewer,
        presenter: &dyn MenuPresenter,
        state: &SpawnerState,
        refresh: bool,
    ) -> Result<()> {
        let menu = self.build(state, viewer);
        spawner_core::open_menu(presenter, viewer, menu, refresh)?;
        Ok(())
    }

    /// Swaps the oracle bundle and drops every cached render.
    ///
    /// Localized text shapes output without being part of any key, so cached
    /// items are stale once content changes.
    pub fn reload(&self, oracles: OracleManager) {
        let mut current = self.oracles.write().unwrap_or_else(PoisonError::into_inner);
        *current = oracles;
        let dropped = self.cache.len();
        self.cache.clear();
        tracing::info!(dropped, "reloaded menu content");
    }

    /// Drops every cached render without touching the oracles.
    pub fn invalidate(&self) {
        self.cache.clear();
        tracing::debug!("render cache invalidated");
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }
}
