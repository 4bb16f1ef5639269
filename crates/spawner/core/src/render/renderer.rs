//! Storage summary and info item rendering.

use crate::config::MenuConfig;
use crate::env::{MenuEnv, Viewer};
use crate::state::{Material, SpawnerState};
use crate::storage::{ConsolidatedHoldings, LootListBuilder, consolidate};
use crate::text::Placeholders;

use super::{CacheKey, Icon, RenderCache, RenderOutcome, RenderedItem};

pub const STORAGE_NAME_KEY: &str = "spawner_storage_item.name";
pub const STORAGE_LORE_KEY: &str = "spawner_storage_item.lore";
pub const INFO_NAME_KEY: &str = "spawner_info_item.name";
pub const INFO_LORE_KEY: &str = "spawner_info_item.lore";
pub const INFO_LORE_NO_SHOP_KEY: &str = "spawner_info_item.lore_no_shop";

/// Placeholder name carrying a small-caps entity name.
pub const ENTITY_SMALL_CAPS: &str = "ᴇɴᴛɪᴛʏ";

/// Renders the two menu items, consulting the cache first.
pub struct ItemRenderer<'a, C: RenderCache + ?Sized> {
    env: MenuEnv<'a>,
    cache: &'a C,
}

impl<'a, C: RenderCache + ?Sized> ItemRenderer<'a, C> {
    pub fn new(env: MenuEnv<'a>, cache: &'a C) -> Self {
        Self { env, cache }
    }

    /// Returns the cached item for `key`, or builds, caches, and returns it.
    ///
    /// Unstyled fallbacks are returned without being cached.
    pub fn keyed_render<F>(&self, key: CacheKey, build: F) -> RenderedItem
    where
        F: FnOnce() -> RenderOutcome,
    {
        if let Some(hit) = self.cache.get(&key) {
            tracing::trace!(%key, "render cache hit");
            return hit;
        }

        tracing::trace!(%key, "render cache miss");
        match build() {
            RenderOutcome::Styled(item) => {
                self.cache.put(key, item.clone());
                item
            }
            RenderOutcome::Unstyled(item) => {
                tracing::debug!(%key, "icon rejected metadata; returning unstyled item");
                item
            }
        }
    }

    /// Storage summary: fill level plus the loot listing.
    pub fn storage_item(&self, state: &SpawnerState) -> RenderedItem {
        let holdings = consolidate(&state.entries);
        let key = CacheKey::storage(state, &holdings);
        self.keyed_render(key, || self.build_storage(state, &holdings))
    }

    /// Spawner info: entity, stack, spawn settings, storage and experience.
    pub fn info_item(&self, state: &SpawnerState, viewer: &dyn Viewer) -> RenderedItem {
        let sell_access = self.sell_access(viewer);
        let key = CacheKey::info(state, sell_access);
        self.keyed_render(key, || self.build_info(state, sell_access))
    }

    /// Viewer may use the sell shortcut: integration present and permission held.
    pub fn sell_access(&self, viewer: &dyn Viewer) -> bool {
        self.env.shop().has_sell_integration()
            && viewer.has_permission(MenuConfig::SELL_PERMISSION)
    }

    fn build_storage(&self, state: &SpawnerState, holdings: &ConsolidatedHoldings) -> RenderOutcome {
        let format = self.env.format();
        let mut item = RenderedItem::new(Icon::Item(Material::chest()));
        let meta = match item.meta_mut() {
            Some(meta) => meta,
            None => return RenderOutcome::Unstyled(item),
        };

        let catalog = self.env.loot().loot_table(&state.entity);
        let loot_items = LootListBuilder::new(format).build(&catalog, holdings);

        let placeholders = Placeholders::new()
            .with("max_slots", format.format_number(u64::from(state.max_slots)))
            .with("current_items", state.used_slots.to_string())
            .with("percent_storage", state.storage_percent().to_string())
            .with("loot_items", loot_items);

        meta.name = Some(format.item_name(STORAGE_NAME_KEY, &placeholders));
        meta.lore = format.item_lore(STORAGE_LORE_KEY, &placeholders);
        RenderOutcome::Styled(item)
    }

    fn build_info(&self, state: &SpawnerState, sell_access: bool) -> RenderOutcome {
        let format = self.env.format();
        let mut item = RenderedItem::new(self.env.icons().info_icon(&state.entity));
        let meta = match item.meta_mut() {
            Some(meta) => meta,
            None => return RenderOutcome::Unstyled(item),
        };

        let entity_name = format.entity_name(&state.entity);
        let delay_seconds = state.delay.as_seconds(MenuConfig::TICKS_PER_SECOND);

        let placeholders = Placeholders::new()
            // Entity
            .with("entity", entity_name.as_str())
            .with(ENTITY_SMALL_CAPS, format.small_caps(&entity_name))
            .with("entity_type", state.entity.as_str())
            // Stack
            .with("stack_size", state.stack_size.to_string())
            // Spawn settings
            .with("range", state.range.to_string())
            .with("delay", delay_seconds.to_string())
            .with("delay_raw", state.delay.to_string())
            .with("min_mobs", state.min_mobs.to_string())
            .with("max_mobs", state.max_mobs.to_string())
            // Storage
            .with("current_items", state.used_slots.to_string())
            .with("max_items", format.format_number(u64::from(state.max_slots)))
            .with("formatted_storage", state.storage_percent_text())
            // Experience
            .with("current_exp", format.format_number(state.exp))
            .with("max_exp", format.format_number(state.max_exp))
            .with("raw_current_exp", state.exp.to_string())
            .with("raw_max_exp", state.max_exp.to_string())
            .with("formatted_exp", state.exp_percent_text());

        let lore_key = if sell_access {
            INFO_LORE_KEY
        } else {
            INFO_LORE_NO_SHOP_KEY
        };

        meta.name = Some(format.item_name(INFO_NAME_KEY, &placeholders));
        meta.lore = format.item_lore(lore_key, &placeholders);
        RenderOutcome::Styled(item)
    }
}
