use crate::config::MenuConfig;
use crate::env::FormatOracle;
use crate::render::{ENTITY_SMALL_CAPS, RenderedItem};
use crate::state::{SpawnerId, SpawnerState};
use crate::text::Placeholders;

pub const TITLE_STACKED_KEY: &str = "gui_title_main.stacked_spawner";
pub const TITLE_SINGLE_KEY: &str = "gui_title_main.single_spawner";

/// An assembled menu: a titled, fixed-size grid of optional items.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Menu {
    spawner: SpawnerId,
    title: String,
    slots: Vec<Option<RenderedItem>>,
}

impl Menu {
    /// Creates an empty menu with `size` slots.
    pub fn new(spawner: SpawnerId, title: String, size: usize) -> Self {
        Self {
            spawner,
            title,
            slots: vec![None; size],
        }
    }

    /// Spawner this menu belongs to (the host's menu holder).
    pub fn spawner(&self) -> &SpawnerId {
        &self.spawner
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn size(&self) -> usize {
        self.slots.len()
    }

    pub fn slots(&self) -> &[Option<RenderedItem>] {
        &self.slots
    }

    pub fn item(&self, slot: usize) -> Option<&RenderedItem> {
        self.slots.get(slot)?.as_ref()
    }

    /// Places `item` into `slot`. Out-of-range slots are ignored.
    pub fn set_item(&mut self, slot: usize, item: RenderedItem) {
        if let Some(cell) = self.slots.get_mut(slot) {
            *cell = Some(item);
        }
    }

    /// Occupied slots in ascending order.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, &RenderedItem)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, item)| item.as_ref().map(|item| (slot, item)))
    }
}

/// Composes rendered items and a localized title into a [`Menu`].
pub struct MenuAssembler<'a> {
    format: &'a dyn FormatOracle,
}

impl<'a> MenuAssembler<'a> {
    pub fn new(format: &'a dyn FormatOracle) -> Self {
        Self { format }
    }

    /// Stacked spawners use the stacked title, single spawners the single one.
    pub fn title(&self, state: &SpawnerState) -> String {
        let entity_name = self.format.entity_name(&state.entity);
        let placeholders = Placeholders::new()
            .with("entity", entity_name.as_str())
            .with(ENTITY_SMALL_CAPS, self.format.small_caps(&entity_name))
            .with("amount", state.stack_size.to_string());

        let key = if state.stack_size > 1 {
            TITLE_STACKED_KEY
        } else {
            TITLE_SINGLE_KEY
        };
        self.format.title(key, &placeholders)
    }

    pub fn assemble(&self, state: &SpawnerState, storage: RenderedItem, info: RenderedItem) -> Menu {
        let mut menu = Menu::new(state.id.clone(), self.title(state), MenuConfig::MENU_SIZE);
        menu.set_item(MenuConfig::STORAGE_SLOT, storage);
        menu.set_item(MenuConfig::INFO_SLOT, info);
        menu
    }
}
