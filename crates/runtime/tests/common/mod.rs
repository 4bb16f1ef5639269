//! Shared fakes for runtime integration tests.
#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use spawner_content::{LanguagePack, NumberStyle};
use spawner_core::{
    CacheKey, EntityKind, FormatOracle, Icon, IconOracle, ItemTemplate, LootEntry, LootOracle,
    Material, Menu, MenuConfig, MenuPresenter, Placeholders, PresentError, RenderCache,
    RenderedItem, SpawnerState, StoredEntry, Viewer,
};
use spawner_runtime::{
    BoundedRenderCache, IconOracleImpl, LanguageOracleImpl, LootOracleImpl, MenuService,
    OracleManager, ShopOracleImpl,
};

pub fn language() -> LanguagePack {
    LanguagePack::new(NumberStyle::Compact)
        .with_template("gui_title_main.single_spawner", "%entity% Spawner")
        .with_template("gui_title_main.stacked_spawner", "%amount%x %entity% Spawner")
        .with_template("spawner_storage_item.name", "Storage")
        .with_template(
            "spawner_storage_item.lore",
            vec!["Slots %current_items%/%max_slots% (%percent_storage%%)", "%loot_items%"],
        )
        .with_template(
            "spawner_storage_item.loot_items",
            "%item_name% x%amount% %chance%",
        )
        .with_template("spawner_storage_item.loot_items_empty", "Nothing stored")
        .with_template("spawner_info_item.name", "%entity% (%ᴇɴᴛɪᴛʏ%)")
        .with_template(
            "spawner_info_item.lore",
            vec!["Exp %current_exp%/%max_exp% %formatted_exp%", "Sell enabled"],
        )
        .with_template(
            "spawner_info_item.lore_no_shop",
            vec!["Exp %current_exp%/%max_exp% %formatted_exp%"],
        )
        .with_material_name("ROTTEN_FLESH", "Rotten Flesh")
        .with_material_name("IRON_INGOT", "Iron Ingot")
}

/// Counts every call made into the wrapped language oracle.
pub struct CountingFormat {
    inner: LanguageOracleImpl,
    pub calls: AtomicUsize,
}

impl CountingFormat {
    pub fn new(pack: LanguagePack) -> Self {
        Self {
            inner: LanguageOracleImpl::new(pack),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

impl FormatOracle for CountingFormat {
    fn format_number(&self, value: u64) -> String {
        self.hit();
        self.inner.format_number(value)
    }
    fn entity_name(&self, kind: &EntityKind) -> String {
        self.hit();
        self.inner.entity_name(kind)
    }
    fn material_name(&self, material: &Material) -> String {
        self.hit();
        self.inner.material_name(material)
    }
    fn small_caps(&self, text: &str) -> String {
        self.hit();
        self.inner.small_caps(text)
    }
    fn title(&self, key: &str, placeholders: &Placeholders) -> String {
        self.hit();
        self.inner.title(key, placeholders)
    }
    fn item_name(&self, key: &str, placeholders: &Placeholders) -> String {
        self.hit();
        self.inner.item_name(key, placeholders)
    }
    fn item_lore(&self, key: &str, placeholders: &Placeholders) -> Vec<String> {
        self.hit();
        self.inner.item_lore(key, placeholders)
    }
}

/// Counts drop catalog lookups.
pub struct CountingLoot {
    inner: LootOracleImpl,
    pub calls: AtomicUsize,
}

impl CountingLoot {
    pub fn new(inner: LootOracleImpl) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl LootOracle for CountingLoot {
    fn loot_table(&self, kind: &EntityKind) -> Vec<LootEntry> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.loot_table(kind)
    }
}

/// Icon oracle whose icons refuse metadata.
pub struct BareIcons;

impl IconOracle for BareIcons {
    fn info_icon(&self, _kind: &EntityKind) -> Icon {
        Icon::Empty
    }
}

/// Counts reads and writes against a bounded cache.
#[derive(Default)]
pub struct CountingCache {
    inner: BoundedRenderCache,
    pub gets: AtomicUsize,
    pub puts: AtomicUsize,
}

impl CountingCache {
    pub fn puts(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }
}

impl RenderCache for CountingCache {
    fn get(&self, key: &CacheKey) -> Option<RenderedItem> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.inner.get(key)
    }
    fn put(&self, key: CacheKey, item: RenderedItem) {
        self.puts.fetch_add(1, Ordering::SeqCst);
        self.inner.put(key, item)
    }
    fn len(&self) -> usize {
        self.inner.len()
    }
    fn clear(&self) {
        self.inner.clear()
    }
}

pub struct TestViewer {
    name: String,
    permissions: HashSet<String>,
}

impl TestViewer {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            permissions: HashSet::new(),
        }
    }

    pub fn seller(name: &str) -> Self {
        let mut viewer = Self::new(name);
        viewer.permissions.insert(MenuConfig::SELL_PERMISSION.to_owned());
        viewer
    }
}

impl Viewer for TestViewer {
    fn name(&self) -> &str {
        &self.name
    }
    fn has_permission(&self, node: &str) -> bool {
        self.permissions.contains(node)
    }
}

#[derive(Default)]
pub struct RecordingPresenter {
    pub menus: Mutex<Vec<Menu>>,
    pub opened: AtomicUsize,
}

impl RecordingPresenter {
    pub fn opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }
}

impl MenuPresenter for RecordingPresenter {
    fn present(&self, _viewer: &dyn Viewer, menu: Menu) -> Result<(), PresentError> {
        self.menus.lock().unwrap().push(menu);
        Ok(())
    }
    fn notify_opened(&self, _viewer: &dyn Viewer) {
        self.opened.fetch_add(1, Ordering::SeqCst);
    }
}

/// Service fixture with handles on every counting collaborator.
pub struct Fixture {
    pub format: Arc<CountingFormat>,
    pub loot: Arc<CountingLoot>,
    pub service: MenuService<Arc<CountingCache>>,
    pub cache: Arc<CountingCache>,
}

pub fn zombie_loot() -> LootOracleImpl {
    let mut loot = LootOracleImpl::new();
    loot.add_table(
        EntityKind::from("ZOMBIE"),
        vec![
            LootEntry::new("ROTTEN_FLESH", 100.0),
            LootEntry::new("IRON_INGOT", 2.5),
        ],
    );
    loot
}

pub fn fixture_with(icons: Arc<dyn IconOracle>, sell_integration: bool) -> Fixture {
    let format = Arc::new(CountingFormat::new(language()));
    let loot = Arc::new(CountingLoot::new(zombie_loot()));
    let cache = Arc::new(CountingCache::default());
    let oracles = OracleManager::new(
        format.clone(),
        loot.clone(),
        icons,
        Arc::new(ShopOracleImpl::new(sell_integration)),
    );
    Fixture {
        format,
        loot,
        service: MenuService::new(oracles, cache.clone()),
        cache,
    }
}

pub fn fixture() -> Fixture {
    fixture_with(
        Arc::new(IconOracleImpl::new([EntityKind::from("ZOMBIE")])),
        false,
    )
}

pub fn zombie_spawner() -> SpawnerState {
    SpawnerState::new("spawner-1", "ZOMBIE")
        .with_slots(2, 45)
        .with_exp(250, 1000)
        .with_entries(vec![
            StoredEntry::new(ItemTemplate::new("ROTTEN_FLESH"), 64),
            StoredEntry::new(ItemTemplate::new("ROTTEN_FLESH"), 36),
        ])
}
