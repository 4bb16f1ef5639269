//! Display objects produced by the renderer.

use crate::state::{EntityKind, Material};

/// What a rendered item looks like in the menu grid.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Icon {
    /// Plain item of the given material.
    Item(Material),
    /// Textured head of the given entity kind.
    Head(EntityKind),
    /// Empty slot marker. Cannot carry a name or lore.
    Empty,
}

impl Icon {
    /// Returns true if items with this icon can carry [`ItemMeta`].
    pub const fn accepts_meta(&self) -> bool {
        !matches!(self, Self::Empty)
    }
}

/// Display name and lore attached to an item.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemMeta {
    pub name: Option<String>,
    pub lore: Vec<String>,
}

/// A display item ready for presentation.
///
/// Values are plain owned data: every copy handed out by a cache is an
/// independent clone, so mutating one never affects another.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderedItem {
    icon: Icon,
    meta: Option<ItemMeta>,
}

impl RenderedItem {
    /// Creates an unstyled item. Metadata is available only if the icon accepts it.
    pub fn new(icon: Icon) -> Self {
        let meta = icon.accepts_meta().then(ItemMeta::default);
        Self { icon, meta }
    }

    pub fn icon(&self) -> &Icon {
        &self.icon
    }

    pub fn meta(&self) -> Option<&ItemMeta> {
        self.meta.as_ref()
    }

    /// Mutable view of the metadata, or `None` when the icon rejects styling.
    pub fn meta_mut(&mut self) -> Option<&mut ItemMeta> {
        self.meta.as_mut()
    }

    pub fn name(&self) -> Option<&str> {
        self.meta.as_ref()?.name.as_deref()
    }

    pub fn lore(&self) -> &[String] {
        match &self.meta {
            Some(meta) => &meta.lore,
            None => &[],
        }
    }
}

/// Result of building an item.
///
/// `Unstyled` means the icon could not carry metadata and the bare item is
/// returned instead. Unstyled items are presented but never cached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderOutcome {
    Styled(RenderedItem),
    Unstyled(RenderedItem),
}

impl RenderOutcome {
    pub fn is_styled(&self) -> bool {
        matches!(self, Self::Styled(_))
    }

    pub fn into_item(self) -> RenderedItem {
        match self {
            Self::Styled(item) | Self::Unstyled(item) => item,
        }
    }
}
