//! Language pack loader.
//!
//! A language file groups templates by menu element, e.g.
//!
//! ```toml
//! number_format = "compact"
//!
//! [entities]
//! ZOMBIE = "Zombie"
//!
//! [messages.spawner_info_item]
//! name = "&e%entity% Spawner"
//! lore = ["&7Range: %range%", "&7Delay: %delay%s"]
//! ```
//!
//! and is flattened into `section.field` template keys
//! (`spawner_info_item.lore`).

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::{Deserialize, Serialize};
use spawner_core::{EntityKind, Material};

use crate::loaders::{LoadResult, read_file};

/// How counts are rendered in menu text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberStyle {
    /// `1.2K`, `3.4M`, `5B`.
    #[default]
    Compact,
    /// `1,234,567`.
    Grouped,
}

/// A template is either a single line or an ordered list of lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextValue {
    Line(String),
    Lines(Vec<String>),
}

impl TextValue {
    /// Lines of the template; a single line yields one element.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::Line(line) => vec![line.clone()],
            Self::Lines(lines) => lines.clone(),
        }
    }

    /// The template as one string, list entries joined by `\n`.
    pub fn joined(&self) -> String {
        match self {
            Self::Line(line) => line.clone(),
            Self::Lines(lines) => lines.join("\n"),
        }
    }
}

impl From<&str> for TextValue {
    fn from(value: &str) -> Self {
        Self::Line(value.to_owned())
    }
}

impl From<Vec<&str>> for TextValue {
    fn from(value: Vec<&str>) -> Self {
        Self::Lines(value.into_iter().map(str::to_owned).collect())
    }
}

/// On-disk layout of a language file.
#[derive(Debug, Deserialize)]
struct LanguageFile {
    #[serde(default)]
    number_format: NumberStyle,
    #[serde(default)]
    entities: HashMap<EntityKind, String>,
    #[serde(default)]
    materials: HashMap<Material, String>,
    #[serde(default)]
    messages: BTreeMap<String, BTreeMap<String, TextValue>>,
}

/// Loaded language data, ready for a formatting oracle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguagePack {
    pub number_style: NumberStyle,
    pub entity_names: HashMap<EntityKind, String>,
    pub material_names: HashMap<Material, String>,
    /// Templates keyed by `section.field`.
    pub templates: HashMap<String, TextValue>,
}

impl LanguagePack {
    pub fn new(number_style: NumberStyle) -> Self {
        Self {
            number_style,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_template(mut self, key: impl Into<String>, value: impl Into<TextValue>) -> Self {
        self.templates.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_entity_name(mut self, kind: impl Into<EntityKind>, name: impl Into<String>) -> Self {
        self.entity_names.insert(kind.into(), name.into());
        self
    }

    #[must_use]
    pub fn with_material_name(
        mut self,
        material: impl Into<Material>,
        name: impl Into<String>,
    ) -> Self {
        self.material_names.insert(material.into(), name.into());
        self
    }

    pub fn template(&self, key: &str) -> Option<&TextValue> {
        self.templates.get(key)
    }
}

impl From<LanguageFile> for LanguagePack {
    fn from(file: LanguageFile) -> Self {
        let templates = file
            .messages
            .into_iter()
            .flat_map(|(section, fields)| {
                fields
                    .into_iter()
                    .map(move |(field, value)| (format!("{section}.{field}"), value))
            })
            .collect();

        Self {
            number_style: file.number_format,
            entity_names: file.entities,
            material_names: file.materials,
            templates,
        }
    }
}

/// Loader for language packs from TOML files.
pub struct LanguageLoader;

impl LanguageLoader {
    pub fn load(path: &Path) -> LoadResult<LanguagePack> {
        let content = read_file(path)?;
        let file: LanguageFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse language TOML: {}", e))?;
        let pack = LanguagePack::from(file);

        tracing::info!(
            templates = pack.templates.len(),
            entities = pack.entity_names.len(),
            materials = pack.material_names.len(),
            style = ?pack.number_style,
            "loaded language pack"
        );
        Ok(pack)
    }
}
