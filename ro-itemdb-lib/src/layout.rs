//! Data directory layout and its optional TOML overrides.
//!
//! Every path the pipeline touches hangs off a single data root:
//!
//! ```text
//! <root>/raw/idnum2itemdisplaynametable.txt      (+ four more tables)
//! <root>/raw/images/data/texture/À¯ÀúÀÎÅÍÆäÀÌ½º/{cardbmp,item,collection}/*.bmp
//! <root>/processed/db.json
//! <root>/processed/images/{cards,sprite,item}/*.bmp
//! ```
//!
//! The texture directory name is the client's Korean folder name as it
//! appears after a single-byte decode; it has to match byte for byte.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use ro_itemdb_core::Property;

use crate::assets::AssetKind;
use crate::error::ItemDbError;
use crate::props::PropertyNormalizer;

/// Name of the config file looked up in the data root when no explicit
/// config is given.
pub const CONFIG_FILE_NAME: &str = "itemdb.toml";

/// File names of the five source tables, relative to the raw directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableFiles {
    pub names: PathBuf,
    pub resources: PathBuf,
    pub descriptions: PathBuf,
    pub illustrations: PathBuf,
    pub prefixes: PathBuf,
}

impl Default for TableFiles {
    fn default() -> Self {
        Self {
            names: "idnum2itemdisplaynametable.txt".into(),
            resources: "idnum2itemresnametable.txt".into(),
            descriptions: "idnum2itemdesctable.txt".into(),
            illustrations: "num2cardillustnametable.txt".into(),
            prefixes: "cardprefixnametable.txt".into(),
        }
    }
}

/// Source directory (relative to the texture root) and destination directory
/// (relative to the processed directory) for one asset category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetDir {
    pub source: PathBuf,
    pub dest: PathBuf,
}

impl AssetDir {
    fn new(source: &str, dest: &str) -> Self {
        Self {
            source: source.into(),
            dest: dest.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetDirs {
    /// Texture root, relative to the raw directory.
    pub texture_root: PathBuf,
    pub illustrations: AssetDir,
    pub sprites: AssetDir,
    pub collection: AssetDir,
}

impl Default for AssetDirs {
    fn default() -> Self {
        Self {
            texture_root: ["images", "data", "texture", "À¯ÀúÀÎÅÍÆäÀÌ½º"].iter().collect(),
            illustrations: AssetDir::new("cardbmp", "images/cards"),
            sprites: AssetDir::new("item", "images/sprite"),
            collection: AssetDir::new("collection", "images/item"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputFiles {
    /// Database file name, relative to the processed directory.
    pub database: PathBuf,
}

impl Default for OutputFiles {
    fn default() -> Self {
        Self {
            database: "db.json".into(),
        }
    }
}

/// Contents of an `itemdb.toml` file. Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub raw_dir: PathBuf,
    pub processed_dir: PathBuf,
    pub tables: TableFiles,
    pub assets: AssetDirs,
    pub output: OutputFiles,
    /// Extra description labels: label text to property name.
    pub labels: BTreeMap<String, String>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            raw_dir: "raw".into(),
            processed_dir: "processed".into(),
            tables: TableFiles::default(),
            assets: AssetDirs::default(),
            output: OutputFiles::default(),
            labels: BTreeMap::new(),
        }
    }
}

impl LayoutConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ItemDbError> {
        toml::from_str(contents).map_err(|e| ItemDbError::config(e.to_string()))
    }

    pub fn from_file(path: &Path) -> Result<Self, ItemDbError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ItemDbError::config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&contents)
    }
}

/// Resolved paths for one data root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataLayout {
    root: PathBuf,
    config: LayoutConfig,
}

impl DataLayout {
    /// Layout with the built-in defaults.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_config(root, LayoutConfig::default())
    }

    pub fn with_config(root: impl Into<PathBuf>, config: LayoutConfig) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    /// Resolve the layout for a data root:
    ///
    /// 1. `config_override` (if `Some`), which must exist
    /// 2. `<root>/itemdb.toml`, if present
    /// 3. Built-in defaults
    pub fn load(
        root: impl Into<PathBuf>,
        config_override: Option<&Path>,
    ) -> Result<Self, ItemDbError> {
        let root = root.into();
        if let Some(path) = config_override {
            log::info!("Using config {}", path.display());
            return Ok(Self::with_config(root, LayoutConfig::from_file(path)?));
        }

        let local = root.join(CONFIG_FILE_NAME);
        if local.is_file() {
            log::info!("Using config {}", local.display());
            let config = LayoutConfig::from_file(&local)?;
            return Ok(Self::with_config(root, config));
        }

        Ok(Self::new(root))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn raw_dir(&self) -> PathBuf {
        self.root.join(&self.config.raw_dir)
    }

    pub fn processed_dir(&self) -> PathBuf {
        self.root.join(&self.config.processed_dir)
    }

    pub fn table_path(&self, file: &Path) -> PathBuf {
        self.raw_dir().join(file)
    }

    pub fn tables(&self) -> &TableFiles {
        &self.config.tables
    }

    pub fn database_path(&self) -> PathBuf {
        self.processed_dir().join(&self.config.output.database)
    }

    fn asset_dir(&self, kind: AssetKind) -> &AssetDir {
        let assets = &self.config.assets;
        match kind {
            AssetKind::Illustration => &assets.illustrations,
            AssetKind::Sprite => &assets.sprites,
            AssetKind::Collection => &assets.collection,
        }
    }

    pub fn asset_source_dir(&self, kind: AssetKind) -> PathBuf {
        self.raw_dir()
            .join(&self.config.assets.texture_root)
            .join(&self.asset_dir(kind).source)
    }

    pub fn asset_dest_dir(&self, kind: AssetKind) -> PathBuf {
        self.processed_dir().join(&self.asset_dir(kind).dest)
    }

    /// Build the property normalizer, including any configured labels.
    pub fn normalizer(&self) -> Result<PropertyNormalizer, ItemDbError> {
        let mut normalizer = PropertyNormalizer::new();
        for (label, name) in &self.config.labels {
            let property: Property = name
                .parse()
                .map_err(|e| ItemDbError::config(format!("label {label:?}: {e}")))?;
            log::debug!("Label alias {label:?} -> {property}");
            normalizer.add_alias(label, property);
        }
        Ok(normalizer)
    }
}

#[cfg(test)]
#[path = "tests/layout_tests.rs"]
mod tests;
