//! Catalog Loading
//!
//! Reads ingredient tables exported from the source spreadsheets. Supported
//! formats are picked by extension:
//! - `.yaml` / `.yml` - a list of rows, or a mapping with an `items` list
//! - `.json` - same shapes as YAML
//! - `.toml` - an `[[items]]` array of tables
//!
//! Column names may be the Russian spreadsheet headers or the English field
//! names (see [`Item`]).

use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use super::errors::{CatalogError, CatalogResult};
use super::item::{Item, Pool, PoolKind};

/// Extensions accepted by [`load_pool`].
pub const SUPPORTED_EXTENSIONS: &[&str] = &["yaml", "yml", "json", "toml"];

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Rows(Vec<Item>),
    Table { items: Vec<Item> },
}

impl CatalogFile {
    fn into_items(self) -> Vec<Item> {
        match self {
            Self::Rows(items) | Self::Table { items } => items,
        }
    }
}

#[derive(Deserialize)]
struct TomlCatalog {
    #[serde(default)]
    items: Vec<Item>,
}

/// Parse catalog text in the given format (`yaml`, `json` or `toml`).
pub fn parse_items(content: &str, format: &str, path: &Path) -> CatalogResult<Vec<Item>> {
    match format {
        "yaml" | "yml" => serde_yaml_ng::from_str::<CatalogFile>(content)
            .map(CatalogFile::into_items)
            .map_err(|e| CatalogError::parse_failed(path, "YAML", e)),
        "json" => serde_json::from_str::<CatalogFile>(content)
            .map(CatalogFile::into_items)
            .map_err(|e| CatalogError::parse_failed(path, "JSON", e)),
        "toml" => toml::from_str::<TomlCatalog>(content)
            .map(|catalog| catalog.items)
            .map_err(|e| CatalogError::parse_failed(path, "TOML", e)),
        _ => Err(CatalogError::InvalidExtension {
            path: path.to_path_buf(),
            expected: SUPPORTED_EXTENSIONS.join(", "),
        }),
    }
}

/// Load one catalog file into a [`Pool`].
///
/// Rows with a blank name are rejected. Duplicate names are kept (they are
/// interchangeable for combination tracking) but logged.
pub fn load_pool(path: impl AsRef<Path>, kind: PoolKind) -> CatalogResult<Pool> {
    let path = path.as_ref();

    let format = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .unwrap_or_default();
    if !SUPPORTED_EXTENSIONS.contains(&format.as_str()) {
        return Err(CatalogError::InvalidExtension {
            path: path.to_path_buf(),
            expected: SUPPORTED_EXTENSIONS.join(", "),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CatalogError::not_found(path)
        } else {
            CatalogError::read_failed(path, e)
        }
    })?;

    let mut items = parse_items(&content, &format, path)?;

    let mut names = HashSet::new();
    for (row, item) in items.iter_mut().enumerate() {
        item.name = item.name.trim().to_string();
        if item.name.is_empty() {
            return Err(CatalogError::EmptyName {
                path: path.to_path_buf(),
                row: row + 1,
            });
        }
        if !item.rarity.is_recognized() {
            warn!(name = %item.name, rarity = %item.rarity, "Unknown rarity, using fallback weight");
        }
        if !names.insert(item.name.clone()) {
            warn!(name = %item.name, %kind, "Duplicate item name in catalog");
        }
    }

    info!(%kind, path = %path.display(), count = items.len(), "Loaded catalog");
    Ok(Pool::new(kind, items))
}
