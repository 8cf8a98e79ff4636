//! Catalog Items and Pools
//!
//! An [`Item`] is one row of an ingredient table. The generator only ever
//! looks at `name` and `rarity`; everything else is payload for display.
//! Column headers from the Russian source spreadsheets are accepted as
//! serde aliases so exported tables load unchanged.

use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Cow;
use std::fmt;

use super::filter::PoolFilter;
use super::rarity::Rarity;

/// Shown in place of a missing payload field.
pub const PLACEHOLDER: &str = "—";

/// Currency appended to bare numeric prices.
pub const CURRENCY: &str = "малых печатей";

// ============================================================================
// Drawable
// ============================================================================

/// Anything the samplers can draw: it has a name and a rarity.
pub trait Drawable {
    fn name(&self) -> &str;
    fn rarity(&self) -> &Rarity;
}

impl<T: Drawable + ?Sized> Drawable for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn rarity(&self) -> &Rarity {
        (**self).rarity()
    }
}

// ============================================================================
// Item
// ============================================================================

/// One ingredient from a plant or animal catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(alias = "Название")]
    pub name: String,

    #[serde(alias = "Редкость", default = "missing_rarity")]
    pub rarity: Rarity,

    #[serde(alias = "Описание", default, deserialize_with = "text_cell")]
    pub description: Option<String>,

    #[serde(alias = "Основной эффект", default, deserialize_with = "text_cell")]
    pub primary_effect: Option<String>,

    #[serde(alias = "Побочные эффекты", default, deserialize_with = "text_cell")]
    pub side_effects: Option<String>,

    #[serde(alias = "DC сбора", default, deserialize_with = "text_cell")]
    pub collection_dc: Option<String>,

    #[serde(alias = "Стоимость", default, deserialize_with = "text_cell")]
    pub cost: Option<String>,

    #[serde(alias = "Среда обитания", default, deserialize_with = "text_cell")]
    pub habitat: Option<String>,

    /// Plant type (herb, root, fungus...)
    #[serde(alias = "Тип", default, deserialize_with = "text_cell")]
    pub kind: Option<String>,

    #[serde(alias = "Форма применения", default, deserialize_with = "text_cell")]
    pub application_form: Option<String>,

    /// Animal ingredients: gameplay mechanics
    #[serde(alias = "Механика", default, deserialize_with = "text_cell")]
    pub mechanics: Option<String>,

    #[serde(alias = "Способ подготовки", default, deserialize_with = "text_cell")]
    pub preparation: Option<String>,

    #[serde(alias = "Цена продажи", default, deserialize_with = "text_cell")]
    pub sale_price: Option<String>,
}

fn missing_rarity() -> Rarity {
    Rarity::Unrecognized(String::new())
}

/// Spreadsheet cells arrive as text or numbers; keep them as text.
#[derive(Deserialize)]
#[serde(untagged)]
enum TextCell {
    Text(String),
    Int(i64),
    Float(f64),
}

fn text_cell<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let cell = Option::<TextCell>::deserialize(deserializer)?;
    Ok(cell
        .map(|cell| match cell {
            TextCell::Text(s) => s.trim().to_string(),
            TextCell::Int(i) => i.to_string(),
            TextCell::Float(f) if f.fract() == 0.0 => format!("{}", f as i64),
            TextCell::Float(f) => f.to_string(),
        })
        .filter(|s| !s.is_empty()))
}

impl Item {
    /// Create an item with no payload.
    pub fn new(name: impl Into<String>, rarity: Rarity) -> Self {
        Self {
            name: name.into(),
            rarity,
            description: None,
            primary_effect: None,
            side_effects: None,
            collection_dc: None,
            cost: None,
            habitat: None,
            kind: None,
            application_form: None,
            mechanics: None,
            preparation: None,
            sale_price: None,
        }
    }

    /// Set the habitat for this item.
    pub fn with_habitat(mut self, habitat: impl Into<String>) -> Self {
        self.habitat = Some(habitat.into());
        self
    }

    /// Set the description for this item.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Value of an optional field, or [`PLACEHOLDER`] when it is missing.
    pub fn field_or_placeholder(field: &Option<String>) -> &str {
        field.as_deref().unwrap_or(PLACEHOLDER)
    }

    fn text_or_placeholder(field: &Option<String>) -> Cow<'_, str> {
        Cow::Borrowed(Self::field_or_placeholder(field))
    }

    /// Price with its currency. Values that already carry text are kept.
    pub fn price_or_placeholder(field: &Option<String>) -> Cow<'_, str> {
        match field.as_deref() {
            None => Cow::Borrowed(PLACEHOLDER),
            Some(value) if is_bare_number(value) => {
                Cow::Owned(format!("{value} {CURRENCY}"))
            }
            Some(value) => Cow::Borrowed(value),
        }
    }

    /// Labelled payload rows for display, in table order.
    ///
    /// Fields that do not apply to the pool kind are left out; fields that
    /// apply but are missing show the placeholder.
    pub fn detail_rows(&self, kind: PoolKind) -> Vec<(&'static str, Cow<'_, str>)> {
        let mut rows = vec![
            ("Описание", Self::text_or_placeholder(&self.description)),
            ("Основной эффект", Self::text_or_placeholder(&self.primary_effect)),
            ("Побочные эффекты", Self::text_or_placeholder(&self.side_effects)),
        ];
        match kind {
            PoolKind::Plants => rows.extend([
                ("DC сбора", Self::text_or_placeholder(&self.collection_dc)),
                ("Стоимость", Self::price_or_placeholder(&self.cost)),
                ("Среда обитания", Self::text_or_placeholder(&self.habitat)),
                ("Тип", Self::text_or_placeholder(&self.kind)),
                ("Форма применения", Self::text_or_placeholder(&self.application_form)),
            ]),
            PoolKind::Animals => rows.extend([
                ("Механика", Self::text_or_placeholder(&self.mechanics)),
                ("Способ подготовки", Self::text_or_placeholder(&self.preparation)),
                ("Среда обитания", Self::text_or_placeholder(&self.habitat)),
                ("DC сбора", Self::text_or_placeholder(&self.collection_dc)),
                ("Цена продажи", Self::price_or_placeholder(&self.sale_price)),
            ]),
        }
        rows
    }
}

fn is_bare_number(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_digit())
        && value.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',')
}

impl Drawable for Item {
    fn name(&self) -> &str {
        &self.name
    }

    fn rarity(&self) -> &Rarity {
        &self.rarity
    }
}

// ============================================================================
// Pool
// ============================================================================

/// Which catalog a pool was loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolKind {
    Plants,
    Animals,
}

impl PoolKind {
    /// Human-readable title for headings.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Plants => "Растения",
            Self::Animals => "Животные",
        }
    }
}

impl fmt::Display for PoolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plants => f.write_str("plants"),
            Self::Animals => f.write_str("animals"),
        }
    }
}

/// Read-only, ordered collection of items from one catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Pool {
    pub kind: PoolKind,
    pub items: Vec<Item>,
}

impl Pool {
    pub fn new(kind: PoolKind, items: Vec<Item>) -> Self {
        Self { kind, items }
    }

    pub fn empty(kind: PoolKind) -> Self {
        Self::new(kind, Vec::new())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items passing the filter, in pool order.
    pub fn filter(&self, filter: &PoolFilter) -> Vec<&Item> {
        self.items.iter().filter(|item| filter.matches(item)).collect()
    }

    /// Distinct habitats present in this pool, sorted.
    pub fn habitats(&self) -> Vec<&str> {
        let mut habitats: Vec<&str> = self
            .items
            .iter()
            .filter_map(|item| item.habitat.as_deref())
            .collect();
        habitats.sort_unstable();
        habitats.dedup();
        habitats
    }
}
