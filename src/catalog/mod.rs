//! Menu Catalog
//!
//! Categories of menu items, each item tagged with the dietary icons it carries. Category and
//! item order follow the source payload.

use indexmap::IndexMap;
use serde::Deserialize;
use smallvec::SmallVec;

use crate::tags::TagSet;

pub mod visible;

/// A single menu item and its dietary tags, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    name: String,
    tags: SmallVec<[String; 5]>,
}

impl MenuItem {
    /// Create an item from its name and tags.
    pub fn new(name: impl Into<String>, tags: &[&str]) -> Self {
        Self {
            name: name.into(),
            tags: tags.iter().map(ToString::to_string).collect(),
        }
    }

    /// Item name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Item tags in the order the server listed them.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

/// A named group of menu items, such as a serving station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    items: Vec<MenuItem>,
}

impl Category {
    /// Create a category from its name and items.
    pub fn new(name: impl Into<String>, items: impl Into<Vec<MenuItem>>) -> Self {
        Self {
            name: name.into(),
            items: items.into(),
        }
    }

    /// Category name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Items in source order.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }
}

/// Tag lists as they arrive on the wire. `null` reads as no tags.
///
/// A repeated key keeps its first position and takes the last value.
type RawCatalog = IndexMap<String, IndexMap<String, Option<Vec<String>>>>;

/// The full menu for one meal at one location. Immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawCatalog")]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// Create a catalog from categories in display order.
    pub fn new(categories: impl Into<Vec<Category>>) -> Self {
        Self {
            categories: categories.into(),
        }
    }

    /// Categories in source order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a category by name.
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.name == name)
    }

    /// Find the first item with the given name across all categories.
    pub fn find_item(&self, name: &str) -> Option<&MenuItem> {
        self.items().find(|item| item.name == name)
    }

    /// Iterate every item in every category, in order.
    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.categories.iter().flat_map(|category| category.items.iter())
    }

    /// Total number of items.
    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|category| category.items.len()).sum()
    }

    /// Every tag referenced by at least one item.
    pub fn tags_in_use(&self) -> TagSet {
        self.items()
            .flat_map(|item| item.tags.iter().map(String::as_str))
            .collect()
    }

    /// Check if the catalog has no categories.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl From<RawCatalog> for Catalog {
    fn from(raw: RawCatalog) -> Self {
        let categories = raw
            .into_iter()
            .map(|(name, items)| Category {
                name,
                items: items
                    .into_iter()
                    .map(|(name, tags)| MenuItem {
                        name,
                        tags: tags.unwrap_or_default().into_iter().collect(),
                    })
                    .collect(),
            })
            .collect();

        Self { categories }
    }
}
