//! Wire Payloads
//!
//! Request and response shapes exchanged with the menu server.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::Catalog;

/// Body of the menu request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuRequest {
    /// Meal name, e.g. `Lunch`.
    pub meal: String,

    /// Dining location name.
    pub location: String,
}

/// Body of the locations request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationsRequest {
    /// Meal to list locations for.
    pub meal: String,
}

/// Filter key to icon reference, in server order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct FilterIcons {
    entries: IndexMap<String, String>,
}

impl FilterIcons {
    /// Create from `(key, icon)` pairs.
    pub fn new(entries: &[(&str, &str)]) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|(key, icon)| ((*key).to_string(), (*icon).to_string()))
                .collect(),
        }
    }

    /// Icon reference for a filter key.
    pub fn icon(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Iterate `(key, icon)` pairs in server order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, icon)| (key.as_str(), icon.as_str()))
    }

    /// Number of filters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the server sent no filters.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Nutrition facts keyed by item name.
///
/// The filtering core never reads these. Anything other than an object decodes as empty.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct Nutrition {
    facts: FxHashMap<String, Value>,
}

impl Nutrition {
    /// Raw facts for an item.
    pub fn raw(&self, item: &str) -> Option<&Value> {
        self.facts.get(item)
    }

    /// Text facts for an item, serving size first. Non-string entries are skipped.
    pub fn facts(&self, item: &str) -> Vec<&str> {
        match self.facts.get(item) {
            Some(Value::Array(values)) => values.iter().filter_map(Value::as_str).collect(),
            Some(Value::String(fact)) => vec![fact.as_str()],
            _ => Vec::new(),
        }
    }

    /// Number of items with facts.
    pub fn len(&self) -> usize {
        self.facts.len()
    }

    /// Check if there are no facts.
    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }
}

impl From<Value> for Nutrition {
    fn from(value: Value) -> Self {
        let facts = match value {
            Value::Object(map) => map.into_iter().collect(),
            _ => FxHashMap::default(),
        };

        Self { facts }
    }
}

/// Everything the server returns for one meal at one location.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MenuPayload {
    /// Filter buttons to offer.
    #[serde(rename = "Filters", default)]
    pub filters: FilterIcons,

    /// The menu itself.
    #[serde(rename = "Menu", default)]
    pub menu: Catalog,

    /// Nutrition facts by item name.
    #[serde(rename = "Nutrition", default)]
    pub nutrition: Nutrition,
}

/// Name to route URL, as returned by the meal and location listings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct RouteIndex {
    routes: IndexMap<String, String>,
}

impl RouteIndex {
    /// Names in server order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().map(String::as_str)
    }

    /// Route URL for a name.
    pub fn route(&self, name: &str) -> Option<&str> {
        self.routes.get(name).map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Check if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
