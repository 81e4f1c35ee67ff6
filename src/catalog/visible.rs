//! Visible Menu
//!
//! Applies a [`FilterState`] to a [`Catalog`], producing the grouped list of items to show.

use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::{
    catalog::{Catalog, MenuItem},
    filters::FilterState,
};

/// What to do with categories left without visible items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptyCategories {
    /// Keep the category (and its header) even with no items.
    #[default]
    Keep,

    /// Drop the category from the output.
    Omit,
}

/// One category of the filtered menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleCategory<'a> {
    /// Category name.
    pub name: &'a str,

    /// Items that passed the filters, in catalog order.
    pub items: Vec<&'a MenuItem>,
}

impl<'a> VisibleCategory<'a> {
    /// Names of the visible items.
    pub fn item_names(&self) -> Vec<&'a str> {
        self.items.iter().map(|item| item.name()).collect()
    }

    /// Check if no item in this category passed the filters.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The filtered menu, grouped by category in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibleMenu<'a> {
    categories: Vec<VisibleCategory<'a>>,
}

impl<'a> VisibleMenu<'a> {
    /// Categories in catalog order.
    pub fn categories(&self) -> &[VisibleCategory<'a>] {
        &self.categories
    }

    /// `(category, item names)` pairs, convenient for comparisons.
    pub fn names(&self) -> Vec<(&'a str, Vec<&'a str>)> {
        self.categories
            .iter()
            .map(|category| (category.name, category.item_names()))
            .collect()
    }

    /// Total number of visible items.
    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|category| category.items.len()).sum()
    }

    /// Check if no category is present.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Serialize for VisibleMenu<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;

        for category in &self.categories {
            map.serialize_entry(category.name, &category.item_names())?;
        }

        map.end()
    }
}

/// Compute the visible menu, keeping empty categories.
pub fn compute_visible_items<'a>(catalog: &'a Catalog, state: &FilterState) -> VisibleMenu<'a> {
    compute_visible_items_with(catalog, state, EmptyCategories::Keep)
}

/// Compute the visible menu with an explicit policy for empty categories.
///
/// An item is visible when it carries no excluded tag and, if any included tags are active,
/// carries every one of them.
pub fn compute_visible_items_with<'a>(
    catalog: &'a Catalog,
    state: &FilterState,
    empty: EmptyCategories,
) -> VisibleMenu<'a> {
    let categories = catalog
        .categories()
        .iter()
        .map(|category| VisibleCategory {
            name: category.name(),
            items: category
                .items()
                .iter()
                .filter(|item| state.admits(item.tags()))
                .collect(),
        })
        .filter(|category| empty == EmptyCategories::Keep || !category.is_empty())
        .collect();

    VisibleMenu { categories }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::catalog::Category;

    use super::*;

    fn entrees() -> Catalog {
        Catalog::new([
            Category::new(
                "Entrees",
                [
                    MenuItem::new("Burger", &["Milk", "Nuts"]),
                    MenuItem::new("Salad", &["Veggie"]),
                ],
            ),
            Category::new("Desserts", [MenuItem::new("Brownie", &["Milk", "Eggs"])]),
        ])
    }

    #[test]
    fn empty_state_shows_everything_in_order() {
        let catalog = entrees();
        let visible = compute_visible_items(&catalog, &FilterState::new());

        assert_eq!(
            visible.names(),
            [
                ("Entrees", vec!["Burger", "Salad"]),
                ("Desserts", vec!["Brownie"])
            ]
        );
        assert_eq!(visible.item_count(), 3);
    }

    #[test]
    fn whitelist_keeps_matching_items_and_empty_categories() {
        let catalog = entrees();
        let mut state = FilterState::new();
        state.toggle("Veggie");

        let visible = compute_visible_items(&catalog, &state);

        assert_eq!(
            visible.names(),
            [("Entrees", vec!["Salad"]), ("Desserts", vec![])]
        );
    }

    #[test]
    fn omit_policy_drops_empty_categories() {
        let catalog = entrees();
        let mut state = FilterState::new();
        state.toggle("Milk");

        let visible = compute_visible_items_with(&catalog, &state, EmptyCategories::Omit);

        assert_eq!(visible.names(), [("Entrees", vec!["Salad"])]);
    }

    #[test]
    fn serializes_as_category_map() -> TestResult {
        let catalog = entrees();
        let mut state = FilterState::new();
        state.toggle("Eggs");

        let visible = compute_visible_items(&catalog, &state);

        assert_eq!(
            serde_json::to_string(&visible)?,
            r#"{"Entrees":["Burger","Salad"],"Desserts":[]}"#
        );

        Ok(())
    }
}
