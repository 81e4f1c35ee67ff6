//! Menu Session
//!
//! Owns a fetched [`MenuPayload`] and the [`FilterState`] toggled by the user, and recomputes
//! the visible menu on demand.

use thiserror::Error;
use tracing::{debug, info};

use crate::{
    catalog::{
        Catalog,
        visible::{EmptyCategories, VisibleMenu, compute_visible_items_with},
    },
    filters::{FilterKind, FilterState, classify, names::display_name},
    payload::{FilterIcons, MenuPayload, Nutrition},
};

/// Errors raised by session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The filter key is not among the filters the server offered.
    #[error("Unknown filter: {0}")]
    UnknownFilter(String),
}

/// A filter button as presented to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterButton<'a> {
    /// Filter key, e.g. `Veggie`.
    pub key: &'a str,

    /// Upper-cased label, e.g. `VEGETARIAN`.
    pub label: String,

    /// Icon reference carried by matching items.
    pub icon: &'a str,

    /// Whitelist or blacklist.
    pub kind: FilterKind,

    /// Whether the filter is currently on.
    pub active: bool,
}

/// One page session over a single menu.
#[derive(Debug, Clone)]
pub struct MenuSession {
    payload: MenuPayload,
    state: FilterState,
    empty_categories: EmptyCategories,
}

impl MenuSession {
    /// Start a session with no active filters.
    pub fn new(payload: MenuPayload) -> Self {
        info!(
            categories = payload.menu.categories().len(),
            items = payload.menu.item_count(),
            filters = payload.filters.len(),
            "menu loaded"
        );

        Self {
            payload,
            state: FilterState::new(),
            empty_categories: EmptyCategories::default(),
        }
    }

    /// Choose whether categories without visible items are kept.
    #[must_use]
    pub fn with_empty_categories(mut self, empty_categories: EmptyCategories) -> Self {
        self.empty_categories = empty_categories;
        self
    }

    /// The loaded menu.
    pub fn catalog(&self) -> &Catalog {
        &self.payload.menu
    }

    /// Filter icons offered by the server.
    pub fn filter_icons(&self) -> &FilterIcons {
        &self.payload.filters
    }

    /// Nutrition facts for the loaded menu.
    pub fn nutrition(&self) -> &Nutrition {
        &self.payload.nutrition
    }

    /// Current filter state.
    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Buttons for every offered filter, in server order.
    pub fn filter_buttons(&self) -> Vec<FilterButton<'_>> {
        self.payload
            .filters
            .iter()
            .map(|(key, icon)| {
                let kind = classify(key);

                FilterButton {
                    key,
                    label: display_name(key),
                    icon,
                    kind,
                    active: self.state.is_active(icon, kind),
                }
            })
            .collect()
    }

    /// Toggle the filter named `key`.
    ///
    /// The key decides the side (whitelist or blacklist) and its icon is what items are matched
    /// against. Returns whether the filter is active afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if the server did not offer a filter named `key`.
    pub fn toggle_filter(&mut self, key: &str) -> Result<bool, SessionError> {
        let icon = self
            .payload
            .filters
            .icon(key)
            .ok_or_else(|| SessionError::UnknownFilter(key.to_string()))?;

        let kind = classify(key);
        let active = self.state.toggle_as(icon, kind);

        debug!(key, icon, ?kind, active, "filter toggled");

        Ok(active)
    }

    /// Turn every filter off.
    pub fn reset_filters(&mut self) {
        self.state.clear();
    }

    /// The menu as it should currently be shown.
    pub fn visible(&self) -> VisibleMenu<'_> {
        compute_visible_items_with(&self.payload.menu, &self.state, self.empty_categories)
    }
}
