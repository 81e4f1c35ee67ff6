//! Dietary Filters
//!
//! Tag classification and the filter state toggled by the filter buttons.

use crate::tags::TagSet;

pub mod names;

/// Filter keys that whitelist items. Every other key blacklists.
pub const WHITELIST_KEYS: [&str; 4] = ["Veggie", "Vegan", "Healthy", "Gluten"];

/// Which side of the filter state a tag belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    /// Items must carry every active whitelist tag.
    Whitelist,

    /// Items carrying any active blacklist tag are hidden.
    Blacklist,
}

/// Classify a filter key as whitelist or blacklist.
///
/// This is a fixed business rule, not derived from menu data.
pub fn classify(tag: &str) -> FilterKind {
    if WHITELIST_KEYS.contains(&tag) {
        FilterKind::Whitelist
    } else {
        FilterKind::Blacklist
    }
}

/// Active dietary filters.
///
/// An empty state admits every item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    included: TagSet,
    excluded: TagSet,
}

impl FilterState {
    /// Create a state with no active filters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tags an item must all carry (whitelist).
    pub fn included(&self) -> &TagSet {
        &self.included
    }

    /// Tags that hide any item carrying them (blacklist).
    pub fn excluded(&self) -> &TagSet {
        &self.excluded
    }

    /// Whether no filter is active.
    pub fn is_empty(&self) -> bool {
        self.included.is_empty() && self.excluded.is_empty()
    }

    /// Toggle `tag` in the set chosen by [`classify`].
    ///
    /// Returns whether the filter is active afterwards.
    pub fn toggle(&mut self, tag: &str) -> bool {
        self.toggle_as(tag, classify(tag))
    }

    /// Toggle `tag` in the set for `kind`, leaving the other set untouched.
    ///
    /// Returns whether the filter is active afterwards.
    pub fn toggle_as(&mut self, tag: &str, kind: FilterKind) -> bool {
        self.set_mut(kind).toggle(tag)
    }

    /// Whether `tag` is active in the set for `kind`.
    pub fn is_active(&self, tag: &str, kind: FilterKind) -> bool {
        match kind {
            FilterKind::Whitelist => self.included.contains(tag),
            FilterKind::Blacklist => self.excluded.contains(tag),
        }
    }

    /// Decide whether an item with the given tags passes the active filters.
    ///
    /// Blacklist takes precedence: a tag present in both sets always hides the item.
    pub fn admits<S: AsRef<str>>(&self, item_tags: &[S]) -> bool {
        if self.excluded.contains_any(item_tags) {
            return false;
        }

        self.included.is_empty() || self.included.is_covered_by(item_tags)
    }

    /// Deactivate every filter.
    pub fn clear(&mut self) {
        self.included.clear();
        self.excluded.clear();
    }

    fn set_mut(&mut self, kind: FilterKind) -> &mut TagSet {
        match kind {
            FilterKind::Whitelist => &mut self.included,
            FilterKind::Blacklist => &mut self.excluded,
        }
    }
}
