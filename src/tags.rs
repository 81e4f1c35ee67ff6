//! Tag Sets
//!
//! An explicit set-of-strings type for dietary filter tags.

use std::{cmp::Ordering, fmt};

use smallvec::SmallVec;

/// A set of tag identifiers, kept sorted and de-duplicated in a `SmallVec<[String; 5]>`.
///
/// Filter sets rarely hold more than a handful of tags, so lookups are binary searches over
/// inline storage rather than hashing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    tags: SmallVec<[String; 5]>,
}

impl TagSet {
    /// Create an empty tag set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tag set from string slices, ignoring duplicates.
    pub fn from_strs(tags: &[&str]) -> Self {
        tags.iter().copied().collect()
    }

    /// Check whether the set contains `tag`.
    pub fn contains(&self, tag: &str) -> bool {
        self.position(tag).is_ok()
    }

    /// Add `tag` to the set. Returns `false` if it was already present.
    pub fn insert(&mut self, tag: &str) -> bool {
        match self.position(tag) {
            Ok(_) => false,
            Err(pos) => {
                self.tags.insert(pos, tag.to_string());
                true
            }
        }
    }

    /// Remove `tag` from the set. Returns `false` if it was not present.
    pub fn remove(&mut self, tag: &str) -> bool {
        match self.position(tag) {
            Ok(pos) => {
                self.tags.remove(pos);
                true
            }
            Err(_) => false,
        }
    }

    /// Insert `tag` if absent, remove it if present.
    ///
    /// Returns whether the tag is in the set afterwards.
    pub fn toggle(&mut self, tag: &str) -> bool {
        if self.remove(tag) {
            false
        } else {
            self.insert(tag)
        }
    }

    /// Check whether this set shares at least one tag with `other`.
    pub fn intersects(&self, other: &Self) -> bool {
        let mut left = self.tags.iter();
        let mut right = other.tags.iter();
        let mut left_tag = left.next();
        let mut right_tag = right.next();

        while let (Some(l), Some(r)) = (left_tag, right_tag) {
            match l.cmp(r) {
                Ordering::Equal => return true,
                Ordering::Less => left_tag = left.next(),
                Ordering::Greater => right_tag = right.next(),
            }
        }

        false
    }

    /// Check whether any of `tags` is a member of this set.
    pub fn contains_any<S: AsRef<str>>(&self, tags: &[S]) -> bool {
        tags.iter().any(|tag| self.contains(tag.as_ref()))
    }

    /// Check whether every member of this set appears in `tags`.
    ///
    /// An empty set is covered by anything.
    pub fn is_covered_by<S: AsRef<str>>(&self, tags: &[S]) -> bool {
        self.tags
            .iter()
            .all(|member| tags.iter().any(|tag| tag.as_ref() == member))
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Number of tags in the set.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Iterate the tags in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    /// Remove every tag.
    pub fn clear(&mut self) {
        self.tags.clear();
    }

    fn position(&self, tag: &str) -> Result<usize, usize> {
        self.tags.binary_search_by(|probe| probe.as_str().cmp(tag))
    }
}

impl<'a> FromIterator<&'a str> for TagSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = Self::new();

        for tag in iter {
            set.insert(tag);
        }

        set
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.tags.join(", "))
    }
}
