//! Canonical tag representations.
//!
//! Two forms flow through the system: the engine-facing ordered sequence of
//! [`TagItem`]s, and the unordered [`TagMap`] used for set-like lookup. Every
//! native encoding converts through these and nothing else.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One canonical tag: an ordered (name, value) pair.
///
/// Sequences of tag items preserve their order end-to-end because some
/// native representations are list-based and order-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagItem {
    /// The tag name (key).
    pub name: String,
    /// The tag value.
    pub value: String,
}

impl TagItem {
    /// Create a new tag item.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl std::fmt::Display for TagItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// Unordered name→value mapping of a resource's tags.
///
/// Map semantics guarantee no duplicate names. Building a map from an
/// ordered sequence collapses duplicates to the last-seen value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagMap {
    entries: HashMap<String, String>,
}

impl TagMap {
    /// Create a new empty tag map.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Build a map from an ordered tag sequence, last write wins.
    pub fn from_items(items: &[TagItem]) -> Self {
        items
            .iter()
            .map(|t| (t.name.clone(), t.value.clone()))
            .collect()
    }

    /// Insert a tag, replacing any existing value for the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Get the value for a tag name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Check if a tag name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Get the number of tags.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all (name, value) entries.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<HashMap<String, String>> for TagMap {
    fn from(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }
}

impl FromIterator<(String, String)> for TagMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut map = TagMap::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}
