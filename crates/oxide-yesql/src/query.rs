//! Parsed query types.

use std::collections::btree_map;
use std::collections::BTreeMap;

use crate::error::{Result, YesqlError};

/// A single named SQL statement and its auxiliary tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Query {
    /// Statement text, fragments joined by single spaces.
    pub text: String,
    /// Auxiliary `-- key: value` tags, excluding `name`.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "BTreeMap::is_empty"))]
    pub tags: BTreeMap<String, String>,
}

impl Query {
    /// Creates a query with the given text and no tags.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tags: BTreeMap::new(),
        }
    }

    /// Adds a tag.
    #[must_use]
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    /// Returns the statement text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the value of a tag, if set.
    #[must_use]
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    /// Returns all tags.
    #[must_use]
    pub const fn tags(&self) -> &BTreeMap<String, String> {
        &self.tags
    }

    /// Appends a statement fragment, separated by a single space.
    pub(crate) fn push_fragment(&mut self, fragment: &str) {
        if !self.text.is_empty() {
            self.text.push(' ');
        }
        self.text.push_str(fragment);
    }
}

impl core::fmt::Display for Query {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.text)
    }
}

/// All queries of a document, keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Queries {
    inner: BTreeMap<String, Query>,
}

impl Queries {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inner: BTreeMap::new(),
        }
    }

    /// Returns the query with the given name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Query> {
        self.inner.get(name)
    }

    /// Returns the query with the given name, or [`YesqlError::QueryNotFound`].
    ///
    /// # Errors
    ///
    /// Fails if no query with this name was declared.
    pub fn require(&self, name: &str) -> Result<&Query> {
        self.inner
            .get(name)
            .ok_or_else(|| YesqlError::QueryNotFound(name.to_string()))
    }

    /// Returns `true` if a query with this name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.inner.contains_key(name)
    }

    /// Number of queries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if there are no queries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterates over query names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.inner.keys().map(String::as_str)
    }

    /// Iterates over `(name, query)` pairs in name order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Query> {
        self.inner.iter()
    }

    pub(crate) fn insert(&mut self, name: String, query: Query) {
        self.inner.insert(name, query);
    }
}

impl IntoIterator for Queries {
    type Item = (String, Query);
    type IntoIter = btree_map::IntoIter<String, Query>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a> IntoIterator for &'a Queries {
    type Item = (&'a String, &'a Query);
    type IntoIter = btree_map::Iter<'a, String, Query>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl FromIterator<(String, Query)> for Queries {
    fn from_iter<I: IntoIterator<Item = (String, Query)>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}
