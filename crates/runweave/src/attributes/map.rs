//! Ordered attribute mappings.

use std::collections::btree_map;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{AttributeKey, AttributeValue};

/// An ordered mapping from [`AttributeKey`] to [`AttributeValue`].
///
/// Keys iterate (and serialize) in name order, so two mappings holding the
/// same pairs always compare, print and serialize identically regardless of
/// insertion order.
///
/// # Example
///
/// ```rust
/// use runweave::{AttributeKey, Attributes};
///
/// let attrs = Attributes::new()
///     .with(AttributeKey::FONT, "Tiempos Text")
///     .with(AttributeKey::FONT_SIZE, 14);
///
/// assert_eq!(attrs.len(), 2);
/// assert!(attrs.contains(&AttributeKey::FONT));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(BTreeMap<AttributeKey, AttributeValue>);

impl Attributes {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Sets `key` to `value`, returning the updated mapping for chaining.
    pub fn with(mut self, key: impl Into<AttributeKey>, value: impl Into<AttributeValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets `key` to `value`, returning the previous value if there was one.
    pub fn insert(
        &mut self,
        key: impl Into<AttributeKey>,
        value: impl Into<AttributeValue>,
    ) -> Option<AttributeValue> {
        self.0.insert(key.into(), value.into())
    }

    /// Returns the value for `key`, if set.
    pub fn get(&self, key: &AttributeKey) -> Option<&AttributeValue> {
        self.0.get(key)
    }

    /// Returns `true` if `key` is set.
    pub fn contains(&self, key: &AttributeKey) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the pairs in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, AttributeKey, AttributeValue> {
        self.0.iter()
    }

    /// Returns a copy of this mapping with every pair of `overrides` applied on top.
    ///
    /// Keys present in both take the value from `overrides`.
    pub fn merged_with(&self, overrides: &Attributes) -> Attributes {
        let mut merged = self.clone();
        merged.extend_from(overrides);
        merged
    }

    pub(crate) fn extend_from(&mut self, overrides: &Attributes) {
        self.0.extend(
            overrides
                .iter()
                .map(|(key, value)| (key.clone(), value.clone())),
        );
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = (&'a AttributeKey, &'a AttributeValue);
    type IntoIter = btree_map::Iter<'a, AttributeKey, AttributeValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Into<AttributeKey>, V: Into<AttributeValue>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}
