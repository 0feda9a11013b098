//! The insertion-ordered mapping underlying every deserialized EPLAN object.

use std::iter::{Extend, FromIterator};

use indexmap::map::{
    IntoIter as InnerIntoIter,
    Iter as InnerIter,
    IterMut as InnerIterMut,
    Keys as InnerKeys,
    ValuesMut as InnerValuesMut,
};
use indexmap::IndexMap as InnerMap;
use serde::{Deserialize, Serialize};

use crate::types::Value;

/// A key-value mapping whose iteration order is its insertion order.
///
/// Raw EPLAN dumps key every field by opaque positional codes, and the code
/// order carries meaning to downstream consumers, so all mutations here
/// (including removal and positional re-insertion) keep the relative order
/// of untouched entries intact.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq, Eq))]
#[serde(transparent)]
pub struct Mapping(pub(crate) InnerMap<String, Value>);

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    /// Inserts at the end if `key` is new, otherwise updates the value in
    /// place without moving the key.
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    /// Removes `key`, shifting later entries down so relative order holds.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    /// Returns the current 0-based position of `key`, if present.
    pub fn key_index(&self, key: &str) -> Option<usize> {
        self.0.get_full(key).map(|(index, _, _)| index)
    }

    /// Re-inserts `key` at position `index`, removing it first if it is
    /// already present anywhere in the mapping. All other entries keep
    /// their relative order. An `index` past the end appends.
    pub fn insert_key_at_index(&mut self, key: String, index: usize, value: Value) {
        self.0.shift_remove(&key);

        let mut entries: Vec<(String, Value)> = self.0.drain(..).collect();
        let index = index.min(entries.len());
        entries.insert(index, (key, value));

        self.0.extend(entries);
    }

    pub fn keys(&self) -> InnerKeys<'_, String, Value> {
        self.0.keys()
    }

    pub fn iter(&self) -> InnerIter<'_, String, Value> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> InnerIterMut<'_, String, Value> {
        self.0.iter_mut()
    }

    pub fn values_mut(&mut self) -> InnerValuesMut<'_, String, Value> {
        self.0.values_mut()
    }
}

impl Extend<(String, Value)> for Mapping {
    fn extend<I: IntoIterator<Item = (String, Value)>>(&mut self, iter: I) {
        self.0.extend(iter)
    }
}

impl FromIterator<(String, Value)> for Mapping {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Mapping {
    type Item = (String, Value);
    type IntoIter = InnerIntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Mapping {
    type Item = (&'a String, &'a Value);
    type IntoIter = InnerIter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
