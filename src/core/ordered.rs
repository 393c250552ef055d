//! Insertion-ordered association list
//!
//! Grouping and counting functions return an [`OrderedMap`] so that iteration
//! order, and therefore tie-breaking, follows the order in which keys were
//! first seen. Keys only need `PartialEq`, which lets JSON values (which are
//! neither `Hash` nor `Ord`) act as keys. Lookups are linear, matching the
//! small inputs this crate is built for.

use super::value::key_string;
use crate::error::Result;
use serde::Serialize;
use serde_json::map::Entry;
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<K, V> {
    entries: Vec<(K, V)>,
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K: PartialEq, V> OrderedMap<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, key: &K) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.position(key).map(|i| &self.entries[i].1)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.position(key).is_some()
    }

    /// Insert or overwrite. An overwritten key keeps its original position.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.position(&key) {
            Some(i) => Some(std::mem::replace(&mut self.entries[i].1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Mutable access to the value for `key`, appending `default()` if absent
    pub fn get_or_insert_with(&mut self, key: K, default: impl FnOnce() -> V) -> &mut V {
        let index = match self.position(&key) {
            Some(i) => i,
            None => {
                self.entries.push((key, default()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[index].1
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn into_entries(self) -> Vec<(K, V)> {
        self.entries
    }
}

impl<V: Serialize> OrderedMap<Value, V> {
    /// Render as a JSON object keyed by the string form of each key.
    ///
    /// Keys whose string forms collide (`1` and `"1"`) collapse into one field
    /// holding the later value.
    pub fn to_json(&self) -> Result<Value> {
        self.to_json_with(|slot, value| *slot = value)
    }

    /// Like [`to_json`](Self::to_json), but colliding keys are folded together
    /// with `combine(existing, incoming)`. The field stays where the first
    /// colliding key put it.
    pub fn to_json_with<F>(&self, mut combine: F) -> Result<Value>
    where
        F: FnMut(&mut Value, Value),
    {
        let mut object = Map::new();
        for (key, value) in &self.entries {
            let value = serde_json::to_value(value)?;
            match object.entry(key_string(key)) {
                Entry::Occupied(mut slot) => combine(slot.get_mut(), value),
                Entry::Vacant(slot) => {
                    slot.insert(value);
                }
            }
        }
        Ok(Value::Object(object))
    }
}

impl<K: PartialEq, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<K, V> IntoIterator for OrderedMap<K, V> {
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
