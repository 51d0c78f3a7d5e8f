//! Insertion-ordered keyed values

use crate::KeyedValues;
use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

/// Sort direction for [`DefaultKeyedValues`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

/// An ordered list of `(key, value)` pairs with unique keys
///
/// Adding an existing key replaces its value in place, so the position of a
/// key only changes through removal or sorting.
#[derive(Debug, Clone)]
pub struct DefaultKeyedValues<K> {
    items: Vec<(K, Option<f64>)>,
    index: HashMap<K, usize>,
}

impl<K: Clone + Eq + Hash> DefaultKeyedValues<K> {
    /// Create an empty collection
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Create an empty collection with room for `capacity` items
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Get the number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the collection is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add a value, or replace the value of an existing key
    pub fn add_value(&mut self, key: K, value: impl Into<Option<f64>>) {
        let value = value.into();
        match self.index.get(&key) {
            Some(&position) => self.items[position].1 = value,
            None => {
                self.index.insert(key.clone(), self.items.len());
                self.items.push((key, value));
            }
        }
    }

    /// Position of `key`, if present
    pub fn index_of(&self, key: &K) -> Option<usize> {
        self.index.get(key).copied()
    }

    /// Value stored for `key`
    ///
    /// Returns `None` both for unknown keys and for keys without a value;
    /// use [`index_of`](Self::index_of) to tell them apart.
    pub fn value_for_key(&self, key: &K) -> Option<f64> {
        self.index_of(key).and_then(|position| self.items[position].1)
    }

    /// Remove `key`, returning its value if the key was present
    pub fn remove_value(&mut self, key: &K) -> Option<Option<f64>> {
        let position = self.index.remove(key)?;
        let (_, value) = self.items.remove(position);
        self.rebuild_index();
        Some(value)
    }

    /// Remove all items
    pub fn clear(&mut self) {
        self.items.clear();
        self.index.clear();
    }

    /// Keys in storage order
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.items.iter().map(|(k, _)| k)
    }

    /// Iterate `(key, value)` pairs in storage order
    pub fn iter(&self) -> impl Iterator<Item = (&K, Option<f64>)> + '_ {
        self.items.iter().map(|(k, v)| (k, *v))
    }

    /// Sort items by key
    pub fn sort_by_keys(&mut self, order: SortOrder)
    where
        K: Ord,
    {
        self.items.sort_by(|a, b| order.apply(a.0.cmp(&b.0)));
        self.rebuild_index();
    }

    /// Sort items by value
    ///
    /// Items without a value always go last. NaN orders above every other
    /// number.
    pub fn sort_by_values(&mut self, order: SortOrder) {
        self.items.sort_by(|a, b| match (a.1, b.1) {
            (Some(x), Some(y)) => order.apply(OrderedFloat(x).cmp(&OrderedFloat(y))),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });
        self.rebuild_index();
    }

    fn rebuild_index(&mut self) {
        self.index.clear();
        for (position, (key, _)) in self.items.iter().enumerate() {
            self.index.insert(key.clone(), position);
        }
    }
}

impl<K: Clone + Eq + Hash> Default for DefaultKeyedValues<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash> PartialEq for DefaultKeyedValues<K> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<K: Clone + Eq + Hash> FromIterator<(K, Option<f64>)> for DefaultKeyedValues<K> {
    fn from_iter<I: IntoIterator<Item = (K, Option<f64>)>>(iter: I) -> Self {
        let mut values = Self::new();
        for (key, value) in iter {
            values.add_value(key, value);
        }
        values
    }
}

impl<K: Clone> KeyedValues for DefaultKeyedValues<K> {
    type Key = K;

    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn key(&self, index: usize) -> K {
        self.items[index].0.clone()
    }

    fn value(&self, index: usize) -> Option<f64> {
        self.items[index].1
    }
}
