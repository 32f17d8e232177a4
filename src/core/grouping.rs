//! Insertion-ordered grouping
//!
//! Several analytics (category breakdown, recurring detection, top days) group
//! transactions by a key and must report groups in the order each key was
//! first seen. `OrderedGroups` pairs a `Vec` of accumulators with a `HashMap`
//! index so lookups stay O(1) while iteration follows first insertion.

use std::collections::HashMap;
use std::hash::Hash;

/// Map of keys to accumulators that iterates in first-insertion order
#[derive(Debug, Clone)]
pub struct OrderedGroups<K, V> {
    /// Position of each key in `entries`
    index: HashMap<K, usize>,
    /// Accumulators in first-seen order
    entries: Vec<(K, V)>,
}

impl<K, V> OrderedGroups<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Create an empty group map
    pub fn new() -> Self {
        OrderedGroups {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    /// Get the accumulator for `key`, inserting `V::default()` on first sight
    pub fn entry(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        let position = match self.index.get(&key) {
            Some(&position) => position,
            None => {
                self.entries.push((key.clone(), V::default()));
                let position = self.entries.len() - 1;
                self.index.insert(key, position);
                position
            }
        };

        &mut self.entries[position].1
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no key has been inserted yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over groups in first-insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }
}

impl<K, V> Default for OrderedGroups<K, V>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> IntoIterator for OrderedGroups<K, V> {
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
