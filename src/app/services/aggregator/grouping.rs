//! Insertion-ordered grouping for aggregate queries
//!
//! Groups keep the order in which their keys were first seen, so "first
//! encountered wins" tie-breaks are a property of the accumulator rather than
//! of any sort's stability.

use std::collections::HashMap;
use std::hash::Hash;

/// Map from group key to accumulator that iterates in first-seen order
#[derive(Debug, Clone)]
pub struct OrderedGroups<K, V> {
    entries: Vec<(K, V)>,
    index: HashMap<K, usize>,
}

impl<K, V> OrderedGroups<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Get the accumulator for `key`, creating it with `init` on first sight
    pub fn entry_or_insert_with(&mut self, key: K, init: impl FnOnce() -> V) -> &mut V {
        let position = match self.index.get(&key) {
            Some(&position) => position,
            None => {
                let position = self.entries.len();
                self.index.insert(key.clone(), position);
                self.entries.push((key, init()));
                position
            }
        };
        &mut self.entries[position].1
    }

    /// Groups in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Group with the highest score; ties go to the group seen first
    ///
    /// A later group replaces the current best only when strictly greater.
    pub fn max_by_score<S, F>(&self, score: F) -> Option<(&K, &V)>
    where
        S: PartialOrd,
        F: Fn(&V) -> S,
    {
        let mut best: Option<(&K, &V, S)> = None;

        for (key, value) in &self.entries {
            let candidate = score(value);
            let replace = match &best {
                Some((_, _, best_score)) => candidate > *best_score,
                None => true,
            };
            if replace {
                best = Some((key, value, candidate));
            }
        }

        best.map(|(key, value, _)| (key, value))
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

/// Running sum and count for arithmetic means
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MeanAccumulator {
    pub total: f64,
    pub count: usize,
}

impl MeanAccumulator {
    pub fn add(&mut self, value: f64) {
        self.total += value;
        self.count += 1;
    }

    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total / self.count as f64
        }
    }
}
