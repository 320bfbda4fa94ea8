//! Insertion-ordered map whose key equality comes from a [`KeyComparer`].
//!
//! `std::collections::HashMap` fixes `Eq`/`Hash` per key type, so entries
//! live in a `Vec` and a bucket index maps policy hashes to positions.

use std::collections::HashMap;

use crate::comparison::{comparer_for, KeyComparer};
use crate::value::Value;

pub(crate) struct Store {
    comparer: Box<dyn KeyComparer>,
    entries: Vec<(Value, Value)>,
    buckets: HashMap<u64, Vec<usize>>,
}

impl Store {
    pub fn new(case_sensitive: bool) -> Self {
        Self::with_comparer(comparer_for(case_sensitive))
    }

    pub fn with_comparer(comparer: Box<dyn KeyComparer>) -> Self {
        Self { comparer, entries: Vec::new(), buckets: HashMap::new() }
    }

    pub fn case_sensitive(&self) -> bool {
        self.comparer.case_sensitive()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn position(&self, key: &Value) -> Option<usize> {
        let hash = self.comparer.hash_key(key);
        self.buckets
            .get(&hash)?
            .iter()
            .copied()
            .find(|&i| self.comparer.keys_equal(&self.entries[i].0, key))
    }

    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.position(key).map(|i| &self.entries[i].1)
    }

    /// Appends an entry. The caller has checked the key is absent.
    pub fn push(&mut self, key: Value, value: Value) {
        let hash = self.comparer.hash_key(&key);
        self.buckets.entry(hash).or_default().push(self.entries.len());
        self.entries.push((key, value));
    }

    /// Replaces the value at `index`, keeping the stored key.
    pub fn replace(&mut self, index: usize, value: Value) -> Value {
        std::mem::replace(&mut self.entries[index].1, value)
    }

    pub fn remove_at(&mut self, index: usize) -> (Value, Value) {
        let hash = self.comparer.hash_key(&self.entries[index].0);
        if let Some(slots) = self.buckets.get_mut(&hash) {
            slots.retain(|&i| i != index);
            if slots.is_empty() {
                self.buckets.remove(&hash);
            }
        }
        for slots in self.buckets.values_mut() {
            for i in slots.iter_mut().filter(|i| **i > index) {
                *i -= 1;
            }
        }
        self.entries.remove(index)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.buckets.clear();
    }

    pub fn entries(&self) -> &[(Value, Value)] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<(Value, Value)> {
        self.entries
    }
}
