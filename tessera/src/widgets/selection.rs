//! Ordered multi-selection keyed by row identity.

use std::collections::HashSet;
use std::hash::Hash;

/// Tracks selected items by their keys, remembering the order they were
/// selected in.
#[derive(Debug, Clone)]
pub struct Selection<K: Clone + Eq + Hash> {
    order: Vec<K>,
    members: HashSet<K>,
}

impl<K: Clone + Eq + Hash> Default for Selection<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone + Eq + Hash> Selection<K> {
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            members: HashSet::new(),
        }
    }

    /// Toggle selection for a key. Returns true if the key is now selected.
    pub fn toggle(&mut self, key: K) -> bool {
        if self.members.remove(&key) {
            self.order.retain(|k| k != &key);
            false
        } else {
            self.members.insert(key.clone());
            self.order.push(key);
            true
        }
    }

    /// Check if a key is selected.
    pub fn is_selected(&self, key: &K) -> bool {
        self.members.contains(key)
    }

    /// Selected keys, oldest selection first.
    pub fn keys(&self) -> &[K] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Clear all selections.
    pub fn clear(&mut self) {
        self.order.clear();
        self.members.clear();
    }

    /// Keep only the keys for which `keep` returns true.
    pub fn retain(&mut self, mut keep: impl FnMut(&K) -> bool) {
        let members = &mut self.members;
        self.order.retain(|k| {
            let kept = keep(k);
            if !kept {
                members.remove(k);
            }
            kept
        });
    }
}
