//! The two ordered key sequences behind the panes.

use std::collections::HashSet;

use super::registry::{ItemKey, OptionRegistry};
use super::Pane;
use crate::document::SelectOption;

/// Available and chosen keys. Every registry key lives in exactly one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartitionStore {
    available: Vec<ItemKey>,
    chosen: Vec<ItemKey>,
}

impl PartitionStore {
    /// Initial partitions: selected source options start chosen.
    pub fn from_source(registry: &OptionRegistry, options: &[SelectOption]) -> Self {
        let mut store = Self::default();
        for (key, option) in registry.keys().zip(options) {
            if option.selected {
                store.chosen.push(key.clone());
            } else {
                store.available.push(key.clone());
            }
        }
        store
    }

    /// Keys of `pane` in display order.
    pub fn keys(&self, pane: Pane) -> &[ItemKey] {
        match pane {
            Pane::Available => &self.available,
            Pane::Chosen => &self.chosen,
        }
    }

    fn keys_mut(&mut self, pane: Pane) -> &mut Vec<ItemKey> {
        match pane {
            Pane::Available => &mut self.available,
            Pane::Chosen => &mut self.chosen,
        }
    }

    pub fn len(&self, pane: Pane) -> usize {
        self.keys(pane).len()
    }

    /// Whether `key` is in either partition.
    pub fn contains(&self, key: &str) -> bool {
        self.partition_of(key).is_some()
    }

    /// The partition holding `key`.
    pub fn partition_of(&self, key: &str) -> Option<Pane> {
        Pane::ALL
            .into_iter()
            .find(|&pane| self.keys(pane).iter().any(|k| k.as_str() == key))
    }

    /// Stable sort of `pane` by original index. Unknown keys sort last.
    pub fn sort_by_index(&mut self, pane: Pane, registry: &OptionRegistry) {
        self.keys_mut(pane)
            .sort_by_key(|key| registry.original_index(key.as_str()).unwrap_or(usize::MAX));
    }

    /// Remove `keys` from `from` and append them to `to` in the given order.
    ///
    /// Keys not in `from` and repeats are dropped. Returns the keys moved.
    pub(crate) fn move_keys(&mut self, keys: &[ItemKey], from: Pane, to: Pane) -> Vec<ItemKey> {
        if from == to {
            return Vec::new();
        }
        let present: HashSet<&ItemKey> = self.keys(from).iter().collect();
        let mut seen = HashSet::new();
        let moving: Vec<ItemKey> = keys
            .iter()
            .filter(|key| present.contains(key) && seen.insert(*key))
            .cloned()
            .collect();
        if moving.is_empty() {
            return moving;
        }

        let moving_set: HashSet<&ItemKey> = moving.iter().collect();
        self.keys_mut(from).retain(|key| !moving_set.contains(key));
        self.keys_mut(to).extend(moving.iter().cloned());
        moving
    }

    /// Whether the partitions hold every registry key exactly once.
    pub fn is_consistent_with(&self, registry: &OptionRegistry) -> bool {
        let mut seen = HashSet::new();
        let all_unique = self
            .available
            .iter()
            .chain(&self.chosen)
            .all(|key| seen.insert(key.as_str()));
        all_unique
            && seen.len() == registry.len()
            && registry.keys().all(|key| seen.contains(key.as_str()))
    }
}
