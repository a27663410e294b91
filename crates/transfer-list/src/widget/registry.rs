//! Canonical item metadata, keyed by stable identity.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::document::SelectOption;

/// Stable identity of an item: `item-<index>` for the option at that
/// position in the source. Never reused within a widget.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemKey(String);

impl ItemKey {
    /// Key of the source option at `index`.
    pub fn for_index(index: usize) -> Self {
        Self(format!("item-{index}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ItemKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Snapshot of one source option taken at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub key: ItemKey,
    /// Position in the source; the sort key of both partitions.
    pub original_index: usize,
    pub value: String,
    pub label: String,
    pub disabled: bool,
    pub title: Option<String>,
    /// Passed through unchanged to rendered entries.
    pub extra_attributes: BTreeMap<String, String>,
}

/// Owner of every [`Item`]. Partitions refer to items by key only.
#[derive(Debug, Clone, Default)]
pub struct OptionRegistry {
    items: Vec<Item>,
    by_key: HashMap<ItemKey, usize>,
}

impl OptionRegistry {
    /// Build the registry from the source options in document order.
    pub fn load(options: &[SelectOption]) -> Self {
        let items: Vec<Item> = options
            .iter()
            .enumerate()
            .map(|(index, option)| Item {
                key: ItemKey::for_index(index),
                original_index: index,
                value: option.value.clone(),
                label: option.label.clone(),
                disabled: option.disabled,
                title: option.title.clone(),
                extra_attributes: option.attributes.clone(),
            })
            .collect();
        let by_key = items
            .iter()
            .enumerate()
            .map(|(i, item)| (item.key.clone(), i))
            .collect();
        Self { items, by_key }
    }

    /// Item with `key`.
    pub fn get(&self, key: &str) -> Option<&Item> {
        self.by_key.get(key).map(|&i| &self.items[i])
    }

    /// Key of the first item whose value is `value`.
    pub fn key_for_value(&self, value: &str) -> Option<&ItemKey> {
        self.items
            .iter()
            .find(|item| item.value == value)
            .map(|item| &item.key)
    }

    /// Original index of `key`.
    pub fn original_index(&self, key: &str) -> Option<usize> {
        self.get(key).map(|item| item.original_index)
    }

    /// Keys in source order.
    pub fn keys(&self) -> impl Iterator<Item = &ItemKey> {
        self.items.iter().map(|item| &item.key)
    }

    /// Items in source order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
