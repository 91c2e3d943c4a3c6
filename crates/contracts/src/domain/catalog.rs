use std::collections::HashSet;

use super::item::{Item, ItemConfig};
use crate::error::ConfigError;

/// The ordered, non-empty, unique-keyed set of items a viewer can show.
///
/// Built once at setup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    pub fn new(items: Vec<Item>) -> Result<Self, ConfigError> {
        if items.is_empty() {
            return Err(ConfigError::NoItems);
        }
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.key.as_str()) {
                return Err(ConfigError::DuplicateKey(item.key.clone()));
            }
        }
        Ok(Self { items })
    }

    /// Normalize raw page items. Items without a source are skipped with a
    /// warning; if nothing survives the catalog is rejected.
    pub fn from_configs(configs: &[ItemConfig]) -> Result<Self, ConfigError> {
        let items = configs
            .iter()
            .enumerate()
            .filter_map(|(index, config)| {
                let item = Item::from_config(config, index);
                if item.is_none() {
                    log::warn!("[viewer] item #{} has no src, skipped", index);
                }
                item
            })
            .collect();
        Self::new(items)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn first(&self) -> &Item {
        // non-empty by construction
        &self.items[0]
    }

    pub fn get(&self, key: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
