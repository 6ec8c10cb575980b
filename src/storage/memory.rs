// SPDX-License-Identifier: MPL-2.0
use super::LocalStorage;
use std::cell::RefCell;
use std::collections::BTreeMap;

/// Volatile storage backend.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl LocalStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove_item(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove_round_trip() {
        let storage = MemoryStorage::new();
        assert!(storage.get_item("k").is_none());

        storage.set_item("k", "v");
        assert_eq!(storage.get_item("k").as_deref(), Some("v"));

        storage.set_item("k", "w");
        assert_eq!(storage.get_item("k").as_deref(), Some("w"));
        assert_eq!(storage.len(), 1);

        storage.remove_item("k");
        assert!(storage.is_empty());
    }

    #[test]
    fn removing_missing_key_is_harmless() {
        let storage = MemoryStorage::new();
        storage.remove_item("absent");
        assert!(storage.is_empty());
    }
}
