//! In-memory store

use std::collections::HashMap;
use std::sync::RwLock;

use crate::store::{Entity, Repository};

/// Process-lifetime store backed by a locked map
pub struct MemoryStore<T> {
    entries: RwLock<HashMap<String, T>>,
}

impl<T: Entity> MemoryStore<T> {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Create a store seeded with `entities`
    pub fn with_entities(entities: impl IntoIterator<Item = T>) -> Self {
        let entries = entities
            .into_iter()
            .map(|e| (e.id().to_string(), e))
            .collect();
        Self {
            entries: RwLock::new(entries),
        }
    }

    /// Get store size
    pub fn len(&self) -> usize {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.len()
    }

    /// Check if store is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Entity> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> Repository<T> for MemoryStore<T> {
    fn put(&self, entity: T) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(entity.id().to_string(), entity);
    }

    fn get(&self, id: &str) -> Option<T> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.get(id).cloned()
    }

    fn list(&self) -> Vec<T> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.values().cloned().collect()
    }

    fn delete(&self, id: &str) -> bool {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.remove(id).is_some()
    }
}
