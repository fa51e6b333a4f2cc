//! Bidirectional registry mapping invalidation targets to cached responses.
//!
//! When a response is cached, the tags and paths it depends on are registered
//! here. When an entity changes, the registry answers which cached responses
//! must be dropped.

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use super::keys::{EntityKey, ResponseKey};
use super::lock::{read_guard, write_guard};

const SOURCE: &str = "cache::registry";

pub struct CacheRegistry {
    entity_to_keys: RwLock<HashMap<EntityKey, HashSet<ResponseKey>>>,
    key_to_entities: RwLock<HashMap<ResponseKey, HashSet<EntityKey>>>,
}

impl CacheRegistry {
    pub fn new() -> Self {
        Self {
            entity_to_keys: RwLock::new(HashMap::new()),
            key_to_entities: RwLock::new(HashMap::new()),
        }
    }

    /// Register a cached response with the entities it depends on.
    pub fn register(&self, key: ResponseKey, entities: HashSet<EntityKey>) {
        let mut entity_to_keys = write_guard(&self.entity_to_keys, SOURCE, "register.forward");
        let mut key_to_entities = write_guard(&self.key_to_entities, SOURCE, "register.reverse");

        for entity in &entities {
            entity_to_keys
                .entry(entity.clone())
                .or_default()
                .insert(key.clone());
        }

        key_to_entities.insert(key, entities);
    }

    /// All cached responses depending on the given entity.
    pub fn keys_for_entity(&self, entity: &EntityKey) -> Vec<ResponseKey> {
        read_guard(&self.entity_to_keys, SOURCE, "keys_for_entity")
            .get(entity)
            .map(|keys| keys.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// All entities the given cached response depends on.
    pub fn entities_for_key(&self, key: &ResponseKey) -> Vec<EntityKey> {
        read_guard(&self.key_to_entities, SOURCE, "entities_for_key")
            .get(key)
            .map(|entities| entities.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Remove a cached response from both maps.
    pub fn unregister(&self, key: &ResponseKey) {
        let mut entity_to_keys = write_guard(&self.entity_to_keys, SOURCE, "unregister.forward");
        let mut key_to_entities = write_guard(&self.key_to_entities, SOURCE, "unregister.reverse");

        if let Some(entities) = key_to_entities.remove(key) {
            for entity in entities {
                if let Some(keys) = entity_to_keys.get_mut(&entity) {
                    keys.remove(key);
                    if keys.is_empty() {
                        entity_to_keys.remove(&entity);
                    }
                }
            }
        }
    }

    /// Drop all registrations.
    pub fn clear(&self) {
        write_guard(&self.entity_to_keys, SOURCE, "clear.forward").clear();
        write_guard(&self.key_to_entities, SOURCE, "clear.reverse").clear();
    }

    pub fn entity_count(&self) -> usize {
        read_guard(&self.entity_to_keys, SOURCE, "entity_count").len()
    }

    pub fn key_count(&self) -> usize {
        read_guard(&self.key_to_entities, SOURCE, "key_count").len()
    }
}

impl Default for CacheRegistry {
    fn default() -> Self {
        Self::new()
    }
}
