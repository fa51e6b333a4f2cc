//! Cache key definitions.
//!
//! `EntityKey` names something a cached response can depend on: a collection
//! or global tag, or a public path. `ResponseKey` identifies one cached
//! response.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::domain::types::{Collection, Global};

/// Identifies an invalidation target.
///
/// Tags are the string contract shared with content services (`projects`,
/// `blogs`, `global_profile`, ...); paths are the public routes a change maps
/// to (`/blog/hello-world`). When an entity is invalidated, every registered
/// response depending on it is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityKey {
    /// A collection or global cache tag.
    Tag(&'static str),
    /// A public route path.
    Path(String),
}

impl EntityKey {
    pub fn collection(collection: Collection) -> Self {
        EntityKey::Tag(collection.tag())
    }

    pub fn global(global: Global) -> Self {
        EntityKey::Tag(global.tag())
    }

    pub fn path(path: impl Into<String>) -> Self {
        EntityKey::Path(path.into())
    }
}

/// Response cache key: one public GET response.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResponseKey {
    pub path: String,
    pub query_hash: u64,
}

impl ResponseKey {
    pub fn new(path: impl Into<String>, query: &str) -> Self {
        Self {
            path: path.into(),
            query_hash: hash_query(query),
        }
    }
}

/// Compute a hash for any hashable value.
pub fn hash_value<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Hash a query string for response cache key generation.
pub fn hash_query(query: &str) -> u64 {
    hash_value(&query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_key_equality() {
        assert_eq!(
            EntityKey::collection(Collection::Blogs),
            EntityKey::Tag("blogs")
        );
        assert_eq!(
            EntityKey::global(Global::Profile),
            EntityKey::Tag("global_profile")
        );
        assert_eq!(
            EntityKey::path("/blog/hello"),
            EntityKey::Path("/blog/hello".to_string())
        );
        assert_ne!(
            EntityKey::Tag("blogs"),
            EntityKey::Path("blogs".to_string())
        );
    }

    #[test]
    fn response_key_hash_consistency() {
        let key1 = ResponseKey::new("/blog", "page=2");
        let key2 = ResponseKey::new("/blog", "page=2");
        assert_eq!(key1, key2);
        assert_eq!(hash_value(&key1), hash_value(&key2));
    }

    #[test]
    fn different_queries_produce_different_hashes() {
        assert_ne!(hash_query("page=1"), hash_query("page=2"));
    }
}
