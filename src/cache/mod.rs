//! Response cache and revalidation subsystem.
//!
//! Public GET responses are cached in an in-process LRU store, keyed by path
//! and query. Write operations publish [`ChangeEvent`]s onto an in-memory
//! queue; a consumer merges each drained batch into an [`InvalidationPlan`]
//! and drops the affected entries. Content services record the cache tags a
//! response depends on through a task-local collector, and a registry maps
//! tags and paths back to cached entries.
//!
//! ## Configuration
//!
//! Cache behavior is controlled via `vitrine.toml`:
//!
//! ```toml
//! [cache]
//! enabled = true
//! response_limit = 256
//! response_ttl_secs = 300
//! # ... see config.rs for all options
//! ```

mod config;
mod consumer;
pub mod deps;
mod events;
mod keys;
mod lock;
mod middleware;
mod plan;
mod registry;
mod store;
mod trigger;

pub use config::CacheConfig;
pub use consumer::RevalidationConsumer;
pub use events::{ChangeEvent, DocumentChange, Epoch, EventKind, EventQueue};
pub use keys::{EntityKey, ResponseKey, hash_query, hash_value};
pub use middleware::{CacheState, response_cache_layer};
pub use plan::InvalidationPlan;
pub use registry::CacheRegistry;
pub use store::{CachedResponse, ResponseStore};
pub use trigger::RevalidationTrigger;
