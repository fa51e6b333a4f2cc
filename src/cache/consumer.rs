//! Revalidation consumer for executing invalidation plans.
//!
//! Consumes events from the queue and drops the affected cached responses.

use std::sync::Arc;
use std::time::Instant;

use metrics::histogram;
use tracing::{info, instrument};
use uuid::Uuid;

use super::config::CacheConfig;
use super::events::EventQueue;
use super::plan::InvalidationPlan;
use super::registry::CacheRegistry;
use super::store::ResponseStore;

const METRIC_CACHE_CONSUME_MS: &str = "vitrine_cache_consume_ms";

/// Consumer that processes change events and maintains cache consistency.
///
/// The consumer:
/// 1. Drains events from the queue
/// 2. Merges them into an invalidation plan
/// 3. Drops the affected cached responses via the registry
pub struct RevalidationConsumer {
    config: CacheConfig,
    store: Arc<ResponseStore>,
    registry: Arc<CacheRegistry>,
    queue: Arc<EventQueue>,
}

impl RevalidationConsumer {
    pub fn new(
        config: CacheConfig,
        store: Arc<ResponseStore>,
        registry: Arc<CacheRegistry>,
        queue: Arc<EventQueue>,
    ) -> Self {
        Self {
            config,
            store,
            registry,
            queue,
        }
    }

    /// Consume pending events and execute the plan.
    ///
    /// Returns true if any events were processed.
    #[instrument(skip(self))]
    pub async fn consume(&self) -> bool {
        let consume_started_at = Instant::now();
        let events = self.queue.drain(self.config.consume_batch_limit);
        if events.is_empty() {
            return false;
        }

        let event_count = events.len();
        let event_ids: Vec<Uuid> = events.iter().map(|e| e.id).collect();
        let plan = InvalidationPlan::from_events(events);

        info!(
            event_count,
            event_ids = ?event_ids,
            plan = %plan,
            "Cache consumption starting"
        );

        if plan.reset_all {
            self.store.invalidate_all();
            self.registry.clear();
        } else {
            for entity in &plan.invalidate_entities {
                for key in self.registry.keys_for_entity(entity) {
                    self.store.invalidate(&key);
                    self.registry.unregister(&key);
                }
            }
        }

        info!(
            event_count,
            invalidated = plan.invalidate_entities.len(),
            reset_all = plan.reset_all,
            "Cache consumption complete"
        );

        histogram!(
            METRIC_CACHE_CONSUME_MS,
            "mode" => if plan.reset_all { "reset" } else { "invalidate" }
        )
        .record(consume_started_at.elapsed().as_secs_f64() * 1000.0);

        true
    }

    /// Get reference to the event queue.
    pub fn queue(&self) -> &Arc<EventQueue> {
        &self.queue
    }

    /// Get reference to the response store.
    pub fn store(&self) -> &Arc<ResponseStore> {
        &self.store
    }

    /// Get reference to the registry.
    pub fn registry(&self) -> &Arc<CacheRegistry> {
        &self.registry
    }
}
