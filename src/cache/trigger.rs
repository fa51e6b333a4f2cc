//! Revalidation trigger service.
//!
//! Provides a high-level API for publishing change events after a committed
//! write and consuming them immediately. Triggering is infallible: it runs
//! after the store mutation and can never fail it.

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use crate::domain::types::{Collection, Global};

use super::config::CacheConfig;
use super::consumer::RevalidationConsumer;
use super::events::{DocumentChange, EventKind, EventQueue};

/// Trigger for publishing change events.
///
/// Wraps the event queue and consumer, providing convenience methods for
/// write operations. Every method takes a `suppress` flag: bulk operations
/// (the seed loader) suppress per-document revalidation and reset the cache
/// once at the end.
///
/// # Usage
///
/// ```ignore
/// // After a successful blog update:
/// trigger.document_changed(change, false).await;
/// ```
pub struct RevalidationTrigger {
    config: CacheConfig,
    queue: Arc<EventQueue>,
    consumer: Arc<RevalidationConsumer>,
}

impl RevalidationTrigger {
    pub fn new(
        config: CacheConfig,
        queue: Arc<EventQueue>,
        consumer: Arc<RevalidationConsumer>,
    ) -> Self {
        Self {
            config,
            queue,
            consumer,
        }
    }

    /// Publish an event and consume immediately.
    ///
    /// Skipped entirely when the cache is disabled or the caller suppressed
    /// revalidation; both outcomes are logged at debug.
    pub async fn trigger(&self, kind: EventKind, suppress: bool) {
        if !self.config.is_enabled() {
            debug!(event_kind = ?kind, "Revalidation skipped: cache disabled");
            return;
        }

        if suppress {
            debug!(event_kind = ?kind, "Revalidation suppressed by caller");
            return;
        }

        self.queue.publish(kind);
        self.consumer.consume().await;
    }

    /// Trigger a document create or update.
    pub async fn document_changed(&self, change: DocumentChange, suppress: bool) {
        self.trigger(EventKind::DocumentChanged(change), suppress)
            .await;
    }

    /// Trigger a document delete.
    pub async fn document_deleted(
        &self,
        collection: Collection,
        document_id: Uuid,
        slug: Option<String>,
        suppress: bool,
    ) {
        self.trigger(
            EventKind::DocumentDeleted {
                collection,
                document_id,
                slug,
            },
            suppress,
        )
        .await;
    }

    /// Trigger a global update.
    pub async fn global_updated(&self, global: Global, suppress: bool) {
        self.trigger(EventKind::GlobalUpdated { global }, suppress)
            .await;
    }

    /// Drop the entire response cache. Used after bulk loads.
    pub async fn reset_all(&self) {
        self.trigger(EventKind::ResetAll, false).await;
    }

    /// Get the underlying config.
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Get the underlying event queue.
    pub fn queue(&self) -> &Arc<EventQueue> {
        &self.queue
    }

    /// Get the underlying consumer.
    pub fn consumer(&self) -> &Arc<RevalidationConsumer> {
        &self.consumer
    }
}
