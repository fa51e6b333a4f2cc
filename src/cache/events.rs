//! Change event system.
//!
//! Defines post-commit change events and an in-memory queue for event-driven
//! invalidation.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use time::OffsetDateTime;
use tracing::info;
use uuid::Uuid;

use crate::domain::types::{Collection, ContentStatus, Global};

use super::lock::queue_guard;

const SOURCE: &str = "cache::events";

/// Monotonic epoch for ordering events.
///
/// Each event gets a unique, monotonically increasing epoch number, used to
/// order events within one drained batch.
pub type Epoch = u64;

/// Change event with idempotency and ordering support.
#[derive(Debug, Clone)]
pub struct ChangeEvent {
    /// Unique identifier for idempotency (UUIDv4).
    pub id: Uuid,
    /// Monotonic epoch for ordering within this process.
    pub epoch: Epoch,
    /// The type of change.
    pub kind: EventKind,
    /// When the event was created.
    pub timestamp: OffsetDateTime,
}

impl ChangeEvent {
    /// Create a new change event with the given kind and epoch.
    pub fn new(kind: EventKind, epoch: Epoch) -> Self {
        Self {
            id: Uuid::new_v4(),
            epoch,
            kind,
            timestamp: OffsetDateTime::now_utc(),
        }
    }
}

/// A committed create or update of a collection document.
///
/// Carries the publication transition so the planner can tell a published
/// upsert from draft churn, and the previous slug so unpublishing or renaming
/// still invalidates the old detail path. Status-less collections report
/// `Published`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentChange {
    pub collection: Collection,
    pub document_id: Uuid,
    pub slug: Option<String>,
    pub previous_slug: Option<String>,
    pub status: ContentStatus,
    pub previous_status: Option<ContentStatus>,
}

/// Types of changes that trigger invalidation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    /// A collection document was created or updated.
    DocumentChanged(DocumentChange),
    /// A collection document was deleted.
    DocumentDeleted {
        collection: Collection,
        document_id: Uuid,
        slug: Option<String>,
    },
    /// A singleton global was updated.
    GlobalUpdated { global: Global },
    /// Drop every cached response (bulk operations such as seeding).
    ResetAll,
}

/// In-memory event queue for cache invalidation.
///
/// Events are published by write operations and consumed by the revalidation
/// consumer. The queue uses a mutex for simplicity since contention is
/// expected to be low.
pub struct EventQueue {
    queue: Mutex<VecDeque<ChangeEvent>>,
    epoch_counter: AtomicU64,
}

impl EventQueue {
    /// Create a new empty event queue.
    pub fn new() -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            epoch_counter: AtomicU64::new(0),
        }
    }

    /// Get the next epoch number.
    pub fn next_epoch(&self) -> Epoch {
        self.epoch_counter.fetch_add(1, Ordering::SeqCst)
    }

    /// Publish an event to the queue.
    ///
    /// The event is logged for observability.
    pub fn publish(&self, kind: EventKind) {
        let epoch = self.next_epoch();
        let event = ChangeEvent::new(kind.clone(), epoch);

        info!(
            event_id = %event.id,
            event_epoch = event.epoch,
            event_kind = ?kind,
            "Change event enqueued"
        );

        queue_guard(&self.queue, SOURCE, "publish").push_back(event);
    }

    /// Drain up to `limit` events from the queue.
    ///
    /// Returns the events in FIFO order.
    pub fn drain(&self, limit: usize) -> Vec<ChangeEvent> {
        let mut queue = queue_guard(&self.queue, SOURCE, "drain");
        let count = limit.min(queue.len());
        queue.drain(..count).collect()
    }

    /// Get the current queue length.
    pub fn len(&self) -> usize {
        queue_guard(&self.queue, SOURCE, "len").len()
    }

    /// Check if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all events from the queue.
    pub fn clear(&self) {
        queue_guard(&self.queue, SOURCE, "clear").clear();
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}
