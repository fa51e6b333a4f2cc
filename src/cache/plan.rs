//! Invalidation plan generation.
//!
//! Merges a drained batch of change events into one set of invalidation
//! targets.

use std::collections::HashSet;
use std::fmt;

use crate::domain::types::ContentStatus;

use super::events::{ChangeEvent, DocumentChange, EventKind};
use super::keys::EntityKey;

/// Targets to invalidate for cache consistency.
///
/// The planner deduplicates events by id and unions the targets each event
/// maps to. Draft churn (a document that neither is nor was published) maps
/// to nothing.
#[derive(Debug, Default)]
pub struct InvalidationPlan {
    /// Entities (tags and paths) to invalidate.
    pub invalidate_entities: HashSet<EntityKey>,
    /// Drop the entire response cache instead of individual entries.
    pub reset_all: bool,
}

impl fmt::Display for InvalidationPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "InvalidationPlan {{ invalidate: {}, reset_all: {} }}",
            self.invalidate_entities.len(),
            self.reset_all,
        )
    }
}

impl InvalidationPlan {
    /// Merge multiple events into a plan.
    ///
    /// - Deduplicates by event ID
    /// - Unions invalidation targets across events
    pub fn from_events(events: Vec<ChangeEvent>) -> Self {
        let mut plan = Self::default();
        let mut seen_ids = HashSet::new();

        for event in events {
            if !seen_ids.insert(event.id) {
                continue;
            }

            match &event.kind {
                EventKind::DocumentChanged(change) => plan.apply_change(change),
                EventKind::DocumentDeleted {
                    collection, slug, ..
                } => {
                    if let Some(slug) = slug
                        && let Some(detail) = collection.detail_path(slug)
                    {
                        plan.invalidate_entities.insert(EntityKey::path(detail));
                    }
                    plan.invalidate_entities
                        .insert(EntityKey::path(collection.index_path()));
                    plan.invalidate_entities
                        .insert(EntityKey::collection(*collection));
                }
                EventKind::GlobalUpdated { global } => {
                    plan.invalidate_entities.insert(EntityKey::path("/"));
                    plan.invalidate_entities.insert(EntityKey::global(*global));
                }
                EventKind::ResetAll => plan.reset_all = true,
            }
        }

        plan
    }

    fn apply_change(&mut self, change: &DocumentChange) {
        let was_published = change.previous_status == Some(ContentStatus::Published);
        let is_published = change.status.is_published();

        if !is_published && !was_published {
            // Draft churn is invisible to readers.
            return;
        }

        let collection = change.collection;

        if is_published
            && let Some(slug) = &change.slug
            && let Some(detail) = collection.detail_path(slug)
        {
            self.invalidate_entities.insert(EntityKey::path(detail));
        }

        // A document leaving published state (or renamed while published)
        // must still clear the detail path readers were served under.
        if was_published {
            let old_slug = change.previous_slug.as_ref().or(change.slug.as_ref());
            if let Some(slug) = old_slug
                && let Some(detail) = collection.detail_path(slug)
            {
                self.invalidate_entities.insert(EntityKey::path(detail));
            }
        }

        self.invalidate_entities
            .insert(EntityKey::path(collection.index_path()));
        self.invalidate_entities
            .insert(EntityKey::collection(collection));
    }

    /// Check if the plan has any actions to execute.
    pub fn is_empty(&self) -> bool {
        self.invalidate_entities.is_empty() && !self.reset_all
    }
}
