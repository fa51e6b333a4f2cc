//! Dependency collector for response cache invalidation.
//!
//! Uses `tokio::task_local!` for zero-cost dependency tracking during request
//! processing. Dependencies are recorded by the content services and
//! collected at request end for registration in the [`CacheRegistry`].
//!
//! [`CacheRegistry`]: super::CacheRegistry

use std::cell::RefCell;
use std::collections::HashSet;

use super::keys::EntityKey;

tokio::task_local! {
    static DEPS: RefCell<HashSet<EntityKey>>;
}

/// Record an entity dependency (called from the service layer).
///
/// This should be called before reading data that affects the response.
/// If no collector is active, the call is silently ignored.
///
/// # Example
///
/// ```ignore
/// crate::cache::deps::record(EntityKey::Tag("blogs"));
/// let blogs = self.blogs.list_blogs(scope).await?;
/// ```
pub fn record(entity: EntityKey) {
    let _ = DEPS.try_with(|deps| {
        deps.borrow_mut().insert(entity);
    });
}

/// Run an async block with a dependency collector.
///
/// Scopes a fresh set to the current task for the duration of the future and
/// returns both the result and the dependencies recorded inside it. The
/// collected set must be read before the scope ends, so the future is wrapped
/// rather than inspected afterwards.
pub async fn with_collector<F, R>(f: F) -> (R, HashSet<EntityKey>)
where
    F: std::future::Future<Output = R>,
{
    DEPS.scope(RefCell::new(HashSet::new()), async move {
        let result = f.await;
        let collected = DEPS.with(|deps| deps.borrow().clone());
        (result, collected)
    })
    .await
}
