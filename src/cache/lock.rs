//! Poison recovery for the cache locks.
//!
//! A panic while a thread holds the store, registry, or queue lock poisons
//! it. Cached responses are disposable state with a TTL behind them, so the
//! guards here take the inner value and log instead of spreading the panic
//! to unrelated requests.

use std::sync::{Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::warn;

fn note_recovery(structure: &'static str, op: &'static str, lock: &'static str) {
    warn!(
        structure,
        op,
        lock,
        "cache lock was poisoned; continuing with possibly stale entries"
    );
}

pub(crate) fn read_guard<'a, T>(
    lock: &'a RwLock<T>,
    structure: &'static str,
    op: &'static str,
) -> RwLockReadGuard<'a, T> {
    lock.read().unwrap_or_else(|poisoned| {
        note_recovery(structure, op, "rwlock.read");
        poisoned.into_inner()
    })
}

pub(crate) fn write_guard<'a, T>(
    lock: &'a RwLock<T>,
    structure: &'static str,
    op: &'static str,
) -> RwLockWriteGuard<'a, T> {
    lock.write().unwrap_or_else(|poisoned| {
        note_recovery(structure, op, "rwlock.write");
        poisoned.into_inner()
    })
}

pub(crate) fn queue_guard<'a, T>(
    lock: &'a Mutex<T>,
    structure: &'static str,
    op: &'static str,
) -> MutexGuard<'a, T> {
    lock.lock().unwrap_or_else(|poisoned| {
        note_recovery(structure, op, "mutex");
        poisoned.into_inner()
    })
}
