//! Per-space async locks.
//!
//! Writers for the same space queue on one `tokio::sync::Mutex`; writers for
//! different spaces get different mutexes and never wait on each other. The
//! table only holds entries for spaces with a writer in flight: the last
//! guard for a space removes its entry on drop.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

type LockTable = Arc<Mutex<HashMap<i32, Arc<AsyncMutex<()>>>>>;

#[derive(Clone, Default)]
pub struct SpaceLocks {
    table: LockTable,
}

impl SpaceLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits until no other writer holds the lock for `space_id`, then takes it.
    ///
    /// The lock is released when the returned guard is dropped.
    pub async fn acquire(&self, space_id: i32) -> SpaceLockGuard {
        let mutex = {
            let mut table = self.table.lock().unwrap_or_else(|e| e.into_inner());
            table.entry(space_id).or_default().clone()
        };

        let guard = mutex.clone().lock_owned().await;

        SpaceLockGuard {
            space_id,
            table: self.table.clone(),
            mutex,
            guard: Some(guard),
        }
    }

    /// Number of spaces that currently have a lock entry.
    pub fn len(&self) -> usize {
        self.table.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Exclusive write access to one space's current occupancy.
pub struct SpaceLockGuard {
    space_id: i32,
    table: LockTable,
    mutex: Arc<AsyncMutex<()>>,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for SpaceLockGuard {
    fn drop(&mut self) {
        drop(self.guard.take());

        let mut table = self.table.lock().unwrap_or_else(|e| e.into_inner());

        // One reference in the table plus ours: nobody else is waiting.
        if Arc::strong_count(&self.mutex) == 2 {
            if let Some(entry) = table.get(&self.space_id) {
                if Arc::ptr_eq(entry, &self.mutex) {
                    table.remove(&self.space_id);
                }
            }
        }
    }
}
