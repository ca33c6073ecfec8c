use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use crate::modules::gallery::domain::entities::GalleryId;

type LockTable = HashMap<GalleryId, Arc<AsyncMutex<()>>>;

/// Advisory per-record locks serializing mutations of the same id.
///
/// Cloning shares the same table. Entries are evicted once no guard or
/// waiter holds them.
#[derive(Debug, Clone, Default)]
pub struct RecordLocks {
    table: Arc<Mutex<LockTable>>,
}

/// Held for the duration of one mutation; released on drop.
#[derive(Debug)]
pub struct RecordGuard {
    id: GalleryId,
    table: Arc<Mutex<LockTable>>,
    guard: Option<OwnedMutexGuard<()>>,
}

impl RecordLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn acquire(&self, id: GalleryId) -> RecordGuard {
        let lock = {
            let mut table = self.table.lock().unwrap_or_else(|e| e.into_inner());
            Arc::clone(table.entry(id).or_default())
        };

        let guard = lock.lock_owned().await;

        RecordGuard {
            id,
            table: Arc::clone(&self.table),
            guard: Some(guard),
        }
    }

    /// Number of ids currently tracked.
    #[cfg(test)]
    pub fn tracked(&self) -> usize {
        self.table.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

impl RecordGuard {
    pub fn id(&self) -> GalleryId {
        self.id
    }
}

impl Drop for RecordGuard {
    fn drop(&mut self) {
        // Release first so the strong count below reflects waiters only.
        self.guard.take();

        let mut table = self.table.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(lock) = table.get(&self.id) {
            if Arc::strong_count(lock) == 1 {
                table.remove(&self.id);
            }
        }
    }
}
