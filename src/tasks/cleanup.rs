//! TTL Cleanup Task
//!
//! Background task that periodically removes expired entries from the
//! in-process store.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::EntryTable;

/// Spawns a background task that periodically sweeps expired entries.
///
/// Expired entries are already invisible to readers; the sweep only reclaims
/// memory for keys that are never read again.
///
/// # Arguments
/// * `table` - Shared table behind a [`MemoryStore`](crate::cache::MemoryStore)
/// * `cleanup_interval_secs` - Interval in seconds between cleanup runs
///
/// # Returns
/// A JoinHandle for the spawned task, aborted during graceful shutdown.
pub fn spawn_cleanup_task(
    table: Arc<RwLock<EntryTable>>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting TTL cleanup task with interval of {} seconds",
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = table.write().await.cleanup_expired();

            if removed > 0 {
                info!("TTL cleanup: removed {} expired entries", removed);
            } else {
                debug!("TTL cleanup: no expired entries found");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryStore;

    #[tokio::test]
    async fn test_cleanup_task_removes_expired_entries() {
        let store = MemoryStore::new();
        store
            .table()
            .write()
            .await
            .set("expire_soon".to_string(), "[]".to_string(), 1);

        let handle = spawn_cleanup_task(store.table(), 1);

        // Wait for entry to expire and cleanup to run
        tokio::time::sleep(Duration::from_millis(2500)).await;

        assert_eq!(store.len().await, 0, "Expired entry should have been swept");

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_preserves_valid_entries() {
        let store = MemoryStore::new();
        store
            .table()
            .write()
            .await
            .set("album_1".to_string(), "[]".to_string(), 3600);

        let handle = spawn_cleanup_task(store.table(), 1);

        tokio::time::sleep(Duration::from_millis(1500)).await;

        assert_eq!(store.len().await, 1);
        assert_eq!(store.ttl("album_1").await.map(|t| t > 3590), Some(true));

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_can_be_aborted() {
        let handle = spawn_cleanup_task(MemoryStore::new().table(), 1);

        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
