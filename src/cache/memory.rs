//! In-Process Store Module
//!
//! HashMap-backed store with TTL expiration, swept by the cleanup task.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::cache::{CacheEntry, KeyValueStore};
use crate::error::Result;

// == Entry Table ==
/// Key-value table of expiring entries.
#[derive(Debug, Default)]
pub struct EntryTable {
    entries: HashMap<String, CacheEntry>,
}

impl EntryTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    // == Set ==
    /// Stores a value, overwriting any existing entry and resetting its TTL.
    pub fn set(&mut self, key: String, value: String, ttl_secs: u64) {
        self.entries.insert(key, CacheEntry::new(value, ttl_secs));
    }

    // == Get ==
    /// Returns the value if present and unexpired.
    ///
    /// Expired entries are removed on read.
    pub fn get(&mut self, key: &str) -> Option<String> {
        match self.entries.get(key) {
            Some(entry) if entry.is_expired() => {
                self.entries.remove(key);
                None
            }
            Some(entry) => Some(entry.value.clone()),
            None => None,
        }
    }

    /// Remaining TTL in seconds for a live entry.
    pub fn ttl(&self, key: &str) -> Option<u64> {
        self.entries
            .get(key)
            .filter(|entry| !entry.is_expired())
            .map(CacheEntry::ttl_remaining)
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the table.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        before - self.entries.len()
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the number of entries, expired ones included until swept.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Memory Store ==
/// Store backed by a shared in-process [`EntryTable`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    table: Arc<RwLock<EntryTable>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to the table, for the cleanup task.
    pub fn table(&self) -> Arc<RwLock<EntryTable>> {
        self.table.clone()
    }

    /// Remaining TTL in seconds for `key`, if it holds a live entry.
    pub async fn ttl(&self, key: &str) -> Option<u64> {
        self.table.read().await.ttl(key)
    }

    pub async fn len(&self) -> usize {
        self.table.read().await.len()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        // Write lock: expired entries are evicted on read
        let mut table = self.table.write().await;
        Ok(table.get(key))
    }

    async fn set_with_expiry(&self, key: &str, value: String, ttl_secs: u64) -> Result<()> {
        let mut table = self.table.write().await;
        table.set(key.to_string(), value, ttl_secs);
        Ok(())
    }

    async fn close(&self) -> Result<()> {
        self.table.write().await.clear();
        Ok(())
    }
}
