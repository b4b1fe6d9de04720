//! Key-Value Store Module
//!
//! The storage seam behind the resolver: a text store with expiring entries.

use async_trait::async_trait;

use crate::error::Result;

// == Key-Value Store ==
/// A shared key-value store whose entries expire after a TTL.
///
/// Implementations are constructed once at startup and shared by every
/// request; no locking is offered across calls.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns the text stored under `key`, or `None` when absent or expired.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value, expiring
    /// `ttl_secs` seconds from now.
    async fn set_with_expiry(&self, key: &str, value: String, ttl_secs: u64) -> Result<()>;

    /// Releases the underlying connection or storage. Safe to call twice.
    async fn close(&self) -> Result<()>;
}
