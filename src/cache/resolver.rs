//! Cache-Aside Resolver
//!
//! Returns a cached value when present, otherwise runs the producer and
//! caches its result.

use std::future::Future;
use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, error};

use crate::cache::KeyValueStore;
use crate::error::Result;

/// Lifetime of every cached value, in seconds.
pub const CACHE_TTL_SECS: u64 = 3600;

// == Cache Resolver ==
/// Cache-aside lookup over a shared [`KeyValueStore`].
#[derive(Clone)]
pub struct CacheResolver {
    store: Arc<dyn KeyValueStore>,
}

impl CacheResolver {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    // == Resolve ==
    /// Returns the value cached under `key`, or produces, caches and returns it.
    ///
    /// On a hit the producer is never invoked. On a miss it runs exactly
    /// once; its result is written with a TTL of [`CACHE_TTL_SECS`]. A
    /// producer failure is returned as-is and nothing is written.
    ///
    /// Concurrent misses on the same key each run their producer and each
    /// write; the last write wins.
    pub async fn resolve<T, F, Fut>(&self, key: &str, producer: F) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        self.get_or_set(key, producer).await.inspect_err(|e| {
            error!("Error getting or setting cache for {}: {}", key, e);
        })
    }

    async fn get_or_set<T, F, Fut>(&self, key: &str, producer: F) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        if let Some(cached) = self.store.get(key).await? {
            debug!(key, "cache hit");
            return Ok(serde_json::from_str(&cached)?);
        }

        debug!(key, "cache miss");
        let data = producer().await?;
        let text = serde_json::to_string(&data)?;
        self.store
            .set_with_expiry(key, text, CACHE_TTL_SECS)
            .await?;

        Ok(data)
    }
}
