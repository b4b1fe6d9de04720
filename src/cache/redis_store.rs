//! Redis Store Module
//!
//! Store backed by a Redis server over a multiplexed tokio connection.

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, RedisError};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::cache::KeyValueStore;
use crate::error::{GatewayError, Result};

// == Redis Store ==
/// Redis-backed store.
///
/// The connection is opened by [`RedisStore::connect`] at startup. A command
/// that fails because the connection broke drops it, and the next operation
/// dials again; while Redis stays unreachable operations fail with
/// [`GatewayError::Store`].
pub struct RedisStore {
    client: redis::Client,
    conn: Mutex<Option<MultiplexedConnection>>,
}

impl RedisStore {
    /// Parses the connection URL without connecting.
    pub fn open(url: &str) -> Result<Self> {
        let client = redis::Client::open(url)
            .map_err(|e| GatewayError::Config(format!("invalid Redis URL '{}': {}", url, e)))?;

        Ok(Self {
            client,
            conn: Mutex::new(None),
        })
    }

    /// Establishes the shared connection.
    pub async fn connect(&self) -> Result<()> {
        self.connection().await?;
        info!("Connected to Redis");
        Ok(())
    }

    async fn connection(&self) -> Result<MultiplexedConnection> {
        if let Some(conn) = self.conn.lock().await.as_ref() {
            return Ok(conn.clone());
        }

        // Lock is not held across the dial
        debug!("No Redis connection held, connecting");
        let conn = self.client.get_multiplexed_async_connection().await?;
        *self.conn.lock().await = Some(conn.clone());
        Ok(conn)
    }

    /// Forgets the held connection when `err` means it is no longer usable.
    async fn discard_if_broken(&self, err: &RedisError) {
        if err.is_io_error() || err.is_connection_dropped() || err.is_connection_refusal() {
            warn!("Redis connection lost: {}", err);
            self.conn.lock().await.take();
        }
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.connection().await?;
        match conn.get::<_, Option<String>>(key).await {
            Ok(value) => Ok(value),
            Err(e) => {
                self.discard_if_broken(&e).await;
                Err(e.into())
            }
        }
    }

    async fn set_with_expiry(&self, key: &str, value: String, ttl_secs: u64) -> Result<()> {
        let mut conn = self.connection().await?;
        match conn.set_ex::<_, _, ()>(key, value, ttl_secs).await {
            Ok(()) => Ok(()),
            Err(e) => {
                self.discard_if_broken(&e).await;
                Err(e.into())
            }
        }
    }

    async fn close(&self) -> Result<()> {
        if self.conn.lock().await.take().is_some() {
            info!("Redis connection closed");
        }
        Ok(())
    }
}
