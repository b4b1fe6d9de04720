//! Configuration Module
//!
//! Handles loading and managing gateway configuration from environment variables.

use std::env;
use std::str::FromStr;

/// Which key-value store backs the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheBackend {
    /// Shared Redis server
    Redis,
    /// In-process expiring map
    Memory,
}

impl FromStr for CacheBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "redis" => Ok(CacheBackend::Redis),
            "memory" => Ok(CacheBackend::Memory),
            other => Err(format!("unknown cache backend '{}'", other)),
        }
    }
}

/// Gateway configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Store backend for cached responses
    pub cache_backend: CacheBackend,
    /// Redis connection string
    pub redis_url: String,
    /// Base URL of the photo catalog
    pub upstream_base_url: String,
    /// Upstream request timeout in seconds
    pub upstream_timeout: u64,
    /// Background cleanup task interval in seconds (memory backend)
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CACHE_BACKEND` - `redis` or `memory` (default: redis)
    /// - `REDIS_URL` - Redis connection string (default: redis://localhost:6379)
    /// - `UPSTREAM_BASE_URL` - Photo catalog base URL (default: https://jsonplaceholder.typicode.com)
    /// - `UPSTREAM_TIMEOUT_SECS` - Upstream request timeout (default: 30)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 1)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            cache_backend: parse_var("CACHE_BACKEND").unwrap_or(defaults.cache_backend),
            redis_url: env::var("REDIS_URL").unwrap_or(defaults.redis_url),
            upstream_base_url: env::var("UPSTREAM_BASE_URL").unwrap_or(defaults.upstream_base_url),
            upstream_timeout: parse_var("UPSTREAM_TIMEOUT_SECS")
                .unwrap_or(defaults.upstream_timeout),
            cleanup_interval: parse_var("CLEANUP_INTERVAL").unwrap_or(defaults.cleanup_interval),
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            cache_backend: CacheBackend::Redis,
            redis_url: "redis://localhost:6379".to_string(),
            upstream_base_url: "https://jsonplaceholder.typicode.com".to_string(),
            upstream_timeout: 30,
            cleanup_interval: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.cache_backend, CacheBackend::Redis);
        assert_eq!(config.redis_url, "redis://localhost:6379");
        assert_eq!(
            config.upstream_base_url,
            "https://jsonplaceholder.typicode.com"
        );
        assert_eq!(config.upstream_timeout, 30);
        assert_eq!(config.cleanup_interval, 1);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("SERVER_PORT");
        env::remove_var("CACHE_BACKEND");
        env::remove_var("REDIS_URL");
        env::remove_var("UPSTREAM_BASE_URL");
        env::remove_var("UPSTREAM_TIMEOUT_SECS");
        env::remove_var("CLEANUP_INTERVAL");

        let config = Config::from_env();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.cache_backend, CacheBackend::Redis);
        assert_eq!(config.upstream_timeout, 30);
    }

    #[test]
    fn test_cache_backend_parse() {
        assert_eq!("redis".parse::<CacheBackend>(), Ok(CacheBackend::Redis));
        assert_eq!(" Memory ".parse::<CacheBackend>(), Ok(CacheBackend::Memory));
        assert!("memcached".parse::<CacheBackend>().is_err());
    }
}
