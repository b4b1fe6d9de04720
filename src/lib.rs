//! Photo Gateway - A caching HTTP gateway for a remote photo catalog
//!
//! Proxies the catalog's photo endpoints through a cache-aside layer backed
//! by Redis or an in-process store, with a one-hour TTL.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;
pub mod upstream;

pub use api::AppState;
pub use config::Config;
pub use error::{GatewayError, Result};
pub use tasks::spawn_cleanup_task;
pub use upstream::PhotoClient;
