//! Cache Module
//!
//! Cache-aside resolution over a key-value store with expiring entries.

mod entry;
mod keys;
mod memory;
mod redis_store;
mod resolver;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use keys::{album_key, photo_key, ALBUM_PREFIX, MISSING_ALBUM};
pub use memory::{EntryTable, MemoryStore};
pub use redis_store::RedisStore;
pub use resolver::{CacheResolver, CACHE_TTL_SECS};
pub use store::KeyValueStore;
