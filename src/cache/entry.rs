//! Cache Entry Module
//!
//! Defines a single expiring entry held by the in-process store.

use std::time::{SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// A serialized JSON value together with its write and expiry times.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored JSON text
    pub value: String,
    /// Write timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry that expires `ttl_seconds` after now.
    pub fn new(value: String, ttl_seconds: u64) -> Self {
        let now = current_timestamp_ms();

        Self {
            value,
            created_at: now,
            expires_at: now.saturating_add(ttl_seconds.saturating_mul(1000)),
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is expired once the current time reaches `expires_at`, so a
    /// zero TTL produces an entry that is never readable.
    pub fn is_expired(&self) -> bool {
        current_timestamp_ms() >= self.expires_at
    }

    // == Time To Live ==
    /// Returns remaining TTL in milliseconds, `0` once expired.
    pub fn ttl_remaining_ms(&self) -> u64 {
        self.expires_at.saturating_sub(current_timestamp_ms())
    }

    /// Returns remaining TTL in whole seconds, rounded up.
    pub fn ttl_remaining(&self) -> u64 {
        self.ttl_remaining_ms().div_ceil(1000)
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new(r#"{"id":1}"#.to_string(), 60);

        assert_eq!(entry.value, r#"{"id":1}"#);
        assert_eq!(entry.expires_at - entry.created_at, 60_000);
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_entry_expiration() {
        let entry = CacheEntry::new("[]".to_string(), 1);

        assert!(!entry.is_expired());

        sleep(Duration::from_millis(1100));

        assert!(entry.is_expired());
    }

    #[test]
    fn test_ttl_remaining_one_hour() {
        let entry = CacheEntry::new("[]".to_string(), 3600);

        assert_eq!(entry.ttl_remaining(), 3600);
        assert!(entry.ttl_remaining_ms() <= 3_600_000);
        assert!(entry.ttl_remaining_ms() >= 3_599_000);
    }

    #[test]
    fn test_ttl_remaining_expired() {
        let entry = CacheEntry::new("[]".to_string(), 1);

        sleep(Duration::from_millis(1100));

        assert_eq!(entry.ttl_remaining(), 0);
        assert_eq!(entry.ttl_remaining_ms(), 0);
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let now = current_timestamp_ms();
        let entry = CacheEntry {
            value: "null".to_string(),
            created_at: now,
            expires_at: now,
        };

        assert!(entry.is_expired(), "Entry should be expired at boundary");
    }
}
