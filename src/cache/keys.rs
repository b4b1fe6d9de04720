//! Cache key derivation for the photo routes.
//!
//! Keys share one namespace: an item id of `album_5` addresses the same
//! entry as the collection for album `5`.

/// Placeholder used when the collection route has no `albumId`.
pub const MISSING_ALBUM: &str = "undefined";

/// Prefix of every collection key.
pub const ALBUM_PREFIX: &str = "album_";

/// Key for the photo collection, filtered by album.
pub fn album_key(album_id: Option<&str>) -> String {
    format!("{}{}", ALBUM_PREFIX, album_id.unwrap_or(MISSING_ALBUM))
}

/// Key for a single photo: the id, unprefixed.
pub fn photo_key(id: &str) -> String {
    id.to_string()
}
