//! Request DTOs for the gateway API
//!
//! Defines the structure of incoming query strings.

use serde::Deserialize;

/// Query string for the collection route (GET /photos)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PhotosQuery {
    /// Album filter, forwarded to the upstream catalog
    #[serde(rename = "albumId")]
    pub album_id: Option<String>,
}

impl PhotosQuery {
    /// Builds the query from raw key/value pairs.
    ///
    /// A repeated `albumId` is joined with commas, so `albumId=1&albumId=2`
    /// becomes `1,2`. Other parameters are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let album_ids: Vec<String> = pairs
            .into_iter()
            .filter(|(name, _)| name == "albumId")
            .map(|(_, value)| value)
            .collect();

        Self {
            album_id: (!album_ids.is_empty()).then(|| album_ids.join(",")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_photos_query_with_album() {
        let query: PhotosQuery = serde_json::from_str(r#"{"albumId": "3"}"#).unwrap();
        assert_eq!(query.album_id.as_deref(), Some("3"));
    }

    #[test]
    fn test_photos_query_without_album() {
        let query: PhotosQuery = serde_json::from_str("{}").unwrap();
        assert!(query.album_id.is_none());
    }

    #[test]
    fn test_from_pairs_single_album() {
        let query = PhotosQuery::from_pairs(pairs(&[("albumId", "3"), ("page", "2")]));
        assert_eq!(query.album_id.as_deref(), Some("3"));
    }

    #[test]
    fn test_from_pairs_repeated_album_is_joined() {
        let query = PhotosQuery::from_pairs(pairs(&[("albumId", "1"), ("albumId", "2")]));
        assert_eq!(query.album_id.as_deref(), Some("1,2"));
    }

    #[test]
    fn test_from_pairs_without_album() {
        let query = PhotosQuery::from_pairs(pairs(&[("page", "2")]));
        assert!(query.album_id.is_none());
    }
}
