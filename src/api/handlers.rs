//! API Handlers
//!
//! HTTP request handlers for each gateway endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::Value;
use tracing::error;

use crate::cache::{album_key, photo_key, CacheResolver, KeyValueStore};
use crate::error::Result;
use crate::models::{HealthResponse, PhotosQuery};
use crate::upstream::PhotoClient;

/// Application state shared across all handlers.
///
/// Holds the cache resolver (and through it the store handle created at
/// startup) plus the upstream client.
#[derive(Clone)]
pub struct AppState {
    /// Cache-aside resolver over the shared store
    pub resolver: CacheResolver,
    /// Upstream photo catalog client
    pub upstream: PhotoClient,
}

impl AppState {
    /// Creates a new AppState over the given store and upstream client.
    pub fn new(store: Arc<dyn KeyValueStore>, upstream: PhotoClient) -> Self {
        Self {
            resolver: CacheResolver::new(store),
            upstream,
        }
    }
}

/// Handler for GET /photos
///
/// Serves the photo collection for `albumId`, cached under `album_<albumId>`.
/// Repeated `albumId` values are joined with commas.
pub async fn photos_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Value>> {
    let query = PhotosQuery::from_pairs(pairs);
    let album_id = query.album_id.as_deref();
    let upstream = &state.upstream;

    let photos = state
        .resolver
        .resolve(&album_key(album_id), || upstream.fetch_photos(album_id))
        .await
        .inspect_err(|e| error!("Error fetching photos: {}", e))?;

    Ok(Json(photos))
}

/// Handler for GET /photos/:id
///
/// Serves a single photo, cached under its bare id.
pub async fn photo_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    let upstream = &state.upstream;

    let photo = state
        .resolver
        .resolve(&photo_key(&id), || upstream.fetch_photo(&id))
        .await
        .inspect_err(|e| error!("Error fetching photo: {}", e))?;

    Ok(Json(photo))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use serde_json::json;

    use crate::cache::{MemoryStore, CACHE_TTL_SECS};

    // Requests to this upstream are refused, so only cache hits succeed.
    fn offline_state(store: &MemoryStore) -> AppState {
        let upstream = PhotoClient::new("http://127.0.0.1:1", Duration::from_secs(1)).unwrap();
        AppState::new(Arc::new(store.clone()), upstream)
    }

    #[tokio::test]
    async fn test_photos_handler_cache_hit() {
        let store = MemoryStore::new();
        store
            .set_with_expiry("album_1", r#"[{"id":1}]"#.to_string(), CACHE_TTL_SECS)
            .await
            .unwrap();

        let query = vec![("albumId".to_string(), "1".to_string())];
        let response = photos_handler(State(offline_state(&store)), Query(query))
            .await
            .unwrap();

        assert_eq!(response.0, json!([{"id": 1}]));
    }

    #[tokio::test]
    async fn test_photos_handler_without_album_uses_undefined_key() {
        let store = MemoryStore::new();
        store
            .set_with_expiry("album_undefined", "[]".to_string(), CACHE_TTL_SECS)
            .await
            .unwrap();

        let response = photos_handler(State(offline_state(&store)), Query(Vec::new()))
            .await
            .unwrap();

        assert_eq!(response.0, json!([]));
    }

    #[tokio::test]
    async fn test_photo_handler_cache_hit() {
        let store = MemoryStore::new();
        store
            .set_with_expiry("7", r#"{"id":7}"#.to_string(), CACHE_TTL_SECS)
            .await
            .unwrap();

        let response = photo_handler(State(offline_state(&store)), Path("7".to_string()))
            .await
            .unwrap();

        assert_eq!(response.0, json!({"id": 7}));
    }

    #[tokio::test]
    async fn test_photo_handler_upstream_failure() {
        let store = MemoryStore::new();

        let result = photo_handler(State(offline_state(&store)), Path("7".to_string())).await;

        assert!(result.is_err());
        assert!(store.get("7").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
