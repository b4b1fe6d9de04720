//! Upstream Photo Catalog Client
//!
//! Thin reqwest wrapper over the two catalog endpoints the gateway proxies.

use std::time::Duration;

use reqwest::Url;
use serde_json::Value;
use tracing::debug;

use crate::config::Config;
use crate::error::{GatewayError, Result};

/// HTTP client for the remote photo catalog.
#[derive(Debug, Clone)]
pub struct PhotoClient {
    http: reqwest::Client,
    base_url: Url,
}

impl PhotoClient {
    /// Creates a client for the catalog at `base_url`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| {
            GatewayError::Config(format!("invalid upstream URL '{}': {}", base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(GatewayError::Config(format!(
                "upstream URL '{}' cannot be a base",
                base_url
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Config(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    /// Creates a client from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            &config.upstream_base_url,
            Duration::from_secs(config.upstream_timeout),
        )
    }

    /// `GET /photos`, filtered by `albumId` when one is given.
    pub async fn fetch_photos(&self, album_id: Option<&str>) -> Result<Value> {
        let url = self.endpoint(&["photos"])?;
        let mut request = self.http.get(url);
        if let Some(album_id) = album_id {
            request = request.query(&[("albumId", album_id)]);
        }

        debug!(album_id, "fetching photos from upstream");
        let response = request.send().await?.error_for_status()?;
        Ok(response.json().await?)
    }

    /// `GET /photos/{id}`. A non-success status, such as 404 for an
    /// unknown id, is an error.
    pub async fn fetch_photo(&self, id: &str) -> Result<Value> {
        let url = self.endpoint(&["photos", id])?;

        debug!(id, "fetching photo from upstream");
        let response = self.http.get(url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| GatewayError::Config(format!("bad upstream URL '{}'", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}
