//! Request and Response models for the gateway API
//!
//! DTOs for query strings and the gateway's own response bodies. Photo
//! payloads are passed through untouched and have no model here.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::PhotosQuery;
pub use responses::{ErrorResponse, HealthResponse};
