//! Request handlers.
//!
//! - `board`: htmx page and fragments (session required, except `/`)
//! - `asset`: stylesheets and favicons
//! - `api`: JSON endpoints

pub mod api;
pub mod asset;
pub mod board;

use axum::{
    http::{Method, StatusCode, Uri},
    response::IntoResponse,
};

/// Fallback for routes that do not exist
pub async fn fallback(method: Method, uri: Uri) -> impl IntoResponse {
    tracing::warn!("Unexpected request: {} {}", method, uri);
    StatusCode::NOT_FOUND
}
