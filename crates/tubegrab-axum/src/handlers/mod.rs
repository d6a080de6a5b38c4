//! HTTP request handlers.
//!
//! Handlers are thin: they validate the body, run the job through
//! [`tubegrab_core::JobService`], and shape the response.

pub mod attachment;
pub mod download;
pub mod playlist;

use axum::extract::OriginalUri;

use crate::error::HttpError;

/// Fallback for unknown `/api` paths.
pub async fn not_found(OriginalUri(uri): OriginalUri) -> HttpError {
    HttpError::NotFound(format!("No route for {}", uri.path()))
}
