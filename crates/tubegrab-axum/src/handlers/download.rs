//! Single-item download handler.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::Response;
use serde_json::Value;
use tracing::warn;
use tubegrab_core::validate_download;

use super::attachment::attachment_response;
use crate::error::HttpError;
use crate::state::AppState;

/// `POST /api/download`: fetch one item and return it as an attachment.
///
/// Body: `{ "url": string, "format"?: "video" | "audio", "quality"?: string }`.
pub async fn download(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Response, HttpError> {
    let Json(body) = body?;
    let request = validate_download(&body)?;
    let url = request.url.clone();

    let artifact = state.jobs.download(request).await.inspect_err(|e| {
        warn!(target: "tubegrab.http", %url, error = %e, "Download failed");
    })?;

    attachment_response(artifact).await
}
