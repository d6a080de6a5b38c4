//! Playlist download handler.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde_json::Value;
use tracing::warn;
use tubegrab_core::{PlaylistListing, validate_playlist};

use crate::error::HttpError;
use crate::state::AppState;

/// `POST /api/playlist`: download every entry of a playlist and list the
/// produced file names.
pub async fn playlist(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<PlaylistListing>, HttpError> {
    let Json(body) = body?;
    let url = validate_playlist(&body)?;

    let listing = state.jobs.download_playlist(&url).await.inspect_err(|e| {
        warn!(target: "tubegrab.http", %url, error = %e, "Playlist download failed");
    })?;

    Ok(Json(listing))
}
