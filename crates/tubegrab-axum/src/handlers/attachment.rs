//! File attachment responses.

use axum::body::Body;
use axum::http::StatusCode;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_LENGTH, CONTENT_TYPE};
use axum::response::Response;
use futures_util::StreamExt;
use tokio_util::io::ReaderStream;
use tracing::info;
use tubegrab_core::DeliveredArtifact;

use crate::error::HttpError;

/// `Content-Disposition` value for an attachment named `file_name`.
///
/// The quoted `filename` is an ASCII approximation; `filename*` carries
/// the exact UTF-8 name percent-encoded.
pub fn content_disposition(file_name: &str) -> String {
    let fallback: String = file_name
        .chars()
        .map(|c| {
            if c.is_ascii() && !c.is_ascii_control() && c != '"' && c != '\\' {
                c
            } else {
                '_'
            }
        })
        .collect();

    format!(
        "attachment; filename=\"{fallback}\"; filename*=UTF-8''{}",
        urlencoding::encode(file_name)
    )
}

/// Stream a delivered artifact back as an attachment.
///
/// The artifact's workspace travels with the body stream and is released
/// once the body has been sent or dropped.
pub async fn attachment_response(artifact: DeliveredArtifact) -> Result<Response, HttpError> {
    let file_name = artifact.file_name();
    let (path, media_kind, workspace) = artifact.into_parts();

    let file = tokio::fs::File::open(&path).await.map_err(|e| {
        HttpError::Internal(format!("Failed to open {}: {e}", path.display()))
    })?;
    let len = file.metadata().await.ok().map(|m| m.len());

    info!(
        target: "tubegrab.http",
        path = %path.display(),
        media_kind = %media_kind,
        bytes = len,
        "Streaming attachment"
    );

    let stream = ReaderStream::new(file).map(move |chunk| {
        let _workspace = &workspace;
        chunk
    });

    let mut builder = Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, media_kind.content_type())
        .header(CONTENT_DISPOSITION, content_disposition(&file_name));
    if let Some(len) = len {
        builder = builder.header(CONTENT_LENGTH, len);
    }

    builder
        .body(Body::from_stream(stream))
        .map_err(|e| HttpError::Internal(format!("Failed to build response: {e}")))
}
