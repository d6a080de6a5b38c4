//! Request validation.
//!
//! Only the presence of `url` is enforced. `format` is never rejected:
//! anything other than the string `"video"` (including `null` and
//! non-string values) means audio, and an absent key means video.
//! `quality` is carried through untouched.

use serde_json::Value;
use tracing::debug;

use crate::domain::{DEFAULT_QUALITY_HINT, DownloadJobRequest, MediaKind};
use crate::error::JobError;

/// Error text for a request without a usable URL.
pub const MISSING_URL_MESSAGE: &str = "Missing YouTube URL";

/// Validate the JSON body of a single-item download request.
///
/// Non-object bodies carry no fields at all and are treated as empty.
pub fn validate_download(body: &Value) -> Result<DownloadJobRequest, JobError> {
    let url = require_url(body)?;
    let format = body.get("format");
    let media_kind = media_kind_field(format);

    if let Some(format) = format {
        if format.as_str() != Some(media_kind.as_str()) {
            debug!(
                target: "tubegrab.job",
                %format,
                media_kind = %media_kind,
                "Unrecognised format treated as audio"
            );
        }
    }

    Ok(DownloadJobRequest {
        url,
        media_kind,
        quality_hint: quality_field(body.get("quality")),
    })
}

/// Validate the JSON body of a playlist request, returning its URL.
pub fn validate_playlist(body: &Value) -> Result<String, JobError> {
    require_url(body)
}

fn media_kind_field(format: Option<&Value>) -> MediaKind {
    match format {
        None => MediaKind::default(),
        Some(Value::String(format)) => MediaKind::from_format_field(format),
        Some(_) => MediaKind::Audio,
    }
}

fn quality_field(quality: Option<&Value>) -> String {
    match quality {
        None | Some(Value::Null) => DEFAULT_QUALITY_HINT.to_string(),
        Some(Value::String(quality)) => quality.clone(),
        Some(other) => other.to_string(),
    }
}

/// Only an absent, `null` or empty `url` is missing; anything else non-empty
/// is left for the engine to judge.
fn require_url(body: &Value) -> Result<String, JobError> {
    match body.get("url") {
        Some(Value::String(url)) if !url.is_empty() => Ok(url.clone()),
        None | Some(Value::Null) | Some(Value::String(_)) => {
            Err(JobError::Validation(MISSING_URL_MESSAGE.to_string()))
        }
        Some(other) => Err(JobError::Validation(format!(
            "Invalid request body: url must be a string, got {other}"
        ))),
    }
}
