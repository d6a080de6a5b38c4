//! Incoming job request types.

use serde::{Deserialize, Serialize};

/// Quality hint applied when the caller does not send one.
pub const DEFAULT_QUALITY_HINT: &str = "best";

/// The kind of media a single-item job should produce.
///
/// Parsing is lenient: only the exact value `"video"` selects
/// [`MediaKind::Video`]; every other value selects [`MediaKind::Audio`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Best video merged with best audio into an MP4 container.
    #[default]
    Video,
    /// Best audio only, re-encoded to MP3.
    Audio,
}

impl MediaKind {
    /// Interpret the `format` field of a download request.
    pub fn from_format_field(value: &str) -> Self {
        if value == "video" {
            Self::Video
        } else {
            Self::Audio
        }
    }

    /// Format selector handed to the fetch engine.
    pub const fn format_selector(self) -> &'static str {
        match self {
            Self::Video => "bestvideo+bestaudio/best",
            Self::Audio => "bestaudio/best",
        }
    }

    /// Container/codec the engine merges or re-encodes into.
    pub const fn merge_output_format(self) -> &'static str {
        match self {
            Self::Video => "mp4",
            Self::Audio => "mp3",
        }
    }

    /// File extension of the final artifact.
    pub const fn extension(self) -> &'static str {
        self.merge_output_format()
    }

    /// MIME type used when streaming the artifact back.
    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Video => "video/mp4",
            Self::Audio => "audio/mpeg",
        }
    }

    /// Lowercase name, as accepted on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Audio => "audio",
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated single-item download request.
///
/// Created once per HTTP request and discarded when the request completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadJobRequest {
    /// Source URL handed verbatim to the fetch engine.
    pub url: String,
    /// Requested media kind.
    pub media_kind: MediaKind,
    /// Caller's quality hint.
    ///
    /// Accepted and carried for logging only; the configuration builder does
    /// not read it.
    pub quality_hint: String,
}

impl DownloadJobRequest {
    /// Create a request with default media kind and quality hint.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            media_kind: MediaKind::default(),
            quality_hint: DEFAULT_QUALITY_HINT.to_string(),
        }
    }

    /// Set the media kind.
    #[must_use]
    pub const fn with_media_kind(mut self, media_kind: MediaKind) -> Self {
        self.media_kind = media_kind;
        self
    }

    /// Set the quality hint.
    #[must_use]
    pub fn with_quality_hint(mut self, quality_hint: impl Into<String>) -> Self {
        self.quality_hint = quality_hint.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_exact_video_selects_video() {
        assert_eq!(MediaKind::from_format_field("video"), MediaKind::Video);
        assert_eq!(MediaKind::from_format_field("audio"), MediaKind::Audio);
        assert_eq!(MediaKind::from_format_field("Video"), MediaKind::Audio);
        assert_eq!(MediaKind::from_format_field("flac"), MediaKind::Audio);
        assert_eq!(MediaKind::from_format_field(""), MediaKind::Audio);
    }

    #[test]
    fn selector_and_merge_format_agree_with_kind() {
        assert_eq!(MediaKind::Video.format_selector(), "bestvideo+bestaudio/best");
        assert_eq!(MediaKind::Video.merge_output_format(), "mp4");
        assert_eq!(MediaKind::Audio.format_selector(), "bestaudio/best");
        assert_eq!(MediaKind::Audio.merge_output_format(), "mp3");
    }

    #[test]
    fn new_request_uses_defaults() {
        let request = DownloadJobRequest::new("https://example.com/watch?v=1");
        assert_eq!(request.media_kind, MediaKind::Video);
        assert_eq!(request.quality_hint, DEFAULT_QUALITY_HINT);
    }
}
