//! Job configuration builder.

use std::path::Path;

use crate::domain::{DownloadJobRequest, FetchConfiguration, MediaKind, OUTPUT_TEMPLATE};

/// Build the engine configuration for a single-item job.
///
/// The request's quality hint is not consulted.
pub fn build_configuration(request: &DownloadJobRequest, workspace: &Path) -> FetchConfiguration {
    FetchConfiguration {
        output_template: workspace.join(OUTPUT_TEMPLATE),
        format_selector: request.media_kind.format_selector().to_string(),
        merge_output_format: request.media_kind.merge_output_format().to_string(),
        quiet: true,
        allow_playlist: false,
    }
}

/// Build the engine configuration for a playlist job: best video plus
/// audio for every entry.
pub fn build_playlist_configuration(workspace: &Path) -> FetchConfiguration {
    let kind = MediaKind::Video;
    FetchConfiguration {
        output_template: workspace.join(OUTPUT_TEMPLATE),
        format_selector: kind.format_selector().to_string(),
        merge_output_format: kind.merge_output_format().to_string(),
        quiet: true,
        allow_playlist: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn workspace() -> PathBuf {
        PathBuf::from("/tmp/tubegrab-abc123")
    }

    #[test]
    fn video_job_merges_into_mp4() {
        let request = DownloadJobRequest::new("https://example.com/v");
        let config = build_configuration(&request, &workspace());

        assert_eq!(config.format_selector, "bestvideo+bestaudio/best");
        assert_eq!(config.merge_output_format, "mp4");
        assert!(config.quiet);
        assert!(!config.allow_playlist);
    }

    #[test]
    fn audio_job_selects_audio_only_mp3() {
        let request =
            DownloadJobRequest::new("https://example.com/v").with_media_kind(MediaKind::Audio);
        let config = build_configuration(&request, &workspace());

        assert_eq!(config.format_selector, "bestaudio/best");
        assert_eq!(config.merge_output_format, "mp3");
    }

    #[test]
    fn output_template_keeps_placeholders_verbatim() {
        let request = DownloadJobRequest::new("https://example.com/v");
        let config = build_configuration(&request, &workspace());

        assert_eq!(config.output_template, workspace().join("%(title)s.%(ext)s"));
        assert_eq!(config.output_dir(), Some(workspace().as_path()));
    }

    #[test]
    fn quality_hint_does_not_change_configuration() {
        let best = DownloadJobRequest::new("https://example.com/v");
        let low = best.clone().with_quality_hint("360p");

        assert_eq!(
            build_configuration(&best, &workspace()),
            build_configuration(&low, &workspace())
        );
    }

    #[test]
    fn playlist_job_allows_playlist_in_best_video() {
        let config = build_playlist_configuration(&workspace());

        assert!(config.allow_playlist);
        assert_eq!(config.format_selector, "bestvideo+bestaudio/best");
        assert_eq!(config.merge_output_format, "mp4");
        assert_eq!(config.output_template, workspace().join(OUTPUT_TEMPLATE));
    }
}
