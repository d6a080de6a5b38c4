//! Fetch engine configuration.

use std::path::PathBuf;

/// Output filename pattern interpreted by the fetch engine only.
///
/// Expands to the source title as base name and the engine's chosen
/// extension. It is never expanded on this side.
pub const OUTPUT_TEMPLATE: &str = "%(title)s.%(ext)s";

/// Configuration handed to the fetch engine for one job.
///
/// Always derived from a job request by the configuration builder; the
/// format selector and merge format agree with the requested media kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfiguration {
    /// Workspace path joined with [`OUTPUT_TEMPLATE`].
    pub output_template: PathBuf,
    /// Stream selection expression.
    pub format_selector: String,
    /// Container the selected streams are merged or re-encoded into.
    pub merge_output_format: String,
    /// Suppress engine chatter.
    pub quiet: bool,
    /// Process every entry of a playlist URL instead of a single item.
    pub allow_playlist: bool,
}

impl FetchConfiguration {
    /// Directory the engine writes into.
    pub fn output_dir(&self) -> Option<&std::path::Path> {
        self.output_template.parent()
    }
}
