//! Output resolver.
//!
//! The engine reports the filename it prepared from the output template,
//! which still carries the source extension (`.webm`, `.mkv`, `.m4a`). The
//! file that actually ends up on disk was merged or re-encoded into the
//! configured container, so the extension is swapped for the one implied by
//! the media kind.

use std::path::{Path, PathBuf};

use crate::domain::{FetchResult, MediaKind, ResolvedArtifact};

/// Swap the last extension of `reported` for the one implied by
/// `media_kind`. A name without an extension gets one appended.
///
/// String-level only: the filesystem is not consulted.
pub fn resolve_output_path(reported: &Path, media_kind: MediaKind) -> PathBuf {
    let Some(name) = reported.file_name() else {
        return reported.to_path_buf();
    };
    let name = name.to_string_lossy();
    let stem = name.rsplit_once('.').map_or(&*name, |(stem, _)| stem);

    reported.with_file_name(format!("{stem}.{}", media_kind.extension()))
}

/// Resolve the artifact for an engine result and record whether a regular
/// file exists at the resolved path.
pub fn resolve_output(result: &FetchResult, media_kind: MediaKind) -> ResolvedArtifact {
    let path = resolve_output_path(&result.reported_filename, media_kind);
    let exists = path.is_file();
    ResolvedArtifact { path, exists }
}
