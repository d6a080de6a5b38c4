//! Engine results and the artifacts derived from them.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::MediaKind;
use crate::error::JobError;
use crate::workspace::Workspace;

/// Message returned alongside a successful playlist listing.
pub const PLAYLIST_SUCCESS_MESSAGE: &str = "Playlist downloaded successfully";

/// One item processed by the fetch engine.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchResult {
    /// Filename prepared from the output template, carrying the source
    /// (pre-merge) extension, e.g. `Song Title.webm`.
    pub reported_filename: PathBuf,
    /// Opaque engine metadata for the item (`Null` when none was reported).
    pub metadata: serde_json::Value,
}

impl FetchResult {
    pub fn new(reported_filename: impl Into<PathBuf>, metadata: serde_json::Value) -> Self {
        Self {
            reported_filename: reported_filename.into(),
            metadata,
        }
    }
}

/// Everything the engine reported for one invocation, in processing order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchReport {
    pub items: Vec<FetchResult>,
}

impl FetchReport {
    /// Report for a single processed item.
    pub fn single(reported_filename: impl Into<PathBuf>, metadata: serde_json::Value) -> Self {
        Self {
            items: vec![FetchResult::new(reported_filename, metadata)],
        }
    }

    /// The first processed item, which is the only one for single-item jobs.
    pub fn primary(&self) -> Option<&FetchResult> {
        self.items.first()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Final local path expected to hold the downloaded media.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedArtifact {
    pub path: PathBuf,
    /// Whether a regular file was present at `path` when resolved.
    pub exists: bool,
}

impl ResolvedArtifact {
    /// Return the path, or a descriptive error naming it when nothing was
    /// produced there.
    pub fn require_exists(self) -> Result<PathBuf, JobError> {
        if self.exists {
            Ok(self.path)
        } else {
            Err(JobError::ArtifactNotFound { path: self.path })
        }
    }
}

/// A resolved artifact together with the workspace that holds it.
///
/// The workspace is released when this value (or whatever it was moved
/// into, such as a response body stream) is dropped.
#[derive(Debug)]
pub struct DeliveredArtifact {
    path: PathBuf,
    media_kind: MediaKind,
    workspace: Workspace,
}

impl DeliveredArtifact {
    pub(crate) const fn new(path: PathBuf, media_kind: MediaKind, workspace: Workspace) -> Self {
        Self {
            path,
            media_kind,
            workspace,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub const fn media_kind(&self) -> MediaKind {
        self.media_kind
    }

    /// Base name used for the attachment.
    pub fn file_name(&self) -> String {
        self.path.file_name().map_or_else(
            || format!("download.{}", self.media_kind.extension()),
            |name| name.to_string_lossy().into_owned(),
        )
    }

    pub const fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Split into the path, media kind and owning workspace.
    pub fn into_parts(self) -> (PathBuf, MediaKind, Workspace) {
        (self.path, self.media_kind, self.workspace)
    }
}

/// Success payload of a playlist job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistListing {
    pub message: String,
    /// Names of every file found in the workspace, in directory order.
    pub files: Vec<String>,
}

impl PlaylistListing {
    pub fn new(files: Vec<String>) -> Self {
        Self {
            message: PLAYLIST_SUCCESS_MESSAGE.to_string(),
            files,
        }
    }
}
