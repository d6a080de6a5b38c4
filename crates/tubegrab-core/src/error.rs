//! Error types for job execution.
//!
//! Adapters map [`JobError`] to their own representation (HTTP status
//! codes, CLI exit codes). Messages are kept raw: the engine's own text
//! reaches the caller unchanged.

use std::path::PathBuf;
use thiserror::Error;

/// Failures raised by a fetch engine implementation.
#[derive(Debug, Error)]
pub enum FetchEngineError {
    /// The engine ran and reported a failure (unsupported URL, network
    /// error, no matching format). Carries the engine's message verbatim.
    #[error("{0}")]
    Failed(String),

    /// The engine executable could not be found.
    #[error("Media fetch engine not installed: {0}")]
    NotInstalled(String),

    /// The engine could not be started or waited on.
    #[error("Failed to run media fetch engine: {0}")]
    Spawn(String),

    /// The engine exited successfully but its output was unusable.
    #[error("Unexpected media fetch engine output: {0}")]
    Protocol(String),
}

/// Failures while managing per-job workspaces.
#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("Failed to create workspace under {root}: {reason}")]
    Create { root: PathBuf, reason: String },

    #[error("Failed to remove workspace {path}: {reason}")]
    Release { path: PathBuf, reason: String },

    #[error("Failed to list workspace {path}: {reason}")]
    List { path: PathBuf, reason: String },
}

/// Canonical error for a download or playlist job.
#[derive(Debug, Error)]
pub enum JobError {
    /// The request was rejected before any work started.
    #[error("{0}")]
    Validation(String),

    /// The fetch engine failed.
    #[error(transparent)]
    FetchEngine(#[from] FetchEngineError),

    /// The fetch engine did not finish within the configured bound.
    #[error("Media fetch timed out after {seconds} seconds")]
    FetchTimeout { seconds: u64 },

    /// The engine reported success but nothing exists at the resolved path.
    #[error("Downloaded file not found at expected path: {}", path.display())]
    ArtifactNotFound { path: PathBuf },

    /// Workspace allocation or listing failed.
    #[error(transparent)]
    Workspace(#[from] WorkspaceError),
}

impl JobError {
    /// True when the caller, not the system, is at fault.
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
