//! Core domain for tubegrab.
//!
//! This crate owns everything between the HTTP surface and the external
//! media fetch engine:
//!
//! - request validation and the job configuration builder
//! - per-job temporary workspaces with guaranteed release
//! - the output resolver that maps the engine's reported filename to the
//!   file that is actually streamed back
//! - the [`JobService`] that runs both the single-item and playlist flows
//!
//! The engine itself is reached only through the [`FetchEngine`] port.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
pub mod workspace;

// Re-export commonly used types for convenience
pub use domain::{
    DEFAULT_QUALITY_HINT, DeliveredArtifact, DownloadJobRequest, FetchConfiguration, FetchReport,
    FetchResult, MediaKind, OUTPUT_TEMPLATE, PLAYLIST_SUCCESS_MESSAGE, PlaylistListing,
    ResolvedArtifact,
};
pub use error::{FetchEngineError, JobError, WorkspaceError};
pub use ports::FetchEngine;
pub use services::{
    DEFAULT_FETCH_TIMEOUT, JobService, MISSING_URL_MESSAGE, build_configuration,
    build_playlist_configuration, resolve_output, resolve_output_path, validate_download,
    validate_playlist,
};
pub use workspace::{WORKSPACE_PREFIX, Workspace, WorkspaceManager};

// mockall backs the generated `MockFetchEngine` used by service tests
#[cfg(test)]
use mockall as _;
