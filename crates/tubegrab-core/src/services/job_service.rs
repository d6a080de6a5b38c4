//! Job orchestration shared by the single-item and playlist flows.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::domain::{
    DeliveredArtifact, DownloadJobRequest, FetchConfiguration, FetchReport, PlaylistListing,
};
use crate::error::{FetchEngineError, JobError};
use crate::ports::FetchEngine;
use crate::services::{build_configuration, build_playlist_configuration, resolve_output};
use crate::workspace::WorkspaceManager;

/// Upper bound on a single engine invocation unless configured otherwise.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(15 * 60);

/// Runs download jobs against a fetch engine.
///
/// Each job gets its own workspace; no state is shared between jobs.
pub struct JobService {
    engine: Arc<dyn FetchEngine>,
    workspaces: WorkspaceManager,
    fetch_timeout: Option<Duration>,
}

impl JobService {
    /// Create a service with the default fetch timeout.
    pub fn new(engine: Arc<dyn FetchEngine>, workspaces: WorkspaceManager) -> Self {
        Self {
            engine,
            workspaces,
            fetch_timeout: Some(DEFAULT_FETCH_TIMEOUT),
        }
    }

    /// Bound each engine invocation. `None` waits indefinitely.
    #[must_use]
    pub const fn with_fetch_timeout(mut self, fetch_timeout: Option<Duration>) -> Self {
        self.fetch_timeout = fetch_timeout;
        self
    }

    pub const fn workspaces(&self) -> &WorkspaceManager {
        &self.workspaces
    }

    pub const fn fetch_timeout(&self) -> Option<Duration> {
        self.fetch_timeout
    }

    /// Download a single item and hand back the resolved file.
    ///
    /// The returned artifact owns its workspace; on every error path the
    /// workspace is released before returning.
    pub async fn download(&self, request: DownloadJobRequest) -> Result<DeliveredArtifact, JobError> {
        let workspace = self.workspaces.acquire()?;
        let config = build_configuration(&request, workspace.path());

        info!(
            target: "tubegrab.job",
            url = %request.url,
            media_kind = %request.media_kind,
            quality = %request.quality_hint,
            workspace = %workspace.path().display(),
            "Starting download"
        );

        let report = self.invoke(&request.url, &config).await?;
        let item = report.primary().ok_or_else(|| {
            FetchEngineError::Protocol("engine did not report an output filename".to_string())
        })?;

        let path = resolve_output(item, request.media_kind).require_exists()?;
        info!(target: "tubegrab.job", path = %path.display(), "Download ready");

        Ok(DeliveredArtifact::new(path, request.media_kind, workspace))
    }

    /// Download every entry of a playlist and list the files produced.
    ///
    /// Nothing is listed unless the engine succeeds for the whole playlist.
    pub async fn download_playlist(&self, url: &str) -> Result<PlaylistListing, JobError> {
        let workspace = self.workspaces.acquire()?;
        let config = build_playlist_configuration(workspace.path());

        info!(
            target: "tubegrab.job",
            url,
            workspace = %workspace.path().display(),
            "Starting playlist download"
        );

        let report = self.invoke(url, &config).await?;
        let files = workspace.list_files().await?;
        info!(
            target: "tubegrab.job",
            reported = report.len(),
            files = files.len(),
            "Playlist download finished"
        );

        if let Err(e) = workspace.release() {
            warn!(target: "tubegrab.workspace", "{}", e);
        }

        Ok(PlaylistListing::new(files))
    }

    async fn invoke(&self, url: &str, config: &FetchConfiguration) -> Result<FetchReport, JobError> {
        let started = Instant::now();
        let fetch = self.engine.fetch(url, config);

        let result = match self.fetch_timeout {
            Some(limit) => tokio::time::timeout(limit, fetch)
                .await
                .map_err(|_| JobError::FetchTimeout {
                    seconds: limit.as_secs(),
                })?,
            None => fetch.await,
        };

        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        match result {
            Ok(report) => {
                info!(target: "tubegrab.engine", elapsed_ms, items = report.len(), "Fetch completed");
                Ok(report)
            }
            Err(e) => {
                warn!(target: "tubegrab.engine", elapsed_ms, error = %e, "Fetch failed");
                Err(e.into())
            }
        }
    }
}
