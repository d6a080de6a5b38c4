//! Axum server bootstrap - the composition root.
//!
//! This is the only place where the concrete fetch engine is chosen and
//! wired into the job service.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tubegrab_core::{DEFAULT_FETCH_TIMEOUT, FetchEngine, JobService, WorkspaceManager};
use tubegrab_engine::{YTDLP_INSTALL_HINT, YtDlpConfig, YtDlpEngine};

/// Default bind address.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listening port.
pub const DEFAULT_PORT: u16 = 5000;

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CorsConfig {
    /// Allow every origin.
    #[default]
    AllowAll,
    /// Allow only the listed origins.
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port for the HTTP server.
    pub port: u16,
    /// CORS configuration.
    pub cors: CorsConfig,
    /// Optional directory holding a landing page served for non-API paths.
    pub static_dir: Option<PathBuf>,
    /// Parent directory for per-job workspaces (system temp dir if unset).
    pub workspace_root: Option<PathBuf>,
    /// Bound on each engine invocation; `None` waits indefinitely.
    pub fetch_timeout: Option<Duration>,
    /// How to launch yt-dlp.
    pub engine: YtDlpConfig,
}

impl ServerConfig {
    /// Create config with default values and a yt-dlp found on `PATH`.
    pub fn with_defaults() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cors: CorsConfig::default(),
            static_dir: None,
            workspace_root: None,
            fetch_timeout: Some(DEFAULT_FETCH_TIMEOUT),
            engine: YtDlpConfig::discover(),
        }
    }

    /// Set the static directory for the landing page.
    #[must_use]
    pub fn with_static_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(path.into());
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }

    #[must_use]
    pub fn with_workspace_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.workspace_root = Some(path.into());
        self
    }

    /// Set the fetch timeout. A zero duration disables it.
    #[must_use]
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = (!timeout.is_zero()).then_some(timeout);
        self
    }

    #[must_use]
    pub fn with_engine(mut self, engine: YtDlpConfig) -> Self {
        self.engine = engine;
        self
    }

    /// `host:port` as shown in logs and errors.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Application context for the Axum adapter.
pub struct AppContext {
    /// Runs download and playlist jobs.
    pub jobs: Arc<JobService>,
}

/// Bootstrap the server with the yt-dlp engine.
///
/// A missing engine is logged but does not prevent startup: every job
/// will fail with the engine's own error until it is installed.
pub async fn bootstrap(config: &ServerConfig) -> Result<AppContext> {
    let engine = YtDlpEngine::new(config.engine.clone());

    match engine.version().await {
        Ok(version) => info!(
            target: "tubegrab.engine",
            program = %config.engine.program.display(),
            %version,
            "Using yt-dlp"
        ),
        Err(e) => warn!(
            target: "tubegrab.engine",
            error = %e,
            hint = YTDLP_INSTALL_HINT,
            "yt-dlp is not usable; downloads will fail"
        ),
    }

    bootstrap_with_engine(config, Arc::new(engine))
}

/// Bootstrap the server around an arbitrary fetch engine.
pub fn bootstrap_with_engine(
    config: &ServerConfig,
    engine: Arc<dyn FetchEngine>,
) -> Result<AppContext> {
    let workspaces = match &config.workspace_root {
        Some(root) => {
            std::fs::create_dir_all(root).with_context(|| {
                format!("Failed to create workspace root {}", root.display())
            })?;
            WorkspaceManager::new(root)
        }
        None => WorkspaceManager::system_temp(),
    };

    info!(
        target: "tubegrab.workspace",
        root = %workspaces.root().display(),
        fetch_timeout_secs = config.fetch_timeout.map(|t| t.as_secs()),
        "Job service ready"
    );

    let jobs = JobService::new(engine, workspaces).with_fetch_timeout(config.fetch_timeout);
    Ok(AppContext {
        jobs: Arc::new(jobs),
    })
}

/// Build the router for a context, serving the landing page when
/// `config.static_dir` is set.
pub fn build_app(ctx: AppContext, config: &ServerConfig) -> Router {
    if let Some(ref static_dir) = config.static_dir {
        info!("Serving static assets from: {}", static_dir.display());
        crate::routes::create_spa_router(ctx, static_dir, &config.cors)
    } else {
        crate::routes::create_router(ctx, &config.cors)
    }
}

/// Start the web server and run until Ctrl+C.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    let ctx = bootstrap(&config).await?;
    let app = build_app(ctx, &config);

    let listener = TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr()))?;
    info!("tubegrab listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("tubegrab shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
