//! Serve command handler.

use std::time::Duration;

use anyhow::Result;
use tracing::info;
use tubegrab_axum::{CorsConfig, ServerConfig, start_server};
use tubegrab_engine::YtDlpConfig;

use crate::commands::ServeArgs;

/// Translate parsed flags into the server configuration.
pub fn server_config(args: ServeArgs) -> ServerConfig {
    let engine = args
        .ytdlp
        .map_or_else(YtDlpConfig::discover, YtDlpConfig::new);

    let mut config = ServerConfig::with_defaults()
        .with_engine(engine)
        .with_fetch_timeout(Duration::from_secs(args.fetch_timeout_secs));
    config.host = args.host;
    config.port = args.port;
    config.cors = if args.allowed_origins.is_empty() {
        CorsConfig::AllowAll
    } else {
        CorsConfig::AllowOrigins(args.allowed_origins)
    };
    config.static_dir = args.static_dir;
    config.workspace_root = args.workspace_root;
    config
}

/// Execute the serve command.
pub async fn execute(args: ServeArgs) -> Result<()> {
    let config = server_config(args);
    info!(
        listen = %config.listen_addr(),
        ytdlp = %config.engine.program.display(),
        cors = ?config.cors,
        "Starting tubegrab"
    );
    start_server(config).await
}
