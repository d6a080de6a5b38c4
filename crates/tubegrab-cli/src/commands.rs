//! Subcommand definitions.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use tubegrab_axum::{DEFAULT_HOST, DEFAULT_PORT};
use tubegrab_core::DEFAULT_FETCH_TIMEOUT;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start the HTTP server (default)
    Serve(ServeArgs),

    /// Check that yt-dlp can be run and print its version
    Check {
        /// yt-dlp executable to check instead of the one on PATH
        #[arg(long, env = "TUBEGRAB_YTDLP")]
        ytdlp: Option<PathBuf>,
    },
}

/// Options of the HTTP server.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ServeArgs {
    /// Interface to bind
    #[arg(long, env = "TUBEGRAB_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "TUBEGRAB_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Comma-separated origins allowed by CORS (all origins when empty)
    #[arg(long, env = "TUBEGRAB_ALLOWED_ORIGINS", value_delimiter = ',')]
    pub allowed_origins: Vec<String>,

    /// Directory with a landing page (index.html) to serve
    #[arg(long, env = "TUBEGRAB_STATIC_DIR")]
    pub static_dir: Option<PathBuf>,

    /// Directory under which per-job workspaces are created
    #[arg(long, env = "TUBEGRAB_WORKSPACE_ROOT")]
    pub workspace_root: Option<PathBuf>,

    /// Seconds a single yt-dlp run may take (0 disables the limit)
    #[arg(long, env = "TUBEGRAB_FETCH_TIMEOUT_SECS", default_value_t = DEFAULT_FETCH_TIMEOUT.as_secs())]
    pub fetch_timeout_secs: u64,

    /// yt-dlp executable (defaults to the one on PATH)
    #[arg(long, env = "TUBEGRAB_YTDLP")]
    pub ytdlp: Option<PathBuf>,
}
