//! yt-dlp adapter for the tubegrab [`FetchEngine`](tubegrab_core::FetchEngine) port.
//!
//! yt-dlp runs as a child process driven by `tokio::process`, so a long
//! extraction never occupies a runtime worker thread. The child is killed
//! when the invocation future is dropped (for example on timeout).

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod ytdlp;

pub use ytdlp::{YTDLP_INSTALL_HINT, YtDlpConfig, YtDlpEngine};

#[cfg(test)]
use tempfile as _;
