//! yt-dlp process driver.

mod args;
mod config;
mod engine;
mod group;
mod output;

pub use config::{YTDLP_INSTALL_HINT, YtDlpConfig};
pub use engine::YtDlpEngine;
