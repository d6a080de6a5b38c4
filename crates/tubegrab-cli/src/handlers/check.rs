//! Check command handler.

use std::path::PathBuf;

use anyhow::{Result, bail};
use tubegrab_core::FetchEngineError;
use tubegrab_engine::{YTDLP_INSTALL_HINT, YtDlpConfig, YtDlpEngine};

/// Run yt-dlp and report its version, failing when it cannot be run.
pub async fn execute(ytdlp: Option<PathBuf>) -> Result<()> {
    let config = ytdlp.map_or_else(YtDlpConfig::discover, YtDlpConfig::new);
    let program = config.program.clone();

    match YtDlpEngine::new(config).version().await {
        Ok(version) => {
            println!("yt-dlp {version} ({})", program.display());
            Ok(())
        }
        Err(FetchEngineError::NotInstalled(_)) => {
            bail!("{YTDLP_INSTALL_HINT}")
        }
        Err(e) => bail!("yt-dlp at {} is not usable: {e}", program.display()),
    }
}
