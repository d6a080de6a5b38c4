//! Locating and configuring the yt-dlp executable.

use std::ffi::OsString;
use std::path::PathBuf;

/// Executable name looked up on `PATH`.
pub const YTDLP_PROGRAM: &str = "yt-dlp";

/// Shown when the executable cannot be found.
pub const YTDLP_INSTALL_HINT: &str =
    "yt-dlp not found on PATH. Install it with `pip install yt-dlp` or set TUBEGRAB_YTDLP.";

/// How to launch yt-dlp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YtDlpConfig {
    /// Executable to run.
    pub program: PathBuf,
    /// Arguments placed before the generated ones, e.g. a wrapper script
    /// or `--cookies <file>`.
    pub extra_args: Vec<OsString>,
}

impl YtDlpConfig {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            extra_args: Vec::new(),
        }
    }

    /// Resolve `yt-dlp` on `PATH`, falling back to the bare name so the
    /// spawn error surfaces on first use.
    pub fn discover() -> Self {
        let program = which::which(YTDLP_PROGRAM).unwrap_or_else(|_| PathBuf::from(YTDLP_PROGRAM));
        Self::new(program)
    }

    #[must_use]
    pub fn with_extra_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.extra_args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl Default for YtDlpConfig {
    fn default() -> Self {
        Self::discover()
    }
}
