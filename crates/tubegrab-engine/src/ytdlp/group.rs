//! Termination of a yt-dlp run together with its helpers.
//!
//! yt-dlp hands merging and audio extraction to ffmpeg child processes.
//! The run is started in its own process group so that abandoning it
//! (timeout, dropped request) kills ffmpeg too, before the workspace it
//! writes into is removed.

use tracing::{debug, warn};

/// Kills the process group led by a spawned child when dropped, unless
/// disarmed after the child exited.
#[derive(Debug)]
pub struct ProcessGroupGuard {
    pgid: Option<u32>,
}

impl ProcessGroupGuard {
    /// Guard the group led by `pid` (the child's own id when spawned with
    /// `process_group(0)`).
    pub const fn new(pid: Option<u32>) -> Self {
        Self { pgid: pid }
    }

    /// The leader was reaped normally; nothing to kill.
    pub const fn disarm(&mut self) {
        self.pgid = None;
    }
}

impl Drop for ProcessGroupGuard {
    fn drop(&mut self) {
        if let Some(pgid) = self.pgid.take() {
            kill_group(pgid);
        }
    }
}

#[cfg(unix)]
fn kill_group(pgid: u32) {
    use nix::errno::Errno;
    use nix::sys::signal::{Signal, killpg};
    use nix::unistd::Pid;

    let Ok(raw) = i32::try_from(pgid) else {
        return;
    };
    match killpg(Pid::from_raw(raw), Signal::SIGKILL) {
        Ok(()) => debug!(target: "tubegrab.engine", pgid, "Killed yt-dlp process group"),
        // Group already gone
        Err(Errno::ESRCH) => {}
        Err(e) => warn!(target: "tubegrab.engine", pgid, error = %e, "Failed to kill yt-dlp process group"),
    }
}

// Only the leader is terminated here, through `kill_on_drop`
#[cfg(not(unix))]
fn kill_group(pgid: u32) {
    debug!(target: "tubegrab.engine", pgid, "Process groups unsupported; leader killed on drop");
}
