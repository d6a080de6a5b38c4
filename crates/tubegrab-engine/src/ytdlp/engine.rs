//! [`FetchEngine`] implementation backed by the yt-dlp executable.

use std::io::ErrorKind;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, BufReader};
use tokio::process::Command;
use tracing::{debug, info};
use tubegrab_core::{FetchConfiguration, FetchEngine, FetchEngineError, FetchReport};

use super::args::build_args;
use super::config::{YTDLP_INSTALL_HINT, YtDlpConfig};
use super::group::ProcessGroupGuard;
use super::output::{extract_error, parse_report};

/// Drives one yt-dlp child process per fetch.
#[derive(Debug, Clone)]
pub struct YtDlpEngine {
    config: YtDlpConfig,
}

impl YtDlpEngine {
    pub const fn new(config: YtDlpConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &YtDlpConfig {
        &self.config
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.config.program);
        cmd.args(&self.config.extra_args)
            .stdin(Stdio::null())
            .kill_on_drop(true);
        cmd
    }

    fn spawn_error(&self, e: &std::io::Error) -> FetchEngineError {
        if e.kind() == ErrorKind::NotFound {
            FetchEngineError::NotInstalled(format!(
                "{} ({YTDLP_INSTALL_HINT})",
                self.config.program.display()
            ))
        } else {
            FetchEngineError::Spawn(format!("{}: {e}", self.config.program.display()))
        }
    }

    /// Run `yt-dlp --version` and return the reported version.
    pub async fn version(&self) -> Result<String, FetchEngineError> {
        let output = self
            .command()
            .arg("--version")
            .output()
            .await
            .map_err(|e| self.spawn_error(&e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(FetchEngineError::Failed(extract_error(&stderr).unwrap_or_else(
                || format!("yt-dlp --version exited with status {}", output.status),
            )));
        }

        let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
        debug!(target: "tubegrab.engine", %version, "yt-dlp version read");
        Ok(version)
    }
}

impl Default for YtDlpEngine {
    fn default() -> Self {
        Self::new(YtDlpConfig::discover())
    }
}

#[async_trait]
impl FetchEngine for YtDlpEngine {
    async fn fetch(
        &self,
        url: &str,
        config: &FetchConfiguration,
    ) -> Result<FetchReport, FetchEngineError> {
        let args = build_args(url, config);
        debug!(
            target: "tubegrab.engine",
            program = %self.config.program.display(),
            ?args,
            "Spawning yt-dlp"
        );

        let mut cmd = self.command();
        cmd.args(&args).stdout(Stdio::piped()).stderr(Stdio::piped());
        #[cfg(unix)]
        cmd.process_group(0);

        let mut child = cmd.spawn().map_err(|e| self.spawn_error(&e))?;
        // Armed until the child is reaped, so an abandoned run takes ffmpeg down too
        let mut group = ProcessGroupGuard::new(child.id());

        let mut stdout = child
            .stdout
            .take()
            .ok_or_else(|| FetchEngineError::Spawn("Missing stdout".to_string()))?;
        let stderr = child
            .stderr
            .take()
            .ok_or_else(|| FetchEngineError::Spawn("Missing stderr".to_string()))?;

        // Drain stderr concurrently so a chatty child never blocks on a full pipe
        let stderr_task = tokio::spawn(async move {
            let mut lines = BufReader::new(stderr).lines();
            let mut collected = String::new();
            while let Ok(Some(line)) = lines.next_line().await {
                debug!(target: "tubegrab.engine", "yt-dlp: {}", line);
                collected.push_str(&line);
                collected.push('\n');
            }
            collected
        });

        let mut out = String::new();
        stdout
            .read_to_string(&mut out)
            .await
            .map_err(|e| FetchEngineError::Spawn(format!("Failed to read yt-dlp output: {e}")))?;

        let status = child
            .wait()
            .await
            .map_err(|e| FetchEngineError::Spawn(e.to_string()))?;
        group.disarm();
        let stderr_text = stderr_task.await.unwrap_or_default();

        if !status.success() {
            let reason = extract_error(&stderr_text)
                .unwrap_or_else(|| format!("yt-dlp exited with status {status}"));
            return Err(FetchEngineError::Failed(reason));
        }

        // An empty report is valid here (empty playlist); single-item callers reject it
        let report = parse_report(&out);
        info!(target: "tubegrab.engine", items = report.len(), "yt-dlp finished");
        Ok(report)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::path::Path;
    use std::time::Duration;
    use tempfile::TempDir;
    use tubegrab_core::{DownloadJobRequest, build_configuration, build_playlist_configuration};

    /// Engine running `sh <script>` in place of yt-dlp.
    fn scripted(dir: &Path, body: &str) -> YtDlpEngine {
        let script = dir.join("fake-ytdlp.sh");
        std::fs::write(&script, body).unwrap();
        YtDlpEngine::new(YtDlpConfig::new("sh").with_extra_args([script]))
    }

    /// Shell prelude that sets `$dir` to the directory of the `-o` template.
    const OUTPUT_DIR_OF_TEMPLATE: &str = r#"
while [ "$#" -gt 0 ]; do
  if [ "$1" = "-o" ]; then template="$2"; fi
  shift
done
dir=$(dirname "$template")
"#;

    #[tokio::test]
    async fn successful_run_reports_prepared_filename() {
        let scripts = TempDir::new().unwrap();
        let workspace = TempDir::new().unwrap();
        let engine = scripted(
            scripts.path(),
            &format!(
                "{OUTPUT_DIR_OF_TEMPLATE}\
                 printf 'merged' > \"$dir/Clip.mp4\"\n\
                 echo '{{\"id\":\"abc\",\"title\":\"Clip\",\"ext\":\"webm\"}}'\n\
                 echo \"$dir/Clip.webm\"\n"
            ),
        );

        let request = DownloadJobRequest::new("https://example.com/clip");
        let config = build_configuration(&request, workspace.path());
        let report = engine.fetch(&request.url, &config).await.unwrap();

        let item = report.primary().unwrap();
        assert_eq!(item.reported_filename, workspace.path().join("Clip.webm"));
        assert_eq!(item.metadata["title"], "Clip");
        assert!(workspace.path().join("Clip.mp4").is_file());
    }

    #[tokio::test]
    async fn failure_carries_error_lines_verbatim() {
        let scripts = TempDir::new().unwrap();
        let workspace = TempDir::new().unwrap();
        let engine = scripted(
            scripts.path(),
            "echo 'WARNING: ignored' >&2\n\
             echo 'ERROR: [generic] Unsupported URL: https://invalid' >&2\n\
             exit 1\n",
        );

        let request = DownloadJobRequest::new("https://invalid");
        let config = build_configuration(&request, workspace.path());
        let err = engine.fetch(&request.url, &config).await.unwrap_err();

        match err {
            FetchEngineError::Failed(msg) => {
                assert_eq!(msg, "ERROR: [generic] Unsupported URL: https://invalid");
            }
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn silent_failure_names_exit_status() {
        let scripts = TempDir::new().unwrap();
        let workspace = TempDir::new().unwrap();
        let engine = scripted(scripts.path(), "exit 3\n");

        let request = DownloadJobRequest::new("https://example.com/x");
        let config = build_configuration(&request, workspace.path());
        let err = engine.fetch(&request.url, &config).await.unwrap_err();

        assert!(err.to_string().contains("exited with status"));
    }

    #[tokio::test]
    async fn silent_success_reports_no_items() {
        let scripts = TempDir::new().unwrap();
        let workspace = TempDir::new().unwrap();
        let engine = scripted(scripts.path(), "exit 0\n");

        let config = build_playlist_configuration(workspace.path());
        let report = engine.fetch("https://example.com/empty", &config).await.unwrap();

        assert!(report.is_empty());
    }

    #[tokio::test]
    async fn missing_executable_is_not_installed() {
        let engine = YtDlpEngine::new(YtDlpConfig::new("/nonexistent/tubegrab/yt-dlp"));
        let workspace = TempDir::new().unwrap();

        let request = DownloadJobRequest::new("https://example.com/x");
        let config = build_configuration(&request, workspace.path());
        let err = engine.fetch(&request.url, &config).await.unwrap_err();
        assert!(matches!(err, FetchEngineError::NotInstalled(_)));

        let err = engine.version().await.unwrap_err();
        assert!(matches!(err, FetchEngineError::NotInstalled(_)));
    }

    /// True once `pid` has exited (gone, or a zombie awaiting its reaper).
    #[cfg(target_os = "linux")]
    fn exited(pid: i32) -> bool {
        std::fs::read_to_string(format!("/proc/{pid}/stat")).map_or(true, |stat| {
            stat.rsplit(')')
                .next()
                .is_some_and(|rest| rest.trim_start().starts_with('Z'))
        })
    }

    #[cfg(target_os = "linux")]
    #[tokio::test]
    async fn abandoned_run_kills_helper_processes() {
        let scripts = TempDir::new().unwrap();
        let workspace = TempDir::new().unwrap();
        let pid_file = scripts.path().join("helper.pid");
        let engine = scripted(
            scripts.path(),
            &format!(
                "sleep 30 &\necho $! > '{}'\nwait\n",
                pid_file.display()
            ),
        );

        let request = DownloadJobRequest::new("https://example.com/slow");
        let config = build_configuration(&request, workspace.path());
        let outcome = tokio::time::timeout(
            Duration::from_millis(500),
            engine.fetch(&request.url, &config),
        )
        .await;
        assert!(outcome.is_err(), "fetch should still be running");

        let helper: i32 = std::fs::read_to_string(&pid_file)
            .unwrap()
            .trim()
            .parse()
            .unwrap();
        let mut gone = false;
        for _ in 0..50 {
            if exited(helper) {
                gone = true;
                break;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        assert!(gone, "helper process {helper} survived the abandoned run");
    }

    #[tokio::test]
    async fn version_is_trimmed() {
        let scripts = TempDir::new().unwrap();
        let engine = scripted(scripts.path(), "echo '2024.08.06'\n");

        assert_eq!(engine.version().await.unwrap(), "2024.08.06");
    }
}
