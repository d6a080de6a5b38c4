//! Per-job temporary workspaces.
//!
//! Every job writes into its own freshly created directory. Directory names
//! are random and created atomically, so concurrent `acquire()` calls never
//! share a workspace. A [`Workspace`] removes its directory when released
//! explicitly or when dropped, so cleanup happens on every exit path.

use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tracing::{debug, warn};

use crate::error::WorkspaceError;

/// Prefix of every workspace directory name.
pub const WORKSPACE_PREFIX: &str = "tubegrab-";

/// Allocates workspaces under a root directory.
#[derive(Debug, Clone)]
pub struct WorkspaceManager {
    root: PathBuf,
}

impl WorkspaceManager {
    /// Create a manager that allocates workspaces under `root`.
    ///
    /// The root is created on first use if it does not exist.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Manager rooted at the system temporary directory.
    pub fn system_temp() -> Self {
        Self::new(std::env::temp_dir())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create a new, uniquely named, empty workspace.
    pub fn acquire(&self) -> Result<Workspace, WorkspaceError> {
        let create_err = |e: std::io::Error| WorkspaceError::Create {
            root: self.root.clone(),
            reason: e.to_string(),
        };

        std::fs::create_dir_all(&self.root).map_err(create_err)?;
        let dir = tempfile::Builder::new()
            .prefix(WORKSPACE_PREFIX)
            .tempdir_in(&self.root)
            .map_err(create_err)?;

        let path = dir.path().to_path_buf();
        debug!(target: "tubegrab.workspace", workspace = %path.display(), "Workspace acquired");

        Ok(Workspace {
            path,
            dir: Some(dir),
        })
    }
}

impl Default for WorkspaceManager {
    fn default() -> Self {
        Self::system_temp()
    }
}

/// An exclusively owned temporary directory for one job.
#[derive(Debug)]
pub struct Workspace {
    path: PathBuf,
    dir: Option<TempDir>,
}

impl Workspace {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Names of the regular files in the workspace, in directory order.
    pub async fn list_files(&self) -> Result<Vec<String>, WorkspaceError> {
        let list_err = |e: std::io::Error| WorkspaceError::List {
            path: self.path.clone(),
            reason: e.to_string(),
        };

        let mut entries = tokio::fs::read_dir(&self.path).await.map_err(list_err)?;
        let mut files = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(list_err)? {
            if entry.file_type().await.map_err(list_err)?.is_file() {
                files.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        Ok(files)
    }

    /// Remove the directory and everything in it.
    pub fn release(mut self) -> Result<(), WorkspaceError> {
        match self.dir.take() {
            Some(dir) => close(dir),
            None => Ok(()),
        }
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        if let Some(dir) = self.dir.take() {
            if let Err(e) = close(dir) {
                warn!(target: "tubegrab.workspace", "{}", e);
            }
        }
    }
}

fn close(dir: TempDir) -> Result<(), WorkspaceError> {
    let path = dir.path().to_path_buf();
    dir.close().map_err(|e| WorkspaceError::Release {
        path: path.clone(),
        reason: e.to_string(),
    })?;
    debug!(target: "tubegrab.workspace", workspace = %path.display(), "Workspace released");
    Ok(())
}
