//! The global workspace directory: one subdirectory per linked repository.

use crate::error::DevtoolsError;
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable overriding the workspace location.
pub const WORKSPACE_ENV_VAR: &str = "DEVTOOLS_HOME";

/// Default workspace directory name under the user's home.
pub const DEFAULT_WORKSPACE_DIR: &str = "dev-tools";

/// Handle to the workspace root directory.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    /// Workspace at an explicit root. Used by tests and by callers that
    /// already resolved the location.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the workspace from `DEVTOOLS_HOME`, falling back to
    /// `~/dev-tools`.
    pub fn from_env() -> Result<Self> {
        if let Some(path) = std::env::var_os(WORKSPACE_ENV_VAR) {
            return Ok(Self::at(PathBuf::from(path)));
        }
        let home = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;
        Ok(Self::at(home.join(DEFAULT_WORKSPACE_DIR)))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn exists(&self) -> bool {
        self.root.is_dir()
    }

    /// Create the workspace root if missing. Idempotent.
    pub fn ensure(&self) -> Result<()> {
        if !self.exists() {
            fs::create_dir_all(&self.root)?;
            debug!("Created workspace at {}", self.root.display());
        }
        Ok(())
    }

    /// Fail with `WorkspaceMissing` unless the workspace has been created.
    pub fn require(&self) -> Result<()> {
        if self.exists() {
            Ok(())
        } else {
            Err(DevtoolsError::WorkspaceMissing {
                path: self.root.clone(),
            }
            .into())
        }
    }

    /// Workspace subdirectory for a repository name.
    pub fn dir_for(&self, repo_name: &str) -> PathBuf {
        self.root.join(repo_name)
    }

    /// Create (if needed) and return the subdirectory for a repository.
    pub fn ensure_dir_for(&self, repo_name: &str) -> Result<PathBuf> {
        let dir = self.dir_for(repo_name);
        fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    /// Every subdirectory of the workspace root, sorted. Missing or
    /// unreadable workspace yields an empty list.
    pub fn subdirs(&self) -> Vec<PathBuf> {
        let Ok(entries) = fs::read_dir(&self.root) else {
            return Vec::new();
        };

        let mut dirs: Vec<PathBuf> = entries
            .filter_map(std::result::Result::ok)
            .map(|e| e.path())
            .filter(|p| p.is_dir())
            .collect();
        dirs.sort();
        dirs
    }
}

/// Derive the workspace key for a repository root: its basename.
///
/// Two differently-pathed repositories sharing a basename collide on this
/// key; the registry surfaces that instead of silently re-pointing.
pub fn repo_name(repo_root: &Path) -> Result<String> {
    repo_root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| {
            anyhow::anyhow!("Repository root has no basename: {}", repo_root.display())
        })
}
