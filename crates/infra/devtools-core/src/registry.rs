//! Name-to-repository registry stored at the workspace root.
//!
//! The workspace keys helper directories by repository basename, so two
//! differently-pathed repositories can fight over one name. `repos.json`
//! records which root currently owns each name; `link` consults it and
//! refuses a silent takeover.

use crate::error::DevtoolsError;
use crate::locks::FileLock;
use crate::workspace::Workspace;
use anyhow::{Context, Result};
use atomicwrites::{AllowOverwrite, AtomicFile};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

const REGISTRY_FILE: &str = "repos.json";

/// Where a registered name points.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RepoEntry {
    /// Absolute path of the repository root that owns this name.
    pub path: PathBuf,
    /// When the repository was last linked.
    pub linked_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RegistryFile {
    repos: BTreeMap<String, RepoEntry>,
}

pub struct RepoRegistry {
    registry_path: PathBuf,
}

impl RepoRegistry {
    pub fn new(workspace: &Workspace) -> Self {
        Self {
            registry_path: workspace.root().join(REGISTRY_FILE),
        }
    }

    /// Lock file path for read-modify-write operations.
    fn lock_path(&self) -> PathBuf {
        let name = self
            .registry_path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy();
        self.registry_path.with_file_name(format!("{name}.lock"))
    }

    fn load(&self) -> Result<RegistryFile> {
        if !self.registry_path.exists() {
            return Ok(RegistryFile::default());
        }

        let contents = std::fs::read_to_string(&self.registry_path)
            .context("Failed to read repository registry")?;
        let registry: RegistryFile =
            serde_json::from_str(&contents).context("Failed to parse repository registry")?;
        Ok(registry)
    }

    fn save(&self, registry: &RegistryFile) -> Result<()> {
        if let Some(parent) = self.registry_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(registry)?;
        let af = AtomicFile::new(&self.registry_path, AllowOverwrite);
        af.write(|f| f.write_all(json.as_bytes()))
            .map_err(|e| anyhow::anyhow!("Failed to write registry: {e}"))?;

        Ok(())
    }

    /// Look up the repository root currently owning `name`.
    pub fn get(&self, name: &str) -> Result<Option<RepoEntry>> {
        Ok(self.load()?.repos.get(name).cloned())
    }

    /// Record `name -> repo_root`, refusing to re-point a name owned by a
    /// different repository unless `force` is set. Re-linking the same
    /// repository refreshes its timestamp.
    pub fn record(&self, name: &str, repo_root: &Path, force: bool) -> Result<()> {
        let _lock = FileLock::lock_exclusive(self.lock_path())?;
        let mut registry = self.load()?; // safe under lock for RMW

        if let Some(existing) = registry.repos.get(name)
            && existing.path != repo_root
            && !force
        {
            return Err(DevtoolsError::NameCollision {
                name: name.to_string(),
                existing: existing.path.clone(),
            }
            .into());
        }

        registry.repos.insert(
            name.to_string(),
            RepoEntry {
                path: repo_root.to_path_buf(),
                linked_at: Utc::now(),
            },
        );

        self.save(&registry)?;
        Ok(())
    }
}
