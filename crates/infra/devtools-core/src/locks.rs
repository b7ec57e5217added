//! Advisory file locking, used to protect `repos.json` read-modify-write.

use anyhow::{Context, Result};
use fs4::fs_std::FileExt;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

/// RAII advisory file lock, released on drop. Advisory locking works
/// across processes on Unix systems.
pub struct FileLock {
    _file: File,
    pub path: PathBuf,
}

impl FileLock {
    /// Acquire an exclusive lock, blocking until available.
    ///
    /// Creates the lock file and parent directories if they don't exist.
    pub fn lock_exclusive(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create lock dir: {}", parent.display()))?;
        }
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)
            .with_context(|| format!("Failed to open lock file: {}", path.display()))?;
        file.lock_exclusive()
            .with_context(|| format!("Failed to acquire exclusive lock: {}", path.display()))?;
        Ok(Self { _file: file, path })
    }
}
