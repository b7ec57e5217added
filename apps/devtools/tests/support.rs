//! Shared fixtures for CLI integration tests.
//!
//! Repositories are created through libgit2 so the suite never shells out
//! to a git binary.

use std::fs;
use std::path::{Path, PathBuf};

/// Initialize a git repository at `dir/name` and return its root.
pub fn init_repo(dir: &Path, name: &str) -> PathBuf {
    let root = dir.join(name);
    fs::create_dir_all(&root).unwrap();
    git2::Repository::init(&root).unwrap();
    root
}

/// Write an executable helper script printing `output`.
#[cfg(unix)]
pub fn write_helper(dir: &Path, name: &str, output: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;
    let path = dir.join(name);
    fs::create_dir_all(dir).unwrap();
    fs::write(&path, format!("#!/usr/bin/env bash\necho {output}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Write a non-executable file where a helper would live.
#[cfg(unix)]
pub fn write_non_executable(dir: &Path, name: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;
    let path = dir.join(name);
    fs::create_dir_all(dir).unwrap();
    fs::write(&path, "echo hi\n").unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Exercises the fixtures so this file is warning-free when compiled
    /// as its own test target.
    #[test]
    #[cfg(unix)]
    fn fixtures_work() {
        let tmp = tempfile::TempDir::new().unwrap();
        let root = init_repo(tmp.path(), "proj");
        assert!(root.join(".git").exists());

        let helper = write_helper(&root, "hi", "ok");
        assert!(helper.exists());
        let plain = write_non_executable(&root, "plain");
        assert!(plain.exists());
    }
}

