//! Health-check scan over helper directories.
//!
//! Pure: takes candidate directories, returns every anomaly found. The
//! caller decides how findings map to exit status.

use crate::search_path::HELPER_DIR_NAME;
use crate::workspace::Workspace;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// A problem found during the health check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Anomaly {
    /// The directory path no longer resolves to an existing entry
    /// (typically a `.devtools` symlink whose workspace target was deleted).
    BrokenLink(PathBuf),
    /// A regular file inside a helper directory is missing its executable bit.
    NonExecutable(PathBuf),
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Anomaly::BrokenLink(path) => write!(f, "broken link: {}", path.display()),
            Anomaly::NonExecutable(path) => {
                write!(f, "non-executable helper: {}", path.display())
            }
        }
    }
}

fn is_non_executable_file(path: &Path) -> bool {
    let Ok(metadata) = fs::metadata(path) else {
        return false;
    };
    if !metadata.is_file() {
        return false;
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        metadata.permissions().mode() & 0o111 == 0
    }
    #[cfg(not(unix))]
    {
        false
    }
}

/// Scan candidate helper directories and report every anomaly.
///
/// The scan never aborts early: all findings are collected so a single run
/// shows the full picture. Unreadable directories are skipped silently,
/// matching discovery behavior.
pub fn check(candidate_dirs: &[PathBuf]) -> Vec<Anomaly> {
    let mut anomalies = Vec::new();

    for dir in candidate_dirs {
        if !dir.exists() {
            anomalies.push(Anomaly::BrokenLink(dir.clone()));
            continue;
        }

        let Ok(entries) = fs::read_dir(dir) else {
            continue;
        };

        let mut paths: Vec<PathBuf> = entries
            .filter_map(std::result::Result::ok)
            .map(|e| e.path())
            .collect();
        paths.sort();

        for path in paths {
            if is_non_executable_file(&path) {
                anomalies.push(Anomaly::NonExecutable(path));
            }
        }
    }

    anomalies
}

/// Collect the candidate set for a doctor run: the current chain's helper
/// directories (including broken symlinks, which `helper_dirs` would hide)
/// plus every subdirectory of the workspace root.
pub fn candidates(chain: &[PathBuf], workspace: &Workspace) -> Vec<PathBuf> {
    let mut dirs = Vec::new();

    for root in chain {
        let link = root.join(HELPER_DIR_NAME);
        // symlink_metadata sees the link itself, so a dangling symlink is
        // still a candidate and gets reported as BrokenLink.
        if link.symlink_metadata().is_ok() {
            dirs.push(link);
        }
    }

    for dir in workspace.subdirs() {
        if !dirs.contains(&dir) {
            dirs.push(dir);
        }
    }

    dirs
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[cfg(unix)]
    fn write_file(dir: &Path, name: &str, mode: u32) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;
        let path = dir.join(name);
        fs::write(&path, "echo hi\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(mode)).unwrap();
        path
    }

    #[test]
    fn clean_directory_reports_nothing() {
        let dir = TempDir::new().unwrap();
        #[cfg(unix)]
        write_file(dir.path(), "ok", 0o755);

        assert!(check(&[dir.path().to_path_buf()]).is_empty());
    }

    #[test]
    #[cfg(unix)]
    fn missing_exec_bit_is_reported() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "ok", 0o755);
        let bad = write_file(dir.path(), "oops", 0o644);

        let anomalies = check(&[dir.path().to_path_buf()]);
        assert_eq!(anomalies, vec![Anomaly::NonExecutable(bad)]);
    }

    #[test]
    #[cfg(unix)]
    fn deleted_target_reports_exactly_one_broken_link() {
        let repo = TempDir::new().unwrap();
        let target = TempDir::new().unwrap();
        let link = repo.path().join(HELPER_DIR_NAME);
        std::os::unix::fs::symlink(target.path(), &link).unwrap();

        let healthy = TempDir::new().unwrap();
        write_file(healthy.path(), "fine", 0o755);

        drop(target); // removes the symlink's target

        let anomalies = check(&[link.clone(), healthy.path().to_path_buf()]);
        assert_eq!(anomalies, vec![Anomaly::BrokenLink(link)]);
    }

    #[test]
    #[cfg(unix)]
    fn broken_chain_link_is_a_candidate() {
        let repo = TempDir::new().unwrap();
        let target = TempDir::new().unwrap();
        let link = repo.path().join(HELPER_DIR_NAME);
        std::os::unix::fs::symlink(target.path(), &link).unwrap();
        drop(target);

        let home = TempDir::new().unwrap();
        let workspace = Workspace::at(home.path().join("dev-tools"));
        let dirs = candidates(&[repo.path().to_path_buf()], &workspace);
        assert_eq!(dirs, vec![link]);
    }

    #[test]
    fn subdirectory_entries_are_not_flagged() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();

        assert!(check(&[dir.path().to_path_buf()]).is_empty());
    }
}
