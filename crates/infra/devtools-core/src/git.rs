use crate::error::DevtoolsError;
use anyhow::Result;
use git2::Repository;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// The single version-control query the resolver depends on.
///
/// Implementations answer "which repository root contains this directory",
/// or `None` when the directory is not inside any repository. Keeping this
/// behind a trait lets chain-resolution tests run against an in-memory fake
/// instead of real repositories.
pub trait RepoLocator {
    fn repo_root(&self, dir: &Path) -> Option<PathBuf>;
}

/// Locator backed by libgit2's upward discovery.
#[derive(Debug, Default, Clone, Copy)]
pub struct GitRepoLocator;

impl RepoLocator for GitRepoLocator {
    fn repo_root(&self, dir: &Path) -> Option<PathBuf> {
        let repo = match Repository::discover(dir) {
            Ok(repo) => repo,
            Err(e) => {
                debug!("No repository containing {}: {}", dir.display(), e);
                return None;
            }
        };

        // Bare repositories have no workdir and cannot hold a helper dir.
        repo.workdir().map(Path::to_path_buf)
    }
}

/// Find the repository root from a given path
pub fn find_repo_root(start_path: &Path) -> Result<PathBuf> {
    GitRepoLocator
        .repo_root(start_path)
        .ok_or_else(|| DevtoolsError::NotInGitRepo.into())
}

/// Get the current repository path, starting from the current directory
pub fn get_current_repo() -> Result<PathBuf> {
    let current_dir = std::env::current_dir()?;
    find_repo_root(&current_dir)
}

/// Ensures an entry exists in the repository's `.git/info/exclude` file.
///
/// Unlike `.gitignore`, the exclude file is local-only, so linking a repo
/// never dirties its working tree. Returns `true` if the file was changed.
pub fn ensure_exclude_entry(repo_root: &Path, entry: &str) -> Result<bool> {
    let exclude_path = repo_root.join(".git").join("info").join("exclude");

    if exclude_path.exists() {
        let content = fs::read_to_string(&exclude_path)?;

        let entry_no_slash = entry.trim_start_matches('/');
        let has_entry = content.lines().any(|line| {
            let trimmed = line.trim();
            trimmed == entry
                || trimmed == entry_no_slash
                || trimmed == format!("{entry_no_slash}/")
        });

        if has_entry {
            return Ok(false);
        }

        let mut new_content = content;
        if !new_content.ends_with('\n') && !new_content.is_empty() {
            new_content.push('\n');
        }
        new_content.push_str(entry);
        new_content.push('\n');

        fs::write(&exclude_path, new_content)?;
        info!("Added {} to .git/info/exclude", entry);
        Ok(true)
    } else {
        if let Some(parent) = exclude_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&exclude_path, format!("{entry}\n"))?;
        info!("Created .git/info/exclude with {} entry", entry);
        Ok(true)
    }
}
