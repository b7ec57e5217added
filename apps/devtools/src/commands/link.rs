use anyhow::{Context, Result};
use colored::Colorize;
use devtools_core::{
    HELPER_DIR_NAME, RepoRegistry, Workspace, get_current_repo, git::ensure_exclude_entry,
    repo_name,
};
use std::fs;
use std::path::Path;

pub async fn execute(force: bool) -> Result<()> {
    let workspace = Workspace::from_env()?;
    workspace.require()?;

    let repo_root = get_current_repo().context("Run 'devtools link' inside a git repository")?;
    let name = repo_name(&repo_root)?;

    // Claim the workspace name before touching the filesystem, so a
    // basename collision fails without leaving a half-made link behind.
    let registry = RepoRegistry::new(&workspace);
    registry.record(&name, &repo_root, force)?;

    let target = workspace.ensure_dir_for(&name)?;
    let link = repo_root.join(HELPER_DIR_NAME);

    if let Ok(meta) = link.symlink_metadata() {
        if meta.file_type().is_symlink() || meta.is_file() {
            fs::remove_file(&link)
                .with_context(|| format!("Failed to remove existing {}", link.display()))?;
        } else {
            anyhow::bail!(
                "{} exists and is a real directory; move it aside before linking",
                link.display()
            );
        }
    }
    create_symlink(&target, &link)?;

    // Local-only ignore; linking must never dirty the repository.
    ensure_exclude_entry(&repo_root, HELPER_DIR_NAME)?;

    println!(
        "{} {} -> {}",
        "Linked".green(),
        link.display(),
        target.display()
    );

    Ok(())
}

fn create_symlink(target: &Path, link: &Path) -> Result<()> {
    #[cfg(unix)]
    {
        std::os::unix::fs::symlink(target, link).with_context(|| {
            format!("Failed to create symlink {} -> {}", link.display(), target.display())
        })?;
    }

    #[cfg(windows)]
    {
        std::os::windows::fs::symlink_dir(target, link).with_context(|| {
            format!("Failed to create symlink {} -> {}", link.display(), target.display())
        })?;
    }

    Ok(())
}
