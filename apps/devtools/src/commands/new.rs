use anyhow::{Context, Result};
use colored::Colorize;
use devtools_core::{HELPER_DIR_NAME, Workspace, get_current_repo, scaffold};

pub async fn execute(name: &str) -> Result<()> {
    let workspace = Workspace::from_env()?;
    workspace.require()?;

    let repo_root = get_current_repo().context("Run 'devtools new' inside a git repository")?;
    let link = repo_root.join(HELPER_DIR_NAME);

    if !link.is_symlink() {
        return Err(devtools_core::DevtoolsError::RepoNotLinked { repo_root }.into());
    }

    let path = scaffold::create_helper(&link, name)?;
    println!("{} Created {}", "✓".green(), path.display());
    println!("It is on your PATH as {} once the shell hook refreshes.", name.cyan());

    Ok(())
}
