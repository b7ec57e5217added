use anyhow::Result;
use colored::Colorize;
use devtools_core::Workspace;

pub async fn execute() -> Result<()> {
    let workspace = Workspace::from_env()?;
    let already = workspace.exists();
    workspace.ensure()?;

    if already {
        println!(
            "{}: Workspace already exists at {}",
            "Info".cyan(),
            workspace.root().display()
        );
    } else {
        println!(
            "{} Created workspace at {}",
            "✓".green(),
            workspace.root().display()
        );
    }

    Ok(())
}
