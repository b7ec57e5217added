use anyhow::Result;
use colored::Colorize;
use devtools_core::{GitRepoLocator, Workspace, active_helpers};
use serde_json::json;

pub async fn execute(json: bool) -> Result<()> {
    let workspace = Workspace::from_env()?;
    workspace.require()?;

    let cwd = std::env::current_dir()?;
    let helpers = active_helpers(&GitRepoLocator, &cwd);

    if json {
        let entries: Vec<_> = helpers
            .iter()
            .map(|h| json!({ "name": h.name, "path": h.path }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if helpers.is_empty() {
        println!("No helpers visible from {}", cwd.display());
        println!(
            "Link a repository with {} and add scripts with {}",
            "devtools link".cyan(),
            "devtools new <name>".cyan()
        );
        return Ok(());
    }

    for helper in &helpers {
        println!("{:20} {}", helper.name, helper.path.display());
    }

    Ok(())
}
