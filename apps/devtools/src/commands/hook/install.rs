use anyhow::Result;
use colored::Colorize;
use devtools_core::hook;

pub async fn execute() -> Result<()> {
    let hook_path = hook::hook_file_path()?;
    let rcs = hook::rc_files()?;

    hook::install(&hook_path, &rcs)?;

    println!("{} Hook installed at {}", "✓".green(), hook_path.display());
    println!("Open a new shell or run {} to activate it.", format!("source {}", hook_path.display()).cyan());

    Ok(())
}
