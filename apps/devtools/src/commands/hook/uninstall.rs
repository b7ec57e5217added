use anyhow::Result;
use colored::Colorize;
use devtools_core::hook;

pub async fn execute() -> Result<()> {
    let hook_path = hook::hook_file_path()?;
    let rcs = hook::rc_files()?;

    hook::uninstall(&hook_path, &rcs)?;

    println!("{} Hook removed", "✓".green());
    Ok(())
}
