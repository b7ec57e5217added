use anyhow::Result;
use devtools_core::{GitRepoLocator, helper_dirs, resolve_chain, to_search_path};

/// Recompute the search path for the current directory and print it.
///
/// This is the hook's refresh entry point: the emitted value has stale
/// helper entries stripped and the current chain's helper directories
/// prepended innermost-first.
pub async fn execute() -> Result<()> {
    let cwd = std::env::current_dir()?;
    let existing = std::env::var("PATH").unwrap_or_default();

    let chain = resolve_chain(&GitRepoLocator, &cwd);
    let dirs = helper_dirs(&chain);

    println!("{}", to_search_path(&dirs, &existing));
    Ok(())
}
