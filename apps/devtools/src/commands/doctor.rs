use anyhow::Result;
use colored::Colorize;
use devtools_core::{GitRepoLocator, Workspace, doctor, resolve_chain};

pub async fn execute() -> Result<()> {
    let workspace = Workspace::from_env()?;
    workspace.require()?;

    let cwd = std::env::current_dir()?;
    let chain = resolve_chain(&GitRepoLocator, &cwd);
    let candidates = doctor::candidates(&chain, &workspace);
    let anomalies = doctor::check(&candidates);

    if anomalies.is_empty() {
        println!("{} doctor: no issues detected", "✓".green());
        return Ok(());
    }

    for anomaly in &anomalies {
        println!("{} {}", "Error".red(), anomaly);
    }
    anyhow::bail!("doctor found {} issue(s)", anomalies.len());
}
