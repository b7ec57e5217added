use anyhow::Result;
use devtools_core::hook::shell_hook_text;

pub async fn execute() -> Result<()> {
    print!("{}", shell_hook_text());
    Ok(())
}
