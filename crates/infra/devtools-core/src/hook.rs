//! Shell-integration snippet and its installation bookkeeping.
//!
//! The snippet's contract: recompute the search path on every directory
//! change, strip previous helper entries before reinserting, and leave
//! non-helper entries untouched. The recomputation itself is delegated to
//! `devtools path`, so the tested Rust composer stays the single source of
//! truth for ordering.

use anyhow::{Context, Result};
use atomicwrites::{AllowOverwrite, AtomicFile};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

const HOOK_FILE_NAME: &str = "hook.bash";

/// The bash snippet emitted by `devtools hook print` and installed by
/// `devtools hook install`.
pub fn shell_hook_text() -> String {
    "\
# ----- devtools shell hook -----
_devtools_refresh() {
  local newpath
  newpath=$(command devtools path 2>/dev/null) || return 0
  [ -n \"$newpath\" ] && PATH=\"$newpath\"
}
cd() { builtin cd \"$@\" && _devtools_refresh; }
_devtools_refresh
# ----- end devtools hook -----
"
    .to_string()
}

/// Where the hook file lives: `$XDG_CONFIG_HOME/devtools/hook.bash`,
/// defaulting to `~/.config/devtools/hook.bash`.
pub fn hook_file_path() -> Result<PathBuf> {
    let config_dir = match std::env::var_os("XDG_CONFIG_HOME") {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?
            .join(".config"),
    };
    Ok(config_dir.join("devtools").join(HOOK_FILE_NAME))
}

/// Shell rc files the installer wires the hook into.
pub fn rc_files() -> Result<Vec<PathBuf>> {
    let home = dirs::home_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;
    Ok(vec![home.join(".bash_profile"), home.join(".bashrc")])
}

fn source_line(hook_path: &Path) -> String {
    format!("source {}\n", hook_path.display())
}

/// Write the hook file and add a `source` line to each rc file.
/// Idempotent: re-running changes nothing once installed.
pub fn install(hook_path: &Path, rcs: &[PathBuf]) -> Result<()> {
    if let Some(parent) = hook_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let text = shell_hook_text();
    AtomicFile::new(hook_path, AllowOverwrite)
        .write(|f| f.write_all(text.as_bytes()))
        .map_err(|e| anyhow::anyhow!("Failed to write hook file: {e}"))?;

    let line = source_line(hook_path);
    for rc in rcs {
        let current = if rc.exists() {
            fs::read_to_string(rc)?
        } else {
            String::new()
        };
        if !current.contains(&line) {
            let mut updated = current;
            if !updated.is_empty() && !updated.ends_with('\n') {
                updated.push('\n');
            }
            updated.push_str(&line);
            fs::write(rc, updated)
                .with_context(|| format!("Failed to update {}", rc.display()))?;
            info!("Added hook source line to {}", rc.display());
        }
    }

    Ok(())
}

/// Remove the `source` lines and delete the hook file. Safe to run when
/// nothing is installed.
pub fn uninstall(hook_path: &Path, rcs: &[PathBuf]) -> Result<()> {
    let line = source_line(hook_path);
    for rc in rcs {
        if rc.exists() {
            let current = fs::read_to_string(rc)?;
            let updated = current.replace(&line, "");
            if updated != current {
                fs::write(rc, updated)
                    .with_context(|| format!("Failed to update {}", rc.display()))?;
                info!("Removed hook source line from {}", rc.display());
            }
        }
    }

    if hook_path.exists() {
        fs::remove_file(hook_path)
            .with_context(|| format!("Failed to remove {}", hook_path.display()))?;
    }

    Ok(())
}
