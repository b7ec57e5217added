//! Helper-script scaffolding.

use crate::error::DevtoolsError;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Template written into a freshly scaffolded helper.
pub const HELPER_TEMPLATE: &str = "#!/usr/bin/env bash\nset -euo pipefail\n\n";

/// Create a new helper script named `name` inside `helper_dir`.
///
/// Refuses to overwrite: an existing entry of any kind under that name is
/// an error. The new file is created executable (0o755).
pub fn create_helper(helper_dir: &Path, name: &str) -> Result<PathBuf> {
    let path = helper_dir.join(name);

    // symlink_metadata so a dangling symlink also counts as "exists".
    if path.symlink_metadata().is_ok() {
        return Err(DevtoolsError::HelperExists {
            name: name.to_string(),
            path,
        }
        .into());
    }

    fs::write(&path, HELPER_TEMPLATE)
        .with_context(|| format!("Failed to create helper at {}", path.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .with_context(|| format!("Failed to mark {} executable", path.display()))?;
    }

    Ok(path)
}
