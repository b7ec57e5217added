//! Helper discovery and search-path composition.
//!
//! Given the innermost-first repository chain, this module decides which
//! helper scripts are "active" and how the shell's `PATH` must be ordered
//! so that a nested repository's helpers shadow same-named helpers from an
//! enclosing repository.
//!
//! Ordering contract: the shell resolves names first-match-wins, so the
//! innermost helper directory must be the FIRST entry of the emitted path.
//! The set below is populated innermost-first with first-writer-wins, and
//! [`to_search_path`] prepends directories in that same chain order.
//! Reversing that order would silently flip shadowing semantics; it is a
//! correctness bug, not a style choice.

use crate::git::RepoLocator;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the helper-directory entry placed at each repository root.
pub const HELPER_DIR_NAME: &str = ".devtools";

/// A helper script that won name resolution for its chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveHelper {
    /// Filename the shell will resolve.
    pub name: String,
    /// Full path of the winning script.
    pub path: PathBuf,
    /// Helper directory the script was found in.
    pub dir: PathBuf,
}

/// Insertion-ordered mapping from helper name to its winning definition.
///
/// Built by walking the chain innermost-first; once a name is claimed by an
/// inner repository, outer repositories cannot override it.
#[derive(Debug, Default)]
pub struct ActiveHelperSet {
    entries: Vec<ActiveHelper>,
    names: HashSet<String>,
}

impl ActiveHelperSet {
    fn insert_first(&mut self, helper: ActiveHelper) -> bool {
        if self.names.contains(&helper.name) {
            return false;
        }
        self.names.insert(helper.name.clone());
        self.entries.push(helper);
        true
    }

    /// Helpers in first-discovery order (innermost-first, first-seen-per-name).
    pub fn iter(&self) -> impl Iterator<Item = &ActiveHelper> {
        self.entries.iter()
    }

    pub fn get(&self, name: &str) -> Option<&ActiveHelper> {
        self.entries.iter().find(|h| h.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a ActiveHelperSet {
    type Item = &'a ActiveHelper;
    type IntoIter = std::slice::Iter<'a, ActiveHelper>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Filter a repository chain down to the helper directories that exist.
///
/// Chain order (innermost-first) is preserved. Roots without a `.devtools`
/// directory contribute nothing.
pub fn helper_dirs(chain: &[PathBuf]) -> Vec<PathBuf> {
    chain
        .iter()
        .map(|root| root.join(HELPER_DIR_NAME))
        .filter(|dir| dir.is_dir())
        .collect()
}

/// Whether a directory entry is a helper: a regular file with the
/// executable bit set for the invoking user.
fn is_helper_file(path: &Path) -> bool {
    let Ok(metadata) = fs::metadata(path) else {
        return false;
    };
    if !metadata.is_file() {
        return false;
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        metadata.permissions().mode() & 0o111 != 0
    }
    #[cfg(not(unix))]
    {
        true
    }
}

/// Build the [`ActiveHelperSet`] for helper directories in chain order.
///
/// Directory entries are scanned in sorted order for deterministic output.
/// An unreadable directory contributes no helpers; the scan continues with
/// the remaining chain entries.
pub fn compose(dirs: &[PathBuf]) -> ActiveHelperSet {
    let mut set = ActiveHelperSet::default();

    for dir in dirs {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!("Skipping unreadable helper dir {}: {}", dir.display(), e);
                continue;
            }
        };

        let mut paths: Vec<PathBuf> = entries
            .filter_map(std::result::Result::ok)
            .map(|e| e.path())
            .collect();
        paths.sort();

        for path in paths {
            if !is_helper_file(&path) {
                continue;
            }
            let Some(name) = path.file_name().map(|n| n.to_string_lossy().into_owned())
            else {
                continue;
            };
            set.insert_first(ActiveHelper {
                name,
                path: path.clone(),
                dir: dir.clone(),
            });
        }
    }

    set
}

/// Transform an existing search path into one with the given helper
/// directories active.
///
/// Pure value-in/value-out: previous helper-directory entries (anything
/// whose final component is `.devtools`) are stripped, then `dirs` are
/// prepended in chain order so the innermost directory is matched first.
/// Non-helper entries keep their relative order. Reapplying with unchanged
/// inputs yields an identical result.
pub fn to_search_path(dirs: &[PathBuf], existing: &str) -> String {
    let separator = if cfg!(windows) { ';' } else { ':' };

    let kept = std::env::split_paths(existing)
        .filter(|entry| entry.file_name().is_none_or(|n| n != HELPER_DIR_NAME))
        .map(|entry| entry.to_string_lossy().into_owned());

    dirs.iter()
        .map(|dir| dir.to_string_lossy().into_owned())
        .chain(kept)
        .collect::<Vec<_>>()
        .join(&separator.to_string())
}

/// Resolve and compose in one step: the active helpers visible from
/// `start_dir`.
pub fn active_helpers(locator: &dyn RepoLocator, start_dir: &Path) -> ActiveHelperSet {
    let chain = crate::resolver::resolve_chain(locator, start_dir);
    compose(&helper_dirs(&chain))
}
