//! Repository-chain resolution.
//!
//! Walks the chain of enclosing git repositories from the starting
//! directory outward: innermost root first, ascending through each root's
//! parent until no enclosing repository remains. The chain is recomputed
//! on every invocation and never cached.

use crate::git::RepoLocator;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolve the ordered chain of enclosing repository roots for `start_dir`.
///
/// The result is innermost-first and duplicate-free. Termination is
/// guaranteed: each step either fails the locator query (the normal end
/// condition when ascending out of all repositories), revisits a root
/// already collected in this pass (symlink loops, bind mounts), or runs
/// out of parent directories.
pub fn resolve_chain(locator: &dyn RepoLocator, start_dir: &Path) -> Vec<PathBuf> {
    let mut chain = Vec::new();
    let mut seen = HashSet::new();
    let mut current = start_dir.to_path_buf();

    loop {
        let Some(root) = locator.repo_root(&current) else {
            break;
        };

        if !seen.insert(root.clone()) {
            debug!("Repository root {} seen twice, stopping ascent", root.display());
            break;
        }

        debug!("Found repository root: {}", root.display());
        let parent = root.parent().map(Path::to_path_buf);
        chain.push(root);

        match parent {
            Some(p) => current = p,
            None => break,
        }
    }

    chain
}
