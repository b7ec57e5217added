//! Per-repository helper launcher core.
//!
//! A global workspace directory holds one subdirectory per linked
//! repository; each repository gets a `.devtools` symlink pointing at its
//! subdirectory. The library resolves the chain of enclosing repositories
//! for a directory, composes the set of active helper scripts
//! (innermost repository wins name collisions), and rewrites a search-path
//! value so those helpers are callable by name.

pub mod doctor;
pub mod error;
pub mod git;
pub mod hook;
pub mod locks;
pub mod registry;
pub mod resolver;
pub mod scaffold;
pub mod search_path;
pub mod workspace;

pub use doctor::{Anomaly, check};
pub use error::{DevtoolsError, Result};
pub use git::{GitRepoLocator, RepoLocator, find_repo_root, get_current_repo};
pub use registry::{RepoEntry, RepoRegistry};
pub use resolver::resolve_chain;
pub use search_path::{
    ActiveHelper, ActiveHelperSet, HELPER_DIR_NAME, active_helpers, compose, helper_dirs,
    to_search_path,
};
pub use workspace::{DEFAULT_WORKSPACE_DIR, WORKSPACE_ENV_VAR, Workspace, repo_name};
