use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DevtoolsError {
    #[error("No workspace found at {path}. Run 'devtools init' first.")]
    WorkspaceMissing { path: PathBuf },

    #[error("Not in a git repository")]
    NotInGitRepo,

    #[error("Repository is not linked. Run 'devtools link' first.")]
    RepoNotLinked { repo_root: PathBuf },

    #[error("Helper '{name}' already exists at {path}")]
    HelperExists { name: String, path: PathBuf },

    #[error(
        "Workspace name '{name}' is already linked to {existing}. \
         Re-run with --force to take over the name."
    )]
    NameCollision { name: String, existing: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Git2 error: {0}")]
    Git2(#[from] git2::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, DevtoolsError>;
