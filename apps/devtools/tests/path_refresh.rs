#![cfg(unix)]

//! Contract tests for the search-path injection performed by the shell
//! hook: recompute from scratch, strip stale helper entries, preserve
//! everything else untouched and in order.

use assert_cmd::cargo::cargo_bin_cmd;
use std::path::Path;
use tempfile::TempDir;

mod support;

fn compose_path(workspace: &Path, cwd: &Path, existing: &str) -> String {
    let output = cargo_bin_cmd!("devtools")
        .env("DEVTOOLS_HOME", workspace)
        .env("PATH", existing)
        .current_dir(cwd)
        .arg("path")
        .output()
        .unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap().trim().to_string()
}

fn linked_repo(workspace: &Path, repos: &Path, name: &str) -> std::path::PathBuf {
    let root = support::init_repo(repos, name);
    cargo_bin_cmd!("devtools")
        .env("DEVTOOLS_HOME", workspace)
        .current_dir(&root)
        .arg("link")
        .assert()
        .success();
    root
}

#[test]
fn reapplying_is_idempotent() {
    let home = TempDir::new().unwrap();
    let workspace = home.path().join("dev-tools");
    let repos = TempDir::new().unwrap();

    cargo_bin_cmd!("devtools")
        .env("DEVTOOLS_HOME", &workspace)
        .arg("init")
        .assert()
        .success();
    let root = linked_repo(&workspace, repos.path(), "proj");
    support::write_helper(&workspace.join("proj"), "say-hi", "hi");

    let once = compose_path(&workspace, &root, "/usr/local/bin:/usr/bin:/bin");
    let twice = compose_path(&workspace, &root, &once);

    assert_eq!(once, twice, "no growth, no reordering drift");
}

#[test]
fn stale_entries_are_stripped_after_leaving_a_repo() {
    let home = TempDir::new().unwrap();
    let workspace = home.path().join("dev-tools");
    let repos = TempDir::new().unwrap();

    cargo_bin_cmd!("devtools")
        .env("DEVTOOLS_HOME", &workspace)
        .arg("init")
        .assert()
        .success();
    let root = linked_repo(&workspace, repos.path(), "proj");

    let inside = compose_path(&workspace, &root, "/usr/bin:/bin");
    assert!(inside.contains(".devtools"));

    // Leaving the repository: the previous helper entry disappears and
    // the non-helper entries survive untouched.
    let outside = compose_path(&workspace, repos.path(), &inside);
    assert_eq!(outside, "/usr/bin:/bin");
}

#[test]
fn non_helper_entries_keep_relative_order() {
    let home = TempDir::new().unwrap();
    let workspace = home.path().join("dev-tools");
    let repos = TempDir::new().unwrap();

    cargo_bin_cmd!("devtools")
        .env("DEVTOOLS_HOME", &workspace)
        .arg("init")
        .assert()
        .success();
    let root = linked_repo(&workspace, repos.path(), "proj");

    let existing = "/opt/custom/bin:/usr/local/bin:/usr/bin:/bin";
    let composed = compose_path(&workspace, &root, existing);
    let suffix: Vec<&str> = composed
        .split(':')
        .filter(|e| !e.ends_with("/.devtools"))
        .collect();

    assert_eq!(suffix, vec!["/opt/custom/bin", "/usr/local/bin", "/usr/bin", "/bin"]);
}

#[test]
fn hook_snippet_round_trip_refreshes_path() {
    let home = TempDir::new().unwrap();
    let workspace = home.path().join("dev-tools");
    let repos = TempDir::new().unwrap();

    cargo_bin_cmd!("devtools")
        .env("DEVTOOLS_HOME", &workspace)
        .arg("init")
        .assert()
        .success();
    let root = linked_repo(&workspace, repos.path(), "proj");
    support::write_helper(&workspace.join("proj"), "say-hi", "hi");

    // Source the printed snippet in bash, cd into the repo, call the
    // helper by name. The devtools binary itself must stay resolvable,
    // so its directory is appended to PATH.
    let bin_dir = Path::new(env!("CARGO_BIN_EXE_devtools"))
        .parent()
        .unwrap()
        .to_path_buf();
    let script = format!(
        "source <(devtools hook print) && cd {} && say-hi",
        root.display()
    );
    let output = std::process::Command::new("bash")
        .arg("-c")
        .arg(&script)
        .env("DEVTOOLS_HOME", &workspace)
        .env("PATH", format!("/usr/bin:/bin:{}", bin_dir.display()))
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "hi");
}
