use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn print_emits_the_snippet() {
    cargo_bin_cmd!("devtools")
        .args(["hook", "print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("devtools shell hook"))
        .stdout(predicate::str::contains("devtools path"))
        .stdout(predicate::str::contains("builtin cd"));
}

#[test]
fn install_writes_hook_and_sources_it() {
    let home = TempDir::new().unwrap();
    let config = home.path().join(".config");

    cargo_bin_cmd!("devtools")
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", &config)
        .args(["hook", "install"])
        .assert()
        .success();

    let hook = config.join("devtools").join("hook.bash");
    assert!(hook.exists());

    for rc in [".bash_profile", ".bashrc"] {
        let content = fs::read_to_string(home.path().join(rc)).unwrap();
        assert!(content.contains("hook.bash"), "{rc} should source the hook");
    }
}

#[test]
fn install_twice_adds_one_source_line() {
    let home = TempDir::new().unwrap();
    let config = home.path().join(".config");

    for _ in 0..2 {
        cargo_bin_cmd!("devtools")
            .env("HOME", home.path())
            .env("XDG_CONFIG_HOME", &config)
            .args(["hook", "install"])
            .assert()
            .success();
    }

    let content = fs::read_to_string(home.path().join(".bashrc")).unwrap();
    assert_eq!(content.matches("hook.bash").count(), 1);
}

#[test]
fn uninstall_reverts_install() {
    let home = TempDir::new().unwrap();
    let config = home.path().join(".config");
    fs::create_dir_all(home.path()).unwrap();
    fs::write(home.path().join(".bashrc"), "export EDITOR=vim\n").unwrap();

    cargo_bin_cmd!("devtools")
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", &config)
        .args(["hook", "install"])
        .assert()
        .success();

    cargo_bin_cmd!("devtools")
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", &config)
        .args(["hook", "uninstall"])
        .assert()
        .success();

    assert!(!config.join("devtools").join("hook.bash").exists());
    let content = fs::read_to_string(home.path().join(".bashrc")).unwrap();
    assert_eq!(content, "export EDITOR=vim\n");
}

#[test]
fn uninstall_without_install_succeeds() {
    let home = TempDir::new().unwrap();

    cargo_bin_cmd!("devtools")
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .args(["hook", "uninstall"])
        .assert()
        .success();
}
