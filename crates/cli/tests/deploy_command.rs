#![cfg(unix)]

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

fn make_config(root: &std::path::Path, deploy_command: &str) -> std::path::PathBuf {
    let cfg_path = root.join("config.toml");
    fs::write(
        &cfg_path,
        format!(
            r#"
version = 1
profile = "test"

[profiles.test]
hexo_root = "{}"
deploy_command = "{deploy_command}"
"#,
            root.display()
        ),
    )
    .unwrap();
    cfg_path
}

#[test]
fn deploy_succeeds_on_zero_exit() {
    let tmp = tempdir().unwrap();
    let cfg = make_config(tmp.path(), "true");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("hexokit"));
    cmd.arg("--config").arg(&cfg).arg("deploy");

    cmd.assert().success().stdout(predicate::str::contains("OK   hexokit deploy"));
}

#[test]
fn deploy_fails_on_nonzero_exit() {
    let tmp = tempdir().unwrap();
    let cfg = make_config(tmp.path(), "false");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("hexokit"));
    cmd.arg("--config").arg(&cfg).arg("deploy");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("FAIL hexokit deploy"));
}
