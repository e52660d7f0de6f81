//! End-to-end tests for `perfgate init` and `perfgate rules`

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn perfgate(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("perfgate").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn init_writes_default_config() {
    let dir = TempDir::new().unwrap();

    perfgate(&dir).arg("init").assert().success();
    assert!(dir.path().join("perfgate.toml").exists());

    perfgate(&dir)
        .args(["rules", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"metric\": \"lcp\""))
        .stdout(predicate::str::contains("\"enforcement\": \"hard\""));
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let dir = TempDir::new().unwrap();

    perfgate(&dir).arg("init").assert().success();
    perfgate(&dir)
        .arg("init")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("already exists"));

    perfgate(&dir).args(["init", "--force"]).assert().success();
}
