//! End-to-end tests for `perfgate check`

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn perfgate(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("perfgate").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

fn write(dir: &TempDir, name: &str, content: &str) {
    std::fs::write(dir.path().join(name), content).unwrap();
}

const CONFIG: &str = r#"
[[rules]]
metric = "lcp"
threshold = 2500.0
operator = "gt"
enforcement = "hard"

[[rules]]
metric = "cls"
threshold = 0.1
operator = "gt"
enforcement = "soft"

[[actions]]
type = "log"
"#;

#[test]
fn passing_snapshot_exits_zero() {
    let dir = TempDir::new().unwrap();
    write(&dir, "perfgate.toml", CONFIG);
    write(&dir, "metrics.json", r#"{"lcp": 2000.0, "cls": 0.05}"#);

    perfgate(&dir)
        .args(["check", "--metrics", "metrics.json", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"passed\": true"));
}

#[test]
fn hard_violation_exits_one_with_report() {
    let dir = TempDir::new().unwrap();
    write(&dir, "perfgate.toml", CONFIG);
    write(&dir, "metrics.json", r#"{"lcp": 2600.0}"#);

    perfgate(&dir)
        .args(["check", "--metrics", "metrics.json", "--json"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("\"passed\": false"))
        .stdout(predicate::str::contains(
            "Largest Contentful Paint is greater than (value: 2600.00, threshold: 2500.00)",
        ));
}

#[test]
fn warnings_alone_exit_zero() {
    let dir = TempDir::new().unwrap();
    write(&dir, "perfgate.toml", CONFIG);
    write(&dir, "metrics.json", r#"{"lcp": 2000.0, "cls": 0.3}"#);

    perfgate(&dir)
        .args(["check", "--metrics", "metrics.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Warnings:"))
        .stdout(predicate::str::contains("PASSED"));
}

#[test]
fn dispatch_reports_action_outcomes() {
    let dir = TempDir::new().unwrap();
    write(&dir, "perfgate.toml", CONFIG);
    write(&dir, "metrics.json", r#"{"lcp": 2600.0}"#);

    perfgate(&dir)
        .args(["check", "--metrics", "metrics.json", "--dispatch", "--json"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("\"action_results\""))
        .stdout(predicate::str::contains("\"type\": \"log\""));
}

#[test]
fn non_object_metrics_fail_fast() {
    let dir = TempDir::new().unwrap();
    write(&dir, "perfgate.toml", CONFIG);
    write(&dir, "metrics.json", "[1, 2, 3]");

    perfgate(&dir)
        .args(["check", "--metrics", "metrics.json"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("must be a JSON object"));
}

#[test]
fn rules_override_accepts_a_json_list() {
    let dir = TempDir::new().unwrap();
    write(&dir, "perfgate.toml", CONFIG);
    write(&dir, "metrics.json", r#"{"ttfb": 900.0}"#);
    write(
        &dir,
        "rules.json",
        r#"[{"metric": "ttfb", "threshold": 800.0, "operator": "gt", "enforcement": "hard"}]"#,
    );

    perfgate(&dir)
        .args([
            "check",
            "--metrics",
            "metrics.json",
            "--rules",
            "rules.json",
            "--json",
        ])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("\"metric\": \"ttfb\""));
}

#[test]
fn ci_mode_reports_failure_through_the_error_path() {
    let dir = TempDir::new().unwrap();
    write(&dir, "perfgate.toml", CONFIG);
    write(&dir, "metrics.json", r#"{"lcp": 2600.0}"#);

    perfgate(&dir)
        .args(["check", "--metrics", "metrics.json", "--ci"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("performance gate failed"));
}
