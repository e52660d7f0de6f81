//! Configuration loading and boundary validation

use perfgate::config::GateConfig;
use perfgate::core::models::{rules_from_json, Enforcement, MetricSnapshot, Operator};
use serde_json::json;

#[test]
fn load_reads_rules_actions_and_notifications() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("perfgate.toml");
    std::fs::write(
        &path,
        r#"
        [notifications]
        email = "ops@example.com"

        [[rules]]
        metric = "lcp"
        threshold = 2500.0
        operator = "gt"
        enforcement = "hard"

        [[rules]]
        metric = "cls"
        threshold = 0.1
        enabled = false

        [[actions]]
        type = "log"

        [[actions]]
        type = "email"
        recipient = "oncall@example.com"
        "#,
    )
    .unwrap();

    let config = GateConfig::load(&path).unwrap();
    assert_eq!(config.notifications.email.as_deref(), Some("ops@example.com"));
    assert_eq!(config.rules.len(), 2);
    assert_eq!(config.rules[0].enforcement, Enforcement::Hard);
    assert_eq!(config.actions.len(), 2);

    // The disabled cls rule drops out of the evaluation set.
    let enabled = config.enabled_rules();
    assert_eq!(enabled.len(), 1);
    assert_eq!(enabled[0].metric, "lcp");
}

#[test]
fn load_or_default_falls_back_when_absent() {
    let dir = tempfile::tempdir().unwrap();
    let config = GateConfig::load_or_default(&dir.path().join("missing.toml")).unwrap();
    assert_eq!(config, GateConfig::default());
    assert!(config.rules.iter().any(|rule| rule.metric == "lcp"));
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("perfgate.toml");

    let config = GateConfig::default();
    config.save(&path).unwrap();
    let loaded = GateConfig::load(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn metrics_boundary_rejects_wrong_shapes() {
    assert!(MetricSnapshot::from_json(json!({"lcp": 1.0})).is_ok());
    assert!(MetricSnapshot::from_json(json!([])).is_err());
    assert!(MetricSnapshot::from_json(json!("lcp")).is_err());
    assert!(MetricSnapshot::from_json(json!(null)).is_err());
}

#[test]
fn rules_boundary_rejects_wrong_shapes() {
    let rules = rules_from_json(json!([
        {"metric": "lcp", "threshold": 2500.0, "operator": "gt"},
        {"metric": "fid", "threshold": 100.0, "operator": "someday"},
    ]))
    .unwrap();
    assert_eq!(rules[0].operator, Operator::Gt);
    // Unknown operator token is config-level leniency, not an input error.
    assert_eq!(rules[1].operator, Operator::Unknown);

    assert!(rules_from_json(json!({"metric": "lcp"})).is_err());
    assert!(rules_from_json(json!(7)).is_err());
}
