//! Rule-set orchestration
//!
//! Runs the evaluator over an ordered rule set and aggregates verdicts into
//! an overall evaluation.

use crate::core::models::{Evaluation, MetricSnapshot, Rule, VerdictStatus};

use super::evaluator::evaluate_rule;

/// Evaluate an ordered rule set against one metric snapshot
///
/// Callers must pass only rules with `enabled == true`; no enablement
/// filtering happens here (the config layer provides
/// [`crate::config::GateConfig::enabled_rules`] for that). Rules are
/// evaluated in the given order and violations/warnings preserve that order.
///
/// Pure and deterministic: no I/O, no shared state, identical inputs yield
/// identical results.
#[must_use]
pub fn evaluate(metrics: &MetricSnapshot, rules: &[Rule]) -> Evaluation {
    let mut violations = Vec::new();
    let mut warnings = Vec::new();

    for rule in rules {
        let verdict = evaluate_rule(metrics, rule);
        match verdict.status {
            VerdictStatus::Fail => violations.push(verdict),
            VerdictStatus::Warn => warnings.push(verdict),
            VerdictStatus::Pass | VerdictStatus::Skip => {},
        }
    }

    Evaluation {
        passed: violations.is_empty(),
        violations,
        warnings,
    }
}
