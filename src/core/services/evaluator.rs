//! Single-rule evaluation
//!
//! Pure functions: one metric snapshot and one rule in, one verdict out.

use crate::core::models::{metric_label, MetricSnapshot, Operator, Rule, Verdict};

/// Evaluate one rule against a metric snapshot
///
/// A rule whose metric is absent from the snapshot skips; skipping is not a
/// failure. Present values go through lenient float coercion (see
/// [`MetricSnapshot::value_of`]) before the comparison.
#[must_use]
pub fn evaluate_rule(metrics: &MetricSnapshot, rule: &Rule) -> Verdict {
    let Some(value) = metrics.value_of(&rule.metric) else {
        return Verdict::skip(&rule.metric);
    };

    if rule.operator.triggers(value, rule.threshold) {
        let message = violation_message(&rule.metric, value, rule.threshold, rule.operator);
        Verdict::triggered(rule, value, message)
    } else {
        Verdict::pass(&rule.metric, value)
    }
}

/// Render the human-readable message for a triggered rule
///
/// Format: `"<Label> is <phrase> (value: X.XX, threshold: Y.YY)"` with
/// two-decimal fixed formatting. Operators without a phrase (`eq`, `neq`)
/// fall back to their raw token.
#[must_use]
pub fn violation_message(metric: &str, value: f64, threshold: f64, operator: Operator) -> String {
    let label = metric_label(metric);
    let phrase = operator.phrase().unwrap_or_else(|| operator.as_str());
    format!("{label} is {phrase} (value: {value:.2}, threshold: {threshold:.2})")
}
