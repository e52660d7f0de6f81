//! Verdict and evaluation result models
//!
//! A verdict is the outcome of evaluating one rule against one snapshot.
//! Verdicts are ephemeral: they live for a single evaluation call and are
//! never persisted by the core.

use serde::{Deserialize, Serialize};

use super::rule::{Enforcement, Operator, Rule};

/// Outcome status of a single rule evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerdictStatus {
    /// Rule condition not met
    Pass,
    /// Rule triggered with soft enforcement
    Warn,
    /// Rule triggered with hard enforcement
    Fail,
    /// Rule's metric absent from the snapshot
    Skip,
}

impl std::fmt::Display for VerdictStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pass => write!(f, "pass"),
            Self::Warn => write!(f, "warn"),
            Self::Fail => write!(f, "fail"),
            Self::Skip => write!(f, "skip"),
        }
    }
}

/// Outcome of evaluating one rule against one metric snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// Evaluation status
    pub status: VerdictStatus,

    /// Metric key the rule applied to
    pub metric: String,

    /// Observed metric value (absent for skipped rules)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,

    /// Threshold the value was compared against (triggered verdicts only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,

    /// Operator that triggered (triggered verdicts only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<Operator>,

    /// Enforcement level of the rule (triggered verdicts only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enforcement: Option<Enforcement>,

    /// Human-readable explanation (triggered and skipped verdicts)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Verdict {
    /// Verdict for a rule whose metric is absent from the snapshot
    ///
    /// Skipping is not a failure: skipped verdicts appear in neither
    /// violations nor warnings.
    #[must_use]
    pub fn skip(metric: impl Into<String>) -> Self {
        Self {
            status: VerdictStatus::Skip,
            metric: metric.into(),
            value: None,
            threshold: None,
            operator: None,
            enforcement: None,
            message: Some("Metric not available".to_string()),
        }
    }

    /// Verdict for a rule whose condition was not met
    #[must_use]
    pub fn pass(metric: impl Into<String>, value: f64) -> Self {
        Self {
            status: VerdictStatus::Pass,
            metric: metric.into(),
            value: Some(value),
            threshold: None,
            operator: None,
            enforcement: None,
            message: None,
        }
    }

    /// Verdict for a triggered rule
    ///
    /// Hard enforcement fails the evaluation, soft enforcement warns.
    #[must_use]
    pub fn triggered(rule: &Rule, value: f64, message: String) -> Self {
        let status = match rule.enforcement {
            Enforcement::Hard => VerdictStatus::Fail,
            Enforcement::Soft => VerdictStatus::Warn,
        };
        Self {
            status,
            metric: rule.metric.clone(),
            value: Some(value),
            threshold: Some(rule.threshold),
            operator: Some(rule.operator),
            enforcement: Some(rule.enforcement),
            message: Some(message),
        }
    }
}

/// Aggregated result of evaluating a rule set against one snapshot
///
/// Invariant: `passed` is true exactly when `violations` is empty. Warnings
/// and skipped rules never affect `passed`. Both lists preserve rule-set
/// iteration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Whether the snapshot passed all hard rules
    pub passed: bool,

    /// Verdicts with status `fail`, in rule order
    pub violations: Vec<Verdict>,

    /// Verdicts with status `warn`, in rule order
    pub warnings: Vec<Verdict>,
}
