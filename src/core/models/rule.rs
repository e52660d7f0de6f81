//! Threshold rule model
//!
//! A rule declares: "When this metric crosses this threshold, flag it."
//! Rules are configuration loaded externally; the engine never mutates them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::metrics::{json_type_name, InputError};

/// Tolerance for the `eq`/`neq` operators
///
/// Equality on floats is epsilon-based, never exact.
pub const EQ_EPSILON: f64 = 1e-4;

/// Comparison operator of a rule
///
/// The operator expresses the *violation* condition: `gt` means "flag when
/// the value is greater than the threshold".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Operator {
    /// Value is greater than the threshold
    #[default]
    Gt,
    /// Value is greater than or equal to the threshold
    Gte,
    /// Value is less than the threshold
    Lt,
    /// Value is less than or equal to the threshold
    Lte,
    /// Value equals the threshold (within [`EQ_EPSILON`])
    Eq,
    /// Value differs from the threshold (by at least [`EQ_EPSILON`])
    Neq,
    /// Unrecognized operator token
    ///
    /// A misconfigured operator must never crash evaluation: an unknown
    /// operator never triggers, so the rule resolves to `pass`.
    Unknown,
}

impl From<String> for Operator {
    fn from(token: String) -> Self {
        match token.as_str() {
            "gt" => Self::Gt,
            "gte" => Self::Gte,
            "lt" => Self::Lt,
            "lte" => Self::Lte,
            "eq" => Self::Eq,
            "neq" => Self::Neq,
            _ => Self::Unknown,
        }
    }
}

impl Operator {
    /// Whether `value` violates the threshold under this operator
    #[must_use]
    pub fn triggers(self, value: f64, threshold: f64) -> bool {
        match self {
            Self::Gt => value > threshold,
            Self::Gte => value >= threshold,
            Self::Lt => value < threshold,
            Self::Lte => value <= threshold,
            Self::Eq => (value - threshold).abs() < EQ_EPSILON,
            Self::Neq => (value - threshold).abs() >= EQ_EPSILON,
            Self::Unknown => false,
        }
    }

    /// Human phrase for violation messages
    ///
    /// Only the ordering operators have phrases; `eq`/`neq` fall back to the
    /// raw token in messages, matching the output the notification templates
    /// were written against.
    #[must_use]
    pub const fn phrase(self) -> Option<&'static str> {
        match self {
            Self::Gt => Some("greater than"),
            Self::Gte => Some("greater than or equal to"),
            Self::Lt => Some("less than"),
            Self::Lte => Some("less than or equal to"),
            Self::Eq | Self::Neq | Self::Unknown => None,
        }
    }

    /// The wire token for this operator
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gt => "gt",
            Self::Gte => "gte",
            Self::Lt => "lt",
            Self::Lte => "lte",
            Self::Eq => "eq",
            Self::Neq => "neq",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Enforcement level of a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Enforcement {
    /// Triggered rule counts as a warning only
    #[default]
    Soft,
    /// Triggered rule fails the evaluation
    Hard,
}

impl std::fmt::Display for Enforcement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Soft => write!(f, "soft"),
            Self::Hard => write!(f, "hard"),
        }
    }
}

/// A configured threshold check against one metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Metric key this rule applies to (e.g. `lcp`)
    pub metric: String,

    /// Threshold the metric value is compared against
    pub threshold: f64,

    /// Violation condition (defaults to `gt`)
    #[serde(default)]
    pub operator: Operator,

    /// Whether a triggered rule fails or merely warns (defaults to `soft`)
    #[serde(default)]
    pub enforcement: Enforcement,

    /// Whether this rule participates in evaluation (defaults to `true`)
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

const fn default_enabled() -> bool {
    true
}

impl Rule {
    /// Create an enabled rule
    #[must_use]
    pub fn new(
        metric: impl Into<String>,
        threshold: f64,
        operator: Operator,
        enforcement: Enforcement,
    ) -> Self {
        Self {
            metric: metric.into(),
            threshold,
            operator,
            enforcement,
            enabled: true,
        }
    }
}

/// Validate a raw JSON payload as an ordered rule list
///
/// Fails fast when the payload is not a JSON array or an element does not
/// match the [`Rule`] shape. Unknown operator *tokens* inside an otherwise
/// well-formed rule are accepted (they deserialize to [`Operator::Unknown`]).
pub fn rules_from_json(value: Value) -> Result<Vec<Rule>, InputError> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                serde_json::from_value(item).map_err(|err| InputError::InvalidRule {
                    index,
                    message: err.to_string(),
                })
            })
            .collect(),
        other => Err(InputError::RulesNotArray(json_type_name(&other))),
    }
}
