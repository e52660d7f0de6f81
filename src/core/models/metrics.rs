//! Metric snapshot model
//!
//! A snapshot is the raw key/value payload produced by an audit worker or
//! the RUM intake. Values arrive as arbitrary JSON; numeric access is
//! deliberately lenient (see [`MetricSnapshot::value_of`]).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Boundary validation errors for caller-supplied payloads
///
/// These are the only errors the core surfaces to its caller. Everything
/// else (unknown operators, unknown action types, missing metrics) degrades
/// gracefully instead of failing.
#[derive(Debug, Clone, thiserror::Error)]
pub enum InputError {
    /// The metrics payload was not a JSON object
    #[error("metrics payload must be a JSON object, got {0}")]
    MetricsNotObject(&'static str),

    /// The rules payload was not a JSON array
    #[error("rules payload must be a JSON array, got {0}")]
    RulesNotArray(&'static str),

    /// A rule record inside the rules array did not match the Rule shape
    #[error("invalid rule at index {index}: {message}")]
    InvalidRule {
        /// Position of the offending record in the rules array
        index: usize,
        /// Underlying deserialization error
        message: String,
    },
}

/// A snapshot of metric values, keyed by metric name
///
/// Keys come from the Web Vitals vocabulary (`lcp`, `fid`, `cls`, `fcp`,
/// `ttfb`, `performance_score`, ...) but the snapshot accepts any key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricSnapshot(HashMap<String, Value>);

impl MetricSnapshot {
    /// Create an empty snapshot
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a raw JSON payload as a metric snapshot
    ///
    /// Fails fast when the payload is not a JSON object; this is the one
    /// shape check performed before any per-rule logic runs.
    pub fn from_json(value: Value) -> Result<Self, InputError> {
        match value {
            Value::Object(map) => Ok(Self(map.into_iter().collect())),
            other => Err(InputError::MetricsNotObject(json_type_name(&other))),
        }
    }

    /// Insert a metric value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Whether the snapshot contains a value for `key`
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Numeric value of a metric, with lenient coercion
    ///
    /// Returns `None` only when the key is absent. Present values coerce
    /// the way the upstream PHP collectors did: numbers pass through,
    /// booleans map to 1.0/0.0, strings parse their leading numeric prefix
    /// (`"2500ms"` -> 2500.0), and anything else coerces to 0.0. This is a
    /// documented design choice, not an error path: snapshot producers are
    /// loosely typed and a malformed value must not abort an audit.
    #[must_use]
    pub fn value_of(&self, key: &str) -> Option<f64> {
        self.0.get(key).map(coerce_float)
    }

    /// Number of metrics in the snapshot
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the snapshot holds no metrics
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for MetricSnapshot {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Human-readable label for a metric key
///
/// Unknown keys pass through verbatim so that custom metrics still render.
#[must_use]
pub fn metric_label(key: &str) -> &str {
    match key {
        "lcp" => "Largest Contentful Paint",
        "fid" => "First Input Delay",
        "cls" => "Cumulative Layout Shift",
        "fcp" => "First Contentful Paint",
        "ttfb" => "Time to First Byte",
        "performance_score" => "Performance Score",
        other => other,
    }
}

/// JSON type name for error messages
pub(crate) const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn coerce_float(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::String(s) => parse_float_prefix(s),
        _ => 0.0,
    }
}

/// Parse the leading numeric prefix of a string, `floatval` style
fn parse_float_prefix(s: &str) -> f64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let mut seen_digit = false;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        seen_digit = true;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            seen_digit = true;
        }
    }
    if !seen_digit {
        return 0.0;
    }
    s[..end].parse().unwrap_or(0.0)
}
