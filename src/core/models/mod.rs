//! Domain types for rule evaluation
//!
//! These types mirror the shapes exchanged with external collaborators:
//! metric snapshots come from audit workers or the RUM intake, rules and
//! actions come from configuration, verdicts and outcomes go back out.

mod action;
mod metrics;
mod rule;
mod verdict;

pub use action::{Action, ActionKind, ActionOutcome};
pub use metrics::{metric_label, InputError, MetricSnapshot};
pub use rule::{rules_from_json, Enforcement, Operator, Rule, EQ_EPSILON};
pub use verdict::{Evaluation, Verdict, VerdictStatus};
