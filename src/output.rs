//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{ActionOutcome, Evaluation, Rule, Verdict};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of an evaluate-and-dispatch run
///
/// This is the shape exposed at the process boundary: the evaluation plus
/// the outcome of every dispatched action.
#[derive(Debug, Serialize)]
pub struct EvaluationReport {
    /// Whether the snapshot passed all hard rules
    pub passed: bool,
    /// Hard violations, in rule order
    pub violations: Vec<Verdict>,
    /// Soft warnings, in rule order
    pub warnings: Vec<Verdict>,
    /// Outcomes of dispatched actions, in action order
    pub action_results: Vec<ActionOutcome>,
    /// When the report was generated (RFC 3339)
    pub generated_at: String,
}

impl EvaluationReport {
    /// Build a report from an evaluation and its action outcomes
    #[must_use]
    pub fn new(evaluation: Evaluation, action_results: Vec<ActionOutcome>) -> Self {
        Self {
            passed: evaluation.passed,
            violations: evaluation.violations,
            warnings: evaluation.warnings,
            action_results,
            generated_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if !self.warnings.is_empty() {
            println!("Warnings:");
            for verdict in &self.warnings {
                println!(
                    "  [{}] {}",
                    verdict.metric,
                    verdict.message.as_deref().unwrap_or_default()
                );
            }
            println!();
        }

        if self.passed {
            println!("{}", "PASSED: all hard rules satisfied".green());
        } else {
            println!("Violations:");
            for verdict in &self.violations {
                println!(
                    "  [{}] {}",
                    verdict.metric,
                    verdict.message.as_deref().unwrap_or_default()
                );
            }
            println!();
            println!(
                "{}",
                format!("FAILED: {} hard violation(s)", self.violations.len()).red()
            );
        }

        if !self.action_results.is_empty() {
            println!("\nActions:");
            for outcome in &self.action_results {
                let status = if outcome.success { "ok" } else { "failed" };
                match &outcome.detail {
                    Some(detail) => println!("  {} {status} ({detail})", outcome.kind),
                    None => println!("  {} {status}", outcome.kind),
                }
            }
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Result of a rules listing operation
#[derive(Debug, Serialize)]
pub struct RuleListResult {
    /// Configured rules, in evaluation order
    pub rules: Vec<Rule>,
}

impl RuleListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.rules.is_empty() {
            println!("No rules configured.");
            return;
        }

        println!("Rules:\n");
        for rule in &self.rules {
            let state = if rule.enabled { "enabled" } else { "disabled" };
            println!(
                "  [{}] {} {} {:.2} ({state})",
                rule.enforcement.to_string().to_uppercase(),
                rule.metric,
                rule.operator,
                rule.threshold
            );
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
