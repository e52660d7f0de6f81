//! Evaluate a metric snapshot against the configured rules

use std::fs;
use std::path::Path;

use anyhow::Context;

use perfgate::adapters::{HttpWebhook, LogMailer, StructuredLogSink};
use perfgate::config::GateConfig;
use perfgate::core::models::{rules_from_json, MetricSnapshot, Rule};
use perfgate::core::services::{evaluate, Dispatcher};
use perfgate::output::{EvaluationReport, OutputMode};

/// Evaluate a metrics file, optionally dispatching notification actions
pub fn check(
    metrics_path: &Path,
    config_path: &Path,
    rules_path: Option<&Path>,
    dispatch: bool,
    ci: bool,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let config = GateConfig::load_or_default(config_path)?;

    let metrics = read_metrics(metrics_path)?;
    let rules = match rules_path {
        Some(path) => read_rules(path)?,
        None => config.enabled_rules(),
    };

    let evaluation = evaluate(&metrics, &rules);

    let action_results = if dispatch {
        let log = StructuredLogSink;
        let mail = LogMailer;
        let webhook = HttpWebhook::new();

        let mut dispatcher = Dispatcher::new(&log, &mail, &webhook);
        if let Some(email) = &config.notifications.email {
            dispatcher = dispatcher.with_fallback_recipient(email.as_str());
        }
        dispatcher.execute_actions(&evaluation, &config.actions)
    } else {
        Vec::new()
    };

    let passed = evaluation.passed;
    let report = EvaluationReport::new(evaluation, action_results);
    report.render(mode);

    if !passed {
        if !ci {
            std::process::exit(1);
        }
        anyhow::bail!("performance gate failed");
    }

    Ok(())
}

fn read_metrics(path: &Path) -> anyhow::Result<MetricSnapshot> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read metrics {}", path.display()))?;
    let value = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse metrics {}", path.display()))?;
    Ok(MetricSnapshot::from_json(value)?)
}

fn read_rules(path: &Path) -> anyhow::Result<Vec<Rule>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read rules {}", path.display()))?;
    let value = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse rules {}", path.display()))?;
    let rules = rules_from_json(value)?;
    Ok(rules.into_iter().filter(|rule| rule.enabled).collect())
}
