//! Gate configuration
//!
//! Rules, actions, and notification settings live in `perfgate.toml` next to
//! the project being audited. The stock configuration mirrors the Web Vitals
//! "good" thresholds.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::models::{Action, Enforcement, Operator, Rule};

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "perfgate.toml";

/// Notification settings shared by actions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    /// Fallback recipient for email actions without one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Full gate configuration: rules, actions, notification settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateConfig {
    /// Notification settings
    #[serde(default)]
    pub notifications: NotificationSettings,

    /// Threshold rules, in evaluation order
    #[serde(default)]
    pub rules: Vec<Rule>,

    /// Actions to fire on hard violations, in dispatch order
    #[serde(default)]
    pub actions: Vec<Action>,
}

impl Default for GateConfig {
    /// Stock Web Vitals thresholds plus a log action
    fn default() -> Self {
        Self {
            notifications: NotificationSettings::default(),
            rules: vec![
                Rule::new("lcp", 2500.0, Operator::Gt, Enforcement::Hard),
                Rule::new("cls", 0.1, Operator::Gt, Enforcement::Soft),
                Rule::new("fcp", 1800.0, Operator::Gt, Enforcement::Soft),
                Rule::new("fid", 100.0, Operator::Gt, Enforcement::Soft),
                Rule::new("ttfb", 800.0, Operator::Gt, Enforcement::Soft),
                Rule::new("performance_score", 90.0, Operator::Lt, Enforcement::Soft),
            ],
            actions: vec![Action::Log],
        }
    }
}

impl GateConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }

    /// Load configuration from `path`, or defaults when the file is absent
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration as pretty TOML
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self).context("failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("failed to write config {}", path.display()))?;
        Ok(())
    }

    /// The enabled rules, in configuration order
    ///
    /// The evaluation engine performs no enablement filtering of its own;
    /// this is the filter callers are expected to apply.
    #[must_use]
    pub fn enabled_rules(&self) -> Vec<Rule> {
        self.rules.iter().filter(|rule| rule.enabled).cloned().collect()
    }
}
