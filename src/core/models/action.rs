//! Notification action model
//!
//! Actions are configuration: they describe the side effects to fire when an
//! evaluation has hard violations.

use serde::{Deserialize, Serialize};

/// A configured notification action
///
/// Tagged by `type` on the wire, matching the shape the settings UI stores.
/// Unrecognized types deserialize to [`Action::Unknown`], which the
/// dispatcher silently skips; a stale action record must never abort the
/// actions that follow it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Action {
    /// Write the violations to the structured log
    Log,

    /// Send an email summary of the violations
    Email {
        /// Recipient address; falls back to the configured notification email
        #[serde(default, skip_serializing_if = "Option::is_none")]
        recipient: Option<String>,

        /// Subject line; falls back to a stock subject
        #[serde(default, skip_serializing_if = "Option::is_none")]
        subject: Option<String>,
    },

    /// POST the evaluation as JSON to a webhook
    Webhook {
        /// Target URL; an empty or missing URL fails the action without a call
        #[serde(default, skip_serializing_if = "Option::is_none")]
        url: Option<String>,
    },

    /// Unrecognized action type (skipped at dispatch)
    #[serde(other)]
    Unknown,
}

/// Discriminant of an attempted action, used in outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    /// Structured log write
    Log,
    /// Email send
    Email,
    /// Webhook POST
    Webhook,
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Log => write!(f, "log"),
            Self::Email => write!(f, "email"),
            Self::Webhook => write!(f, "webhook"),
        }
    }
}

/// Result of one attempted action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionOutcome {
    /// Which kind of action was attempted
    #[serde(rename = "type")]
    pub kind: ActionKind,

    /// Whether the action reported success
    pub success: bool,

    /// Transport detail: recipient, URL, or error description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ActionOutcome {
    /// Successful outcome with optional detail
    #[must_use]
    pub const fn success(kind: ActionKind, detail: Option<String>) -> Self {
        Self {
            kind,
            success: true,
            detail,
        }
    }

    /// Failed outcome with a description of what went wrong
    #[must_use]
    pub fn failure(kind: ActionKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            success: false,
            detail: Some(detail.into()),
        }
    }
}
