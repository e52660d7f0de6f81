//! Notification action dispatch
//!
//! Fires configured actions when an evaluation has hard violations. All
//! transports are injected ports; one action failing never prevents the
//! actions after it from running.

use std::time::Duration;

use serde_json::Value;

use crate::core::models::{Action, ActionKind, ActionOutcome, Evaluation};
use crate::core::ports::{LogSink, MailSender, WebhookTransport};

/// Timeout applied to webhook POSTs
pub const WEBHOOK_TIMEOUT: Duration = Duration::from_secs(5);

/// Subject used when an email action does not configure one
pub const DEFAULT_EMAIL_SUBJECT: &str = "Performance audit violation";

/// Dispatches notification actions over injected transports
///
/// Holds no state between calls; a dispatcher may be reused across
/// evaluations or rebuilt per call, whichever suits the caller.
pub struct Dispatcher<'a> {
    log: &'a dyn LogSink,
    mail: &'a dyn MailSender,
    webhook: &'a dyn WebhookTransport,
    fallback_recipient: Option<String>,
}

impl std::fmt::Debug for Dispatcher<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("fallback_recipient", &self.fallback_recipient)
            .finish_non_exhaustive()
    }
}

impl<'a> Dispatcher<'a> {
    /// Create a dispatcher over the given transports
    #[must_use]
    pub const fn new(
        log: &'a dyn LogSink,
        mail: &'a dyn MailSender,
        webhook: &'a dyn WebhookTransport,
    ) -> Self {
        Self {
            log,
            mail,
            webhook,
            fallback_recipient: None,
        }
    }

    /// Set the recipient used by email actions that configure none
    #[must_use]
    pub fn with_fallback_recipient(mut self, recipient: impl Into<String>) -> Self {
        self.fallback_recipient = Some(recipient.into());
        self
    }

    /// Execute the configured actions for an evaluation
    ///
    /// Actions fire only on hard violations: a passing evaluation (warnings
    /// included) yields an empty outcome list without touching any
    /// transport. Outcomes come back in action-list order, one per
    /// recognized action; unrecognized action types produce no entry and do
    /// not abort the actions after them.
    #[must_use]
    pub fn execute_actions(
        &self,
        evaluation: &Evaluation,
        actions: &[Action],
    ) -> Vec<ActionOutcome> {
        if evaluation.passed || evaluation.violations.is_empty() {
            return Vec::new();
        }

        actions
            .iter()
            .filter_map(|action| self.execute_action(action, evaluation))
            .collect()
    }

    fn execute_action(&self, action: &Action, evaluation: &Evaluation) -> Option<ActionOutcome> {
        match action {
            Action::Log => Some(self.log_violations(evaluation)),
            Action::Email { recipient, subject } => {
                Some(self.send_email(recipient.as_deref(), subject.as_deref(), evaluation))
            },
            Action::Webhook { url } => Some(self.send_webhook(url.as_deref(), evaluation)),
            Action::Unknown => None,
        }
    }

    fn log_violations(&self, evaluation: &Evaluation) -> ActionOutcome {
        let context = serde_json::to_value(evaluation).unwrap_or(Value::Null);
        self.log.write("performance rule violations detected", &context);

        // Logging is best-effort; failure is never surfaced.
        ActionOutcome::success(ActionKind::Log, None)
    }

    fn send_email(
        &self,
        recipient: Option<&str>,
        subject: Option<&str>,
        evaluation: &Evaluation,
    ) -> ActionOutcome {
        let Some(recipient) = recipient.or(self.fallback_recipient.as_deref()) else {
            return ActionOutcome::failure(ActionKind::Email, "Email recipient not configured");
        };

        let subject = subject.unwrap_or(DEFAULT_EMAIL_SUBJECT);
        let body = email_body(evaluation);

        match self.mail.send(recipient, subject, &body) {
            Ok(sent) => ActionOutcome {
                kind: ActionKind::Email,
                success: sent,
                detail: Some(recipient.to_string()),
            },
            Err(err) => ActionOutcome::failure(
                ActionKind::Email,
                format!("send to {recipient} failed: {err}"),
            ),
        }
    }

    fn send_webhook(&self, url: Option<&str>, evaluation: &Evaluation) -> ActionOutcome {
        let url = url.unwrap_or_default();
        if url.trim().is_empty() {
            return ActionOutcome::failure(ActionKind::Webhook, "Webhook URL not configured");
        }

        let body = serde_json::to_value(evaluation).unwrap_or(Value::Null);
        match self.webhook.post_json(url, &body, WEBHOOK_TIMEOUT) {
            Ok(200) => ActionOutcome::success(ActionKind::Webhook, Some(url.to_string())),
            Ok(status) => ActionOutcome::failure(
                ActionKind::Webhook,
                format!("{url} responded with HTTP {status}"),
            ),
            Err(err) => {
                ActionOutcome::failure(ActionKind::Webhook, format!("POST {url} failed: {err}"))
            },
        }
    }
}

/// Render the multi-line email body for an evaluation
///
/// One `- <metric>: <message>` line per violation, matching the template the
/// original notification emails used.
fn email_body(evaluation: &Evaluation) -> String {
    let mut body = String::from("Performance audit violations detected:\n\n");
    for violation in &evaluation.violations {
        body.push_str(&format!(
            "- {}: {}\n",
            violation.metric,
            violation.message.as_deref().unwrap_or_default()
        ));
    }
    body
}
