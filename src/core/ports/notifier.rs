//! Notification transport ports
//!
//! Defines the interfaces for the log, mail, and webhook collaborators the
//! dispatcher drives. Timeouts are enforced by the implementations, not by
//! the core.

use std::time::Duration;

use serde_json::Value;

/// Structured log sink
///
/// Logging is best-effort by contract: implementations do not report
/// failure, and a log action always counts as successful.
#[cfg_attr(test, mockall::automock)]
pub trait LogSink: Send + Sync {
    /// Write a message with structured context
    fn write(&self, message: &str, context: &Value);
}

/// Outbound mail collaborator
#[cfg_attr(test, mockall::automock)]
pub trait MailSender: Send + Sync {
    /// Send a plain-text message, returning whether delivery was accepted
    fn send(&self, recipient: &str, subject: &str, body: &str) -> anyhow::Result<bool>;
}

/// Outbound HTTP POST collaborator
#[cfg_attr(test, mockall::automock)]
pub trait WebhookTransport: Send + Sync {
    /// POST a JSON body to `url`, returning the HTTP status code
    ///
    /// Implementations send `Content-Type: application/json` and abort the
    /// call once `timeout` elapses.
    fn post_json(&self, url: &str, body: &Value, timeout: Duration) -> anyhow::Result<u16>;
}
