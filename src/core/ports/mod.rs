//! Port traits for external collaborators
//!
//! The core performs no I/O of its own; every transport is injected through
//! these traits so evaluation and dispatch stay pure and testable.

mod notifier;

pub use notifier::{LogSink, MailSender, WebhookTransport};

#[cfg(test)]
pub use notifier::{MockLogSink, MockMailSender, MockWebhookTransport};
