//! Mail sender adapter
//!
//! The CLI has no SMTP credentials of its own; delivery belongs to the
//! embedding host. This adapter records the outgoing message through the log
//! facade and reports it as accepted, which keeps `--dispatch` runs useful
//! for wiring checks. Hosts that can deliver mail implement
//! [`MailSender`](crate::core::ports::MailSender) themselves.

use crate::core::ports::MailSender;

/// Mail sender that records messages instead of delivering them
#[derive(Debug, Clone, Copy, Default)]
pub struct LogMailer;

impl MailSender for LogMailer {
    fn send(&self, recipient: &str, subject: &str, body: &str) -> anyhow::Result<bool> {
        log::info!("mail to {recipient}: {subject}\n{body}");
        Ok(true)
    }
}
