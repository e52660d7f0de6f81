//! Infrastructure adapters implementing the core ports
//!
//! - `log` - structured log sink over the `log` facade
//! - `mail` - mail sender that records through the log facade
//! - `webhook` - blocking HTTP POST transport over `reqwest`

pub mod log;
pub mod mail;
pub mod webhook;

pub use self::log::StructuredLogSink;
pub use self::mail::LogMailer;
pub use self::webhook::HttpWebhook;
