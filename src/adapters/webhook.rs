//! Webhook transport adapter
//!
//! Blocking `reqwest` client posting JSON bodies. The per-call timeout comes
//! from the dispatcher; the adapter enforces it on each request.

use std::time::Duration;

use serde_json::Value;

use crate::core::ports::WebhookTransport;

/// HTTP POST transport over a blocking `reqwest` client
#[derive(Debug, Default)]
pub struct HttpWebhook {
    client: reqwest::blocking::Client,
}

impl HttpWebhook {
    /// Create a transport with a fresh client
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl WebhookTransport for HttpWebhook {
    fn post_json(&self, url: &str, body: &Value, timeout: Duration) -> anyhow::Result<u16> {
        let response = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .timeout(timeout)
            .json(body)
            .send()?;
        Ok(response.status().as_u16())
    }
}
