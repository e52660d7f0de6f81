//! Structured log sink adapter
//!
//! Writes through the `log` facade; the binary installs `env_logger` so the
//! entries end up on stderr with level and timestamp prefixes.

use serde_json::Value;

use crate::core::ports::LogSink;

/// Log sink backed by the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuredLogSink;

impl LogSink for StructuredLogSink {
    fn write(&self, message: &str, context: &Value) {
        log::error!("{message} | context: {context}");
    }
}
