//! Rule evaluation and action dispatch services
//!
//! - `evaluator` - single-rule evaluation (pure)
//! - `engine` - rule-set orchestration (pure)
//! - `dispatcher` - notification fan-out over injected transports

mod dispatcher;
mod engine;
mod evaluator;

pub use dispatcher::{Dispatcher, DEFAULT_EMAIL_SUBJECT, WEBHOOK_TIMEOUT};
pub use engine::evaluate;
pub use evaluator::{evaluate_rule, violation_message};
