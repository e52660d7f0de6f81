//! Core domain logic for perfgate
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`MetricSnapshot`, `Rule`, `Verdict`, `Action`)
//! - `services/` - Rule evaluation and action dispatch
//! - `ports/` - Trait definitions for notification transports

pub mod models;
pub mod ports;
pub mod services;
