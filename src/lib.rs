//! Watches a single apartment listing page and reports two-bedroom
//! availability through the process exit code.

pub mod availability;
pub mod config;
pub mod error;
pub mod fetch;
pub mod telemetry;
