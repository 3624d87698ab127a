//! Logging utilities
//!
//! Thin wrappers over the `log` facade so operations report in one format.

pub mod log;

pub use log::{log_operation_complete, log_operation_start, log_warning};
