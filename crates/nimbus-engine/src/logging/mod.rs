//! Logging utilities.
//!
//! Centralizes logger initialization so the engine and its callers agree on
//! one backend. The engine itself only speaks through the `log` facade.

mod init;

pub use init::{LoggingConfig, init_logging};
