//! Logging utilities.
//!
//! Centralizes logger initialization. The crate logs through the standard
//! `log` facade; no backend beyond `env_logger` is imposed.

mod init;

pub use init::{init_logging, LoggingConfig};
