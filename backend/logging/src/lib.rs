//! Structured logging setup for plainmark binaries.
//!
//! Console output goes to stderr so stdout stays free for converted text.

pub mod logger;

pub use logger::{init_logger, LogFormat, LogInitError, LogOptions};
