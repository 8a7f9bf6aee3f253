//! Tracing and logging setup shared by binaries and tests.
//!
//! Library crates only emit `tracing` events; installing a subscriber is the
//! embedding process's decision, made once through this crate.

pub mod config;
pub mod tracing;

pub use config::{ConfigError, LogFormat, TracingConfig};

/// Initialize process-wide tracing from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init_with(&TracingConfig::from_env());
}
