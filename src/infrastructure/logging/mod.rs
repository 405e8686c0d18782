//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - JSON or pretty output on stderr
//! - `LOG_LEVEL` / `LOG_FORMAT` / `RUST_LOG` configuration
//! - Credential redaction for connection strings

pub mod config;
pub mod logger;
pub mod secret_scrubbing;

pub use config::{LogConfig, LogFormat};
pub use logger::LoggerImpl;
pub use secret_scrubbing::redact_database_uri;
