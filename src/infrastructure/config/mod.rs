//! Configuration management infrastructure
//!
//! Startup configuration sourced from the environment:
//! - Optional dotenv file, never overriding ambient variables
//! - Typed parsing of the required variables
//! - Derived toncenter endpoint and fixed data directory

pub mod env_file;
pub mod loader;
pub mod parse;

pub use env_file::{load_env_file, DEFAULT_ENV_FILE};
pub use loader::{ConfigError, ConfigLoader, REQUIRED_VARS};
