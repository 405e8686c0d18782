//! Infrastructure layer module
//!
//! This module contains the process-facing adapters:
//! - Configuration management (environment and dotenv file)
//! - Logging infrastructure

pub mod config;
pub mod logging;
