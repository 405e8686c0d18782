//! toncenter-config - startup configuration for the NFT API service
//!
//! Loads the service's runtime settings once at process start:
//!
//! - **Domain Layer** (`domain`): the immutable [`Config`] record and [`Network`]
//! - **Infrastructure Layer** (`infrastructure`): dotenv sourcing, typed
//!   environment parsing, logging setup
//! - **CLI Layer** (`cli`): argument parsing and output for the binary
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use toncenter_config::ConfigLoader;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Arc::new(ConfigLoader::new().load()?);
//!     println!("listening on {}", config.port);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;

pub use domain::models::{Config, ConfigSummary, Network};
pub use infrastructure::config::{ConfigError, ConfigLoader};
