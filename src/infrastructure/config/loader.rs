//! Environment-backed configuration loader

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::env_file::{load_env_file, DEFAULT_ENV_FILE};
use super::parse::{require, require_bool, require_int};
use crate::domain::models::config::{Config, Network, DATA_DIR};

/// Postgres connection string
pub const POSTGRES_URI: &str = "POSTGRES_URI";
/// HTTP listen port
pub const PORT: &str = "PORT";
/// Admin login
pub const ADMIN_USERNAME: &str = "ADMIN_USERNAME";
/// Admin password
pub const ADMIN_PASSWORD: &str = "ADMIN_PASSWORD";
/// Traversal depth
pub const DEPTH: &str = "DEPTH";
/// Network selection flag
pub const IS_TESTNET: &str = "IS_TESTNET";

/// Every variable that must be present for a load to succeed
pub const REQUIRED_VARS: [&str; 6] = [
    POSTGRES_URI,
    PORT,
    ADMIN_USERNAME,
    ADMIN_PASSWORD,
    DEPTH,
    IS_TESTNET,
];

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The env file exists but could not be read or parsed
    #[error("Failed to load env file {}: {source}", .path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    /// A required variable is absent or empty
    #[error("Required environment variable {var} is not set or empty")]
    MissingVar { var: &'static str },

    /// A variable is set but cannot be converted to its type
    #[error("Invalid value {value:?} for environment variable {var}: expected {expected}")]
    InvalidVar {
        var: &'static str,
        value: String,
        expected: &'static str,
    },

    /// A record violates the loaded-configuration invariants
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

impl ConfigError {
    /// Environment variable the error is about, if any
    pub const fn var(&self) -> Option<&'static str> {
        match self {
            Self::MissingVar { var } | Self::InvalidVar { var, .. } => Some(*var),
            Self::EnvFile { .. } | Self::ValidationFailed(_) => None,
        }
    }
}

/// Loads [`Config`] from the environment, optionally seeded by a dotenv file
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    env_file: PathBuf,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Loader that sources `.env` from the working directory
    pub fn new() -> Self {
        Self::with_env_file(DEFAULT_ENV_FILE)
    }

    /// Loader that sources the given dotenv file instead of `.env`
    pub fn with_env_file(path: impl Into<PathBuf>) -> Self {
        Self {
            env_file: path.into(),
        }
    }

    /// Path of the env file this loader sources
    pub fn env_file(&self) -> &Path {
        &self.env_file
    }

    /// Load configuration for this process.
    ///
    /// Order of operations:
    /// 1. Source the env file (missing file is fine, ambient values win)
    /// 2. Read and type-check every required variable
    /// 3. Derive the toncenter URL and data directory
    ///
    /// Meant to run once at startup. The caller owns the result and hands it
    /// out (typically as `Arc<Config>`); nothing here keeps global state.
    pub fn load(&self) -> Result<Config, ConfigError> {
        self.load_env_file()?;
        Self::from_env()
    }

    /// Source the env file into the process environment.
    ///
    /// Returns whether a file was found and applied.
    pub fn load_env_file(&self) -> Result<bool, ConfigError> {
        load_env_file(&self.env_file)
    }

    /// Build configuration from the current process environment, without
    /// sourcing any env file.
    pub fn from_env() -> Result<Config, ConfigError> {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Validation is all-or-nothing: the first missing or malformed variable
    /// aborts the load and no partial record is produced.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let database_uri = require(&lookup, POSTGRES_URI)?;
        let port: u16 = require_int(&lookup, PORT)?;
        let admin_username = require(&lookup, ADMIN_USERNAME)?;
        let admin_password = require(&lookup, ADMIN_PASSWORD)?;
        let depth: u32 = require_int(&lookup, DEPTH)?;
        let network = Network::from_testnet_flag(require_bool(&lookup, IS_TESTNET)?);

        let config = Config::new(
            database_uri,
            port,
            admin_username,
            admin_password,
            depth,
            network,
        );
        Self::validate(&config)?;

        tracing::info!(
            network = %config.network,
            port = config.port,
            depth = config.depth,
            toncenter = %config.toncenter_url,
            "configuration loaded"
        );

        Ok(config)
    }

    /// Check the invariants every loaded configuration satisfies
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let required_strings = [
            (POSTGRES_URI, &config.database_uri),
            (ADMIN_USERNAME, &config.admin_username),
            (ADMIN_PASSWORD, &config.admin_password),
        ];
        for (var, value) in required_strings {
            if value.is_empty() {
                return Err(ConfigError::MissingVar { var });
            }
        }

        if config.toncenter_url != config.network.toncenter_url() {
            return Err(ConfigError::ValidationFailed(format!(
                "toncenter URL {} does not match network {}",
                config.toncenter_url, config.network
            )));
        }

        if config.data_dir != Path::new(DATA_DIR) {
            return Err(ConfigError::ValidationFailed(format!(
                "data directory must be {DATA_DIR}, got {}",
                config.data_dir.display()
            )));
        }

        Ok(())
    }
}
