//! Runtime configuration record and the values derived from it

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::infrastructure::logging::secret_scrubbing::redact_database_uri;

/// Production toncenter API root
pub const MAINNET_TONCENTER_URL: &str = "https://toncenter.com/api/v2/";

/// Testnet toncenter API root
pub const TESTNET_TONCENTER_URL: &str = "https://testnet.toncenter.com/api/v2/";

/// Directory holding the service's on-disk data. Not configurable.
pub const DATA_DIR: &str = "/api/apidata";

/// TON network the service talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Production network
    Mainnet,
    /// Public test network
    Testnet,
}

impl Network {
    /// Select the network from the `IS_TESTNET` flag
    pub const fn from_testnet_flag(is_testnet: bool) -> Self {
        if is_testnet {
            Self::Testnet
        } else {
            Self::Mainnet
        }
    }

    /// `true` for [`Network::Testnet`]
    pub const fn is_testnet(self) -> bool {
        matches!(self, Self::Testnet)
    }

    /// Base URL of the toncenter v2 API for this network
    pub const fn toncenter_url(self) -> &'static str {
        match self {
            Self::Mainnet => MAINNET_TONCENTER_URL,
            Self::Testnet => TESTNET_TONCENTER_URL,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mainnet => f.write_str("mainnet"),
            Self::Testnet => f.write_str("testnet"),
        }
    }
}

/// Runtime configuration of the API service.
///
/// Built once at startup by [`ConfigLoader`](crate::ConfigLoader) and shared
/// read-only afterwards, usually as an `Arc<Config>`. Fields are public for
/// reading; there is no update path once the record has been loaded.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// Postgres connection string (`POSTGRES_URI`)
    pub database_uri: String,

    /// HTTP listen port (`PORT`)
    pub port: u16,

    /// Admin panel login (`ADMIN_USERNAME`)
    pub admin_username: String,

    /// Admin panel password (`ADMIN_PASSWORD`)
    pub admin_password: String,

    /// Traversal depth used by the indexer (`DEPTH`)
    pub depth: u32,

    /// Network selected by `IS_TESTNET`
    pub network: Network,

    /// Fixed data directory, see [`DATA_DIR`]
    pub data_dir: PathBuf,

    /// toncenter base URL derived from `network`
    pub toncenter_url: String,
}

impl Config {
    /// Assemble a record from validated inputs and fill in the derived fields.
    pub fn new(
        database_uri: String,
        port: u16,
        admin_username: String,
        admin_password: String,
        depth: u32,
        network: Network,
    ) -> Self {
        Self {
            database_uri,
            port,
            admin_username,
            admin_password,
            depth,
            network,
            data_dir: PathBuf::from(DATA_DIR),
            toncenter_url: network.toncenter_url().to_string(),
        }
    }

    /// Whether the testnet endpoint is selected
    pub const fn is_testnet(&self) -> bool {
        self.network.is_testnet()
    }

    /// Fixed data directory
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Redacted view that is safe to log or print
    pub fn summary(&self) -> ConfigSummary {
        ConfigSummary {
            database_uri: redact_database_uri(&self.database_uri),
            port: self.port,
            admin_username: self.admin_username.clone(),
            depth: self.depth,
            network: self.network,
            data_dir: self.data_dir.display().to_string(),
            toncenter_url: self.toncenter_url.clone(),
        }
    }
}

// Hand-written so the password and database credentials never reach logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("database_uri", &redact_database_uri(&self.database_uri))
            .field("port", &self.port)
            .field("admin_username", &self.admin_username)
            .field("admin_password", &"[REDACTED]")
            .field("depth", &self.depth)
            .field("network", &self.network)
            .field("data_dir", &self.data_dir)
            .field("toncenter_url", &self.toncenter_url)
            .finish()
    }
}

/// Printable configuration with secrets removed
#[derive(Debug, Clone, Serialize)]
pub struct ConfigSummary {
    /// Connection string with the password masked
    pub database_uri: String,
    /// HTTP listen port
    pub port: u16,
    /// Admin login
    pub admin_username: String,
    /// Traversal depth
    pub depth: u32,
    /// Selected network
    pub network: Network,
    /// Fixed data directory
    pub data_dir: String,
    /// toncenter base URL
    pub toncenter_url: String,
}

impl fmt::Display for ConfigSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "database:  {}", self.database_uri)?;
        writeln!(f, "port:      {}", self.port)?;
        writeln!(f, "admin:     {}", self.admin_username)?;
        writeln!(f, "depth:     {}", self.depth)?;
        writeln!(f, "network:   {}", self.network)?;
        writeln!(f, "data dir:  {}", self.data_dir)?;
        write!(f, "toncenter: {}", self.toncenter_url)
    }
}
