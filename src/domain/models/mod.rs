//! Domain models

pub mod config;

pub use config::{
    Config, ConfigSummary, Network, DATA_DIR, MAINNET_TONCENTER_URL, TESTNET_TONCENTER_URL,
};
