//! CLI type definitions
//!
//! This module contains the clap structure that defines the CLI interface.

use clap::Parser;
use std::path::PathBuf;

use crate::infrastructure::config::DEFAULT_ENV_FILE;

/// Command-line arguments of the `toncenter-config` binary
#[derive(Parser, Debug)]
#[command(name = "toncenter-config")]
#[command(about = "Load and check the NFT API startup configuration", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Dotenv file to source before reading the environment
    #[arg(long, env = "ENV_FILE", default_value = DEFAULT_ENV_FILE)]
    pub env_file: PathBuf,

    /// Output in JSON format
    #[arg(short, long)]
    pub json: bool,
}
