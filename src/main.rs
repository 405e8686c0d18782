//! toncenter-config entry point.

use clap::Parser;

use toncenter_config::cli::{self, Cli};

fn main() {
    let cli = Cli::parse();

    if let Err(err) = cli::execute(&cli) {
        cli::handle_error(&err, cli.json);
    }
}
