//! Fleet Manager - vehicle registry and service history tracking
//!
//! A CLI tool that loads a fleet file into an in-memory registry and runs
//! lookups, updates and reports against it.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;
use fleet_app::config::Config;
use tracing::Level;

fn init_tracing(config: &Config, verbose: bool) {
    let level = if verbose {
        Level::DEBUG
    } else {
        config.log_level.parse().unwrap_or(Level::INFO)
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    init_tracing(&config, cli.verbose);

    if let Err(e) = commands::execute(cli, config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
