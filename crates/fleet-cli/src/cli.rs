//! CLI definition using clap

use clap::{Parser, Subcommand, ValueEnum};
use fleet_types::OutputFormat;
use std::path::PathBuf;

/// Sort order for vehicle listings
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    /// Newest first
    Year,
    /// Most fuel efficient first
    Efficiency,
}

#[derive(Parser)]
#[command(name = "fleet-manager")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Vehicle registry with service history tracking")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Fleet file (TOML) to seed the registry. Uses config value if not specified.
    #[arg(long, global = true)]
    pub fleet: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(flatten)]
    Fleet(FleetCommand),

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set default fleet file
        #[arg(long)]
        set_fleet: Option<PathBuf>,

        /// Set log level (error, warn, info, debug, trace)
        #[arg(long)]
        set_log_level: Option<String>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

/// Commands that run against the registry
#[derive(Subcommand)]
pub enum FleetCommand {
    /// List all vehicles
    List {
        /// Sort before listing
        #[arg(long, short = 's')]
        sort: Option<SortKey>,
    },

    /// Show a single vehicle
    Show {
        /// Vehicle ID
        id: String,
    },

    /// Show the service history of a vehicle
    History {
        /// Vehicle ID
        id: String,
    },

    /// Calculate fuel consumed over a distance
    Fuel {
        /// Vehicle ID
        id: String,

        /// Distance in km
        #[arg(allow_negative_numbers = true)]
        distance: f64,
    },

    /// Show total maintenance cost across the fleet
    Cost,

    /// Remove a vehicle and list the remaining fleet
    Remove {
        /// Vehicle ID
        id: String,
    },

    /// Update vehicle attributes
    Update {
        /// Vehicle ID
        id: String,

        #[arg(long)]
        make: Option<String>,

        #[arg(long)]
        model: Option<String>,

        #[arg(long)]
        year: Option<i32>,

        #[arg(long)]
        color: Option<String>,

        /// Fuel efficiency in km/l
        #[arg(long, allow_negative_numbers = true)]
        fuel_efficiency: Option<f64>,

        /// Number of doors (cars only)
        #[arg(long)]
        doors: Option<u32>,

        /// Air conditioning (cars only)
        #[arg(long)]
        air_conditioned: Option<bool>,

        /// Payload capacity in kg (trucks only)
        #[arg(long)]
        payload: Option<f64>,
    },

    /// Add a service record to a vehicle
    Service {
        /// Vehicle ID
        id: String,

        /// What was done
        description: String,

        /// Cost of the service
        cost: f64,

        /// Service date (defaults to today, YYYY-MM-DD)
        #[arg(long, short = 'd')]
        date: Option<String>,
    },
}
