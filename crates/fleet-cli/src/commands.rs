//! Command handlers

use crate::cli::{Cli, Commands, FleetCommand, SortKey};
use crate::output::{
    render_cost, render_fuel, render_history, render_vehicle, render_vehicles, CostReport,
    FuelReport,
};
use fleet_app::config::Config;
use fleet_app::repository::open_fleet;
use fleet_domain::{VehicleManager, VehicleUpdate};
use fleet_types::{FleetError, OutputFormat, Result};
use std::path::PathBuf;

/// Execute CLI command
pub fn execute(cli: Cli, config: Config) -> Result<()> {
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Config {
            show,
            set_output,
            set_fleet,
            set_log_level,
            reset,
        } => cmd_config(config, show, set_output, set_fleet, set_log_level, reset),

        Commands::Fleet(command) => {
            let mut manager = open_fleet(&config, cli.fleet.as_deref())?;
            let out = run(&mut manager, command, output_format)?;
            println!("{}", out);
            Ok(())
        }
    }
}

/// Apply a registry command and render its outcome
fn run(
    manager: &mut VehicleManager,
    command: FleetCommand,
    output_format: OutputFormat,
) -> Result<String> {
    match command {
        FleetCommand::List { sort } => {
            match sort {
                Some(SortKey::Year) => manager.sort_vehicles_by_year(),
                Some(SortKey::Efficiency) => manager.sort_vehicles_by_fuel_efficiency(),
                None => {}
            }
            render_vehicles(output_format, manager)
        }

        FleetCommand::Show { id } => {
            let vehicle = manager
                .get_vehicle_by_id(&id)
                .ok_or_else(|| FleetError::VehicleNotFound(id.clone()))?;
            render_vehicle(output_format, vehicle)
        }

        FleetCommand::History { id } => {
            let vehicle = manager
                .get_vehicle_by_id(&id)
                .ok_or_else(|| FleetError::VehicleNotFound(id.clone()))?;
            render_history(output_format, vehicle)
        }

        FleetCommand::Fuel { id, distance } => {
            let fuel_liters = manager.calculate_fuel_consumption(&id, distance)?;
            render_fuel(
                output_format,
                &FuelReport {
                    vehicle_id: &id,
                    distance_km: distance,
                    fuel_liters,
                },
            )
        }

        FleetCommand::Cost => render_cost(output_format, &CostReport::from_manager(manager)),

        FleetCommand::Remove { id } => {
            manager
                .remove_vehicle(&id)
                .ok_or_else(|| FleetError::VehicleNotFound(id.clone()))?;
            let remaining = render_vehicles(output_format, manager)?;
            match output_format {
                OutputFormat::Json => Ok(remaining),
                OutputFormat::Table => Ok(format!(
                    "Vehicle with ID {} removed successfully.\n\n{}",
                    id, remaining
                )),
            }
        }

        FleetCommand::Update {
            id,
            make,
            model,
            year,
            color,
            fuel_efficiency,
            doors,
            air_conditioned,
            payload,
        } => {
            let update = VehicleUpdate {
                make,
                model,
                year,
                color,
                fuel_efficiency,
                num_doors: doors,
                air_conditioned,
                payload_capacity: payload,
            };
            let applied = manager.update_vehicle_info(&id, &update)?;
            let vehicle = manager
                .get_vehicle_by_id(&id)
                .ok_or_else(|| FleetError::VehicleNotFound(id.clone()))?;
            let rendered = render_vehicle(output_format, vehicle)?;

            match output_format {
                OutputFormat::Json => Ok(rendered),
                OutputFormat::Table => {
                    let fields = if applied.is_empty() {
                        "(none)".to_string()
                    } else {
                        applied.join(", ")
                    };
                    Ok(format!(
                        "Vehicle {} info updated successfully.\nUpdated fields: {}\n\n{}",
                        id, fields, rendered
                    ))
                }
            }
        }

        FleetCommand::Service {
            id,
            description,
            cost,
            date,
        } => {
            let date = date.unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string());
            manager.add_service_record(&id, date, description, cost)?;
            let vehicle = manager
                .get_vehicle_by_id(&id)
                .ok_or_else(|| FleetError::VehicleNotFound(id.clone()))?;
            render_history(output_format, vehicle)
        }
    }
}

fn cmd_config(
    config: Config,
    show: bool,
    set_output: Option<OutputFormat>,
    set_fleet: Option<PathBuf>,
    set_log_level: Option<String>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = config;
    let mut modified = false;

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(fleet_file) = set_fleet {
        config.fleet_file = Some(fleet_file);
        modified = true;
    }

    if let Some(log_level) = set_log_level {
        config.log_level = log_level;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
