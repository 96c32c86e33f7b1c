//! Output formatting module

use fleet_domain::{Vehicle, VehicleManager};
use fleet_types::{OutputFormat, Result};
use serde::Serialize;

/// Fuel calculation outcome for one vehicle
#[derive(Debug, Serialize)]
pub struct FuelReport<'a> {
    pub vehicle_id: &'a str,
    pub distance_km: f64,
    pub fuel_liters: f64,
}

/// Maintenance cost summary across the fleet
#[derive(Debug, Serialize)]
pub struct CostReport {
    pub vehicle_count: usize,
    pub service_count: usize,
    pub total_cost: f64,
}

impl CostReport {
    pub fn from_manager(manager: &VehicleManager) -> Self {
        Self {
            vehicle_count: manager.len(),
            service_count: manager
                .vehicles()
                .iter()
                .map(|v| v.service_history().len())
                .sum(),
            total_cost: manager.total_maintenance_cost(),
        }
    }
}

pub fn render_vehicles(output_format: OutputFormat, manager: &VehicleManager) -> Result<String> {
    match output_format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(manager.vehicles())?),
        OutputFormat::Table => Ok(manager.display_all_vehicles()),
    }
}

pub fn render_vehicle(output_format: OutputFormat, vehicle: &Vehicle) -> Result<String> {
    match output_format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(vehicle)?),
        OutputFormat::Table => Ok(vehicle.render_info()),
    }
}

pub fn render_history(output_format: OutputFormat, vehicle: &Vehicle) -> Result<String> {
    match output_format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(vehicle.service_history())?),
        OutputFormat::Table => Ok(vehicle.render_service_history()),
    }
}

pub fn render_fuel(output_format: OutputFormat, report: &FuelReport<'_>) -> Result<String> {
    match output_format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Table => Ok(format!(
            "Fuel consumed for {} km: {:.2} liters.",
            report.distance_km, report.fuel_liters
        )),
    }
}

pub fn render_cost(output_format: OutputFormat, report: &CostReport) -> Result<String> {
    match output_format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Table => Ok(format!(
            "Total maintenance cost for all vehicles: ${:.2}",
            report.total_cost
        )),
    }
}
