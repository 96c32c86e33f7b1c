//! Vehicle type definitions
//!
//! A vehicle is a set of shared fields plus a [`VehicleKind`] tag carrying
//! the variant-specific payload. Rendering emits the shared fields first and
//! the variant fields after them.

use fleet_types::FleetError;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

use super::ServiceRecord;

/// Variant-specific attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum VehicleKind {
    /// Plain vehicle with no extra attributes
    Base,
    Car {
        num_doors: u32,
        air_conditioned: bool,
    },
    Truck {
        /// Payload capacity in kilograms
        payload_capacity: f64,
    },
}

impl VehicleKind {
    pub fn label(&self) -> &'static str {
        match self {
            VehicleKind::Base => "Vehicle",
            VehicleKind::Car { .. } => "Car",
            VehicleKind::Truck { .. } => "Truck",
        }
    }
}

/// A tracked vehicle with its service history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Identifier, expected to be unique within a registry
    pub vehicle_id: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    /// Fuel efficiency in km per liter
    pub fuel_efficiency: f64,
    #[serde(flatten)]
    pub kind: VehicleKind,
    #[serde(default)]
    service_history: Vec<ServiceRecord>,
}

impl Vehicle {
    /// Create a base vehicle. Nothing is validated here; a non-positive
    /// fuel efficiency is only rejected when consumption is computed.
    pub fn new(
        vehicle_id: impl Into<String>,
        make: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        color: impl Into<String>,
        fuel_efficiency: f64,
    ) -> Self {
        Self {
            vehicle_id: vehicle_id.into(),
            make: make.into(),
            model: model.into(),
            year,
            color: color.into(),
            fuel_efficiency,
            kind: VehicleKind::Base,
            service_history: Vec::new(),
        }
    }

    pub fn into_car(mut self, num_doors: u32, air_conditioned: bool) -> Self {
        self.kind = VehicleKind::Car {
            num_doors,
            air_conditioned,
        };
        self
    }

    pub fn into_truck(mut self, payload_capacity: f64) -> Self {
        self.kind = VehicleKind::Truck { payload_capacity };
        self
    }

    /// Human-readable rendering of identity and attributes
    pub fn render_info(&self) -> String {
        self.to_string()
    }

    /// Fuel needed to cover `distance` at the current efficiency.
    ///
    /// Distance is not validated; zero or negative input yields zero or
    /// negative output.
    pub fn fuel_consumed_for(&self, distance: f64) -> Result<f64, FleetError> {
        if self.fuel_efficiency <= 0.0 || self.fuel_efficiency.is_nan() {
            return Err(FleetError::InvalidState(
                "Fuel efficiency must be greater than zero.".to_string(),
            ));
        }
        Ok(distance / self.fuel_efficiency)
    }

    /// Append a service record, keeping entry order
    pub fn add_service(
        &mut self,
        date: impl Into<String>,
        description: impl Into<String>,
        cost: f64,
    ) -> &ServiceRecord {
        let index = self.service_history.len();
        self.service_history
            .push(ServiceRecord::new(date, description, cost));
        info!(vehicle_id = %self.vehicle_id, "Service record added");
        &self.service_history[index]
    }

    pub fn service_history(&self) -> &[ServiceRecord] {
        &self.service_history
    }

    pub fn render_service_history(&self) -> String {
        if self.service_history.is_empty() {
            return "No service history available.".to_string();
        }

        let mut out = format!("Service History for {}:", self.vehicle_id);
        for record in &self.service_history {
            out.push('\n');
            out.push_str(&record.to_string());
        }
        out
    }

    /// Sum of every service cost recorded for this vehicle
    pub fn maintenance_cost(&self) -> f64 {
        self.service_history.iter().map(ServiceRecord::cost).sum()
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Vehicle ID: {}", self.vehicle_id)?;
        writeln!(f, "Make: {}", self.make)?;
        writeln!(f, "Model: {}", self.model)?;
        writeln!(f, "Year: {}", self.year)?;
        writeln!(f, "Color: {}", self.color)?;
        write!(f, "Fuel Efficiency: {} km/l", self.fuel_efficiency)?;

        match &self.kind {
            VehicleKind::Base => Ok(()),
            VehicleKind::Car {
                num_doors,
                air_conditioned,
            } => {
                writeln!(f)?;
                writeln!(f, "Number of Doors: {}", num_doors)?;
                write!(
                    f,
                    "Air Conditioned: {}",
                    if *air_conditioned { "Yes" } else { "No" }
                )
            }
            VehicleKind::Truck { payload_capacity } => {
                writeln!(f)?;
                write!(f, "Payload Capacity: {} kg", payload_capacity)
            }
        }
    }
}
