//! Fleet loader from TOML files
//!
//! A fleet file seeds a registry. It is only ever read.
//!
//! ```toml
//! [[vehicles]]
//! vehicle_id = "T1"
//! make = "Ford"
//! model = "F-150"
//! year = 2019
//! color = "Black"
//! fuel_efficiency = 10.0
//! type = "truck"
//! payload_capacity = 1000.0
//! ```

use fleet_domain::{Vehicle, VehicleManager};
use fleet_types::{ConfigError, Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Container for parsing fleet.toml
#[derive(Debug, Deserialize)]
struct FleetFile {
    #[serde(default)]
    vehicles: Vec<Vehicle>,
}

/// Vehicles loaded from a fleet file, in file order
#[derive(Debug)]
pub struct FleetLoader {
    vehicles: Vec<Vehicle>,
}

impl FleetLoader {
    /// Load a fleet from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to read fleet file {}: {}",
                path.display(),
                e
            )))
        })?;

        let loader = Self::load_from_str(&content)?;
        debug!(path = %path.display(), count = loader.count(), "Fleet file loaded");
        Ok(loader)
    }

    /// Load a fleet from a TOML string
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let fleet: FleetFile = toml::from_str(toml_content).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to parse fleet TOML: {}",
                e
            )))
        })?;

        Ok(Self {
            vehicles: fleet.vehicles,
        })
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn count(&self) -> usize {
        self.vehicles.len()
    }

    /// Hand the loaded vehicles to a fresh registry
    pub fn into_manager(self) -> VehicleManager {
        VehicleManager::from_vehicles(self.vehicles)
    }
}
