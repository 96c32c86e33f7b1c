//! Field-by-field vehicle updates

use serde::{Deserialize, Serialize};

use super::{Vehicle, VehicleKind};

/// Set of attribute overwrites for a vehicle.
///
/// Only the listed fields can be changed. Variant fields that the target
/// does not have (e.g. `num_doors` on a truck) are skipped without error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleUpdate {
    #[serde(default)]
    pub make: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub fuel_efficiency: Option<f64>,
    #[serde(default)]
    pub num_doors: Option<u32>,
    #[serde(default)]
    pub air_conditioned: Option<bool>,
    #[serde(default)]
    pub payload_capacity: Option<f64>,
}

impl VehicleUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_make(mut self, make: impl Into<String>) -> Self {
        self.make = Some(make.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_fuel_efficiency(mut self, fuel_efficiency: f64) -> Self {
        self.fuel_efficiency = Some(fuel_efficiency);
        self
    }

    pub fn with_num_doors(mut self, num_doors: u32) -> Self {
        self.num_doors = Some(num_doors);
        self
    }

    pub fn with_air_conditioned(mut self, air_conditioned: bool) -> Self {
        self.air_conditioned = Some(air_conditioned);
        self
    }

    pub fn with_payload_capacity(mut self, payload_capacity: f64) -> Self {
        self.payload_capacity = Some(payload_capacity);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Overwrite matching fields on `vehicle`, returning the names of the
    /// fields that were applied.
    pub fn apply(&self, vehicle: &mut Vehicle) -> Vec<&'static str> {
        let mut applied = Vec::new();

        if let Some(ref make) = self.make {
            vehicle.make = make.clone();
            applied.push("make");
        }
        if let Some(ref model) = self.model {
            vehicle.model = model.clone();
            applied.push("model");
        }
        if let Some(year) = self.year {
            vehicle.year = year;
            applied.push("year");
        }
        if let Some(ref color) = self.color {
            vehicle.color = color.clone();
            applied.push("color");
        }
        if let Some(fuel_efficiency) = self.fuel_efficiency {
            vehicle.fuel_efficiency = fuel_efficiency;
            applied.push("fuel_efficiency");
        }

        match &mut vehicle.kind {
            VehicleKind::Base => {}
            VehicleKind::Car {
                num_doors,
                air_conditioned,
            } => {
                if let Some(n) = self.num_doors {
                    *num_doors = n;
                    applied.push("num_doors");
                }
                if let Some(ac) = self.air_conditioned {
                    *air_conditioned = ac;
                    applied.push("air_conditioned");
                }
            }
            VehicleKind::Truck { payload_capacity } => {
                if let Some(p) = self.payload_capacity {
                    *payload_capacity = p;
                    applied.push("payload_capacity");
                }
            }
        }

        applied
    }
}
