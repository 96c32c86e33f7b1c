//! In-memory vehicle registry
//!
//! Vehicles are kept in insertion order and looked up by linear scan, so a
//! duplicated ID always resolves to the first vehicle added with it.

use fleet_types::FleetError;
use tracing::{info, warn};

use crate::model::{Vehicle, VehicleUpdate};

const DELIMITER_WIDTH: usize = 40;

/// Ordered collection of vehicles
#[derive(Debug, Clone, Default)]
pub struct VehicleManager {
    vehicles: Vec<Vehicle>,
}

impl VehicleManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry holding `vehicles` in the given order
    pub fn from_vehicles(vehicles: Vec<Vehicle>) -> Self {
        Self { vehicles }
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Append a vehicle. Duplicate IDs are not rejected.
    pub fn add_vehicle(&mut self, vehicle: Vehicle) {
        info!(vehicle_id = %vehicle.vehicle_id, "Vehicle added");
        self.vehicles.push(vehicle);
    }

    /// Remove the first vehicle with `vehicle_id`, returning it
    pub fn remove_vehicle(&mut self, vehicle_id: &str) -> Option<Vehicle> {
        match self.position(vehicle_id) {
            Some(index) => {
                info!(vehicle_id, "Vehicle removed");
                Some(self.vehicles.remove(index))
            }
            None => {
                warn!(vehicle_id, "Vehicle not found");
                None
            }
        }
    }

    /// Find the first vehicle with `vehicle_id`
    pub fn get_vehicle_by_id(&self, vehicle_id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.vehicle_id == vehicle_id)
    }

    pub fn get_vehicle_by_id_mut(&mut self, vehicle_id: &str) -> Option<&mut Vehicle> {
        self.vehicles.iter_mut().find(|v| v.vehicle_id == vehicle_id)
    }

    /// Render every vehicle in current order, each followed by a delimiter
    pub fn display_all_vehicles(&self) -> String {
        if self.vehicles.is_empty() {
            return "No vehicles available.".to_string();
        }

        let delimiter = "-".repeat(DELIMITER_WIDTH);
        let mut out = String::new();
        for vehicle in &self.vehicles {
            out.push_str(&vehicle.render_info());
            out.push('\n');
            out.push_str(&delimiter);
            out.push('\n');
        }
        out
    }

    pub fn calculate_fuel_consumption(
        &self,
        vehicle_id: &str,
        distance: f64,
    ) -> Result<f64, FleetError> {
        self.require(vehicle_id)?.fuel_consumed_for(distance)
    }

    pub fn add_service_record(
        &mut self,
        vehicle_id: &str,
        date: impl Into<String>,
        description: impl Into<String>,
        cost: f64,
    ) -> Result<(), FleetError> {
        self.require_mut(vehicle_id)?
            .add_service(date, description, cost);
        Ok(())
    }

    pub fn display_vehicle_service_history(&self, vehicle_id: &str) -> Result<String, FleetError> {
        Ok(self.require(vehicle_id)?.render_service_history())
    }

    /// Sort newest first. Vehicles of the same year keep their relative order.
    pub fn sort_vehicles_by_year(&mut self) {
        self.vehicles.sort_by(|a, b| b.year.cmp(&a.year));
        info!("Vehicles sorted by year");
    }

    /// Sort most efficient first. Equal efficiencies keep their relative order.
    pub fn sort_vehicles_by_fuel_efficiency(&mut self) {
        self.vehicles
            .sort_by(|a, b| b.fuel_efficiency.total_cmp(&a.fuel_efficiency));
        info!("Vehicles sorted by fuel efficiency");
    }

    /// Sum of every service cost across the registry
    pub fn total_maintenance_cost(&self) -> f64 {
        self.vehicles.iter().map(Vehicle::maintenance_cost).sum()
    }

    /// Apply `update` to the first vehicle with `vehicle_id`, returning the
    /// names of the fields that were changed
    pub fn update_vehicle_info(
        &mut self,
        vehicle_id: &str,
        update: &VehicleUpdate,
    ) -> Result<Vec<&'static str>, FleetError> {
        let vehicle = self.require_mut(vehicle_id)?;
        let applied = update.apply(vehicle);
        info!(vehicle_id, fields = ?applied, "Vehicle info updated");
        Ok(applied)
    }

    pub fn display_vehicle_info(&self, vehicle_id: &str) -> Result<String, FleetError> {
        Ok(self.require(vehicle_id)?.render_info())
    }

    fn position(&self, vehicle_id: &str) -> Option<usize> {
        self.vehicles.iter().position(|v| v.vehicle_id == vehicle_id)
    }

    fn require(&self, vehicle_id: &str) -> Result<&Vehicle, FleetError> {
        self.get_vehicle_by_id(vehicle_id).ok_or_else(|| {
            warn!(vehicle_id, "Vehicle not found");
            FleetError::VehicleNotFound(vehicle_id.to_string())
        })
    }

    fn require_mut(&mut self, vehicle_id: &str) -> Result<&mut Vehicle, FleetError> {
        self.get_vehicle_by_id_mut(vehicle_id).ok_or_else(|| {
            warn!(vehicle_id, "Vehicle not found");
            FleetError::VehicleNotFound(vehicle_id.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_manager() -> VehicleManager {
        let mut manager = VehicleManager::new();
        manager.add_vehicle(
            Vehicle::new("C123", "Tesla", "Model S", 2022, "White", 25.0).into_car(4, true),
        );
        manager.add_vehicle(Vehicle::new("T123", "RAM", "1500", 2020, "Gray", 8.0).into_truck(2000.0));
        manager
    }

    fn ids(manager: &VehicleManager) -> Vec<&str> {
        manager
            .vehicles()
            .iter()
            .map(|v| v.vehicle_id.as_str())
            .collect()
    }

    #[test]
    fn test_add_vehicle() {
        let manager = sample_manager();
        assert_eq!(manager.len(), 2);
        assert_eq!(ids(&manager), vec!["C123", "T123"]);
    }

    #[test]
    fn test_remove_vehicle() {
        let mut manager = sample_manager();
        let removed = manager.remove_vehicle("C123").unwrap();
        assert_eq!(removed.vehicle_id, "C123");
        assert!(manager.get_vehicle_by_id("C123").is_none());
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_remove_missing_vehicle_leaves_registry_unchanged() {
        let mut manager = sample_manager();
        assert!(manager.remove_vehicle("NOPE").is_none());
        assert_eq!(ids(&manager), vec!["C123", "T123"]);
    }

    #[test]
    fn test_duplicate_ids_resolve_to_first() {
        let mut manager = VehicleManager::new();
        manager.add_vehicle(Vehicle::new("D1", "Fiat", "Panda", 2010, "Yellow", 18.0));
        manager.add_vehicle(Vehicle::new("D1", "Fiat", "Uno", 2012, "Blue", 16.0));

        assert_eq!(manager.get_vehicle_by_id("D1").unwrap().model, "Panda");

        let removed = manager.remove_vehicle("D1").unwrap();
        assert_eq!(removed.model, "Panda");
        assert_eq!(manager.get_vehicle_by_id("D1").unwrap().model, "Uno");
    }

    #[test]
    fn test_display_all_vehicles() {
        assert_eq!(VehicleManager::new().display_all_vehicles(), "No vehicles available.");

        let rendered = sample_manager().display_all_vehicles();
        let delimiter = "-".repeat(40);
        assert_eq!(rendered.lines().filter(|l| *l == delimiter).count(), 2);
        let car_pos = rendered.find("Vehicle ID: C123").unwrap();
        let truck_pos = rendered.find("Vehicle ID: T123").unwrap();
        assert!(car_pos < truck_pos);
    }

    #[test]
    fn test_calculate_fuel_consumption() {
        let mut manager = sample_manager();
        assert!((manager.calculate_fuel_consumption("T123", 80.0).unwrap() - 10.0).abs() < 1e-9);

        assert_eq!(
            manager.calculate_fuel_consumption("NOPE", 80.0),
            Err(FleetError::VehicleNotFound("NOPE".to_string()))
        );

        manager.get_vehicle_by_id_mut("T123").unwrap().fuel_efficiency = 0.0;
        assert!(matches!(
            manager.calculate_fuel_consumption("T123", 80.0),
            Err(FleetError::InvalidState(_))
        ));
    }

    #[test]
    fn test_service_records_and_history() {
        let mut manager = sample_manager();
        manager
            .add_service_record("C123", "2024-01-01", "Oil change", 100.0)
            .unwrap();
        manager
            .add_service_record("C123", "2024-06-01", "Tire rotation", 60.0)
            .unwrap();

        let history = manager.display_vehicle_service_history("C123").unwrap();
        assert_eq!(history.lines().count(), 3);
        assert_eq!(
            manager.display_vehicle_service_history("T123").unwrap(),
            "No service history available."
        );

        assert!(manager
            .add_service_record("NOPE", "2024-01-01", "Oil change", 100.0)
            .is_err());
        assert!(manager.display_vehicle_service_history("NOPE").is_err());
    }

    #[test]
    fn test_sort_by_year_is_stable_and_descending() {
        let mut manager = VehicleManager::new();
        manager.add_vehicle(Vehicle::new("A", "M", "X", 2018, "c", 10.0));
        manager.add_vehicle(Vehicle::new("B", "M", "X", 2021, "c", 10.0));
        manager.add_vehicle(Vehicle::new("C", "M", "X", 2018, "c", 10.0));
        manager.add_vehicle(Vehicle::new("D", "M", "X", 2021, "c", 10.0));
        manager.add_vehicle(Vehicle::new("E", "M", "X", 2019, "c", 10.0));

        manager.sort_vehicles_by_year();

        assert_eq!(ids(&manager), vec!["B", "D", "E", "A", "C"]);
        assert!(manager
            .vehicles()
            .windows(2)
            .all(|w| w[0].year >= w[1].year));
    }

    #[test]
    fn test_sort_by_fuel_efficiency_is_stable_and_descending() {
        let mut manager = VehicleManager::new();
        manager.add_vehicle(Vehicle::new("A", "M", "X", 2018, "c", 12.5));
        manager.add_vehicle(Vehicle::new("B", "M", "X", 2018, "c", 30.0));
        manager.add_vehicle(Vehicle::new("C", "M", "X", 2018, "c", 12.5));
        manager.add_vehicle(Vehicle::new("D", "M", "X", 2018, "c", 8.0));

        manager.sort_vehicles_by_fuel_efficiency();

        assert_eq!(ids(&manager), vec!["B", "A", "C", "D"]);
    }

    #[test]
    fn test_total_maintenance_cost() {
        let mut manager = sample_manager();
        assert_eq!(manager.total_maintenance_cost(), 0.0);

        manager.add_service_record("C123", "2024-01-01", "Oil change", 100.0).unwrap();
        manager.add_service_record("T123", "2024-02-01", "Brakes", 350.25).unwrap();
        manager.add_service_record("C123", "2024-03-01", "Wipers", 19.75).unwrap();

        assert!((manager.total_maintenance_cost() - 470.0).abs() < 1e-9);
    }

    #[test]
    fn test_update_vehicle_info() {
        let mut manager = sample_manager();
        let applied = manager
            .update_vehicle_info("T123", &VehicleUpdate::new().with_color("Green").with_num_doors(2))
            .unwrap();

        assert_eq!(applied, vec!["color"]);
        let truck = manager.get_vehicle_by_id("T123").unwrap();
        assert_eq!(truck.color, "Green");
        assert_eq!(truck.make, "RAM");

        assert_eq!(
            manager.update_vehicle_info("NOPE", &VehicleUpdate::new().with_color("Green")),
            Err(FleetError::VehicleNotFound("NOPE".to_string()))
        );
    }

    #[test]
    fn test_display_vehicle_info() {
        let manager = sample_manager();
        let info = manager.display_vehicle_info("C123").unwrap();
        assert!(info.contains("Number of Doors: 4"));
        assert!(manager.display_vehicle_info("NOPE").is_err());
    }
}
