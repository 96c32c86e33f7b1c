//! Domain services

pub mod vehicle_manager;

pub use vehicle_manager::VehicleManager;
