//! Vehicle domain model and registry services

pub mod model;
pub mod service;

pub use model::*;
pub use service::VehicleManager;
