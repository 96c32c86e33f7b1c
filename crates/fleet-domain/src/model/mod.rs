//! Domain model types

pub mod service_record;
pub mod vehicle;
pub mod vehicle_update;

pub use service_record::ServiceRecord;
pub use vehicle::{Vehicle, VehicleKind};
pub use vehicle_update::VehicleUpdate;
