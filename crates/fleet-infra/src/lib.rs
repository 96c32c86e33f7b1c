//! Infrastructure layer - loaders for external fleet data

pub mod fleet_loader;

pub use fleet_loader::FleetLoader;
