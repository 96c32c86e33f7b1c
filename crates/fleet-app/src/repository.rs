//! Registry setup from configuration

use std::path::{Path, PathBuf};

use fleet_domain::VehicleManager;
use fleet_infra::FleetLoader;
use fleet_types::{Error, Result};
use tracing::debug;

use crate::config::Config;

/// Resolve the fleet file: an explicit override wins over the config value
pub fn resolve_fleet_file(config: &Config, override_path: Option<&Path>) -> Option<PathBuf> {
    override_path
        .map(Path::to_path_buf)
        .or_else(|| config.fleet_file.clone())
}

/// Open a registry seeded from the resolved fleet file.
///
/// With no fleet file configured the registry starts empty.
pub fn open_fleet(config: &Config, override_path: Option<&Path>) -> Result<VehicleManager> {
    match resolve_fleet_file(config, override_path) {
        Some(path) => open_fleet_at(&path),
        None => {
            debug!("No fleet file configured, starting with an empty registry");
            Ok(VehicleManager::new())
        }
    }
}

/// Open a registry seeded from a fleet file at `path`
pub fn open_fleet_at(path: &Path) -> Result<VehicleManager> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    Ok(FleetLoader::load_from_file(path)?.into_manager())
}
