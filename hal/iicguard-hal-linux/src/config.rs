//! Config file loading

use std::fs;
use std::path::Path;

use iicguard_core::config::{parse_config_bytes, ConfigError, DeviceConfig};
use log::info;

use crate::i2c::os_error;

/// Load a device configuration from a TOML file
pub fn load_config(path: impl AsRef<Path>) -> Result<DeviceConfig, ConfigError> {
    let path = path.as_ref();
    info!("Loading configuration from {}", path.display());

    let bytes = fs::read(path).map_err(|e| ConfigError::Read(os_error(e)))?;
    parse_config_bytes(&bytes)
}
