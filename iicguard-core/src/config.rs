//! Device configuration
//!
//! The target device is described by a `[device]` table:
//!
//! ```toml
//! [device]
//! bus = "/dev/i2c-1"
//! address = "0x42"   # or 66
//! ```

use alloc::string::String;
use core::str;

use iicguard_hal::{Address, I2cBus, OsError};
use log::warn;
use serde::Deserialize;

use crate::device::Device;
use crate::error::Error;

/// Target device configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeviceConfig {
    /// Path to the I2C bus, e.g. `/dev/i2c-1`
    pub bus: String,
    /// 7-bit device address, integer or hex string
    pub address: Address,
}

impl DeviceConfig {
    /// Open a handle to the configured device
    pub fn open<B: I2cBus>(&self, bus: &mut B) -> Result<Device<B::Transport>, Error> {
        Device::open(bus, &self.bus, self.address.get())
    }
}

/// Top-level document, only the `[device]` table is read
#[derive(Deserialize)]
struct ConfigFile {
    device: DeviceConfig,
}

/// Configuration loading errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config: {0}")]
    Read(OsError),
    /// Invalid UTF-8 in TOML data
    #[error("config is not valid UTF-8")]
    InvalidUtf8,
    /// TOML parsing or validation failed
    #[error("invalid device config")]
    TomlParse,
}

/// Parse a TOML document into a device configuration
pub fn parse_config(input: &str) -> Result<DeviceConfig, ConfigError> {
    toml::from_str::<ConfigFile>(input)
        .map(|file| file.device)
        .map_err(|e| {
            warn!("TOML parse error: {}", e);
            ConfigError::TomlParse
        })
}

/// Parse raw config file contents
pub fn parse_config_bytes(input: &[u8]) -> Result<DeviceConfig, ConfigError> {
    let input = str::from_utf8(input).map_err(|_| ConfigError::InvalidUtf8)?;
    parse_config(input)
}

/// Commented configuration template
pub fn config_template() -> &'static str {
    r#"# -------------------------------------------------------------------
# iicguard device configuration
# -------------------------------------------------------------------

[device]
# bus: The file path to the I2C bus your device is on.
# On most Linux systems this is something like "/dev/i2c-1".
# Required.
bus = "/dev/i2c-1"

# address: The 7-bit I2C address of your target device.
# Use an integer (e.g. 68) or a hex string (e.g. "0x44").
# Required.
address = "0x42"
"#
}
