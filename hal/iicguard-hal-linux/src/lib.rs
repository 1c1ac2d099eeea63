//! Linux HAL for iicguard
//!
//! Implements the `iicguard-hal` transport traits on top of the kernel's
//! i2c-dev interface (`/dev/i2c-N`), and provides constructors that open a
//! ready-to-use [`LinuxDevice`].
//!
//! ```no_run
//! let mut device = iicguard_hal_linux::open("/dev/i2c-1", 0x42)?;
//! let id = device.read_register(0x00)?;
//! device.write_register(0x10, id | 0x01)?;
//! device.close();
//! # Ok::<(), iicguard_hal_linux::Error>(())
//! ```
//!
//! Only available on Linux.

#![cfg(target_os = "linux")]
#![deny(unsafe_code)]

pub mod config;
pub mod i2c;

use core::fmt::Write as _;

use heapless::String;

pub use config::load_config;
pub use i2c::{describe, LinuxI2cBus, LinuxTransport};
pub use iicguard_core::{Address, ConfigError, Device, DeviceConfig, Error, OsError, TransferError};

/// Device handle on a Linux i2c-dev bus
pub type LinuxDevice = Device<LinuxTransport>;

/// Open a bus node and bind it to a device address
///
/// # Arguments
/// * `bus_path` - Adapter node, e.g. `/dev/i2c-1`
/// * `address` - 7-bit device address (0-127)
pub fn open(bus_path: &str, address: u8) -> Result<LinuxDevice, Error> {
    Device::open(&mut LinuxI2cBus, bus_path, address)
}

/// Open adapter `index` (`/dev/i2c-<index>`) and bind it to a device address
pub fn open_bus(index: u8, address: u8) -> Result<LinuxDevice, Error> {
    open(&bus_path(index), address)
}

/// Open the device described by a config
pub fn open_config(config: &DeviceConfig) -> Result<LinuxDevice, Error> {
    config.open(&mut LinuxI2cBus)
}

/// Longest adapter node name, `/dev/i2c-255`
const MAX_ADAPTER_PATH_LEN: usize = 16;

/// Path of the i2c-dev node for adapter `index`
pub fn bus_path(index: u8) -> String<MAX_ADAPTER_PATH_LEN> {
    let mut path = String::new();
    let _ = write!(path, "/dev/i2c-{}", index);
    path
}
