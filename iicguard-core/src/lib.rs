//! Device handle and register protocol
//!
//! This crate contains the part of iicguard that does not depend on a
//! specific operating system:
//!
//! - [`Device`] - an open, address-bound bus connection with single-byte
//!   register reads and writes
//! - [`Error`] - the failure taxonomy, carrying OS error codes through
//! - [`config`] - the `[device]` configuration section
//!
//! Platform crates (e.g. `iicguard-hal-linux`) supply the
//! [`I2cBus`](iicguard_hal::I2cBus) implementation.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

pub mod config;
pub mod device;
pub mod error;

pub use config::{config_template, parse_config, ConfigError, DeviceConfig};
pub use device::Device;
pub use error::{Error, TransferError};

pub use iicguard_hal::{Address, OsError};
