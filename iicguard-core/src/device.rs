//! I2C device handle
//!
//! A [`Device`] owns one open bus connection bound to one 7-bit device
//! address, and speaks the single-byte register protocol over it:
//!
//! - Register read: write `[register]`, then read exactly one byte
//! - Register write: write `[register, value]` as one transfer
//!
//! Every transfer must move exactly the requested number of bytes. A short
//! transfer fails the operation immediately and nothing is retried.
//!
//! # Concurrency
//!
//! The handle has no internal lock. Register operations take `&mut self`,
//! so the two steps of a register read cannot interleave with another
//! operation on the same handle. Sharing a handle across threads needs an
//! external lock; separate handles are independent.

use alloc::string::String;
use core::fmt;

use iicguard_hal::{Address, I2cBus, I2cTransport, OsError};
use log::{debug, warn};

use crate::error::{Error, TransferError};

/// Open, address-bound I2C device
///
/// Created only by [`Device::open`]. The transport is released by
/// [`Device::close`] or when the handle is dropped, whichever comes first.
/// Register operations on a closed handle return [`Error::InvalidHandle`]
/// without touching the bus.
pub struct Device<T: I2cTransport> {
    /// `None` once closed
    transport: Option<T>,
    bus: String,
    address: Address,
}

impl<T: I2cTransport> Device<T> {
    /// Open a bus and bind it to a device address
    ///
    /// # Arguments
    /// * `bus` - Platform bus implementation
    /// * `path` - Bus path (e.g. `/dev/i2c-1`)
    /// * `address` - 7-bit device address (0-127)
    ///
    /// # Errors
    /// * [`Error::OpenFailed`] - the bus path could not be opened
    /// * [`Error::BindFailed`] - the address is out of range or the bind
    ///   request failed
    /// * [`Error::AllocationFailed`] - no memory for the handle's copy of
    ///   the path
    ///
    /// The opened bus is released on every failure after the open.
    pub fn open<B>(bus: &mut B, path: &str, address: u8) -> Result<Self, Error>
    where
        B: I2cBus<Transport = T>,
    {
        let mut transport = bus.open(path).map_err(|e| {
            debug!("Failed to open {}: {}", path, e);
            Error::OpenFailed(e)
        })?;

        // Same answer the kernel gives for a 7-bit bind above 0x7F
        let address = Address::new(address).ok_or(Error::BindFailed(OsError::EINVAL))?;

        transport.bind(address).map_err(|e| {
            debug!("Failed to bind {} on {}: {}", address, path, e);
            Error::BindFailed(e)
        })?;

        let mut bus = String::new();
        bus.try_reserve_exact(path.len())
            .map_err(|_| Error::AllocationFailed)?;
        bus.push_str(path);

        debug!("Opened I2C device {} on {}", address, bus);
        Ok(Self {
            transport: Some(transport),
            bus,
            address,
        })
    }

    /// Read one byte from a device register
    pub fn read_register(&mut self, register: u8) -> Result<u8, Error> {
        let transport = self.transport.as_mut().ok_or(Error::InvalidHandle)?;

        read_transaction(transport, register).map_err(|e| {
            warn!(
                "Failed to read register {:#04x} of {} on {}: {}",
                register, self.address, self.bus, e
            );
            Error::TransferFailed(e)
        })
    }

    /// Write one byte to a device register
    pub fn write_register(&mut self, register: u8, value: u8) -> Result<(), Error> {
        let transport = self.transport.as_mut().ok_or(Error::InvalidHandle)?;

        let frame = [register, value];
        expect_exact(transport.write(&frame), frame.len()).map_err(|e| {
            warn!(
                "Failed to write register {:#04x} of {} on {}: {}",
                register, self.address, self.bus, e
            );
            Error::TransferFailed(e)
        })
    }

    /// Release the bus connection
    ///
    /// Calling this on an already closed handle does nothing.
    pub fn close(&mut self) {
        if let Some(transport) = self.transport.take() {
            drop(transport);
            debug!("Closed I2C device {} on {}", self.address, self.bus);
        }
    }

    /// Check if the handle still holds its bus connection
    pub fn is_open(&self) -> bool {
        self.transport.is_some()
    }

    /// Bus path the handle was opened with
    pub fn bus_path(&self) -> &str {
        &self.bus
    }

    /// Device address the handle is bound to
    pub fn address(&self) -> Address {
        self.address
    }
}

impl<T: I2cTransport> Drop for Device<T> {
    fn drop(&mut self) {
        self.close();
    }
}

impl<T: I2cTransport> fmt::Debug for Device<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Device")
            .field("bus", &self.bus.as_str())
            .field("address", &self.address)
            .field("open", &self.is_open())
            .finish()
    }
}

/// Address write followed by a one-byte read
fn read_transaction<T: I2cTransport>(transport: &mut T, register: u8) -> Result<u8, TransferError> {
    expect_exact(transport.write(&[register]), 1)?;

    let mut value = [0u8; 1];
    expect_exact(transport.read(&mut value), 1)?;
    Ok(value[0])
}

/// Turn a transfer count into success only if it matches
fn expect_exact(result: Result<usize, OsError>, expected: usize) -> Result<(), TransferError> {
    match result {
        Ok(actual) if actual == expected => Ok(()),
        Ok(actual) => Err(TransferError::Short { expected, actual }),
        Err(e) => Err(TransferError::Os(e)),
    }
}
