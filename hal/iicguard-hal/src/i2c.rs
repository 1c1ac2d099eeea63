//! I2C bus abstractions
//!
//! Provides the traits a platform implements to open a bus and move bytes
//! to and from one bound device.

use crate::{Address, OsError};

/// I2C bus master
///
/// Opens bus resources by path. Each successful open hands out an
/// exclusively owned transport.
pub trait I2cBus {
    /// Transport produced by a successful open
    type Transport: I2cTransport;

    /// Open the named bus for read-write access
    ///
    /// # Arguments
    /// * `path` - Bus identifier (e.g. `/dev/i2c-1` on Linux)
    fn open(&mut self, path: &str) -> Result<Self::Transport, OsError>;
}

/// Open bus connection
///
/// Byte-level I/O goes to whichever device address was last bound.
/// Dropping the transport releases the underlying OS resource.
pub trait I2cTransport {
    /// Associate all following transfers with a device address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    fn bind(&mut self, address: Address) -> Result<(), OsError>;

    /// Write bytes to the bound device
    ///
    /// Returns the number of bytes the OS reports as transferred, which
    /// may be fewer than `data.len()`.
    fn write(&mut self, data: &[u8]) -> Result<usize, OsError>;

    /// Read bytes from the bound device
    ///
    /// Returns the number of bytes the OS reports as transferred, which
    /// may be fewer than `buf.len()`.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, OsError>;
}
