//! i2c-dev character device bus
//!
//! Each `/dev/i2c-N` node is one adapter. Opening it gives a file
//! descriptor; `ioctl(I2C_SLAVE)` picks the device address that plain
//! `read(2)`/`write(2)` calls on that descriptor will talk to.

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::os::fd::AsRawFd;

use iicguard_hal::{Address, I2cBus, I2cTransport, OsError};
use log::trace;
use nix::errno::Errno;

#[allow(unsafe_code)]
mod ioctl {
    /// Select the device address for following transfers (`linux/i2c-dev.h`)
    const I2C_SLAVE: u16 = 0x0703;

    nix::ioctl_write_int_bad!(set_slave_address, I2C_SLAVE);
}

/// Linux i2c-dev bus
///
/// Opens adapter nodes read-write. Stateless, so one value can open any
/// number of devices.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinuxI2cBus;

impl I2cBus for LinuxI2cBus {
    type Transport = LinuxTransport;

    fn open(&mut self, path: &str) -> Result<LinuxTransport, OsError> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .map_err(os_error)?;

        trace!("Opened {} as fd {}", path, file.as_raw_fd());
        Ok(LinuxTransport { file })
    }
}

/// Open i2c-dev file descriptor
///
/// The descriptor is closed when this value is dropped.
#[derive(Debug)]
pub struct LinuxTransport {
    file: File,
}

impl I2cTransport for LinuxTransport {
    fn bind(&mut self, address: Address) -> Result<(), OsError> {
        let fd = self.file.as_raw_fd();
        // SAFETY: `fd` is an open descriptor owned by `self.file`, and
        // I2C_SLAVE takes its argument by value.
        #[allow(unsafe_code)]
        let result = unsafe { ioctl::set_slave_address(fd, address.get().into()) };

        result
            .map(|_| ())
            .map_err(|errno| OsError(errno as i32))
    }

    fn write(&mut self, data: &[u8]) -> Result<usize, OsError> {
        self.file.write(data).map_err(os_error)
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, OsError> {
        self.file.read(buf).map_err(os_error)
    }
}

/// Convert an I/O error to its errno, `EIO` if it has none
pub(crate) fn os_error(e: io::Error) -> OsError {
    e.raw_os_error().map(OsError).unwrap_or(OsError::EIO)
}

/// Human-readable description of an OS error number
///
/// Text comes from nix's errno table, which can differ from the C
/// library's `strerror` wording (ENOTTY reads "Not a typewriter").
///
/// # Example
/// ```
/// use iicguard_hal_linux::OsError;
/// assert_eq!(iicguard_hal_linux::describe(OsError::ENOENT), "No such file or directory");
/// ```
pub fn describe(err: OsError) -> &'static str {
    Errno::from_raw(err.code()).desc()
}
