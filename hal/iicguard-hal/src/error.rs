//! OS error codes
//!
//! Transports report failures as the raw errno value the operating system
//! gave them. The core crate wraps it into its own error taxonomy without
//! losing the code.

use core::fmt;

/// Raw operating system error number
///
/// The named constants carry the Linux values, which is the only platform
/// with an i2c-dev interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OsError(pub i32);

impl OsError {
    /// No such file or directory
    pub const ENOENT: Self = Self(2);
    /// I/O error (bus error on most adapters)
    pub const EIO: Self = Self(5);
    /// No such device or address (address NACK)
    pub const ENXIO: Self = Self(6);
    /// Try again (arbitration lost)
    pub const EAGAIN: Self = Self(11);
    /// Out of memory
    pub const ENOMEM: Self = Self(12);
    /// Permission denied
    pub const EACCES: Self = Self(13);
    /// Device or resource busy (address claimed by a kernel driver)
    pub const EBUSY: Self = Self(16);
    /// Invalid argument
    pub const EINVAL: Self = Self(22);
    /// Inappropriate ioctl for device
    pub const ENOTTY: Self = Self(25);
    /// Connection timed out
    pub const ETIMEDOUT: Self = Self(110);
    /// Remote I/O error (NACK on some adapters)
    pub const EREMOTEIO: Self = Self(121);

    /// Get the raw errno value
    pub fn code(self) -> i32 {
        self.0
    }
}

impl fmt::Display for OsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "os error {}", self.0)
    }
}
