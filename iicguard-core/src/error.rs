//! Device handle errors
//!
//! Open-time failures keep the OS error number. Transfer failures keep it
//! too when the OS reported one, or record the short count otherwise.

use embedded_hal::i2c::{ErrorKind, NoAcknowledgeSource};
use iicguard_hal::OsError;

/// Why a transfer did not complete
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransferError {
    /// The OS call failed
    #[error("{0}")]
    Os(OsError),
    /// The OS call moved fewer bytes than requested
    #[error("short transfer: {actual} of {expected} bytes")]
    Short { expected: usize, actual: usize },
}

/// Device handle errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Bus path could not be opened
    #[error("failed to open I2C bus: {0}")]
    OpenFailed(OsError),
    /// Device address could not be bound on the opened bus
    #[error("failed to bind I2C device address: {0}")]
    BindFailed(OsError),
    /// No room for the handle state
    #[error("out of memory for I2C device handle")]
    AllocationFailed,
    /// Handle was already closed
    #[error("I2C device handle is closed")]
    InvalidHandle,
    /// Register address write or value transfer failed
    #[error("I2C transfer failed: {0}")]
    TransferFailed(TransferError),
}

impl Error {
    /// OS error number behind this failure, if any
    pub fn os_error(&self) -> Option<OsError> {
        match self {
            Error::OpenFailed(e) | Error::BindFailed(e) => Some(*e),
            Error::AllocationFailed => Some(OsError::ENOMEM),
            Error::TransferFailed(TransferError::Os(e)) => Some(*e),
            Error::TransferFailed(TransferError::Short { .. }) | Error::InvalidHandle => None,
        }
    }
}

impl embedded_hal::i2c::Error for Error {
    fn kind(&self) -> ErrorKind {
        match self {
            Error::TransferFailed(TransferError::Short { .. }) => {
                ErrorKind::NoAcknowledge(NoAcknowledgeSource::Unknown)
            }
            _ => match self.os_error() {
                Some(OsError::ENXIO) | Some(OsError::EREMOTEIO) => {
                    ErrorKind::NoAcknowledge(NoAcknowledgeSource::Unknown)
                }
                Some(OsError::EAGAIN) => ErrorKind::ArbitrationLoss,
                Some(OsError::EIO) => ErrorKind::Bus,
                _ => ErrorKind::Other,
            },
        }
    }
}
