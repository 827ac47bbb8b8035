//! Error types for eeprom24-core
//!
//! This module provides a no_std compatible error type that can be used
//! throughout the crate.

use core::fmt;

/// Core error type - no_std compatible, Copy for efficiency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    // Construction errors
    /// Chosen I2C address is not in the profile's allowed set
    InvalidBusAddress,
    /// Profile's address width cannot be expressed by the register-address
    /// bytes plus the bus-address overflow bits
    UnsupportedAddressing,
    /// Memory organization is inconsistent (size, page count and page size
    /// do not agree, or the size is not a power of two)
    InvalidGeometry,

    // Request validation errors
    /// Requested window extends past the end of the chip
    MemoryWrapOverflow,
    /// Write payload could not be converted to bytes
    UnsupportedDataType,

    // I/O errors
    /// A read burst returned fewer bytes than requested
    ShortRead {
        /// Bytes requested from the bus
        requested: u32,
        /// Bytes actually received
        received: u32,
    },
    /// Bus write transaction failed
    BusWriteFailed,
    /// Bus read transaction failed
    BusReadFailed,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBusAddress => write!(f, "I2C address not supported by this chip"),
            Self::UnsupportedAddressing => {
                write!(f, "address width not representable on the wire")
            }
            Self::InvalidGeometry => write!(f, "inconsistent memory organization"),
            Self::MemoryWrapOverflow => write!(f, "access extends past end of memory"),
            Self::UnsupportedDataType => write!(f, "payload not convertible to bytes"),
            Self::ShortRead {
                requested,
                received,
            } => {
                write!(
                    f,
                    "short read: requested {} bytes, received {}",
                    requested, received
                )
            }
            Self::BusWriteFailed => write!(f, "I2C write failed"),
            Self::BusReadFailed => write!(f, "I2C read failed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type alias using the core Error type
pub type Result<T> = core::result::Result<T, Error>;
