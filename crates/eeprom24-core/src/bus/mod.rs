//! I2C master trait definitions
//!
//! These traits use `maybe_async` to support both sync and async modes.
//! - By default, traits are async (suitable for Embassy, tokio)
//! - With the `is_sync` feature, traits become synchronous

use crate::error::Result;
use maybe_async::maybe_async;

/// I2C master trait (sync or async depending on `is_sync` feature)
///
/// This trait represents the raw two-wire transport: write a byte sequence
/// to a 7-bit device address, or read a byte sequence from one. The driver
/// layers all register addressing and page chunking on top, so
/// implementations stay dumb byte movers.
///
/// Transport failures are reported as [`crate::Error::BusWriteFailed`] /
/// [`crate::Error::BusReadFailed`]; the driver neither interprets nor
/// retries them.
#[maybe_async(AFIT)]
pub trait I2cMaster {
    /// Write `data` to the device at `address`
    ///
    /// Returns the number of bytes accepted by the device. A successful
    /// return is taken to mean the whole buffer was transferred.
    async fn write(&mut self, address: u8, data: &[u8]) -> Result<usize>;

    /// Read `buf.len()` bytes from the device at `address`
    ///
    /// Returns the number of bytes actually received, which may be fewer
    /// than requested.
    async fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<usize>;

    /// Delay for the specified number of microseconds
    ///
    /// Used for the post-write settle time (tWR) between transactions.
    async fn delay_us(&mut self, us: u32);
}

// Blanket impl for boxed masters to allow trait objects (sync mode only)
// In async mode, traits with async fn are not object-safe
#[cfg(all(feature = "alloc", feature = "is_sync"))]
impl I2cMaster for alloc::boxed::Box<dyn I2cMaster + Send> {
    fn write(&mut self, address: u8, data: &[u8]) -> Result<usize> {
        (**self).write(address, data)
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<usize> {
        (**self).read(address, buf)
    }

    fn delay_us(&mut self, us: u32) {
        (**self).delay_us(us)
    }
}
