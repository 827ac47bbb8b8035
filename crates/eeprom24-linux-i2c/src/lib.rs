//! eeprom24-linux-i2c - Linux i2c-dev support
//!
//! This crate provides access to EEPROMs behind Linux I2C adapters via
//! the `/dev/i2c-N` character device interface.
//!
//! # Overview
//!
//! The Linux I2C driver exposes bus adapters through character devices at
//! `/dev/i2c-N` where N is the adapter number. A chip is selected with
//! the `I2C_SLAVE` ioctl, after which plain reads and writes on the fd
//! address that chip.
//!
//! # Example
//!
//! ```no_run
//! use eeprom24_core::chip::profiles::AT24C256;
//! use eeprom24_core::eeprom::{Eeprom, WritePayload};
//! use eeprom24_linux_i2c::LinuxI2c;
//!
//! let master = LinuxI2c::open("/dev/i2c-1")?;
//! let mut chip = Eeprom::new(&AT24C256, master, 0x50)?;
//!
//! chip.write_block(0, WritePayload::Bytes(b"hello"))?;
//! let bytes = chip.read_block(0, 5)?;
//! println!("{:02X?}", bytes);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # System Requirements
//!
//! - Linux kernel with i2c-dev support enabled (`CONFIG_I2C_CHARDEV`)
//! - Read/write access to `/dev/i2c-N`
//! - May require adding user to the `i2c` group or using udev rules
//!
//! # Known Working Devices
//!
//! - Raspberry Pi (all models, adapter 1 on the 40-pin header)
//! - BeagleBone Black
//! - Any board with an i2c-dev enabled adapter

pub mod device;
pub mod error;

// Re-exports
pub use device::LinuxI2c;
pub use error::{LinuxI2cError, Result};

/// Open a Linux I2C adapter and return a boxed I2cMaster
///
/// This is a convenience function for use in CLI transport dispatch.
pub fn open_linux_i2c(
    path: &str,
) -> std::result::Result<Box<dyn eeprom24_core::bus::I2cMaster + Send>, Box<dyn std::error::Error>>
{
    let master = LinuxI2c::open(path)?;
    Ok(Box::new(master))
}
