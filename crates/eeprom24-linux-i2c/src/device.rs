//! Linux I2C device implementation
//!
//! This module provides the `LinuxI2c` struct that implements the
//! `I2cMaster` trait using Linux's i2c-dev character device interface.

use crate::error::{LinuxI2cError, Result};

use eeprom24_core::bus::I2cMaster;
use eeprom24_core::error::{Error as CoreError, Result as CoreResult};

use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::os::unix::io::AsRawFd;
use std::time::Duration;

/// Linux i2c-dev ioctl constants
mod ioctl {
    use nix::ioctl_write_int_bad;

    /// I2C_SLAVE from linux/i2c-dev.h: bind the fd to a chip address so
    /// that plain read(2)/write(2) address that chip
    const I2C_SLAVE: libc::c_ulong = 0x0703;

    ioctl_write_int_bad!(i2c_slave, I2C_SLAVE);
}

/// Linux I2C bus master
///
/// Opens an `/dev/i2c-N` adapter and moves bytes with plain file reads
/// and writes. The kernel routes a transfer to whichever chip address the
/// fd was last bound to with `I2C_SLAVE`; chips that fold memory bits
/// into their bus address change the effective address mid-block, so the
/// binding is re-issued whenever the target address changes.
#[derive(Debug)]
pub struct LinuxI2c {
    file: File,
    path: String,
    bound_address: Option<u8>,
}

impl LinuxI2c {
    /// Open an I2C adapter by path (e.g. `/dev/i2c-1`)
    pub fn open(path: &str) -> Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .map_err(|source| LinuxI2cError::OpenFailed {
                path: path.to_string(),
                source,
            })?;

        log::debug!("Opened I2C adapter {}", path);
        Ok(Self {
            file,
            path: path.to_string(),
            bound_address: None,
        })
    }

    /// The adapter path this master was opened on
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Bind the fd to a chip address, skipping the ioctl when unchanged
    fn bind(&mut self, address: u8) -> Result<()> {
        if self.bound_address == Some(address) {
            return Ok(());
        }

        unsafe { ioctl::i2c_slave(self.file.as_raw_fd(), address as libc::c_int) }.map_err(
            |source| LinuxI2cError::BindFailed { address, source },
        )?;

        log::trace!("Bound {} to chip 0x{:02X}", self.path, address);
        self.bound_address = Some(address);
        Ok(())
    }

    fn write_bytes(&mut self, address: u8, data: &[u8]) -> Result<usize> {
        self.bind(address)?;
        self.file.write(data).map_err(LinuxI2cError::TransferFailed)
    }

    fn read_bytes(&mut self, address: u8, buf: &mut [u8]) -> Result<usize> {
        self.bind(address)?;
        self.file.read(buf).map_err(LinuxI2cError::TransferFailed)
    }
}

impl I2cMaster for LinuxI2c {
    fn write(&mut self, address: u8, data: &[u8]) -> CoreResult<usize> {
        self.write_bytes(address, data).map_err(|e| {
            log::error!("{}", e);
            CoreError::BusWriteFailed
        })
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> CoreResult<usize> {
        self.read_bytes(address, buf).map_err(|e| {
            log::error!("{}", e);
            CoreError::BusReadFailed
        })
    }

    fn delay_us(&mut self, us: u32) {
        std::thread::sleep(Duration::from_micros(us as u64));
    }
}
