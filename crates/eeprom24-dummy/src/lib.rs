//! eeprom24-dummy - In-memory EEPROM emulator for testing
//!
//! This crate provides a dummy I2C master that emulates a single 24-series
//! EEPROM in memory. It's useful for testing and development without real
//! hardware.
//!
//! The emulator reproduces the chip behaviors the driver has to work
//! around: offset bits folded into the device address, one- or two-byte
//! register addressing, silent wrap-around within a page when a write
//! transaction overruns it, and cursor auto-increment across page
//! boundaries on reads. Every bus interaction is recorded for inspection,
//! and short reads can be injected to exercise error paths.

use eeprom24_core::addressing::{overflow_bits, RegisterWidth};
use eeprom24_core::bus::I2cMaster;
use eeprom24_core::chip::EepromProfile;
use eeprom24_core::error::{Error, Result};

/// Configuration for the emulated chip
#[derive(Debug, Clone)]
pub struct DummyConfig {
    /// Base 7-bit bus address the chip is strapped to
    pub base_address: u8,
    /// Address width of the emulated family
    pub address_bits: u8,
    /// Total capacity in bytes (power of two)
    pub storage_bytes: usize,
    /// Page size in bytes
    pub page_bytes: usize,
}

impl DummyConfig {
    /// Configuration matching a catalog profile at the given address
    pub fn for_profile(profile: &EepromProfile, base_address: u8) -> Self {
        Self {
            base_address,
            address_bits: profile.address_bits,
            storage_bytes: profile.storage_bytes() as usize,
            page_bytes: profile.page_bytes() as usize,
        }
    }
}

impl Default for DummyConfig {
    fn default() -> Self {
        // AT24C256 geometry
        Self {
            base_address: 0x50,
            address_bits: 15,
            storage_bytes: 32768,
            page_bytes: 64,
        }
    }
}

/// One recorded bus interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BusTransaction {
    /// A write transaction: register-address bytes plus any data
    Write {
        /// Effective bus address the transaction went to
        address: u8,
        /// The raw transaction bytes as seen on the wire
        bytes: Vec<u8>,
    },
    /// A read transaction
    Read {
        /// Effective bus address the transaction went to
        address: u8,
        /// Number of bytes requested
        len: usize,
    },
}

/// Dummy EEPROM bus master
///
/// Emulates one chip in memory for testing purposes. Memory starts
/// zero-filled.
#[derive(Debug)]
pub struct DummyEeprom {
    config: DummyConfig,
    data: Vec<u8>,
    cursor: usize,
    overflow_bits: u8,
    register_bytes: usize,
    transactions: Vec<BusTransaction>,
    delays_us: Vec<u32>,
    short_read: Option<usize>,
}

impl DummyEeprom {
    /// Create a new dummy chip with the given configuration
    pub fn new(config: DummyConfig) -> Self {
        let data = vec![0u8; config.storage_bytes];
        let overflow = overflow_bits(config.address_bits);
        let register_bytes = RegisterWidth::for_address_bits(config.address_bits).bytes();
        Self {
            config,
            data,
            cursor: 0,
            overflow_bits: overflow,
            register_bytes,
            transactions: Vec::new(),
            delays_us: Vec::new(),
            short_read: None,
        }
    }

    /// Create a dummy chip matching a catalog profile
    pub fn for_profile(profile: &EepromProfile, base_address: u8) -> Self {
        Self::new(DummyConfig::for_profile(profile, base_address))
    }

    /// Create a dummy chip with pre-filled data
    pub fn with_data(config: DummyConfig, initial_data: &[u8]) -> Self {
        let mut chip = Self::new(config);
        let len = core::cmp::min(initial_data.len(), chip.data.len());
        chip.data[..len].copy_from_slice(&initial_data[..len]);
        chip
    }

    /// Get a reference to the chip memory
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get a mutable reference to the chip memory
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Get the configuration
    pub fn config(&self) -> &DummyConfig {
        &self.config
    }

    /// All recorded transactions, in order
    pub fn transactions(&self) -> &[BusTransaction] {
        &self.transactions
    }

    /// Number of write transactions seen
    pub fn write_count(&self) -> usize {
        self.transactions
            .iter()
            .filter(|t| matches!(t, BusTransaction::Write { .. }))
            .count()
    }

    /// Number of read transactions seen
    pub fn read_count(&self) -> usize {
        self.transactions
            .iter()
            .filter(|t| matches!(t, BusTransaction::Read { .. }))
            .count()
    }

    /// Number of delay requests seen
    pub fn delay_count(&self) -> usize {
        self.delays_us.len()
    }

    /// Sum of all requested delays in microseconds
    pub fn total_delay_us(&self) -> u64 {
        self.delays_us.iter().map(|&us| us as u64).sum()
    }

    /// Forget all recorded transactions and delays
    pub fn clear_log(&mut self) {
        self.transactions.clear();
        self.delays_us.clear();
    }

    /// Make the next read transaction return at most `received` bytes
    pub fn fail_next_read_short(&mut self, received: usize) {
        self.short_read = Some(received);
    }

    /// Number of register-address bytes this chip expects
    pub fn register_bytes(&self) -> usize {
        self.register_bytes
    }

    fn overflow_mask(&self) -> u8 {
        (1u8 << self.overflow_bits) - 1
    }

    /// Check an incoming bus address and extract the folded offset bits
    ///
    /// The chip acknowledges any address whose high bits match its strap;
    /// the low `overflow_bits` bits select a memory block.
    fn decode_address(&self, address: u8) -> Option<usize> {
        let mask = self.overflow_mask();
        if address & !mask != self.config.base_address {
            return None;
        }
        Some(((address & mask) as usize) << (8 * self.register_bytes))
    }

    fn storage_mask(&self) -> usize {
        self.config.storage_bytes - 1
    }
}

impl I2cMaster for DummyEeprom {
    fn write(&mut self, address: u8, data: &[u8]) -> Result<usize> {
        self.transactions.push(BusTransaction::Write {
            address,
            bytes: data.to_vec(),
        });

        let high_bits = self.decode_address(address).ok_or(Error::BusWriteFailed)?;
        if data.len() < self.register_bytes {
            log::debug!("dummy: truncated register address, not acknowledging");
            return Err(Error::BusWriteFailed);
        }

        let mut register = 0usize;
        for &byte in &data[..self.register_bytes] {
            register = (register << 8) | byte as usize;
        }
        self.cursor = (high_bits | register) & self.storage_mask();

        // Data beyond the register address lands in memory; the page
        // address counter wraps within the page, exactly as real silicon
        // corrupts an oversized transaction
        let payload = &data[self.register_bytes..];
        let page = self.config.page_bytes;
        let page_base = self.cursor - (self.cursor % page);
        for (i, &byte) in payload.iter().enumerate() {
            let index = page_base + ((self.cursor % page) + i) % page;
            self.data[index] = byte;
        }
        if !payload.is_empty() {
            self.cursor = page_base + ((self.cursor % page) + payload.len()) % page;
        }

        Ok(data.len())
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<usize> {
        self.transactions.push(BusTransaction::Read {
            address,
            len: buf.len(),
        });

        let high_bits = self.decode_address(address).ok_or(Error::BusReadFailed)?;
        if self.overflow_bits > 0 {
            // The device-address bits take part in the access
            let low_mask = (1usize << (8 * self.register_bytes)) - 1;
            self.cursor = (high_bits | (self.cursor & low_mask)) & self.storage_mask();
        }

        let received = match self.short_read.take() {
            Some(limit) => core::cmp::min(limit, buf.len()),
            None => buf.len(),
        };

        // Sequential reads roll over from the end of the array
        for slot in buf[..received].iter_mut() {
            *slot = self.data[self.cursor];
            self.cursor = (self.cursor + 1) & self.storage_mask();
        }

        Ok(received)
    }

    fn delay_us(&mut self, us: u32) {
        // No real waiting for in-memory operations; remember the request
        self.delays_us.push(us);
    }
}
