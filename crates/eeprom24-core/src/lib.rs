//! eeprom24-core - Core library for 24-series I2C EEPROM access
//!
//! This crate provides the core functionality for reading and writing
//! byte-addressable, page-organized serial EEPROMs on an I2C bus. It is
//! designed to be `no_std` compatible for use in embedded environments.
//!
//! Chips in this family differ in capacity, page size and address width,
//! and some fold the high bits of a memory offset into the I2C device
//! address itself. The crate computes the effective bus address and the
//! on-wire register-address bytes for every transaction, and splits
//! arbitrary-length accesses into chip-legal, page-aligned chunks.
//!
//! # Features
//!
//! - `std` - Enable standard library support (includes `alloc`)
//! - `alloc` - Enable heap allocation for buffer-returning APIs
//! - `is_sync` - Compile the async API as blocking/synchronous
//!
//! # Example
//!
//! ```ignore
//! use eeprom24_core::chip::profiles::AT24C256;
//! use eeprom24_core::eeprom::Eeprom;
//!
//! fn dump_header<M: eeprom24_core::bus::I2cMaster>(master: M) {
//!     let mut chip = Eeprom::new(&AT24C256, master, 0x50).unwrap();
//!     match chip.read_block(0, 64) {
//!         Ok(bytes) => println!("{:02X?}", bytes),
//!         Err(e) => println!("Read failed: {}", e),
//!     }
//! }
//! ```

#![no_std]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
// Allow async fn in traits - we use maybe-async for dual sync/async support
#![allow(async_fn_in_trait)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod addressing;
pub mod bus;
pub mod chip;
pub mod eeprom;
pub mod error;

pub use error::{Error, Result};
