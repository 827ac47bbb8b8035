//! EEPROM device facade

#[cfg(feature = "alloc")]
use alloc::vec;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use maybe_async::maybe_async;

use crate::bus::I2cMaster;
use crate::chip::EepromProfile;
use crate::error::{Error, Result};

use super::operations::{self, EepromContext};

/// Character encoding for text write payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    /// UTF-8; every `&str` converts losslessly
    #[default]
    Utf8,
    /// 7-bit ASCII; conversion fails for text with non-ASCII characters
    Ascii,
}

/// Data accepted by [`Eeprom::write_block`]
///
/// Anything else simply does not construct; conversions that can fail
/// (text under a restrictive encoding) are checked before any bus
/// transaction.
#[derive(Debug, Clone, Copy)]
pub enum WritePayload<'a> {
    /// Raw bytes, written as-is
    Bytes(&'a [u8]),
    /// Text, converted per the given encoding
    Text {
        /// The text to write
        text: &'a str,
        /// How to turn it into bytes
        encoding: TextEncoding,
    },
}

impl<'a> WritePayload<'a> {
    /// View the payload as bytes
    ///
    /// Fails with [`Error::UnsupportedDataType`] when the text cannot be
    /// represented in the requested encoding.
    pub fn as_bytes(&self) -> Result<&'a [u8]> {
        match *self {
            Self::Bytes(bytes) => Ok(bytes),
            Self::Text { text, encoding } => match encoding {
                TextEncoding::Utf8 => Ok(text.as_bytes()),
                TextEncoding::Ascii => {
                    if text.is_ascii() {
                        Ok(text.as_bytes())
                    } else {
                        Err(Error::UnsupportedDataType)
                    }
                }
            },
        }
    }
}

impl<'a> From<&'a [u8]> for WritePayload<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::Bytes(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for WritePayload<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Self::Bytes(bytes)
    }
}

impl<'a> From<&'a str> for WritePayload<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text {
            text,
            encoding: TextEncoding::Utf8,
        }
    }
}

/// One bound EEPROM device
///
/// Binds a profile, a validated bus address and an owned transport
/// handle. Immutable after construction apart from the transport's I/O
/// state; holds no background resources.
#[derive(Debug)]
pub struct Eeprom<M> {
    master: M,
    ctx: EepromContext,
}

impl<M: I2cMaster> Eeprom<M> {
    /// Bind a profile to a transport handle and bus address
    ///
    /// Fails with [`Error::InvalidBusAddress`] when the address is not in
    /// the profile's allowed set, and with the profile validation errors
    /// for inconsistent or unrepresentable profiles. Performs no bus
    /// traffic.
    pub fn new(profile: &'static EepromProfile, master: M, bus_address: u8) -> Result<Self> {
        let ctx = EepromContext::new(profile, bus_address)?;
        Ok(Self { master, ctx })
    }

    /// Name of the chip
    pub fn name(&self) -> &'static str {
        self.ctx.profile.name
    }

    /// Detailed information about the chip
    pub fn detail(&self) -> &'static str {
        self.ctx.profile.detail
    }

    /// Maximum number of devices of this family on a single bus
    pub fn max_devices(&self) -> usize {
        self.ctx.profile.max_devices()
    }

    /// The legal base bus addresses for this chip family
    pub fn bus_addresses(&self) -> &'static [u8] {
        self.ctx.profile.bus_addresses
    }

    /// The base bus address this device was bound to
    pub fn bus_address(&self) -> u8 {
        self.ctx.bus_address
    }

    /// Storage size in bytes
    pub fn storage_bytes(&self) -> u32 {
        self.ctx.profile.storage_bytes()
    }

    /// Number of memory pages on the chip
    pub fn page_count(&self) -> u32 {
        self.ctx.profile.page_count()
    }

    /// Page size in bytes
    pub fn page_bytes(&self) -> u32 {
        self.ctx.profile.page_bytes()
    }

    /// Bits required to address any byte on the chip
    pub fn address_bits(&self) -> u8 {
        self.ctx.profile.address_bits
    }

    /// Offset bits folded into the bus address (0 for most families)
    pub fn overflow_bits(&self) -> u8 {
        self.ctx.addressing.overflow_bits()
    }

    /// The profile this device was bound to
    pub fn profile(&self) -> &'static EepromProfile {
        self.ctx.profile
    }

    /// Write a block at `offset`; returns the number of bytes written
    ///
    /// The payload is converted to bytes before any bus transaction; the
    /// transfer itself is split into page-legal chunks with the chip's
    /// settle delay after each.
    #[maybe_async]
    pub async fn write_block(&mut self, offset: u32, payload: WritePayload<'_>) -> Result<usize> {
        let data = payload.as_bytes()?;
        operations::write(&mut self.master, &self.ctx, offset, data).await
    }

    /// Read `buf.len()` bytes starting at `offset` into `buf`
    #[maybe_async]
    pub async fn read_into(&mut self, offset: u32, buf: &mut [u8]) -> Result<()> {
        operations::read(&mut self.master, &self.ctx, offset, buf).await
    }

    /// Read `len` bytes starting at `offset`
    #[cfg(feature = "alloc")]
    #[maybe_async]
    pub async fn read_block(&mut self, offset: u32, len: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; len];
        operations::read(&mut self.master, &self.ctx, offset, &mut buf).await?;
        Ok(buf)
    }

    /// Position the chip's internal cursor; returns the normalized offset
    #[maybe_async]
    pub async fn set_cursor(&mut self, offset: u32) -> Result<u32> {
        operations::set_cursor(&mut self.master, &self.ctx, offset).await
    }

    /// Borrow the underlying transport
    pub fn master(&self) -> &M {
        &self.master
    }

    /// Mutably borrow the underlying transport
    pub fn master_mut(&mut self) -> &mut M {
        &mut self.master
    }

    /// Release the underlying transport
    pub fn into_master(self) -> M {
        self.master
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chip::profiles::{AT24C01, AT24C08, AT24C256};

    /// A bus that refuses all traffic; construction must never touch it
    #[derive(Debug)]
    struct DeadBus;

    impl I2cMaster for DeadBus {
        fn write(&mut self, _address: u8, _data: &[u8]) -> Result<usize> {
            panic!("unexpected bus write");
        }

        fn read(&mut self, _address: u8, _buf: &mut [u8]) -> Result<usize> {
            panic!("unexpected bus read");
        }

        fn delay_us(&mut self, _us: u32) {}
    }

    #[test]
    fn construction_rejects_foreign_address() {
        // AT24C256 allows 0x50..=0x53 only
        assert_eq!(
            Eeprom::new(&AT24C256, DeadBus, 0x54).unwrap_err(),
            Error::InvalidBusAddress
        );
    }

    #[test]
    fn metadata_mirrors_the_profile() {
        let dev = Eeprom::new(&AT24C08, DeadBus, 0x54).unwrap();
        assert_eq!(dev.name(), "AT24C08");
        assert_eq!(dev.detail(), "AT24C08[2](1024)");
        assert_eq!(dev.max_devices(), 2);
        assert_eq!(dev.bus_addresses(), &[0x50, 0x54]);
        assert_eq!(dev.bus_address(), 0x54);
        assert_eq!(dev.storage_bytes(), 1024);
        assert_eq!(dev.page_count(), 64);
        assert_eq!(dev.page_bytes(), 16);
        assert_eq!(dev.address_bits(), 10);
        assert_eq!(dev.overflow_bits(), 2);
    }

    #[test]
    fn small_chips_have_no_overflow_bits() {
        let dev = Eeprom::new(&AT24C01, DeadBus, 0x57).unwrap();
        assert_eq!(dev.overflow_bits(), 0);
    }

    #[test]
    fn payload_conversions() {
        let bytes: WritePayload<'_> = (&[1u8, 2, 3][..]).into();
        assert_eq!(bytes.as_bytes().unwrap(), &[1, 2, 3]);

        let text: WritePayload<'_> = "abc".into();
        assert_eq!(text.as_bytes().unwrap(), b"abc");

        let ascii = WritePayload::Text {
            text: "plain",
            encoding: TextEncoding::Ascii,
        };
        assert_eq!(ascii.as_bytes().unwrap(), b"plain");

        let non_ascii = WritePayload::Text {
            text: "gr\u{00FC}n",
            encoding: TextEncoding::Ascii,
        };
        assert_eq!(non_ascii.as_bytes().unwrap_err(), Error::UnsupportedDataType);

        let utf8 = WritePayload::Text {
            text: "gr\u{00FC}n",
            encoding: TextEncoding::Utf8,
        };
        assert_eq!(utf8.as_bytes().unwrap().len(), 5);
    }
}
