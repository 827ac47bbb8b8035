//! EEPROM chip type definitions

use crate::addressing::MAX_ADDRESS_BITS;
use crate::error::{Error, Result};

/// Largest page size of any chip this addressing scheme covers
///
/// The scheme tops out at 19 address bits (AT24CM02 territory), and those
/// parts use 256-byte pages. The transfer engine sizes its transaction
/// buffer from this.
pub const MAX_PAGE_BYTES: u32 = 256;

/// Page layout of a chip's memory array
///
/// Invariant: `storage_bytes == page_count * page_bytes`, with
/// `storage_bytes` a power of two. Checked by [`EepromProfile::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryOrganization {
    /// Total capacity in bytes (8-bit words)
    pub storage_bytes: u32,
    /// Number of memory pages on the chip
    pub page_count: u32,
    /// Bytes within each page
    pub page_bytes: u32,
}

impl MemoryOrganization {
    /// Create an organization from its page layout
    pub const fn new(page_count: u32, page_bytes: u32) -> Self {
        Self {
            storage_bytes: page_count * page_bytes,
            page_count,
            page_bytes,
        }
    }

    /// Check the geometry invariants
    pub const fn is_consistent(&self) -> bool {
        self.page_count > 0
            && self.page_bytes > 0
            && self.page_bytes <= MAX_PAGE_BYTES
            && self.storage_bytes == self.page_count * self.page_bytes
            && self.storage_bytes.is_power_of_two()
    }
}

/// Addressing and geometry descriptor for one chip family
///
/// Immutable, compile-time data; carries no behavior beyond validation.
/// The built-in catalog lives in [`super::profiles`]; callers may also
/// define their own profiles for uncataloged parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EepromProfile {
    /// Name of the chip (e.g. "AT24C256")
    pub name: &'static str,
    /// Descriptive name: Name\[max devices\](capacity)
    pub detail: &'static str,
    /// Legal 7-bit base I2C addresses for this family
    pub bus_addresses: &'static [u8],
    /// Bits required to address any byte on the chip
    pub address_bits: u8,
    /// Post-write settle delay (datasheet tWR) in microseconds
    pub write_cycle_us: u32,
    /// Memory array layout
    pub organization: MemoryOrganization,
}

impl EepromProfile {
    /// Maximum number of devices of this family on a single bus
    pub const fn max_devices(&self) -> usize {
        self.bus_addresses.len()
    }

    /// Total capacity in bytes
    pub const fn storage_bytes(&self) -> u32 {
        self.organization.storage_bytes
    }

    /// Number of memory pages
    pub const fn page_count(&self) -> u32 {
        self.organization.page_count
    }

    /// Bytes per page
    pub const fn page_bytes(&self) -> u32 {
        self.organization.page_bytes
    }

    /// Validate the profile before first use
    ///
    /// Rejects empty address sets, inconsistent geometry, and address
    /// widths the bus-address and register-byte fields cannot jointly
    /// express. A width that would silently misencode (20 bits and up)
    /// fails here instead of corrupting transfers.
    pub fn validate(&self) -> Result<()> {
        if self.bus_addresses.is_empty() {
            return Err(Error::InvalidBusAddress);
        }
        if self.address_bits == 0 || self.address_bits > MAX_ADDRESS_BITS {
            return Err(Error::UnsupportedAddressing);
        }
        if !self.organization.is_consistent() {
            return Err(Error::InvalidGeometry);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn profile(address_bits: u8, organization: MemoryOrganization) -> EepromProfile {
        EepromProfile {
            name: "TEST",
            detail: "TEST",
            bus_addresses: &[0x50],
            address_bits,
            write_cycle_us: 5_000,
            organization,
        }
    }

    #[test]
    fn organization_from_page_layout() {
        let org = MemoryOrganization::new(512, 64);
        assert_eq!(org.storage_bytes, 32768);
        assert!(org.is_consistent());
    }

    #[test]
    fn catalog_profiles_validate() {
        for p in crate::chip::profiles::BUILTIN {
            assert!(p.validate().is_ok(), "{}", p.name);
        }
    }

    #[test]
    fn rejects_unrepresentable_address_width() {
        // 20 bits would need 4 overflow bits; the scheme caps at 3
        let p = profile(20, MemoryOrganization::new(4096, 256));
        assert_eq!(p.validate(), Err(Error::UnsupportedAddressing));
    }

    #[test]
    fn rejects_inconsistent_geometry() {
        // 3 * 100 is neither a power of two nor page-aligned storage
        let bad = MemoryOrganization {
            storage_bytes: 300,
            page_count: 3,
            page_bytes: 100,
        };
        let p = profile(9, bad);
        assert_eq!(p.validate(), Err(Error::InvalidGeometry));
    }

    #[test]
    fn rejects_empty_address_set() {
        let mut p = profile(8, MemoryOrganization::new(32, 8));
        p.bus_addresses = &[];
        assert_eq!(p.validate(), Err(Error::InvalidBusAddress));
    }
}
