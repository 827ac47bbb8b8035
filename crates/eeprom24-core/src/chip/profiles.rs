//! Built-in profile catalog for the 24-series families
//!
//! Pure data; settle delays assume operation at 2.7 V or above and come
//! from the tWR figure of the corresponding datasheet.

use super::types::{EepromProfile, MemoryOrganization};

// Address sets by family wiring: three address pins give eight slots,
// families that repurpose pins for memory bits get fewer.
const ADDRESSES_8_DEVICES: &[u8] = &[0x50, 0x51, 0x52, 0x53, 0x54, 0x55, 0x56, 0x57];
const ADDRESSES_4_DEVICES: &[u8] = &[0x50, 0x52, 0x54, 0x56];
const ADDRESSES_4_DEVICES_A2_LOW: &[u8] = &[0x50, 0x51, 0x52, 0x53];
const ADDRESSES_2_DEVICES: &[u8] = &[0x50, 0x54];
const ADDRESSES_1_DEVICE: &[u8] = &[0x50];

const ORG_128_16X8: MemoryOrganization = MemoryOrganization::new(16, 8);
const ORG_256_32X8: MemoryOrganization = MemoryOrganization::new(32, 8);
const ORG_512_32X16: MemoryOrganization = MemoryOrganization::new(32, 16);
const ORG_1K_64X16: MemoryOrganization = MemoryOrganization::new(64, 16);
const ORG_2K_128X16: MemoryOrganization = MemoryOrganization::new(128, 16);
const ORG_4K_128X32: MemoryOrganization = MemoryOrganization::new(128, 32);
const ORG_8K_256X32: MemoryOrganization = MemoryOrganization::new(256, 32);
const ORG_16K_256X64: MemoryOrganization = MemoryOrganization::new(256, 64);
const ORG_32K_512X64: MemoryOrganization = MemoryOrganization::new(512, 64);
const ORG_64K_512X128: MemoryOrganization = MemoryOrganization::new(512, 128);
const ORG_128K_512X256: MemoryOrganization = MemoryOrganization::new(512, 256);
const ORG_256K_1024X256: MemoryOrganization = MemoryOrganization::new(1024, 256);

/// AT24C01 - 1 Kbit, up to 8 devices per bus
pub static AT24C01: EepromProfile = EepromProfile {
    name: "AT24C01",
    detail: "AT24C01[8](128)",
    bus_addresses: ADDRESSES_8_DEVICES,
    address_bits: 7,
    write_cycle_us: 5_000,
    organization: ORG_128_16X8,
};

/// AT24C02 - 2 Kbit, up to 8 devices per bus
pub static AT24C02: EepromProfile = EepromProfile {
    name: "AT24C02",
    detail: "AT24C02[8](256)",
    bus_addresses: ADDRESSES_8_DEVICES,
    address_bits: 8,
    write_cycle_us: 5_000,
    organization: ORG_256_32X8,
};

/// AT24C04 - 4 Kbit; A0 carries a memory bit, so 4 devices per bus
pub static AT24C04: EepromProfile = EepromProfile {
    name: "AT24C04",
    detail: "AT24C04[4](512)",
    bus_addresses: ADDRESSES_4_DEVICES,
    address_bits: 9,
    write_cycle_us: 5_000,
    organization: ORG_512_32X16,
};

/// AT24C08 - 8 Kbit; A0/A1 carry memory bits, so 2 devices per bus
///
/// The part answers on the whole 0x50..=0x53 (or 0x54..=0x57) window;
/// only the window base is a legal configured address.
pub static AT24C08: EepromProfile = EepromProfile {
    name: "AT24C08",
    detail: "AT24C08[2](1024)",
    bus_addresses: ADDRESSES_2_DEVICES,
    address_bits: 10,
    write_cycle_us: 5_000,
    organization: ORG_1K_64X16,
};

/// AT24C16 - 16 Kbit; all three pins carry memory bits, single device
///
/// Answers on all of 0x50..=0x57; only 0x50 is a legal configured address.
pub static AT24C16: EepromProfile = EepromProfile {
    name: "AT24C16",
    detail: "AT24C16[1](2048)",
    bus_addresses: ADDRESSES_1_DEVICE,
    address_bits: 11,
    write_cycle_us: 5_000,
    organization: ORG_2K_128X16,
};

/// AT24C32 - 32 Kbit, two-byte register addressing starts here
pub static AT24C32: EepromProfile = EepromProfile {
    name: "AT24C32",
    detail: "AT24C32[8](4096)",
    bus_addresses: ADDRESSES_8_DEVICES,
    address_bits: 12,
    write_cycle_us: 10_000,
    organization: ORG_4K_128X32,
};

/// AT24C64 - 64 Kbit
pub static AT24C64: EepromProfile = EepromProfile {
    name: "AT24C64",
    detail: "AT24C64[8](8192)",
    bus_addresses: ADDRESSES_8_DEVICES,
    address_bits: 13,
    write_cycle_us: 10_000,
    organization: ORG_8K_256X32,
};

/// AT24C128 - 128 Kbit; A2 must be wired low, 4 devices per bus
pub static AT24C128: EepromProfile = EepromProfile {
    name: "AT24C128",
    detail: "AT24C128[4](16384)",
    bus_addresses: ADDRESSES_4_DEVICES_A2_LOW,
    address_bits: 14,
    write_cycle_us: 10_000,
    organization: ORG_16K_256X64,
};

/// AT24C256 - 256 Kbit; A2 must be wired low, 4 devices per bus
pub static AT24C256: EepromProfile = EepromProfile {
    name: "AT24C256",
    detail: "AT24C256[4](32768)",
    bus_addresses: ADDRESSES_4_DEVICES_A2_LOW,
    address_bits: 15,
    write_cycle_us: 10_000,
    organization: ORG_32K_512X64,
};

/// AT24C512 - 512 Kbit; A2 must be wired low, 4 devices per bus
pub static AT24C512: EepromProfile = EepromProfile {
    name: "AT24C512",
    detail: "AT24C512[4](65536)",
    bus_addresses: ADDRESSES_4_DEVICES_A2_LOW,
    address_bits: 16,
    write_cycle_us: 10_000,
    organization: ORG_64K_512X128,
};

/// AT24C32C - 32 Kbit, faster write cycle than the original AT24C32
pub static AT24C32C: EepromProfile = EepromProfile {
    name: "AT24C32C",
    detail: "AT24C32C[8](4096)",
    bus_addresses: ADDRESSES_8_DEVICES,
    address_bits: 12,
    write_cycle_us: 5_000,
    organization: ORG_4K_128X32,
};

/// AT24C64C - 64 Kbit
pub static AT24C64C: EepromProfile = EepromProfile {
    name: "AT24C64C",
    detail: "AT24C64C[8](8192)",
    bus_addresses: ADDRESSES_8_DEVICES,
    address_bits: 13,
    write_cycle_us: 5_000,
    organization: ORG_8K_256X32,
};

/// AT24C128C - 128 Kbit; unlike the AT24C128 all three pins are usable
pub static AT24C128C: EepromProfile = EepromProfile {
    name: "AT24C128C",
    detail: "AT24C128C[8](16384)",
    bus_addresses: ADDRESSES_8_DEVICES,
    address_bits: 14,
    write_cycle_us: 5_000,
    organization: ORG_16K_256X64,
};

/// AT24C256C - 256 Kbit; unlike the AT24C256 all three pins are usable
pub static AT24C256C: EepromProfile = EepromProfile {
    name: "AT24C256C",
    detail: "AT24C256C[8](32768)",
    bus_addresses: ADDRESSES_8_DEVICES,
    address_bits: 15,
    write_cycle_us: 5_000,
    organization: ORG_32K_512X64,
};

/// KLine K24C256C - 256 Kbit AT24C256C clone
///
/// Known to also answer on its configured address plus 0x08 (a ghost
/// address visible in i2cdetect); the configured address is what belongs
/// here.
pub static K24C256C: EepromProfile = EepromProfile {
    name: "K24C256C",
    detail: "KLine K24C256C(v1.8 2014) [8](32768)",
    bus_addresses: ADDRESSES_8_DEVICES,
    address_bits: 15,
    write_cycle_us: 5_000,
    organization: ORG_32K_512X64,
};

/// AT24C512C - 512 Kbit
pub static AT24C512C: EepromProfile = EepromProfile {
    name: "AT24C512C",
    detail: "AT24C512C[8](65536)",
    bus_addresses: ADDRESSES_8_DEVICES,
    address_bits: 16,
    write_cycle_us: 5_000,
    organization: ORG_64K_512X128,
};

/// AT24CM01 - 1 Mbit; bit 16 of the offset rides in the bus address
pub static AT24CM01: EepromProfile = EepromProfile {
    name: "AT24CM01",
    detail: "AT24CM01[4](131072)",
    bus_addresses: ADDRESSES_4_DEVICES,
    address_bits: 17,
    write_cycle_us: 5_000,
    organization: ORG_128K_512X256,
};

/// AT24CM02 - 2 Mbit; bits 16..17 of the offset ride in the bus address
pub static AT24CM02: EepromProfile = EepromProfile {
    name: "AT24CM02",
    detail: "AT24CM02[2](262144)",
    bus_addresses: ADDRESSES_2_DEVICES,
    address_bits: 18,
    write_cycle_us: 5_000,
    organization: ORG_256K_1024X256,
};

/// All built-in profiles, in capacity order
pub static BUILTIN: &[&EepromProfile] = &[
    &AT24C01, &AT24C02, &AT24C04, &AT24C08, &AT24C16, &AT24C32, &AT24C64, &AT24C128, &AT24C256,
    &AT24C512, &AT24C32C, &AT24C64C, &AT24C128C, &AT24C256C, &K24C256C, &AT24C512C, &AT24CM01,
    &AT24CM02,
];
