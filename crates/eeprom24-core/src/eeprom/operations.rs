//! Page-aware transfer operations
//!
//! One logical block access becomes a sequence of bus transactions, each
//! legal for the chip's page size and addressing scheme. Writes are always
//! chunked per page: the chip hardware silently wraps within a page when a
//! single transaction overruns it. Reads are chunked only when the chip
//! folds offset bits into the bus address, because crossing a page can
//! then change the address mid-block; otherwise the chip's internal cursor
//! auto-increments across page boundaries and one burst covers the whole
//! request.
//!
//! Every chunk is a strict sequence: address write, settle delay, data
//! transaction. Nothing here retries or rolls back; a failure partway
//! through a multi-chunk write leaves earlier chunks committed.

use crate::addressing::Addressing;
use crate::bus::I2cMaster;
use crate::chip::{EepromProfile, MAX_PAGE_BYTES};
use crate::error::{Error, Result};
use maybe_async::maybe_async;

/// Wire capacity of one write transaction: two register-address bytes
/// plus one full page of data.
const WRITE_BUF_BYTES: usize = 2 + MAX_PAGE_BYTES as usize;

/// Addressing state for one bound device
///
/// Holds the validated profile, the chosen base bus address and the
/// precomputed addressing parameters. Carries no I/O handle; operations
/// take the master separately.
#[derive(Debug, Clone, Copy)]
pub struct EepromContext {
    /// The chip profile this device was bound to
    pub profile: &'static EepromProfile,
    /// Base 7-bit bus address chosen at construction
    pub bus_address: u8,
    /// Addressing parameters derived from the profile
    pub addressing: Addressing,
}

impl EepromContext {
    /// Bind a profile to a bus address
    ///
    /// Fails if the profile itself is invalid or the address is not in
    /// the profile's allowed set. No I/O happens here.
    pub fn new(profile: &'static EepromProfile, bus_address: u8) -> Result<Self> {
        profile.validate()?;
        if !profile.bus_addresses.contains(&bus_address) {
            return Err(Error::InvalidBusAddress);
        }
        Ok(Self {
            profile,
            bus_address,
            addressing: Addressing::for_profile(profile),
        })
    }

    /// Reject windows that extend past the end of the chip
    fn check_window(&self, offset: u32, len: usize) -> Result<()> {
        let end = offset as u64 + len as u64;
        if end > self.profile.storage_bytes() as u64 {
            return Err(Error::MemoryWrapOverflow);
        }
        Ok(())
    }
}

/// Suspend for the chip's post-write settle time (tWR)
#[maybe_async]
async fn settle<M: I2cMaster + ?Sized>(master: &mut M, ctx: &EepromContext) {
    let us = ctx.profile.write_cycle_us;
    if us > 0 {
        master.delay_us(us).await;
    }
}

fn check_burst(requested: usize, received: usize) -> Result<()> {
    if received == requested {
        return Ok(());
    }
    log::warn!(
        "short read: requested {} bytes, received {}",
        requested,
        received
    );
    Err(Error::ShortRead {
        requested: requested as u32,
        received: received as u32,
    })
}

/// Position the chip's internal cursor at `offset`
///
/// Writes only the register-address bytes and settles. Useful before a
/// current-address read; returns the normalized offset actually set.
#[maybe_async]
pub async fn set_cursor<M: I2cMaster + ?Sized>(
    master: &mut M,
    ctx: &EepromContext,
    offset: u32,
) -> Result<u32> {
    let normalized = ctx.addressing.normalize(offset);
    let bus = ctx.addressing.bus_address(ctx.bus_address, normalized);
    let reg = ctx.addressing.register_address(normalized);
    master.write(bus, reg.as_bytes()).await?;
    settle(master, ctx).await;
    Ok(normalized)
}

/// Write a data block starting at `offset`
///
/// Splits the block into page-legal chunks, each sent as one transaction
/// of register-address bytes plus data, followed by the settle delay.
/// Returns the total number of bytes written, which equals `data.len()`
/// on success.
#[maybe_async]
pub async fn write<M: I2cMaster + ?Sized>(
    master: &mut M,
    ctx: &EepromContext,
    offset: u32,
    data: &[u8],
) -> Result<usize> {
    ctx.check_window(offset, data.len())?;

    let page_bytes = ctx.profile.page_bytes() as usize;
    let mut written = 0usize;
    let mut addr = offset;

    while written < data.len() {
        let normalized = ctx.addressing.normalize(addr);
        let bus = ctx.addressing.bus_address(ctx.bus_address, normalized);
        let page_offset = normalized as usize % page_bytes;
        let remaining = data.len() - written;
        let chunk_len = core::cmp::min(remaining, page_bytes - page_offset);
        let reg = ctx.addressing.register_address(normalized);

        let mut txn = heapless::Vec::<u8, WRITE_BUF_BYTES>::new();
        txn.extend_from_slice(reg.as_bytes())
            .map_err(|_| Error::InvalidGeometry)?;
        txn.extend_from_slice(&data[written..written + chunk_len])
            .map_err(|_| Error::InvalidGeometry)?;

        log::trace!(
            "write chunk: bus 0x{:02X}, offset 0x{:05X}, {} bytes",
            bus,
            normalized,
            chunk_len
        );
        master.write(bus, &txn).await?;
        settle(master, ctx).await;

        written += chunk_len;
        addr += chunk_len as u32;
    }

    Ok(written)
}

/// Read a data block starting at `offset` into `buf`
///
/// Chips without overflow bits are read in a single burst; chips with
/// them are read page by page, since the bus address can change at a page
/// boundary.
#[maybe_async]
pub async fn read<M: I2cMaster + ?Sized>(
    master: &mut M,
    ctx: &EepromContext,
    offset: u32,
    buf: &mut [u8],
) -> Result<()> {
    ctx.check_window(offset, buf.len())?;
    if buf.is_empty() {
        return Ok(());
    }

    if ctx.addressing.overflow_bits() == 0 {
        read_straight(master, ctx, offset, buf).await
    } else {
        read_paged(master, ctx, offset, buf).await
    }
}

/// Single-burst read: one cursor write, then the whole block
///
/// Safe only when the bus address never changes mid-block; the chip's
/// internal cursor auto-increments across page boundaries.
#[maybe_async]
async fn read_straight<M: I2cMaster + ?Sized>(
    master: &mut M,
    ctx: &EepromContext,
    offset: u32,
    buf: &mut [u8],
) -> Result<()> {
    let normalized = set_cursor(master, ctx, offset).await?;
    let bus = ctx.addressing.bus_address(ctx.bus_address, normalized);
    let received = master.read(bus, buf).await?;
    check_burst(buf.len(), received)
}

/// Per-page read for chips whose bus address tracks the offset
#[maybe_async]
async fn read_paged<M: I2cMaster + ?Sized>(
    master: &mut M,
    ctx: &EepromContext,
    offset: u32,
    buf: &mut [u8],
) -> Result<()> {
    let page_bytes = ctx.profile.page_bytes() as usize;
    let total = buf.len();
    let mut done = 0usize;
    let mut addr = offset;

    while done < total {
        let normalized = ctx.addressing.normalize(addr);
        let bus = ctx.addressing.bus_address(ctx.bus_address, normalized);
        let page_offset = normalized as usize % page_bytes;
        let chunk_len = core::cmp::min(total - done, page_bytes - page_offset);
        let reg = ctx.addressing.register_address(normalized);

        master.write(bus, reg.as_bytes()).await?;
        settle(master, ctx).await;

        let received = master.read(bus, &mut buf[done..done + chunk_len]).await?;
        check_burst(chunk_len, received)?;

        done += chunk_len;
        addr += chunk_len as u32;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chip::MemoryOrganization;
    use alloc::vec;
    use alloc::vec::Vec;
    use std::cell::RefCell;

    /// One recorded bus interaction
    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Txn {
        Write { addr: u8, data: Vec<u8> },
        Read { addr: u8, len: usize },
        Delay { us: u32 },
    }

    /// A mock bus that records every interaction in order
    ///
    /// Reads return zeroes unless a short read is scheduled.
    struct MockBus {
        log: RefCell<Vec<Txn>>,
        short_read: Option<usize>,
    }

    impl MockBus {
        fn new() -> Self {
            Self {
                log: RefCell::new(Vec::new()),
                short_read: None,
            }
        }

        fn with_short_read(received: usize) -> Self {
            Self {
                log: RefCell::new(Vec::new()),
                short_read: Some(received),
            }
        }

        fn log(&self) -> Vec<Txn> {
            self.log.borrow().clone()
        }

        fn writes(&self) -> Vec<Txn> {
            self.log()
                .into_iter()
                .filter(|t| matches!(t, Txn::Write { .. }))
                .collect()
        }

        fn transaction_count(&self) -> usize {
            self.log
                .borrow()
                .iter()
                .filter(|t| !matches!(t, Txn::Delay { .. }))
                .count()
        }
    }

    impl I2cMaster for MockBus {
        fn write(&mut self, address: u8, data: &[u8]) -> Result<usize> {
            self.log.borrow_mut().push(Txn::Write {
                addr: address,
                data: data.to_vec(),
            });
            Ok(data.len())
        }

        fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<usize> {
            self.log.borrow_mut().push(Txn::Read {
                addr: address,
                len: buf.len(),
            });
            buf.fill(0);
            Ok(self.short_read.unwrap_or(buf.len()).min(buf.len()))
        }

        fn delay_us(&mut self, us: u32) {
            self.log.borrow_mut().push(Txn::Delay { us });
        }
    }

    // 4096-byte, 16-byte-page chip: two register bytes, no overflow bits
    static FLAT_CHIP: EepromProfile = EepromProfile {
        name: "FLAT",
        detail: "FLAT[1](4096)",
        bus_addresses: &[0x50],
        address_bits: 12,
        write_cycle_us: 5_000,
        organization: MemoryOrganization::new(256, 16),
    };

    // 1024-byte, 16-byte-page chip: one register byte, two overflow bits
    static FOLDED_CHIP: EepromProfile = EepromProfile {
        name: "FOLDED",
        detail: "FOLDED[1](1024)",
        bus_addresses: &[0x50],
        address_bits: 10,
        write_cycle_us: 5_000,
        organization: MemoryOrganization::new(64, 16),
    };

    fn ctx(profile: &'static EepromProfile) -> EepromContext {
        EepromContext::new(profile, 0x50).unwrap()
    }

    #[test]
    fn rejects_address_outside_allowed_set() {
        assert_eq!(
            EepromContext::new(&FLAT_CHIP, 0x51).unwrap_err(),
            Error::InvalidBusAddress
        );
    }

    #[test]
    fn bounds_overflow_issues_no_transactions() {
        let mut bus = MockBus::new();
        let ctx = ctx(&FLAT_CHIP);

        let data = [0u8; 32];
        assert_eq!(
            write(&mut bus, &ctx, 4090, &data).unwrap_err(),
            Error::MemoryWrapOverflow
        );

        let mut buf = [0u8; 32];
        assert_eq!(
            read(&mut bus, &ctx, 4090, &mut buf).unwrap_err(),
            Error::MemoryWrapOverflow
        );

        assert_eq!(bus.transaction_count(), 0);
    }

    #[test]
    fn write_splits_at_page_boundaries() {
        let mut bus = MockBus::new();
        let ctx = ctx(&FLAT_CHIP);

        // 20 bytes at offset 10 with 16-byte pages: 6 then 14
        let data: Vec<u8> = (0u8..20).collect();
        assert_eq!(write(&mut bus, &ctx, 10, &data).unwrap(), 20);

        let writes = bus.writes();
        assert_eq!(writes.len(), 2);
        match &writes[0] {
            Txn::Write { addr, data } => {
                assert_eq!(*addr, 0x50);
                assert_eq!(&data[..2], &[0x00, 0x0A]);
                assert_eq!(data.len() - 2, 6);
            }
            other => panic!("unexpected {:?}", other),
        }
        match &writes[1] {
            Txn::Write { addr, data } => {
                assert_eq!(*addr, 0x50);
                assert_eq!(&data[..2], &[0x00, 0x10]);
                assert_eq!(data.len() - 2, 14);
                assert_eq!(&data[2..], &(6u8..20).collect::<Vec<u8>>()[..]);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn no_write_chunk_overruns_its_page() {
        let mut bus = MockBus::new();
        let ctx = ctx(&FLAT_CHIP);
        let page = FLAT_CHIP.page_bytes() as usize;

        let data = vec![0xA5u8; 100];
        write(&mut bus, &ctx, 3, &data).unwrap();

        let mut offset = 3usize;
        for txn in bus.writes() {
            let Txn::Write { data, .. } = txn else {
                unreachable!()
            };
            let payload = data.len() - 2;
            assert!(payload <= page - (offset % page));
            offset += payload;
        }
        assert_eq!(offset, 103);
    }

    #[test]
    fn every_write_chunk_is_followed_by_a_settle_delay() {
        let mut bus = MockBus::new();
        let ctx = ctx(&FLAT_CHIP);

        write(&mut bus, &ctx, 0, &[0u8; 40]).unwrap();

        let log = bus.log();
        // 40 bytes from offset 0 in 16-byte pages: three chunks
        assert_eq!(log.len(), 6);
        for pair in log.chunks(2) {
            assert!(matches!(pair[0], Txn::Write { .. }));
            assert_eq!(pair[1], Txn::Delay { us: 5_000 });
        }
    }

    #[test]
    fn flat_chip_reads_in_one_burst() {
        let mut bus = MockBus::new();
        let ctx = ctx(&FLAT_CHIP);

        let mut buf = [0u8; 100];
        read(&mut bus, &ctx, 40, &mut buf).unwrap();

        let log = bus.log();
        assert_eq!(
            log,
            vec![
                Txn::Write {
                    addr: 0x50,
                    data: vec![0x00, 0x28],
                },
                Txn::Delay { us: 5_000 },
                Txn::Read {
                    addr: 0x50,
                    len: 100,
                },
            ]
        );
    }

    #[test]
    fn folded_chip_reads_page_by_page() {
        let mut bus = MockBus::new();
        let ctx = ctx(&FOLDED_CHIP);

        // 0x0F8..0x108 crosses the 0x100 boundary where the bus address
        // picks up an offset bit
        let mut buf = [0u8; 16];
        read(&mut bus, &ctx, 0xF8, &mut buf).unwrap();

        let log = bus.log();
        assert_eq!(
            log,
            vec![
                Txn::Write {
                    addr: 0x50,
                    data: vec![0xF8],
                },
                Txn::Delay { us: 5_000 },
                Txn::Read { addr: 0x50, len: 8 },
                Txn::Write {
                    addr: 0x51,
                    data: vec![0x00],
                },
                Txn::Delay { us: 5_000 },
                Txn::Read { addr: 0x51, len: 8 },
            ]
        );
    }

    #[test]
    fn folded_chip_write_tracks_bus_address() {
        let mut bus = MockBus::new();
        let ctx = ctx(&FOLDED_CHIP);

        write(&mut bus, &ctx, 0x1F8, &[0u8; 16]).unwrap();

        let writes = bus.writes();
        assert_eq!(writes.len(), 2);
        assert!(matches!(writes[0], Txn::Write { addr: 0x51, .. }));
        assert!(matches!(writes[1], Txn::Write { addr: 0x52, .. }));
    }

    #[test]
    fn short_read_is_surfaced() {
        let mut bus = MockBus::with_short_read(3);
        let ctx = ctx(&FLAT_CHIP);

        let mut buf = [0u8; 10];
        assert_eq!(
            read(&mut bus, &ctx, 0, &mut buf).unwrap_err(),
            Error::ShortRead {
                requested: 10,
                received: 3,
            }
        );
    }

    #[test]
    fn set_cursor_writes_register_bytes_only() {
        let mut bus = MockBus::new();
        let ctx = ctx(&FLAT_CHIP);

        assert_eq!(set_cursor(&mut bus, &ctx, 0x123).unwrap(), 0x123);
        assert_eq!(
            bus.log(),
            vec![
                Txn::Write {
                    addr: 0x50,
                    data: vec![0x01, 0x23],
                },
                Txn::Delay { us: 5_000 },
            ]
        );
    }

    #[test]
    fn zero_length_operations_touch_nothing() {
        let mut bus = MockBus::new();
        let ctx = ctx(&FLAT_CHIP);

        assert_eq!(write(&mut bus, &ctx, 0, &[]).unwrap(), 0);
        let mut empty: [u8; 0] = [];
        read(&mut bus, &ctx, 0, &mut empty).unwrap();
        assert_eq!(bus.transaction_count(), 0);
    }
}
