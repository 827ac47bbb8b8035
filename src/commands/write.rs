//! Write command implementation

use eeprom24_core::bus::I2cMaster;
use eeprom24_core::eeprom::{Eeprom, WritePayload};
use indicatif::{ProgressBar, ProgressStyle};

/// Run the write command
///
/// Writes `data` starting at `offset` and optionally reads it back to
/// verify. The transfer engine does the page chunking; this loop only
/// breaks the block up for progress reporting.
pub fn run_write<M: I2cMaster>(
    chip: &mut Eeprom<M>,
    offset: u32,
    data: &[u8],
    verify: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let end = offset as u64 + data.len() as u64;
    if end > chip.storage_bytes() as u64 {
        return Err(format!(
            "{} bytes at offset 0x{:X} do not fit {} ({} bytes)",
            data.len(),
            offset,
            chip.name(),
            chip.storage_bytes()
        )
        .into());
    }

    // Progress steps of a few pages each
    let block = chip.page_bytes() as usize * 4;

    let pb = ProgressBar::new(data.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec}, {eta})")?
            .progress_chars("#>-"),
    );

    let mut done = 0usize;
    while done < data.len() {
        let chunk = std::cmp::min(block, data.len() - done);
        let written = chip.write_block(
            offset + done as u32,
            WritePayload::Bytes(&data[done..done + chunk]),
        )?;
        done += written;
        pb.set_position(done as u64);
    }
    pb.finish_with_message("Write complete");

    println!("Wrote {} bytes at offset 0x{:X}", done, offset);

    if verify {
        let readback = super::read::read_with_progress(chip, offset, data.len())?;
        if let Some(pos) = data.iter().zip(readback.iter()).position(|(a, b)| a != b) {
            return Err(format!(
                "Verify failed at offset 0x{:X}: wrote 0x{:02X}, read 0x{:02X}",
                offset as usize + pos,
                data[pos],
                readback[pos]
            )
            .into());
        }
        println!("Verify OK");
    }

    Ok(())
}
