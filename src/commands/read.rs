//! Read command implementation

use eeprom24_core::bus::I2cMaster;
use eeprom24_core::eeprom::Eeprom;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Block size for progress reporting; a multiple of every catalog page size
const READ_BLOCK_SIZE: usize = 1024;

/// Run the read command
pub fn run_read<M: I2cMaster>(
    chip: &mut Eeprom<M>,
    offset: u32,
    length: Option<u32>,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let storage = chip.storage_bytes();
    let length = length.unwrap_or_else(|| storage.saturating_sub(offset));

    let data = read_with_progress(chip, offset, length as usize)?;

    match output {
        Some(path) => {
            let mut file = File::create(path)?;
            file.write_all(&data)?;
            println!("Wrote {} bytes to {:?}", data.len(), path);
        }
        None => hexdump(offset, &data),
    }

    Ok(())
}

/// Read a block with a progress bar
pub fn read_with_progress<M: I2cMaster>(
    chip: &mut Eeprom<M>,
    offset: u32,
    total: usize,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let mut data = vec![0u8; total];

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec}, {eta})")?
            .progress_chars("#>-"),
    );

    let mut done = 0usize;
    while done < total {
        let chunk = std::cmp::min(READ_BLOCK_SIZE, total - done);
        chip.read_into(offset + done as u32, &mut data[done..done + chunk])?;
        done += chunk;
        pb.set_position(done as u64);
    }

    pb.finish_with_message("Read complete");
    Ok(data)
}

/// Print a block as a 16-byte-per-row hexdump with an ASCII gutter
fn hexdump(base: u32, data: &[u8]) {
    for (row, bytes) in data.chunks(16).enumerate() {
        let addr = base as usize + row * 16;
        let hex = bytes
            .iter()
            .map(|b| format!("{:02X}", b))
            .collect::<Vec<_>>()
            .join(" ");
        let ascii: String = bytes
            .iter()
            .map(|&b| {
                if (0x20..0x7F).contains(&b) {
                    b as char
                } else {
                    '.'
                }
            })
            .collect();
        println!("{:06X}  {:<47}  |{}|", addr, hex, ascii);
    }
}
