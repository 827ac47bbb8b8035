//! eeprom24 - I2C EEPROM reader/writer
//!
//! A command-line tool for the 24-series serial EEPROM families. The
//! chip profile (capacity, page size, addressing scheme) is selected by
//! name from the built-in catalog; the transport is a Linux i2c-dev
//! adapter or the in-memory emulator (`--device dummy`).
//!
//! # Architecture
//!
//! The core driver splits every access into chip-legal transactions:
//! page-aligned write chunks with settle delays, and reads that are
//! either one burst or per-page chunks depending on whether the chip
//! folds offset bits into its bus address. The commands here only layer
//! argument parsing, file I/O and progress reporting on top.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands, TargetArgs};
use eeprom24_core::bus::I2cMaster;
use eeprom24_core::chip::ProfileCatalog;
use eeprom24_core::eeprom::{Eeprom, WritePayload};
use eeprom24_dummy::DummyEeprom;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Set log level based on verbosity
    match cli.verbose {
        0 => {} // default (info)
        1 => log::set_max_level(log::LevelFilter::Debug),
        _ => log::set_max_level(log::LevelFilter::Trace),
    }

    let catalog = ProfileCatalog::builtin();

    match cli.command {
        Commands::List => {
            commands::list::run_list(&catalog);
            Ok(())
        }
        Commands::Read {
            target,
            offset,
            length,
            output,
        } => {
            let mut chip = open_device(&catalog, &target)?;
            commands::read::run_read(&mut chip, offset, length, output.as_deref())
        }
        Commands::Write {
            target,
            offset,
            input,
            text,
            verify,
        } => {
            let mut chip = open_device(&catalog, &target)?;
            let data = match (&input, &text) {
                (Some(path), None) => std::fs::read(path)?,
                (None, Some(text)) => {
                    let payload: WritePayload<'_> = text.as_str().into();
                    payload.as_bytes()?.to_vec()
                }
                _ => return Err("Specify exactly one of --input or --text".into()),
            };
            commands::write::run_write(&mut chip, offset, &data, verify)
        }
        Commands::Fill {
            target,
            value,
            verify,
        } => {
            let mut chip = open_device(&catalog, &target)?;
            commands::fill::run_fill(&mut chip, value, verify)
        }
    }
}

/// Resolve the chip profile and open the transport
fn open_device(
    catalog: &ProfileCatalog,
    target: &TargetArgs,
) -> Result<Eeprom<Box<dyn I2cMaster + Send>>, Box<dyn std::error::Error>> {
    let profile = catalog.find_by_name(&target.chip).ok_or_else(|| {
        format!(
            "Unknown chip {:?} (see `eeprom24 list` for known profiles)",
            target.chip
        )
    })?;

    let master: Box<dyn I2cMaster + Send> = if target.device == "dummy" {
        log::info!("Using in-memory emulator for {}", profile.name);
        Box::new(DummyEeprom::for_profile(profile, target.address))
    } else {
        eeprom24_linux_i2c::open_linux_i2c(&target.device)?
    };

    let chip = Eeprom::new(profile, master, target.address)?;
    log::info!(
        "Bound {} at 0x{:02X} on {} ({} bytes, {}-byte pages)",
        chip.name(),
        chip.bus_address(),
        target.device,
        chip.storage_bytes(),
        chip.page_bytes()
    );
    Ok(chip)
}
