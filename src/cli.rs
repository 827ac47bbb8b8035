//! CLI argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Parse a string as a hex or decimal u32
pub fn parse_hex_u32(s: &str) -> Result<u32, String> {
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16).map_err(|e| format!("Invalid hex value: {}", e))
    } else {
        s.parse::<u32>().map_err(|e| format!("Invalid number: {}", e))
    }
}

/// Parse a string as a hex or decimal u8
pub fn parse_hex_u8(s: &str) -> Result<u8, String> {
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u8::from_str_radix(hex, 16).map_err(|e| format!("Invalid hex value: {}", e))
    } else {
        s.parse::<u8>().map_err(|e| format!("Invalid number: {}", e))
    }
}

#[derive(Parser)]
#[command(name = "eeprom24")]
#[command(author, version, about = "I2C EEPROM reader/writer", long_about = None)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Target chip selection shared across commands
#[derive(clap::Args, Debug, Clone)]
pub struct TargetArgs {
    /// Chip name from the profile catalog (see `eeprom24 list`)
    #[arg(short, long)]
    pub chip: String,

    /// I2C adapter path, or "dummy" for the in-memory emulator
    #[arg(short, long, default_value = "/dev/i2c-1")]
    pub device: String,

    /// Chip bus address
    #[arg(short, long, value_parser = parse_hex_u8, default_value = "0x50")]
    pub address: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List known chip profiles
    List,

    /// Read a block from the chip
    Read {
        #[command(flatten)]
        target: TargetArgs,

        /// Start offset
        #[arg(short, long, value_parser = parse_hex_u32, default_value = "0")]
        offset: u32,

        /// Byte count (defaults to the rest of the chip)
        #[arg(short, long, value_parser = parse_hex_u32)]
        length: Option<u32>,

        /// Output file path (hexdump to stdout when omitted)
        #[arg(short = 'O', long)]
        output: Option<PathBuf>,
    },

    /// Write a file or literal text to the chip
    Write {
        #[command(flatten)]
        target: TargetArgs,

        /// Start offset
        #[arg(short, long, value_parser = parse_hex_u32, default_value = "0")]
        offset: u32,

        /// Input file path
        #[arg(short, long, conflicts_with = "text")]
        input: Option<PathBuf>,

        /// Literal text payload
        #[arg(short, long)]
        text: Option<String>,

        /// Verify after writing
        #[arg(long, default_value = "true")]
        verify: bool,
    },

    /// Fill the whole chip with one byte value
    Fill {
        #[command(flatten)]
        target: TargetArgs,

        /// Byte value to fill with
        #[arg(short = 'b', long, value_parser = parse_hex_u8, default_value = "0")]
        value: u8,

        /// Verify after filling
        #[arg(long, default_value = "true")]
        verify: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_and_decimal_parsing() {
        assert_eq!(parse_hex_u32("0x50"), Ok(0x50));
        assert_eq!(parse_hex_u32("4096"), Ok(4096));
        assert!(parse_hex_u32("0xZZ").is_err());
        assert_eq!(parse_hex_u8("0X57"), Ok(0x57));
        assert!(parse_hex_u8("300").is_err());
    }
}
