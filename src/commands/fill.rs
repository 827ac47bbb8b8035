//! Fill command implementation

use eeprom24_core::bus::I2cMaster;
use eeprom24_core::eeprom::Eeprom;

/// Run the fill command
///
/// Writes `value` over the entire chip. With `verify`, reads the whole
/// array back afterwards and checks every byte.
pub fn run_fill<M: I2cMaster>(
    chip: &mut Eeprom<M>,
    value: u8,
    verify: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let storage = chip.storage_bytes() as usize;
    println!(
        "Filling {} ({} bytes) with 0x{:02X}",
        chip.name(),
        storage,
        value
    );

    let pattern = vec![value; storage];
    super::write::run_write(chip, 0, &pattern, verify)
}
