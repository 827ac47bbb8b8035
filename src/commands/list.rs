//! List command implementation

use eeprom24_core::chip::ProfileCatalog;

/// Run the list command
pub fn run_list(catalog: &ProfileCatalog) {
    println!("{} known chip profiles:\n", catalog.len());
    println!(
        "{:<10} {:>9} {:>8} {:>7}  {}",
        "NAME", "SIZE (B)", "PAGE (B)", "DEVICES", "BUS ADDRESSES"
    );

    for profile in catalog.iter() {
        let addresses = profile
            .bus_addresses
            .iter()
            .map(|a| format!("0x{:02X}", a))
            .collect::<Vec<_>>()
            .join(" ");
        println!(
            "{:<10} {:>9} {:>8} {:>7}  {}",
            profile.name,
            profile.storage_bytes(),
            profile.page_bytes(),
            profile.max_devices(),
            addresses
        );
    }
}
