//! Profile catalog for lookup by name
//!
//! The catalog is an explicit, immutable value handed to whatever needs
//! chip lookup (CLI, tooling); there is no process-wide registry.

use super::profiles;
use super::types::EepromProfile;

/// An immutable set of chip profiles
#[derive(Debug, Clone, Copy)]
pub struct ProfileCatalog {
    profiles: &'static [&'static EepromProfile],
}

impl ProfileCatalog {
    /// Catalog over the compiled-in profile set
    pub const fn builtin() -> Self {
        Self {
            profiles: profiles::BUILTIN,
        }
    }

    /// Catalog over a caller-supplied profile set
    pub const fn new(profiles: &'static [&'static EepromProfile]) -> Self {
        Self { profiles }
    }

    /// Number of profiles in the catalog
    pub const fn len(&self) -> usize {
        self.profiles.len()
    }

    /// True if the catalog holds no profiles
    pub const fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Iterate over the profiles
    pub fn iter(&self) -> impl Iterator<Item = &'static EepromProfile> + '_ {
        self.profiles.iter().copied()
    }

    /// Look up a profile by chip name, ignoring ASCII case
    pub fn find_by_name(&self, name: &str) -> Option<&'static EepromProfile> {
        self.profiles
            .iter()
            .copied()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }
}

impl Default for ProfileCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_complete() {
        let catalog = ProfileCatalog::builtin();
        assert_eq!(catalog.len(), 18);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn find_by_name_ignores_case() {
        let catalog = ProfileCatalog::builtin();
        let chip = catalog.find_by_name("at24c256").unwrap();
        assert_eq!(chip.name, "AT24C256");
        assert_eq!(chip.storage_bytes(), 32768);
        assert!(catalog.find_by_name("AT24C9999").is_none());
    }

    #[test]
    fn detail_strings_carry_device_count_and_capacity() {
        let catalog = ProfileCatalog::builtin();
        let chip = catalog.find_by_name("AT24C16").unwrap();
        assert_eq!(chip.detail, "AT24C16[1](2048)");
        assert_eq!(chip.max_devices(), 1);
    }
}
