//! EEPROM chip profiles and catalog
//!
//! This module provides types describing the addressing and geometry of
//! one chip family, plus the built-in catalog of known 24-series parts.

mod catalog;
mod types;

pub mod profiles;

pub use catalog::ProfileCatalog;
pub use types::*;
