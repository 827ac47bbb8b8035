//! EEPROM device facade and transfer operations
//!
//! [`Eeprom`] binds a chip profile, a chosen bus address and a transport
//! handle into a single device value; the functions in [`operations`] do
//! the page-aware work and can also be used directly against a bare
//! [`operations::EepromContext`].

pub mod device;
pub mod operations;

pub use device::{Eeprom, TextEncoding, WritePayload};
pub use operations::EepromContext;
