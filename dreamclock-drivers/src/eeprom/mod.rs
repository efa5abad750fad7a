//! Non-volatile memory drivers
//!
//! Implementations of [`dreamclock_hal::ByteMemory`] for the memory chips
//! fitted to DreamClock boards.

pub mod at24;

pub use at24::{At24Eeprom, EepromConfig, DEFAULT_I2C_ADDRESS, WRITE_CYCLE_MS};
