//! Board-agnostic configuration logic for the DreamClock firmware
//!
//! This crate contains everything about persisted setup that does not
//! depend on specific hardware:
//!
//! - EEPROM memory map and length-prefixed string codec
//! - Configuration record and store (save, load, clear, wipe)
//! - Configured/unconfigured state machine
//! - Setup form validation, timezone presets, and boot decision
//!
//! The store talks to hardware only through
//! [`dreamclock_hal::ByteMemory`].

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

#[macro_use]
mod fmt;

pub mod config;
pub mod setup;
pub mod state;
pub mod store;

#[cfg(test)]
mod testing;

pub use config::{ConfigField, ConfigurationRecord, MEMORY_MAP};
pub use store::{ConfigStore, StoreError};
