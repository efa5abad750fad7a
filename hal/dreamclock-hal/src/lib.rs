//! DreamClock Hardware Abstraction Layer
//!
//! This crate defines hardware abstraction traits that can be implemented
//! by chip-specific HALs and device drivers. This keeps the configuration
//! store independent of the board it runs on.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  dreamclock-core (ConfigStore, setup)   │
//! └─────────────────────────────────────────┘
//!                     │ ByteMemory
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  dreamclock-drivers (24-series EEPROM)  │
//! └─────────────────────────────────────────┘
//!                     │ I2cBus
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  chip HAL (embedded-hal 1.0 I2C)        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`i2c::I2cBus`] - I2C bus operations
//! - [`memory::ByteMemory`] - Byte-addressable persistent memory

#![no_std]
#![deny(unsafe_code)]

pub mod i2c;
pub mod memory;

// Re-export key traits at crate root for convenience
pub use i2c::{EmbeddedHalBus, I2cBus, I2cBusError, I2cConfig};
pub use memory::{ByteMemory, MemoryError};
