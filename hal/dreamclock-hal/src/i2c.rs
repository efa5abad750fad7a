//! I2C bus abstractions
//!
//! Provides traits for I2C master operations that can be implemented
//! by chip-specific HALs, plus an adapter for any `embedded-hal` 1.0 bus.

use embedded_hal::i2c::{Error as _, ErrorKind, I2c};

/// Error from I2C operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cBusError {
    /// Bus error (misplaced start/stop condition)
    Bus,
    /// Arbitration lost to another master
    ArbitrationLost,
    /// NACK received (device absent or busy with a write cycle)
    Nack,
    /// Overrun
    Overrun,
    /// Other error
    Other,
}

impl From<ErrorKind> for I2cBusError {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::Bus => I2cBusError::Bus,
            ErrorKind::ArbitrationLoss => I2cBusError::ArbitrationLost,
            ErrorKind::NoAcknowledge(_) => I2cBusError::Nack,
            ErrorKind::Overrun => I2cBusError::Overrun,
            _ => I2cBusError::Other,
        }
    }
}

/// I2C bus master
///
/// Provides basic I2C read/write operations for communicating with
/// peripheral devices. Each call is one complete transaction (START to STOP).
pub trait I2cBus {
    /// Error type for I2C operations
    type Error: Into<I2cBusError>;

    /// Write data to a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `data` - Bytes to write
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;

    /// Read data from a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `buf` - Buffer to read into
    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error>;
}

/// Adapter exposing an `embedded-hal` I2C master as an [`I2cBus`]
///
/// Chip HALs (embassy-rp, esp-hal, linux-embedded-hal, ...) all implement
/// `embedded_hal::i2c::I2c`, so drivers written against [`I2cBus`] work
/// with any of them through this wrapper.
pub struct EmbeddedHalBus<I> {
    inner: I,
}

impl<I: I2c> EmbeddedHalBus<I> {
    /// Wrap an `embedded-hal` I2C master
    pub fn new(inner: I) -> Self {
        Self { inner }
    }

    /// Release the wrapped bus
    pub fn release(self) -> I {
        self.inner
    }
}

impl<I: I2c> I2cBus for EmbeddedHalBus<I> {
    type Error = I2cBusError;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), I2cBusError> {
        self.inner
            .write(address, data)
            .map_err(|e| I2cBusError::from(e.kind()))
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), I2cBusError> {
        self.inner
            .read(address, buf)
            .map_err(|e| I2cBusError::from(e.kind()))
    }
}

/// I2C configuration
#[derive(Debug, Clone, Copy)]
pub struct I2cConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self {
            frequency: 100_000, // 100kHz standard mode
        }
    }
}

impl I2cConfig {
    /// Standard mode (100 kHz)
    pub const STANDARD: Self = Self { frequency: 100_000 };

    /// Fast mode (400 kHz)
    pub const FAST: Self = Self { frequency: 400_000 };
}
