//! Byte-addressable non-volatile memory abstractions
//!
//! Provides the single-byte read/write interface that persistent storage
//! is built on. Implementations wrap a concrete device (I2C EEPROM, FRAM,
//! emulated EEPROM) and take care of its timing requirements.

use crate::i2c::I2cBusError;

/// Errors from byte memory operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MemoryError {
    /// The underlying bus transaction failed
    Bus(I2cBusError),
    /// Address is beyond the device capacity
    AddressOutOfRange,
}

impl From<I2cBusError> for MemoryError {
    fn from(e: I2cBusError) -> Self {
        MemoryError::Bus(e)
    }
}

/// Byte-addressable non-volatile memory
///
/// Every call is a complete, blocking transaction. `write_byte` must not
/// return before the written value can be read back.
pub trait ByteMemory {
    /// Read one byte
    ///
    /// # Arguments
    /// * `address` - 16-bit memory address
    fn read_byte(&mut self, address: u16) -> Result<u8, MemoryError>;

    /// Write one byte and wait for the write cycle to finish
    ///
    /// # Arguments
    /// * `address` - 16-bit memory address
    /// * `value` - Byte to store
    fn write_byte(&mut self, address: u16, value: u8) -> Result<(), MemoryError>;

    /// Total number of addressable bytes
    fn capacity(&self) -> usize;
}

impl<M: ByteMemory + ?Sized> ByteMemory for &mut M {
    fn read_byte(&mut self, address: u16) -> Result<u8, MemoryError> {
        (**self).read_byte(address)
    }

    fn write_byte(&mut self, address: u16, value: u8) -> Result<(), MemoryError> {
        (**self).write_byte(address, value)
    }

    fn capacity(&self) -> usize {
        (**self).capacity()
    }
}
