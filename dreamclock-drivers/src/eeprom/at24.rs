//! 24-series I2C EEPROM (AT24C32 / 24LC256 and compatibles)
//!
//! # Bus Protocol
//!
//! Parts from 4 KiB up use a two-byte memory address sent high byte first:
//!
//! ```text
//! Byte write:   S | DEV+W | ADDR_HI | ADDR_LO | DATA | P      (then tWR)
//! Random read:  S | DEV+W | ADDR_HI | ADDR_LO | P
//!               S | DEV+R | DATA (NACK) | P
//! ```
//!
//! After a write the chip runs an internal write cycle (tWR, 5 ms max) and
//! ignores the bus until it finishes, so every write is followed by a
//! blocking delay. Only single-byte transactions are used; page writes
//! would need alignment handling the configuration store does not need.

use embedded_hal::delay::DelayNs;

use dreamclock_hal::{ByteMemory, I2cBus, MemoryError};

/// Device address with A0..A2 tied low
pub const DEFAULT_I2C_ADDRESS: u8 = 0x50;

/// Worst-case internal write cycle time (tWR) in milliseconds
pub const WRITE_CYCLE_MS: u32 = 5;

/// EEPROM driver configuration
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EepromConfig {
    /// 7-bit I2C device address
    pub i2c_address: u8,
    /// Delay after each byte write in milliseconds (at least tWR)
    pub write_cycle_ms: u32,
    /// Device size in bytes
    pub capacity: usize,
}

impl Default for EepromConfig {
    fn default() -> Self {
        Self::AT24C32
    }
}

impl EepromConfig {
    /// AT24C32 (4 KiB)
    pub const AT24C32: Self = Self {
        i2c_address: DEFAULT_I2C_ADDRESS,
        write_cycle_ms: WRITE_CYCLE_MS,
        capacity: 4 * 1024,
    };

    /// 24LC256 (32 KiB)
    pub const AT24C256: Self = Self {
        i2c_address: DEFAULT_I2C_ADDRESS,
        write_cycle_ms: WRITE_CYCLE_MS,
        capacity: 32 * 1024,
    };

    /// Same part at a different bus address (A0..A2 strapping)
    pub const fn with_address(self, i2c_address: u8) -> Self {
        Self {
            i2c_address,
            ..self
        }
    }
}

/// 24-series EEPROM on an I2C bus
///
/// Owns the bus for its lifetime: interleaving other traffic between the
/// address phase and the data phase of a read would move the chip's
/// address pointer.
pub struct At24Eeprom<I2C, D> {
    i2c: I2C,
    delay: D,
    config: EepromConfig,
}

impl<I2C: I2cBus, D: DelayNs> At24Eeprom<I2C, D> {
    /// Create a driver with the default configuration
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self::with_config(i2c, delay, EepromConfig::default())
    }

    /// Create a driver for a specific part or address
    pub fn with_config(i2c: I2C, delay: D, config: EepromConfig) -> Self {
        Self { i2c, delay, config }
    }

    /// Driver configuration
    pub fn config(&self) -> &EepromConfig {
        &self.config
    }

    /// Give back the bus and delay provider
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    fn check_address(&self, address: u16) -> Result<[u8; 2], MemoryError> {
        if address as usize >= self.config.capacity {
            return Err(MemoryError::AddressOutOfRange);
        }
        Ok(address.to_be_bytes())
    }
}

impl<I2C: I2cBus, D: DelayNs> ByteMemory for At24Eeprom<I2C, D> {
    fn read_byte(&mut self, address: u16) -> Result<u8, MemoryError> {
        let [hi, lo] = self.check_address(address)?;

        // Set the address pointer, then read in a separate transaction
        self.i2c
            .write(self.config.i2c_address, &[hi, lo])
            .map_err(|e| MemoryError::Bus(e.into()))?;

        let mut buf = [0u8; 1];
        self.i2c
            .read(self.config.i2c_address, &mut buf)
            .map_err(|e| MemoryError::Bus(e.into()))?;

        Ok(buf[0])
    }

    fn write_byte(&mut self, address: u16, value: u8) -> Result<(), MemoryError> {
        let [hi, lo] = self.check_address(address)?;

        self.i2c
            .write(self.config.i2c_address, &[hi, lo, value])
            .map_err(|e| MemoryError::Bus(e.into()))?;

        // Chip NACKs everything until the write cycle completes
        self.delay.delay_ms(self.config.write_cycle_ms);
        Ok(())
    }

    fn capacity(&self) -> usize {
        self.config.capacity
    }
}
