//! In-memory EEPROM for host tests

use dreamclock_hal::{ByteMemory, I2cBusError, MemoryError};

/// Size of the simulated device (24C02-class)
pub const MOCK_CAPACITY: usize = 256;

/// RAM-backed [`ByteMemory`] with transaction counters and fault injection
pub struct MockEeprom {
    data: [u8; MOCK_CAPACITY],
    reads: usize,
    writes: usize,
    /// Writes allowed before every further write fails (power loss)
    write_budget: Option<usize>,
    /// Fail every read (device unplugged)
    reads_fail: bool,
}

impl MockEeprom {
    /// A device with every byte `0x00`
    pub fn new() -> Self {
        Self::filled(0x00)
    }

    /// A device with every byte set to `value`
    pub fn filled(value: u8) -> Self {
        Self {
            data: [value; MOCK_CAPACITY],
            reads: 0,
            writes: 0,
            write_budget: None,
            reads_fail: false,
        }
    }

    /// Preload bytes without counting transactions
    pub fn load(&mut self, addr: usize, bytes: &[u8]) {
        self.data[addr..addr + bytes.len()].copy_from_slice(bytes);
    }

    /// Raw contents
    pub fn bytes(&self) -> &[u8; MOCK_CAPACITY] {
        &self.data
    }

    /// Let `n` more writes succeed, then fail every write
    pub fn fail_after_writes(&mut self, n: usize) {
        self.write_budget = Some(n);
    }

    /// Make every read fail with a bus error
    pub fn fail_reads(&mut self) {
        self.reads_fail = true;
    }

    /// Remove all injected faults
    pub fn heal(&mut self) {
        self.write_budget = None;
        self.reads_fail = false;
    }

    pub fn read_count(&self) -> usize {
        self.reads
    }

    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl ByteMemory for MockEeprom {
    fn read_byte(&mut self, address: u16) -> Result<u8, MemoryError> {
        if self.reads_fail {
            return Err(MemoryError::Bus(I2cBusError::Nack));
        }
        let value = *self
            .data
            .get(address as usize)
            .ok_or(MemoryError::AddressOutOfRange)?;
        self.reads += 1;
        Ok(value)
    }

    fn write_byte(&mut self, address: u16, value: u8) -> Result<(), MemoryError> {
        if let Some(budget) = self.write_budget.as_mut() {
            if *budget == 0 {
                return Err(MemoryError::Bus(I2cBusError::Nack));
            }
            *budget -= 1;
        }
        let slot = self
            .data
            .get_mut(address as usize)
            .ok_or(MemoryError::AddressOutOfRange)?;
        *slot = value;
        self.writes += 1;
        Ok(())
    }

    fn capacity(&self) -> usize {
        MOCK_CAPACITY
    }
}
