//! Persistent configuration store
//!
//! Maps a [`ConfigurationRecord`] onto the EEPROM memory map and tracks the
//! configured marker. The store owns its memory for its whole lifetime and
//! only touches the bus when asked to; nothing is cached between calls.
//!
//! # Write ordering
//!
//! `save_config` writes the three fields first and the marker last. Losing
//! power anywhere before the marker write leaves the device unconfigured,
//! so a half-written record is never reported as valid. There is no
//! atomicity between the field writes themselves.

use dreamclock_hal::{ByteMemory, MemoryError};

use crate::config::codec::{erase_region, read_str, write_str};
use crate::config::layout::{
    ConfigField, CLEARED_MARKER, CONFIGURED_MARKER, MEMORY_MAP, REQUIRED_CAPACITY,
};
use crate::config::ConfigurationRecord;

/// Configuration store errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StoreError {
    /// The memory device failed a transaction
    Transport(MemoryError),
    /// The memory device cannot hold the memory map
    CapacityTooSmall,
}

impl From<MemoryError> for StoreError {
    fn from(e: MemoryError) -> Self {
        StoreError::Transport(e)
    }
}

/// Configuration store backed by byte-addressable memory
pub struct ConfigStore<M> {
    memory: M,
}

impl<M: ByteMemory> ConfigStore<M> {
    /// Create a store that takes exclusive ownership of `memory`
    pub fn new(memory: M) -> Self {
        Self { memory }
    }

    /// Give the memory device back
    pub fn release(self) -> M {
        self.memory
    }

    /// Borrow the memory device
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Check that the device can hold the configuration
    ///
    /// The bus itself is brought up by the board before the memory driver is
    /// constructed, so this issues no transactions.
    pub fn begin(&mut self) -> Result<(), StoreError> {
        let capacity = self.memory.capacity();
        if capacity < REQUIRED_CAPACITY {
            warn!(
                "EEPROM too small: {} bytes, need {}",
                capacity, REQUIRED_CAPACITY
            );
            return Err(StoreError::CapacityTooSmall);
        }
        info!("EEPROM initialized ({} bytes)", capacity);
        Ok(())
    }

    /// Check whether a complete configuration has been saved
    ///
    /// A failed marker read reports unconfigured, which sends the device
    /// into setup rather than booting with garbage.
    pub fn is_configured(&mut self) -> bool {
        match self.memory.read_byte(MEMORY_MAP.marker) {
            Ok(marker) => marker == CONFIGURED_MARKER,
            Err(e) => {
                warn!("Marker read failed: {}", e);
                false
            }
        }
    }

    /// Set the configured marker
    pub fn mark_configured(&mut self) -> Result<(), StoreError> {
        self.memory
            .write_byte(MEMORY_MAP.marker, CONFIGURED_MARKER)?;
        Ok(())
    }

    /// Reset the configured marker
    ///
    /// Field regions are left as they are. The old values, including the
    /// network secret, stay readable with `load_config`; use
    /// [`wipe_config`](Self::wipe_config) to destroy them.
    pub fn clear_config(&mut self) -> Result<(), StoreError> {
        self.memory.write_byte(MEMORY_MAP.marker, CLEARED_MARKER)?;
        info!("Configuration cleared");
        Ok(())
    }

    /// Reset the marker and zero every field region
    ///
    /// The marker goes first so an interrupted wipe still leaves the device
    /// unconfigured.
    pub fn wipe_config(&mut self) -> Result<(), StoreError> {
        self.memory.write_byte(MEMORY_MAP.marker, CLEARED_MARKER)?;
        for field in ConfigField::ALL {
            erase_region(&mut self.memory, field.region())?;
        }
        info!("Configuration wiped");
        Ok(())
    }

    /// Persist `record` and mark the device configured
    ///
    /// Fields longer than their region are truncated silently.
    pub fn save_config(&mut self, record: &ConfigurationRecord) -> Result<(), StoreError> {
        info!("Saving configuration to EEPROM...");

        for field in ConfigField::ALL {
            let stored = write_str(&mut self.memory, field.region(), record.field(field))?;
            debug!("  {}: {} bytes", field, stored);
        }
        self.mark_configured()?;

        info!("Configuration saved successfully");
        Ok(())
    }

    /// Read the stored record
    ///
    /// Does not look at the marker; call [`is_configured`](Self::is_configured)
    /// first. Empty or corrupt regions come back as empty fields.
    pub fn load_config(&mut self) -> Result<ConfigurationRecord, StoreError> {
        info!("Loading configuration from EEPROM...");

        let record = ConfigurationRecord {
            network_name: read_str(&mut self.memory, ConfigField::NetworkName.region())?,
            network_secret: read_str(&mut self.memory, ConfigField::NetworkSecret.region())?,
            time_zone_spec: read_str(&mut self.memory, ConfigField::TimeZoneSpec.region())?,
        };

        info!("Loaded configuration:");
        info!("  SSID: {}", record.network_name.as_str());
        info!("  Timezone: {}", record.time_zone_spec.as_str());

        Ok(record)
    }

    /// Read the stored record, returning empty fields if the bus fails
    pub fn load_config_or_default(&mut self) -> ConfigurationRecord {
        match self.load_config() {
            Ok(record) => record,
            Err(e) => {
                warn!("Failed to load configuration: {}", e);
                ConfigurationRecord::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockEeprom;

    fn home_record() -> ConfigurationRecord {
        ConfigurationRecord::new("HomeWiFi", "secretpass123", "EST5EDT,M3.2.0/2,M11.1.0/2")
    }

    /// Writes needed to store `home_record` without the marker
    const HOME_FIELD_WRITES: usize = (1 + 8) + (1 + 13) + (1 + 26);

    #[test]
    fn test_save_then_load() {
        let mut store = ConfigStore::new(MockEeprom::new());
        store.save_config(&home_record()).unwrap();

        assert!(store.is_configured());
        let loaded = store.load_config().unwrap();
        assert_eq!(loaded.network_name.as_str(), "HomeWiFi");
        assert_eq!(loaded.network_secret.as_str(), "secretpass123");
        assert_eq!(loaded.time_zone_spec.as_str(), "EST5EDT,M3.2.0/2,M11.1.0/2");
    }

    #[test]
    fn test_blank_chip() {
        let mut store = ConfigStore::new(MockEeprom::new());

        assert!(!store.is_configured());
        let loaded = store.load_config().unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_erased_chip_reads_unconfigured_and_empty() {
        let mut store = ConfigStore::new(MockEeprom::filled(0xFF));

        assert!(!store.is_configured());
        assert!(store.load_config().unwrap().is_empty());
    }

    #[test]
    fn test_on_disk_format() {
        let mut store = ConfigStore::new(MockEeprom::new());
        store.save_config(&home_record()).unwrap();

        let bytes = store.memory().bytes();
        assert_eq!(bytes[0], 0xAA);
        assert_eq!(bytes[10], 8);
        assert_eq!(&bytes[11..19], b"HomeWiFi");
        assert_eq!(bytes[100], 13);
        assert_eq!(&bytes[101..114], b"secretpass123");
        assert_eq!(bytes[200], 26);
        assert_eq!(&bytes[201..227], b"EST5EDT,M3.2.0/2,M11.1.0/2");
    }

    #[test]
    fn test_marker_written_last() {
        let mut store = ConfigStore::new(MockEeprom::new());
        store.save_config(&home_record()).unwrap();

        assert_eq!(store.memory().write_count(), HOME_FIELD_WRITES + 1);
    }

    #[test]
    fn test_interrupted_save_stays_unconfigured() {
        let mut eeprom = MockEeprom::new();
        // Every field lands, the marker write is lost
        eeprom.fail_after_writes(HOME_FIELD_WRITES);
        let mut store = ConfigStore::new(eeprom);

        let result = store.save_config(&home_record());
        assert!(matches!(result, Err(StoreError::Transport(_))));
        assert!(!store.is_configured());

        // The fields themselves are on the chip
        let loaded = store.load_config().unwrap();
        assert_eq!(loaded, home_record());
    }

    #[test]
    fn test_interrupted_resave_stays_unconfigured() {
        let mut store = ConfigStore::new(MockEeprom::new());
        store.save_config(&home_record()).unwrap();
        store.clear_config().unwrap();

        let mut eeprom = store.release();
        // Power lost halfway through the network name
        eeprom.fail_after_writes(4);
        let mut store = ConfigStore::new(eeprom);
        let updated = ConfigurationRecord::new("Office", "hunter22", "JST-9");
        assert!(store.save_config(&updated).is_err());

        assert!(!store.is_configured());
    }

    #[test]
    fn test_mark_and_clear() {
        let mut store = ConfigStore::new(MockEeprom::new());

        store.mark_configured().unwrap();
        assert!(store.is_configured());
        store.mark_configured().unwrap();
        assert!(store.is_configured());

        store.clear_config().unwrap();
        assert!(!store.is_configured());
        assert_eq!(store.memory().bytes()[0], 0x00);
    }

    #[test]
    fn test_clear_keeps_fields() {
        let mut store = ConfigStore::new(MockEeprom::new());
        store.save_config(&home_record()).unwrap();
        let before = *store.memory().bytes();

        store.clear_config().unwrap();

        assert!(!store.is_configured());
        assert_eq!(store.load_config().unwrap(), home_record());
        assert_eq!(&store.memory().bytes()[1..], &before[1..]);
    }

    #[test]
    fn test_wipe_destroys_fields() {
        let mut store = ConfigStore::new(MockEeprom::new());
        store.save_config(&home_record()).unwrap();

        store.wipe_config().unwrap();

        assert!(!store.is_configured());
        assert!(store.load_config().unwrap().is_empty());
        assert!(store.memory().bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_save_is_idempotent() {
        let mut store = ConfigStore::new(MockEeprom::new());
        store.save_config(&home_record()).unwrap();
        let first = *store.memory().bytes();
        let first_load = store.load_config().unwrap();

        store.save_config(&home_record()).unwrap();
        assert_eq!(*store.memory().bytes(), first);
        assert_eq!(store.load_config().unwrap(), first_load);
    }

    #[test]
    fn test_shorter_resave_ignores_stale_tail() {
        let mut store = ConfigStore::new(MockEeprom::new());
        store.save_config(&home_record()).unwrap();

        let shorter = ConfigurationRecord::new("Cab", "pw", "HST10");
        store.save_config(&shorter).unwrap();

        assert_eq!(store.load_config().unwrap(), shorter);
    }

    #[test]
    fn test_empty_fields_round_trip() {
        let mut store = ConfigStore::new(MockEeprom::new());
        store.save_config(&home_record()).unwrap();

        let open_network = ConfigurationRecord::new("Library", "", "GMT0BST,M3.5.0/1,M10.5.0");
        store.save_config(&open_network).unwrap();

        let loaded = store.load_config().unwrap();
        assert_eq!(loaded.network_secret.as_str(), "");
        assert_eq!(loaded, open_network);
    }

    #[test]
    fn test_read_failure() {
        let mut eeprom = MockEeprom::new();
        eeprom.load(0, &[0xAA]);
        eeprom.fail_reads();
        let mut store = ConfigStore::new(eeprom);

        // Marker read failure falls back to unconfigured
        assert!(!store.is_configured());
        // Explicit loads surface the failure
        assert!(matches!(
            store.load_config(),
            Err(StoreError::Transport(MemoryError::Bus(_)))
        ));
        assert!(store.load_config_or_default().is_empty());
    }

    #[test]
    fn test_begin_checks_capacity() {
        struct Tiny;

        impl ByteMemory for Tiny {
            fn read_byte(&mut self, _address: u16) -> Result<u8, MemoryError> {
                Ok(0)
            }

            fn write_byte(&mut self, _address: u16, _value: u8) -> Result<(), MemoryError> {
                Ok(())
            }

            fn capacity(&self) -> usize {
                128
            }
        }

        assert_eq!(
            ConfigStore::new(Tiny).begin(),
            Err(StoreError::CapacityTooSmall)
        );
        assert_eq!(ConfigStore::new(MockEeprom::new()).begin(), Ok(()));
    }

    #[test]
    fn test_store_over_borrowed_memory() {
        let mut eeprom = MockEeprom::new();
        {
            let mut store = ConfigStore::new(&mut eeprom);
            store.save_config(&home_record()).unwrap();
        }
        assert_eq!(eeprom.bytes()[0], 0xAA);
    }
}
