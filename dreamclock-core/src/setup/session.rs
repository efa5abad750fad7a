//! Setup session
//!
//! The decision logic behind the setup access point: validating what the
//! user submitted, persisting it, and remembering that the device must
//! restart. The HTTP and WiFi layers live elsewhere and call in here.

use dreamclock_hal::ByteMemory;

use crate::config::layout::ConfigField;
use crate::config::ConfigurationRecord;
use crate::store::{ConfigStore, StoreError};

/// SSID of the access point opened while unconfigured
pub const SETUP_AP_SSID: &str = "DREAM_Clock_Setup";

/// Delay between a successful save and the restart, in milliseconds
pub const RESTART_DELAY_MS: u64 = 3_000;

/// Values submitted on the setup page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetupForm<'a> {
    /// WiFi network name
    pub network_name: &'a str,
    /// WiFi passphrase
    pub network_secret: &'a str,
    /// POSIX TZ rule
    pub time_zone_spec: &'a str,
}

impl<'a> SetupForm<'a> {
    fn value(&self, field: ConfigField) -> &'a str {
        match field {
            ConfigField::NetworkName => self.network_name,
            ConfigField::NetworkSecret => self.network_secret,
            ConfigField::TimeZoneSpec => self.time_zone_spec,
        }
    }

    /// Check that every field is present and fits its region
    pub fn validate(&self) -> Result<(), SetupError> {
        for field in ConfigField::ALL {
            let value = self.value(field);
            if value.is_empty() {
                return Err(SetupError::Missing(field));
            }
            if value.len() > field.max_len() {
                return Err(SetupError::TooLong(field));
            }
        }
        Ok(())
    }

    /// Convert into a record
    pub fn to_record(&self) -> ConfigurationRecord {
        ConfigurationRecord::new(self.network_name, self.network_secret, self.time_zone_spec)
    }
}

/// Setup errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SetupError {
    /// A required field was left empty
    Missing(ConfigField),
    /// A field does not fit its EEPROM region
    TooLong(ConfigField),
    /// Persisting the configuration failed
    Store(StoreError),
}

impl From<StoreError> for SetupError {
    fn from(e: StoreError) -> Self {
        SetupError::Store(e)
    }
}

/// One run of the setup portal
#[derive(Debug, Default)]
pub struct SetupSession {
    saved: Option<ConfigurationRecord>,
}

impl SetupSession {
    /// Start a session with nothing saved yet
    pub fn new() -> Self {
        Self { saved: None }
    }

    /// Validate and persist a submitted form
    ///
    /// On success the device is configured and should restart after
    /// [`RESTART_DELAY_MS`]. A rejected form leaves the EEPROM untouched.
    pub fn submit<M: ByteMemory>(
        &mut self,
        store: &mut ConfigStore<M>,
        form: &SetupForm<'_>,
    ) -> Result<(), SetupError> {
        if let Err(e) = form.validate() {
            warn!("Setup form rejected: {}", e);
            return Err(e);
        }

        let record = form.to_record();
        store.save_config(&record)?;
        info!("Configuration saved, device will restart in {} ms", RESTART_DELAY_MS);

        self.saved = Some(record);
        Ok(())
    }

    /// Check whether a configuration was saved in this session
    pub fn config_saved(&self) -> bool {
        self.saved.is_some()
    }

    /// The configuration saved in this session
    pub fn saved_config(&self) -> Option<&ConfigurationRecord> {
        self.saved.as_ref()
    }
}
