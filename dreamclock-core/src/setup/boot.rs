//! Boot-time configuration decision
//!
//! Run once after power-up: honour a factory reset request, otherwise
//! choose between the setup portal and a normal start.

use dreamclock_hal::ByteMemory;

use crate::config::ConfigurationRecord;
use crate::store::{ConfigStore, StoreError};

/// What the firmware should do after boot
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BootMode {
    /// The configuration was wiped on request; run setup next
    FactoryReset,
    /// No usable configuration; run the setup portal
    Setup,
    /// Start normally with the stored configuration
    Normal(ConfigurationRecord),
}

impl BootMode {
    /// Decide how to boot
    ///
    /// `reset_requested` is true when the user held the config button
    /// during power-up. A marked configuration without a network name or
    /// timezone cannot be used and also leads to setup.
    pub fn decide<M: ByteMemory>(
        reset_requested: bool,
        store: &mut ConfigStore<M>,
    ) -> Result<Self, StoreError> {
        if reset_requested {
            info!("Factory reset requested");
            store.wipe_config()?;
            return Ok(BootMode::FactoryReset);
        }

        if !store.is_configured() {
            info!("Device not configured, starting setup");
            return Ok(BootMode::Setup);
        }

        let record = store.load_config()?;
        if !record.is_complete() {
            warn!("Stored configuration incomplete, starting setup");
            return Ok(BootMode::Setup);
        }

        Ok(BootMode::Normal(record))
    }

    /// Check if the setup portal has to run
    pub fn needs_setup(&self) -> bool {
        !matches!(self, BootMode::Normal(_))
    }
}
