//! State machine definition
//!
//! ```text
//!                  Saved
//!  Unconfigured ──────────▶ Configured
//!       ▲                       │
//!       └───────────────────────┘
//!            Cleared / Wiped
//! ```
//!
//! A blank or erased chip starts in `Unconfigured`: the marker only reads
//! as configured if it holds exactly `0xAA`.

use dreamclock_hal::ByteMemory;

use super::events::DeviceEvent;
use crate::store::ConfigStore;

/// Persisted configuration states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceState {
    /// Factory state or after a reset; setup is required
    Unconfigured,
    /// A complete configuration has been saved
    Configured,
}

impl DeviceState {
    /// Read the current state from the store's marker byte
    pub fn probe<M: ByteMemory>(store: &mut ConfigStore<M>) -> Self {
        if store.is_configured() {
            DeviceState::Configured
        } else {
            DeviceState::Unconfigured
        }
    }

    /// Check if the setup flow must run
    pub fn needs_setup(&self) -> bool {
        matches!(self, DeviceState::Unconfigured)
    }

    /// Process an event and return the next state
    ///
    /// Saving over an existing configuration and resetting an unconfigured
    /// device are both allowed; neither state is terminal.
    pub fn transition(self, event: DeviceEvent) -> Self {
        match event {
            DeviceEvent::Saved => DeviceState::Configured,
            DeviceEvent::Cleared | DeviceEvent::Wiped => DeviceState::Unconfigured,
        }
    }
}
