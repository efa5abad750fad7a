//! Events that trigger state transitions

/// Events that change the persisted configuration state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceEvent {
    /// All fields and the marker were written
    Saved,
    /// Marker reset, fields left in place (soft delete)
    Cleared,
    /// Marker reset and fields zeroed
    Wiped,
}

impl DeviceEvent {
    /// Check if this event drops the current configuration
    pub fn is_reset(&self) -> bool {
        matches!(self, DeviceEvent::Cleared | DeviceEvent::Wiped)
    }
}
