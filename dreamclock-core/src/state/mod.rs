//! Device configuration state machine
//!
//! Tracks whether the device holds a usable configuration. The state is
//! persisted through the EEPROM marker byte; this module gives it a name
//! and the transitions allowed between values.

pub mod events;
pub mod machine;

pub use events::DeviceEvent;
pub use machine::DeviceState;
