//! Configuration types
//!
//! The persisted record, where it lives in the EEPROM, and how its strings
//! are encoded.

pub mod codec;
pub mod layout;
pub mod record;

pub use layout::{
    ConfigField, FieldRegion, MemoryMap, CLEARED_MARKER, CONFIGURED_MARKER, MEMORY_MAP,
    REQUIRED_CAPACITY,
};
pub use record::ConfigurationRecord;
