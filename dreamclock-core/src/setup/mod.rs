//! First-run setup
//!
//! Everything the setup portal and boot sequence need from the core:
//! form validation, timezone presets, and the boot decision. Networking and
//! HTML are provided by the firmware.

pub mod boot;
pub mod session;
pub mod timezone;

pub use boot::BootMode;
pub use session::{SetupError, SetupForm, SetupSession, RESTART_DELAY_MS, SETUP_AP_SSID};
pub use timezone::{TimezonePreset, DEFAULT_TIMEZONE, TIMEZONE_PRESETS};
