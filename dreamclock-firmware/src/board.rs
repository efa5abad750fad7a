//! Board wiring
//!
//! ```text
//! GP4  ── SDA ─┐
//! GP5  ── SCL ─┴── 24C32 EEPROM (A0..A2 = GND, address 0x50)
//! GP22 ── CONFIG button to GND (internal pull-up)
//! ```

use embassy_rp::i2c::{self, Blocking, I2c};
use embassy_rp::peripherals::{I2C0, PIN_4, PIN_5};
use embassy_rp::Peri;
use embassy_time::Delay;

use dreamclock_core::ConfigStore;
use dreamclock_drivers::eeprom::{At24Eeprom, EepromConfig};
use dreamclock_hal::{EmbeddedHalBus, I2cConfig};

/// Time for the button pull-up to settle before sampling
pub const BUTTON_SETTLE_MS: u64 = 10;

/// How long the config button must be held at runtime to factory reset
pub const RESET_HOLD_MS: u64 = 3_000;

/// Button poll interval
pub const BUTTON_POLL_MS: u64 = 50;

/// EEPROM driver as wired on this board
pub type Eeprom = At24Eeprom<EmbeddedHalBus<I2c<'static, I2C0, Blocking>>, Delay>;

/// Bring up I2C0 and hand the EEPROM to a configuration store
///
/// The store is the only user of this bus.
pub fn config_store(
    i2c0: Peri<'static, I2C0>,
    scl: Peri<'static, PIN_5>,
    sda: Peri<'static, PIN_4>,
) -> ConfigStore<Eeprom> {
    let mut config = i2c::Config::default();
    config.frequency = I2cConfig::STANDARD.frequency;

    let bus = I2c::new_blocking(i2c0, scl, sda, config);
    let eeprom = At24Eeprom::with_config(EmbeddedHalBus::new(bus), Delay, EepromConfig::AT24C32);
    ConfigStore::new(eeprom)
}
