//! DreamClock - Clock/Timer Appliance Firmware
//!
//! Boot sequence for RP2040-based DreamClock boards: bring up the EEPROM,
//! honour a factory reset request, and decide between normal start and the
//! setup portal. The display, network and portal tasks consume the
//! configuration loaded here.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Pull};
use embassy_time::{Duration, Instant, Timer};
use {defmt_rtt as _, panic_probe as _};

use dreamclock_core::setup::{BootMode, RESTART_DELAY_MS, SETUP_AP_SSID};
use dreamclock_core::state::{DeviceEvent, DeviceState};

mod board;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("DreamClock firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Holding the config button through power-up requests a factory reset
    let mut config_button = Input::new(p.PIN_22, Pull::Up);
    Timer::after_millis(board::BUTTON_SETTLE_MS).await;
    let reset_requested = config_button.is_low();

    let mut store = board::config_store(p.I2C0, p.PIN_5, p.PIN_4);
    if let Err(e) = store.begin() {
        error!("EEPROM unusable: {}", e);
    }

    let mode = match BootMode::decide(reset_requested, &mut store) {
        Ok(mode) => mode,
        Err(e) => {
            error!("Reading configuration failed: {}", e);
            BootMode::Setup
        }
    };

    let mut state = DeviceState::probe(&mut store);
    info!("Device state: {}", state);

    match mode {
        BootMode::Normal(record) => {
            info!("Starting with {}", record);
        }
        BootMode::FactoryReset | BootMode::Setup => {
            info!("Setup required: connect to {} to configure", SETUP_AP_SSID);
        }
    }

    // Long press at runtime: wipe and restart into setup
    loop {
        config_button.wait_for_low().await;
        let pressed_at = Instant::now();

        while config_button.is_low() {
            if pressed_at.elapsed() >= Duration::from_millis(board::RESET_HOLD_MS) {
                warn!("Config button held, wiping configuration");
                match store.wipe_config() {
                    Ok(()) => state = state.transition(DeviceEvent::Wiped),
                    Err(e) => error!("Wipe failed: {}", e),
                }
                info!("Device state: {}, restarting in {} ms", state, RESTART_DELAY_MS);
                Timer::after_millis(RESTART_DELAY_MS).await;
                cortex_m::peripheral::SCB::sys_reset();
            }
            Timer::after_millis(board::BUTTON_POLL_MS).await;
        }
    }
}
