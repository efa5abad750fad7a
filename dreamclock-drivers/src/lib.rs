//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in dreamclock-hal:
//!
//! - EEPROM drivers (24-series I2C EEPROM)

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod eeprom;
