//! Tiltpad Device Drivers
//!
//! Blocking drivers for the reference board, written against
//! [`tiltpad_hal::RegisterIo`] so they run unchanged on the chip and on
//! the simulated register file:
//!
//! - [`serial::SerialBus`] - bit-banged 9-bit display bus
//! - [`display::Display`] - S1D15G10 colour LCD controller
//! - [`pulse::PulseDecoder`] - duty-cycle pulse measurement
//! - [`accel::Accelerometer`] - two-axis tilt sensor
//! - [`eeprom::Eeprom`] - on-chip EEPROM
//! - [`usart::Usart`] - USART0 transmit and diagnostics
//! - [`adc::Adc`] - 10-bit ADC
//! - [`calibration::CalibrationStore`] - tilt thresholds persisted in EEPROM

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod accel;
pub mod adc;
pub mod calibration;
pub mod display;
pub mod eeprom;
pub mod led;
pub mod pulse;
pub mod serial;
pub mod usart;

pub use accel::Accelerometer;
pub use adc::Adc;
pub use calibration::{CalibrationStore, StoreError};
pub use display::{Display, DisplayPins};
pub use eeprom::{Eeprom, EepromError};
pub use led::blink;
pub use pulse::PulseDecoder;
pub use serial::{BusPins, SerialBus};
pub use usart::Usart;
