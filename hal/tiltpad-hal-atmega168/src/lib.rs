//! ATmega168-specific HAL for Tiltpad
//!
//! This crate binds the `tiltpad-hal` traits to the ATmega168:
//!
//! - Register map for the ports, EEPROM, USART0 and ADC
//! - Board pin assignments for the LCD and accelerometer
//! - Volatile register access ([`Mmio`])
//! - Busy-loop delay ([`CycleDelay`])
//!
//! With the `sim` feature it also provides a host-side simulated register
//! file for exercising drivers without hardware.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod delay;
#[allow(unsafe_code)]
pub mod mmio;
pub mod pins;
pub mod registers;
#[cfg(any(test, feature = "sim"))]
pub mod sim;

pub use delay::CycleDelay;
pub use mmio::Mmio;

/// Reference board CPU clock
pub const CPU_HZ: u32 = 16_000_000;
