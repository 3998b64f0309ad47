//! Tiltpad Hardware Abstraction Layer
//!
//! This crate defines the register-level traits the drivers are written
//! against. The real memory-mapped implementation lives in a chip crate
//! and is bound only at the system boundary, so protocol and rasterizer
//! logic can run against a simulated register file on the host.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (ball demo, game loop)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tiltpad-drivers                        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tiltpad-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ Mmio (volatile│       │ SimBoard      │
//! │ ATmega168)    │       │ (host tests)  │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`register::RegisterIo`] - Byte and bit access to hardware registers
//! - [`gpio::GpioExt`] - Pin direction and level control
//! - [`poll::Poll`] - Busy-wait strategy for hardware-ready flags
//! - [`uart::UartTx`] - Byte-stream transmit
//! - [`eeprom::ByteStorage`] - Byte-addressed persistent storage
//! - [`adc::AnalogInput`] - Analog sampling

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod adc;
pub mod eeprom;
pub mod gpio;
pub mod poll;
pub mod register;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use adc::AnalogInput;
pub use eeprom::ByteStorage;
pub use gpio::{GpioExt, Pin, PinMode};
pub use poll::{Bounded, Poll, Spin, Stalled};
pub use register::{Register, RegisterIo};
pub use uart::UartTx;
