//! Display Bus Protocol
//!
//! Wire formats for the 3-wire bus between the ATmega and the Epson
//! S1D15G10 LCD controller. The bus has no hardware shift register
//! behind it; the driver crate bit-bangs these frames.
//!
//! # Frame Format
//!
//! ```text
//! ┌──────┬──────────────────────────┐
//! │ D/C  │ PAYLOAD                  │
//! │ 1b   │ 8b, MSB first            │
//! └──────┴──────────────────────────┘
//! ```
//!
//! A clear D/C bit marks a command op-code; a set one marks a data byte
//! belonging to the most recent command.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod commands;
pub mod frame;
pub mod pixel;

pub use commands::{init_sequence, op, Contrast, InitStep};
pub use frame::{FrameAssembler, SerialFrame, FRAME_BITS};
pub use pixel::pack_pair;
