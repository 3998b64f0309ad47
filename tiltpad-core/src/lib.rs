//! Board-agnostic types for the Tiltpad driver layer
//!
//! This crate contains everything that does not touch a register:
//!
//! - Screen geometry and 12-bit colour
//! - Pulse samples, axis thresholds and direction classification
//! - Configuration and persisted calibration types
//! - Traits the application uses to talk to the display and tilt sensor

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod color;
pub mod config;
pub mod geometry;
pub mod tilt;
pub mod traits;

pub use color::Color;
pub use geometry::{GeometryError, Rectangle, SCREEN_HEIGHT, SCREEN_WIDTH};
pub use tilt::{AxisReading, Direction, PulseSample, Thresholds, TiltReading};
