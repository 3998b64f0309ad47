//! Configuration types
//!
//! Compile-time defaults match the reference board. Tilt thresholds can be
//! overridden at runtime from calibration data persisted in EEPROM.

pub mod calibration;

pub use calibration::{CalibrationData, CalibrationError, CALIBRATION_MAGIC, CALIBRATION_VERSION};

use tiltpad_protocol::Contrast;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::tilt::Thresholds;

/// Display controller configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// Electronic volume sent during init
    pub contrast: Contrast,
    /// Settle time around the chip-select edge, in ms
    pub settle_ms: u32,
    /// Reset pulse width and post-reset hold, in ms
    pub reset_ms: u32,
}

impl DisplayConfig {
    /// Reference board timing: 10 ms settle, 200 ms reset
    pub const fn new(contrast: Contrast) -> Self {
        Self {
            contrast,
            settle_ms: 10,
            reset_ms: 200,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::new(Contrast::default())
    }
}

/// Two-axis tilt sensor thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TiltConfig {
    /// X axis (low = right, high = left)
    pub x: Thresholds,
    /// Y axis (low = up, high = down)
    pub y: Thresholds,
}

impl TiltConfig {
    pub const fn new(x: Thresholds, y: Thresholds) -> Self {
        Self { x, y }
    }

    /// Both axes have ordered thresholds
    pub const fn is_valid(&self) -> bool {
        self.x.is_ordered() && self.y.is_ordered()
    }
}
