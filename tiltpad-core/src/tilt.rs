//! Duty-cycle tilt classification
//!
//! The accelerometer encodes each axis as the high time of a square wave.
//! The decoder measures that high time in busy-wait iterations; these types
//! turn the raw counts into a coarse direction.
//!
//! Counts have no time unit. Thresholds are only meaningful for samples
//! taken on the same hardware, clock speed and code path as the
//! calibration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One measured period of a duty-cycle signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulseSample {
    /// Busy-wait iterations spent with the line high
    pub high_ticks: u32,
    /// Busy-wait iterations spent with the line low
    pub low_ticks: u32,
}

impl PulseSample {
    /// Total iterations across the period
    pub const fn period_ticks(&self) -> u32 {
        self.high_ticks.saturating_add(self.low_ticks)
    }
}

/// Where a value falls relative to an axis's thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AxisReading {
    /// Below the low threshold
    Low,
    /// Between the thresholds (inclusive)
    Neutral,
    /// Above the high threshold
    High,
}

/// Per-axis classification thresholds in ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Thresholds {
    /// Values strictly below this are `Low`
    pub low: u32,
    /// Values strictly above this are `High`
    pub high: u32,
}

impl Thresholds {
    /// Thresholds measured on the reference board
    pub const DEFAULT: Thresholds = Thresholds::new(7920, 9920);

    pub const fn new(low: u32, high: u32) -> Self {
        Self { low, high }
    }

    /// Classify a high-time count
    pub const fn classify(&self, ticks: u32) -> AxisReading {
        if ticks < self.low {
            AxisReading::Low
        } else if ticks > self.high {
            AxisReading::High
        } else {
            AxisReading::Neutral
        }
    }

    /// Thresholds are usable when low does not exceed high
    pub const fn is_ordered(&self) -> bool {
        self.low <= self.high
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Coarse tilt direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
    /// Both axes between their thresholds
    Neutral,
}

impl Direction {
    /// Direction for an X-axis reading, if it is past a threshold
    pub const fn from_x(reading: AxisReading) -> Option<Self> {
        match reading {
            AxisReading::Low => Some(Direction::Right),
            AxisReading::High => Some(Direction::Left),
            AxisReading::Neutral => None,
        }
    }

    /// Direction for a Y-axis reading, if it is past a threshold
    pub const fn from_y(reading: AxisReading) -> Option<Self> {
        match reading {
            AxisReading::Low => Some(Direction::Up),
            AxisReading::High => Some(Direction::Down),
            AxisReading::Neutral => None,
        }
    }

    /// Combine both axes; X wins when both are tilted
    pub const fn from_axes(x: AxisReading, y: AxisReading) -> Self {
        match Self::from_x(x) {
            Some(d) => d,
            None => match Self::from_y(y) {
                Some(d) => d,
                None => Direction::Neutral,
            },
        }
    }
}

/// Raw samples for both axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TiltReading {
    pub x: PulseSample,
    pub y: PulseSample,
}
