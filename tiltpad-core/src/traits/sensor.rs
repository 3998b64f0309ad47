//! Tilt sensor trait

use crate::tilt::{Direction, TiltReading};

/// Two-axis tilt input
pub trait TiltSensor {
    /// Error type for measurements
    type Error;

    /// Classify the current tilt into a coarse direction
    fn direction(&mut self) -> Result<Direction, Self::Error>;

    /// Raw samples for both axes
    fn detailed_direction(&mut self) -> Result<TiltReading, Self::Error>;
}
