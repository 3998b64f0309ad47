//! Application-facing device traits
//!
//! Entities such as a moving ball or the accelerometer are driven through
//! these traits rather than through per-object function pointers, so
//! calls resolve statically against the concrete driver.

pub mod display;
pub mod sensor;

pub use display::Canvas;
pub use sensor::TiltSensor;
