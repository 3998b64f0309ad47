//! Two-axis duty-cycle accelerometer
//!
//! Each axis drives a square wave whose high time tracks the tilt on
//! that axis. X is measured first and wins when tilted; Y is only
//! measured when X reads neutral.

use tiltpad_core::config::TiltConfig;
use tiltpad_core::traits::TiltSensor;
use tiltpad_core::{Direction, TiltReading};
use tiltpad_hal::{GpioExt, Pin, PinMode, Poll, RegisterIo};
use tiltpad_hal_atmega168::pins::{ACCEL_X, ACCEL_Y};

use crate::pulse::PulseDecoder;

/// Accelerometer on two input pins
pub struct Accelerometer<R, P> {
    decoder: PulseDecoder<R, P>,
    x: Pin,
    y: Pin,
    config: TiltConfig,
}

impl<R: RegisterIo, P: Poll> Accelerometer<R, P> {
    /// Create an accelerometer and configure both pins as inputs
    pub fn new(mut regs: R, poll: P, x: Pin, y: Pin, config: TiltConfig) -> Self {
        regs.configure_direction(x, PinMode::Input);
        regs.configure_direction(y, PinMode::Input);
        Self {
            decoder: PulseDecoder::new(regs, poll),
            x,
            y,
            config,
        }
    }

    /// Accelerometer on the reference board pins with default thresholds
    pub fn on_board(regs: R, poll: P) -> Self {
        Self::new(regs, poll, ACCEL_X, ACCEL_Y, TiltConfig::default())
    }

    pub fn config(&self) -> &TiltConfig {
        &self.config
    }

    /// Replace the thresholds, e.g. with calibration loaded from EEPROM
    pub fn set_config(&mut self, config: TiltConfig) {
        self.config = config;
    }

    pub fn decoder_mut(&mut self) -> &mut PulseDecoder<R, P> {
        &mut self.decoder
    }

    pub fn release(self) -> (R, P) {
        self.decoder.release()
    }
}

impl<R: RegisterIo, P: Poll> TiltSensor for Accelerometer<R, P> {
    type Error = P::Error;

    fn direction(&mut self) -> Result<Direction, P::Error> {
        let x = self.config.x.classify(self.decoder.read_high_ticks(self.x)?);
        if let Some(direction) = Direction::from_x(x) {
            return Ok(direction);
        }

        let y = self.config.y.classify(self.decoder.read_high_ticks(self.y)?);
        Ok(Direction::from_axes(x, y))
    }

    fn detailed_direction(&mut self) -> Result<TiltReading, P::Error> {
        Ok(TiltReading {
            x: self.decoder.read_pulse(self.x)?,
            y: self.decoder.read_pulse(self.y)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiltpad_core::Thresholds;
    use tiltpad_hal::Bounded;
    use tiltpad_hal_atmega168::sim::{SimBoard, Waveform};

    const LIMIT: u32 = 100_000;

    fn wave(high: u32) -> Waveform {
        Waveform::new(high + 1, 3_001)
    }

    fn tilted(x: u32, y: u32) -> Direction {
        let mut board = SimBoard::new();
        board.drive_waveform(ACCEL_X, wave(x));
        board.drive_waveform(ACCEL_Y, wave(y));
        Accelerometer::on_board(&mut board, Bounded::new(LIMIT))
            .direction()
            .unwrap()
    }

    #[test]
    fn test_pins_become_inputs() {
        let mut board = SimBoard::new();
        board.poke(ACCEL_X.direction, 0xFF);
        Accelerometer::on_board(&mut board, Bounded::new(LIMIT));

        assert!(!board.is_output(ACCEL_X));
        assert!(!board.is_output(ACCEL_Y));
    }

    #[test]
    fn test_x_axis_directions() {
        assert_eq!(tilted(5_000, 8_500), Direction::Right);
        assert_eq!(tilted(10_500, 8_500), Direction::Left);
    }

    #[test]
    fn test_y_axis_directions() {
        assert_eq!(tilted(8_500, 5_000), Direction::Up);
        assert_eq!(tilted(8_500, 10_500), Direction::Down);
    }

    #[test]
    fn test_level_is_neutral() {
        assert_eq!(tilted(8_500, 8_500), Direction::Neutral);
    }

    #[test]
    fn test_thresholds_are_inclusive_of_neutral() {
        assert_eq!(tilted(7_920, 9_920), Direction::Neutral);
        assert_eq!(tilted(7_919, 8_500), Direction::Right);
        assert_eq!(tilted(8_500, 9_921), Direction::Down);
    }

    #[test]
    fn test_x_wins_without_sampling_y() {
        let mut board = SimBoard::new();
        board.drive_waveform(ACCEL_X, wave(5_000));
        // Y never toggles; sampling it would stall
        board.drive_level(ACCEL_Y, true);

        let mut accel = Accelerometer::on_board(&mut board, Bounded::new(LIMIT));
        assert_eq!(accel.direction(), Ok(Direction::Right));
    }

    #[test]
    fn test_neutral_x_with_stuck_y_stalls() {
        let mut board = SimBoard::new();
        board.drive_waveform(ACCEL_X, wave(8_500));
        board.drive_level(ACCEL_Y, true);

        let mut accel = Accelerometer::on_board(&mut board, Bounded::new(LIMIT));
        assert!(accel.direction().is_err());
    }

    #[test]
    fn test_calibrated_thresholds() {
        let mut board = SimBoard::new();
        board.drive_waveform(ACCEL_X, wave(5_000));
        board.drive_waveform(ACCEL_Y, wave(5_000));

        let mut accel = Accelerometer::on_board(&mut board, Bounded::new(LIMIT));
        accel.set_config(TiltConfig::new(
            Thresholds::new(4_000, 6_000),
            Thresholds::new(4_000, 6_000),
        ));
        assert_eq!(accel.direction(), Ok(Direction::Neutral));
    }

    #[test]
    fn test_detailed_direction_samples_both_axes() {
        let mut board = SimBoard::new();
        board.drive_waveform(ACCEL_X, Waveform::new(1_201, 801));
        board.drive_waveform(ACCEL_Y, Waveform::new(601, 401));

        let reading = Accelerometer::on_board(&mut board, Bounded::new(LIMIT))
            .detailed_direction()
            .unwrap();

        assert_eq!(reading.x.high_ticks, 1_200);
        assert_eq!(reading.x.low_ticks, 800);
        assert_eq!(reading.y.high_ticks, 600);
        assert_eq!(reading.y.low_ticks, 400);
    }
}
