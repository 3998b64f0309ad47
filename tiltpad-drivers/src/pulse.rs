//! Duty-cycle pulse measurement
//!
//! Times one full period of a square wave by counting busy-wait
//! iterations. The first two waits discard whatever partial period the
//! line is in, so the counted high and low phases always start on an
//! edge.

use tiltpad_core::PulseSample;
use tiltpad_hal::{GpioExt, Pin, Poll, RegisterIo};

/// Measures high and low phase lengths on input pins
pub struct PulseDecoder<R, P> {
    regs: R,
    poll: P,
}

impl<R: RegisterIo, P: Poll> PulseDecoder<R, P> {
    pub fn new(regs: R, poll: P) -> Self {
        Self { regs, poll }
    }

    /// Measure one period on `pin`
    ///
    /// A pin that stops toggling holds the caller until the wait strategy
    /// gives up; with [`Spin`](tiltpad_hal::Spin) that is never.
    pub fn read_pulse(&mut self, pin: Pin) -> Result<PulseSample, P::Error> {
        let regs = &mut self.regs;

        self.poll.wait_while(|| regs.is_high(pin))?;
        self.poll.wait_while(|| regs.is_low(pin))?;
        let high_ticks = self.poll.wait_while(|| regs.is_high(pin))?;
        let low_ticks = self.poll.wait_while(|| regs.is_low(pin))?;

        trace!("pulse high={=u32} low={=u32}", high_ticks, low_ticks);
        Ok(PulseSample {
            high_ticks,
            low_ticks,
        })
    }

    /// Measure one period and keep only the high phase
    pub fn read_high_ticks(&mut self, pin: Pin) -> Result<u32, P::Error> {
        self.read_pulse(pin).map(|sample| sample.high_ticks)
    }

    /// Register file the decoder samples
    pub fn regs_mut(&mut self) -> &mut R {
        &mut self.regs
    }

    pub fn release(self) -> (R, P) {
        (self.regs, self.poll)
    }
}
