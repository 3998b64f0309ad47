//! 10-bit ADC driver
//!
//! Single conversions on demand. Each sample selects its channel, starts
//! a conversion and spins until the hardware clears ADSC.

use tiltpad_hal::adc::AdcConfig;
use tiltpad_hal::{AnalogInput, Poll, RegisterIo};
use tiltpad_hal_atmega168::registers::adc::{
    ADCH, ADCL, ADCSRA, ADEN, ADLAR, ADMUX, ADPS0, ADPS_MASK, ADSC, MAX, MUX_MASK, REFS0, REFS_MASK,
};

/// ADC driver
pub struct Adc<R, P> {
    regs: R,
    poll: P,
}

impl<R: RegisterIo, P: Poll> Adc<R, P> {
    pub fn new(regs: R, poll: P) -> Self {
        Self { regs, poll }
    }

    /// Select the reference, set the prescaler and enable the converter
    ///
    /// The result is kept right-adjusted so `sample` can read 10 bits.
    pub fn init(&mut self, config: &AdcConfig) {
        let reference = config.reference.bits();
        self.regs.modify(ADMUX, |v| {
            (v & !(REFS_MASK | (1 << ADLAR))) | ((reference << REFS0) & REFS_MASK)
        });
        self.regs
            .write(ADCSRA, (1 << ADEN) | ((config.prescaler.bits() << ADPS0) & ADPS_MASK));
        debug!("adc enabled");
    }

    /// Convert `channel` (0-7) and return the right-adjusted 10-bit result
    pub fn sample(&mut self, channel: u8) -> Result<u16, P::Error> {
        self.regs
            .modify(ADMUX, |v| (v & !MUX_MASK) | (channel & MUX_MASK));
        self.regs.set_bit(ADCSRA, ADSC);

        let regs = &mut self.regs;
        self.poll.wait_while(|| regs.test_bit(ADCSRA, ADSC))?;

        // ADCL first; reading it locks the result until ADCH is read
        let low = self.regs.read(ADCL);
        let high = self.regs.read(ADCH);
        Ok(u16::from_le_bytes([low, high]) & MAX)
    }

    pub fn release(self) -> (R, P) {
        (self.regs, self.poll)
    }
}

impl<R: RegisterIo, P: Poll> AnalogInput for Adc<R, P> {
    type Error = P::Error;

    const MAX: u16 = MAX;

    fn sample(&mut self, channel: u8) -> Result<u16, Self::Error> {
        Adc::sample(self, channel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiltpad_hal::adc::{AdcPrescaler, AdcReference};
    use tiltpad_hal::{Bounded, Spin, Stalled};
    use tiltpad_hal_atmega168::sim::SimBoard;

    #[test]
    fn test_init_avcc_div128() {
        let mut board = SimBoard::new();
        Adc::new(&mut board, Spin).init(&AdcConfig::default());

        assert_eq!(board.peek(ADMUX) & REFS_MASK, 0b01 << REFS0);
        assert_eq!(board.peek(ADCSRA), (1 << ADEN) | 0b111);
    }

    #[test]
    fn test_init_keeps_channel_bits() {
        let mut board = SimBoard::new();
        board.poke(ADMUX, 0b0000_0101);
        let config = AdcConfig {
            reference: AdcReference::Internal1v1,
            prescaler: AdcPrescaler::Div64,
        };
        Adc::new(&mut board, Spin).init(&config);

        assert_eq!(board.peek(ADMUX), 0b1100_0101);
        assert_eq!(board.peek(ADCSRA), (1 << ADEN) | 0b110);
    }

    #[test]
    fn test_init_clears_left_adjust() {
        let mut board = SimBoard::new();
        board.poke(ADMUX, 1 << ADLAR);
        Adc::new(&mut board, Spin).init(&AdcConfig::default());

        assert_eq!(board.peek(ADMUX) & (1 << ADLAR), 0);
    }

    #[test]
    fn test_sample_full_ten_bits() {
        let mut board = SimBoard::new();
        board.set_adc_input(2, 0x3FF);
        board.set_adc_input(5, 0x155);

        let mut adc = Adc::new(&mut board, Spin);
        adc.init(&AdcConfig::default());
        assert_eq!(adc.sample(2), Ok(0x3FF));
        assert_eq!(adc.sample(5), Ok(0x155));
        assert_eq!(board.peek(ADMUX) & MUX_MASK, 5);
        assert_eq!(board.conversions(), 2);
    }

    #[test]
    fn test_channel_wraps_to_three_bits() {
        let mut board = SimBoard::new();
        board.set_adc_input(1, 300);

        let mut adc = Adc::new(&mut board, Spin);
        adc.init(&AdcConfig::default());
        assert_eq!(AnalogInput::sample(&mut adc, 9), Ok(300));
    }

    #[test]
    fn test_disabled_adc_stalls() {
        let mut board = SimBoard::new();
        let result = Adc::new(&mut board, Bounded::new(100)).sample(0);
        assert_eq!(result, Err(Stalled { iterations: 100 }));
    }

    #[test]
    fn test_stuck_conversion_stalls() {
        let mut board = SimBoard::new();
        board.set_adc_stuck(true);

        let mut adc = Adc::new(&mut board, Bounded::new(100));
        adc.init(&AdcConfig::default());
        assert!(adc.sample(0).is_err());
    }
}
