//! Status LED

use embedded_hal::delay::DelayNs;
use tiltpad_hal::{GpioExt, Pin, PinMode, RegisterIo};

/// Flash `pin` high then low `times` times, `period_ms` per phase
///
/// The pin is configured as an output first and left low.
pub fn blink<R: RegisterIo, D: DelayNs>(
    regs: &mut R,
    pin: Pin,
    times: u8,
    delay: &mut D,
    period_ms: u32,
) {
    regs.configure_direction(pin, PinMode::Output);
    for _ in 0..times {
        regs.set_high(pin);
        delay.delay_ms(period_ms);
        regs.set_low(pin);
        delay.delay_ms(period_ms);
    }
}
