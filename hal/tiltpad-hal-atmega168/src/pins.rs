//! Board pin assignments
//!
//! The LCD sits on port B; the accelerometer's duty-cycle outputs are
//! wired to port D.

use tiltpad_hal::Pin;

use crate::registers::{DDRB, DDRD, PINB, PIND, PORTB, PORTD};

/// Pin `bit` of port B
pub const fn port_b(bit: u8) -> Pin {
    Pin::new(DDRB, PORTB, PINB, bit)
}

/// Pin `bit` of port D
pub const fn port_d(bit: u8) -> Pin {
    Pin::new(DDRD, PORTD, PIND, bit)
}

/// LCD serial clock
pub const LCD_SCK: Pin = port_b(1);
/// LCD chip select (active low)
pub const LCD_CS: Pin = port_b(2);
/// LCD serial data
pub const LCD_DIO: Pin = port_b(3);
/// LCD reset (active low)
pub const LCD_RESET: Pin = port_b(4);

/// Accelerometer X-axis duty-cycle output
pub const ACCEL_X: Pin = port_d(2);
/// Accelerometer Y-axis duty-cycle output
pub const ACCEL_Y: Pin = port_d(3);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lcd_pins_share_port_b() {
        for pin in [LCD_SCK, LCD_CS, LCD_DIO, LCD_RESET] {
            assert_eq!(pin.output, PORTB);
            assert_eq!(pin.direction, DDRB);
        }
        assert_eq!(LCD_SCK.bit, 1);
        assert_eq!(LCD_RESET.bit, 4);
    }

    #[test]
    fn test_accelerometer_reads_port_d() {
        assert_eq!(ACCEL_X.input, PIND);
        assert_eq!(ACCEL_Y.input, PIND);
        assert_ne!(ACCEL_X.bit, ACCEL_Y.bit);
    }
}
