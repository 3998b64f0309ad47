//! GPIO pin abstractions
//!
//! An AVR port is three registers: DDRx (direction), PORTx (output latch)
//! and PINx (input sampling). A [`Pin`] names one bit across all three.

use crate::register::{Register, RegisterIo};

/// Pin direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    /// DDR bit cleared
    Input,
    /// DDR bit set
    Output,
}

/// One bit of a GPIO port
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pin {
    /// Direction register (DDRx)
    pub direction: Register,
    /// Output latch register (PORTx)
    pub output: Register,
    /// Input register (PINx)
    pub input: Register,
    /// Bit index within the port (0-7)
    pub bit: u8,
}

impl Pin {
    /// Create a pin from its port registers and bit index
    pub const fn new(direction: Register, output: Register, input: Register, bit: u8) -> Self {
        Self {
            direction,
            output,
            input,
            bit,
        }
    }
}

/// Pin-level operations on any register file
///
/// Blanket-implemented for every [`RegisterIo`], so drivers can say
/// `regs.set_high(pin)` without caring which backend they run on.
pub trait GpioExt: RegisterIo {
    /// Set the pin's direction
    fn configure_direction(&mut self, pin: Pin, mode: PinMode) {
        match mode {
            PinMode::Output => self.set_bit(pin.direction, pin.bit),
            PinMode::Input => self.clear_bit(pin.direction, pin.bit),
        }
    }

    /// Drive the pin high (logic 1)
    fn set_high(&mut self, pin: Pin) {
        self.set_bit(pin.output, pin.bit);
    }

    /// Drive the pin low (logic 0)
    fn set_low(&mut self, pin: Pin) {
        self.clear_bit(pin.output, pin.bit);
    }

    /// Drive the pin to a specific state
    fn set_state(&mut self, pin: Pin, high: bool) {
        if high {
            self.set_high(pin);
        } else {
            self.set_low(pin);
        }
    }

    /// Check if the pin reads high
    fn is_high(&mut self, pin: Pin) -> bool {
        self.test_bit(pin.input, pin.bit)
    }

    /// Check if the pin reads low
    fn is_low(&mut self, pin: Pin) -> bool {
        !self.is_high(pin)
    }
}

impl<T: RegisterIo + ?Sized> GpioExt for T {}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockPort {
        mem: [u8; 0x30],
    }

    impl RegisterIo for MockPort {
        fn read(&mut self, reg: Register) -> u8 {
            self.mem[reg.address() as usize]
        }

        fn write(&mut self, reg: Register, value: u8) {
            self.mem[reg.address() as usize] = value;
        }
    }

    const PB4: Pin = Pin::new(Register::at(0x24), Register::at(0x25), Register::at(0x23), 4);

    #[test]
    fn test_configure_direction() {
        let mut port = MockPort { mem: [0; 0x30] };

        port.configure_direction(PB4, PinMode::Output);
        assert_eq!(port.mem[0x24], 0x10);

        port.configure_direction(PB4, PinMode::Input);
        assert_eq!(port.mem[0x24], 0x00);
    }

    #[test]
    fn test_output_level_hits_port_register() {
        let mut port = MockPort { mem: [0; 0x30] };

        port.set_high(PB4);
        assert_eq!(port.mem[0x25], 0x10);
        // Direction and input registers untouched
        assert_eq!(port.mem[0x24], 0x00);
        assert_eq!(port.mem[0x23], 0x00);

        port.set_state(PB4, false);
        assert_eq!(port.mem[0x25], 0x00);
    }

    #[test]
    fn test_input_level_reads_pin_register() {
        let mut port = MockPort { mem: [0; 0x30] };
        assert!(port.is_low(PB4));

        port.mem[0x23] = 0x10;
        assert!(port.is_high(PB4));
    }
}
