//! Bit-banged 9-bit serial bus
//!
//! The S1D15G10 takes 9-bit words over a 3-wire interface: chip select,
//! clock and data. Bit 8 of each word tells the controller whether the
//! low byte is a command or a parameter. The AVR's SPI block only shifts
//! whole bytes, so every bit is driven by hand.
//!
//! Each word is its own chip-select transaction. The clock idles high;
//! the controller latches the data line on the rising edge.

use tiltpad_hal::{GpioExt, Pin, RegisterIo};
use tiltpad_hal_atmega168::pins::{LCD_CS, LCD_DIO, LCD_SCK};
use tiltpad_protocol::SerialFrame;

/// Pins of the 3-wire bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusPins {
    /// Serial clock
    pub clock: Pin,
    /// Serial data
    pub data: Pin,
    /// Chip select (active low)
    pub select: Pin,
}

impl Default for BusPins {
    fn default() -> Self {
        Self {
            clock: LCD_SCK,
            data: LCD_DIO,
            select: LCD_CS,
        }
    }
}

/// 9-bit serial bus master
pub struct SerialBus<R> {
    regs: R,
    pins: BusPins,
}

impl<R: RegisterIo> SerialBus<R> {
    /// Create a bus on `pins`
    ///
    /// The pins are not reconfigured; the display's init sequence owns
    /// their direction and idle levels.
    pub fn new(regs: R, pins: BusPins) -> Self {
        Self { regs, pins }
    }

    /// Shift one frame out, MSB first, inside its own transaction
    pub fn transmit_frame(&mut self, frame: SerialFrame) {
        self.regs.set_low(self.pins.select);
        for level in frame.bits() {
            self.regs.set_state(self.pins.data, level);
            self.pulse_clock();
        }
        self.regs.set_high(self.pins.select);
    }

    /// Send a command opcode
    pub fn send_command(&mut self, opcode: u8) {
        self.transmit_frame(SerialFrame::command(opcode));
    }

    /// Send a parameter or pixel byte
    pub fn send_data(&mut self, byte: u8) {
        self.transmit_frame(SerialFrame::data(byte));
    }

    /// Send several parameter bytes
    pub fn send_data_all(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.send_data(byte);
        }
    }

    fn pulse_clock(&mut self) {
        self.regs.set_low(self.pins.clock);
        self.regs.set_high(self.pins.clock);
    }

    pub fn pins(&self) -> BusPins {
        self.pins
    }

    /// Register file the bus drives, for control lines outside the bus
    pub fn regs_mut(&mut self) -> &mut R {
        &mut self.regs
    }

    /// Give back the register file
    pub fn release(self) -> R {
        self.regs
    }
}
