//! Epson S1D15G10 colour LCD driver
//!
//! 131x131 pixels, 12 bits per pixel, written over the 9-bit serial
//! bus. There is no frame buffer; every draw goes straight to the
//! controller's RAM through a PASET/CASET window followed by RAMWR.

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use tiltpad_core::config::DisplayConfig;
use tiltpad_core::traits::Canvas;
use tiltpad_core::{Color, GeometryError, Rectangle};
use tiltpad_hal::{GpioExt, Pin, PinMode, RegisterIo};
use tiltpad_hal_atmega168::pins::LCD_RESET;
use tiltpad_protocol::{init_sequence, op, pack_pair};

use crate::serial::{BusPins, SerialBus};

/// LCD control pins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayPins {
    pub bus: BusPins,
    /// Hardware reset (active low)
    pub reset: Pin,
}

impl Default for DisplayPins {
    fn default() -> Self {
        Self {
            bus: BusPins::default(),
            reset: LCD_RESET,
        }
    }
}

/// S1D15G10 driver
pub struct Display<R> {
    bus: SerialBus<R>,
    reset: Pin,
    config: DisplayConfig,
}

impl<R: RegisterIo> Display<R> {
    /// Create a driver; call [`init`](Self::init) before drawing
    pub fn new(regs: R, pins: DisplayPins, config: DisplayConfig) -> Self {
        Self {
            bus: SerialBus::new(regs, pins.bus),
            reset: pins.reset,
            config,
        }
    }

    /// Reset the controller and bring it up in 12-bit colour mode
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) {
        let pins = self.bus.pins();
        let reset = self.reset;
        let settle_ms = self.config.settle_ms;
        let reset_ms = self.config.reset_ms;

        let regs = self.bus.regs_mut();
        for pin in [pins.clock, pins.data, pins.select, reset] {
            regs.configure_direction(pin, PinMode::Output);
        }
        regs.set_low(pins.clock);
        regs.set_low(pins.data);

        delay.delay_ms(settle_ms);
        regs.set_high(pins.select);
        delay.delay_ms(settle_ms);

        regs.set_low(reset);
        delay.delay_ms(reset_ms);
        regs.set_high(reset);
        delay.delay_ms(reset_ms);

        // Bus idle
        regs.set_high(pins.clock);
        regs.set_high(pins.data);

        for step in init_sequence(self.config.contrast) {
            self.bus.send_command(step.command);
            self.bus.send_data_all(&step.params);
        }

        info!(
            "display initialized (volume {=u8})",
            self.config.contrast.volume
        );
    }

    /// Fill a rectangle with its colour
    ///
    /// The row window is sent as `y..=y+h+1` and the column window as
    /// `x..=x+w-1`, and `w*h/2` pixel pairs follow, so an odd area
    /// leaves the last pixel unwritten.
    pub fn fill_rectangle(&mut self, rect: &Rectangle) {
        let (row_start, row_end) = rect.row_window();
        let (column_start, column_end) = rect.column_window();

        self.bus.send_command(op::PASET);
        self.bus.send_data(row_start);
        self.bus.send_data(row_end);

        self.bus.send_command(op::CASET);
        self.bus.send_data(column_start);
        self.bus.send_data(column_end);

        self.bus.send_command(op::RAMWR);
        let color = rect.color().raw();
        let packed = pack_pair(color, color);
        for _ in 0..rect.pixel_pairs() {
            self.bus.send_data_all(&packed);
        }

        trace!(
            "fill {=u8},{=u8} {=u8}x{=u8}",
            rect.x(),
            rect.y(),
            rect.width(),
            rect.height()
        );
    }

    /// Validate and fill a rectangle given by its parts
    pub fn fill(
        &mut self,
        x: u8,
        y: u8,
        width: u8,
        height: u8,
        color: Color,
    ) -> Result<(), GeometryError> {
        let rect = Rectangle::new(x, y, width, height, color)?;
        self.fill_rectangle(&rect);
        Ok(())
    }

    /// Fill the whole screen with black
    pub fn clear_screen(&mut self) {
        self.fill_rectangle(&Rectangle::full_screen(Color::BLACK));
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Give back the register file
    pub fn release(self) -> R {
        self.bus.release()
    }
}

impl<R: RegisterIo> Canvas for Display<R> {
    type Error = Infallible;

    fn fill_rectangle(&mut self, rect: &Rectangle) -> Result<(), Infallible> {
        Display::fill_rectangle(self, rect);
        Ok(())
    }

    fn clear_screen(&mut self) -> Result<(), Infallible> {
        Display::clear_screen(self);
        Ok(())
    }
}
