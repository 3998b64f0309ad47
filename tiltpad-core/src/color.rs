//! 12-bit RGB colour

use tiltpad_protocol::pixel::COLOR_MASK;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Packed 4-4-4 RGB colour in the low 12 bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color(u16);

impl Color {
    pub const BLACK: Color = Color(0x000);
    pub const WHITE: Color = Color(0xFFF);
    pub const RED: Color = Color(0xF00);
    pub const GREEN: Color = Color(0x0F0);
    pub const BLUE: Color = Color(0x00F);

    /// Colour from a packed value; bits above bit 11 are discarded
    pub const fn new(raw: u16) -> Self {
        Self(raw & COLOR_MASK)
    }

    /// Colour from 4-bit channels (each masked to 0-15)
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self(((red as u16 & 0x0F) << 8) | ((green as u16 & 0x0F) << 4) | (blue as u16 & 0x0F))
    }

    /// Packed 12-bit value
    pub const fn raw(self) -> u16 {
        self.0
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 8) as u8 & 0x0F
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 4) as u8 & 0x0F
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8 & 0x0F
    }
}

impl From<u16> for Color {
    fn from(raw: u16) -> Self {
        Color::new(raw)
    }
}
