//! Screen geometry and rectangle addressing
//!
//! The S1D15G10 panel exposes a 131x131 addressable area. Drawing is done
//! by opening a row/column window and streaming packed pixels into it.

use crate::color::Color;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Addressable columns
pub const SCREEN_WIDTH: u8 = 131;

/// Addressable rows
pub const SCREEN_HEIGHT: u8 = 131;

/// Rejected rectangle parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GeometryError {
    /// Origin lies outside the screen
    OriginOutOfBounds { x: u8, y: u8 },
    /// Width or height is zero
    EmptyExtent,
    /// Width or height exceeds the screen
    ExtentTooLarge { width: u8, height: u8 },
}

/// Filled rectangle to rasterize
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rectangle {
    x: u8,
    y: u8,
    width: u8,
    height: u8,
    color: Color,
}

impl Rectangle {
    /// Create a rectangle
    ///
    /// The origin must lie on screen and both extents must be in
    /// `1..=131`. The far edge is not checked against the screen; the
    /// controller clips what falls outside.
    pub const fn new(
        x: u8,
        y: u8,
        width: u8,
        height: u8,
        color: Color,
    ) -> Result<Self, GeometryError> {
        if x >= SCREEN_WIDTH || y >= SCREEN_HEIGHT {
            return Err(GeometryError::OriginOutOfBounds { x, y });
        }
        if width == 0 || height == 0 {
            return Err(GeometryError::EmptyExtent);
        }
        if width > SCREEN_WIDTH || height > SCREEN_HEIGHT {
            return Err(GeometryError::ExtentTooLarge { width, height });
        }
        Ok(Self {
            x,
            y,
            width,
            height,
            color,
        })
    }

    /// The whole screen in one colour
    pub const fn full_screen(color: Color) -> Self {
        Self {
            x: 0,
            y: 0,
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            color,
        }
    }

    pub const fn x(&self) -> u8 {
        self.x
    }

    pub const fn y(&self) -> u8 {
        self.y
    }

    pub const fn width(&self) -> u8 {
        self.width
    }

    pub const fn height(&self) -> u8 {
        self.height
    }

    pub const fn color(&self) -> Color {
        self.color
    }

    /// Same rectangle in a different colour
    pub const fn with_color(self, color: Color) -> Self {
        Self { color, ..self }
    }

    /// Number of cells covered
    pub const fn area(&self) -> u16 {
        self.width as u16 * self.height as u16
    }

    /// Number of two-pixel groups streamed by a fill
    ///
    /// An odd area rounds down, so the last cell of an odd-sized
    /// rectangle is never written.
    pub const fn pixel_pairs(&self) -> u16 {
        self.area() / 2
    }

    /// Page address window `(start, end)` sent with `PASET`
    ///
    /// The end row is `y + height + 1`, two rows past the rectangle's
    /// last row. Unlike the column window this is not `- 1`; the fill
    /// stops after `pixel_pairs()` groups so the extra rows stay untouched.
    /// Values are reduced to the 8-bit frame payload.
    pub const fn row_window(&self) -> (u8, u8) {
        let end = self.y as u16 + self.height as u16 + 1;
        (self.y, end as u8)
    }

    /// Column address window `(start, end)` sent with `CASET`
    ///
    /// The end column is the rectangle's last column, `x + width - 1`,
    /// reduced to the 8-bit frame payload.
    pub const fn column_window(&self) -> (u8, u8) {
        let end = self.x as u16 + self.width as u16 - 1;
        (self.x, end as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rejects_offscreen_origin() {
        assert_eq!(
            Rectangle::new(131, 0, 1, 1, Color::WHITE),
            Err(GeometryError::OriginOutOfBounds { x: 131, y: 0 })
        );
        assert!(Rectangle::new(0, 200, 1, 1, Color::WHITE).is_err());
    }

    #[test]
    fn test_rejects_empty_and_oversized() {
        assert_eq!(
            Rectangle::new(0, 0, 0, 5, Color::WHITE),
            Err(GeometryError::EmptyExtent)
        );
        assert_eq!(
            Rectangle::new(0, 0, 132, 5, Color::WHITE),
            Err(GeometryError::ExtentTooLarge {
                width: 132,
                height: 5
            })
        );
    }

    #[test]
    fn test_far_edge_not_clipped() {
        // A ball drifting off the right edge is still a valid rectangle
        let r = Rectangle::new(125, 0, 10, 10, Color::WHITE).unwrap();
        assert_eq!(r.column_window(), (125, 134));
    }

    #[test]
    fn test_windows_keep_asymmetry() {
        let r = Rectangle::new(0, 0, 10, 10, Color::WHITE).unwrap();
        assert_eq!(r.row_window(), (0, 11));
        assert_eq!(r.column_window(), (0, 9));

        let r = Rectangle::new(20, 30, 5, 7, Color::BLACK).unwrap();
        assert_eq!(r.row_window(), (30, 38));
        assert_eq!(r.column_window(), (20, 24));
    }

    #[test]
    fn test_row_window_wraps_to_payload() {
        let r = Rectangle::new(0, 130, 131, 131, Color::BLACK).unwrap();
        // 130 + 131 + 1 = 262 = 0x106
        assert_eq!(r.row_window(), (130, 0x06));
    }

    #[test]
    fn test_odd_area_drops_last_cell() {
        let r = Rectangle::new(0, 0, 3, 3, Color::WHITE).unwrap();
        assert_eq!(r.area(), 9);
        assert_eq!(r.pixel_pairs(), 4);

        assert_eq!(Rectangle::full_screen(Color::BLACK).pixel_pairs(), 8580);
    }

    proptest! {
        #[test]
        fn prop_valid_extents_accepted(w in 1u8..=131, h in 1u8..=131) {
            let r = Rectangle::new(0, 0, w, h, Color::WHITE).unwrap();
            prop_assert_eq!(r.pixel_pairs() as u32, (w as u32 * h as u32) / 2);
            prop_assert_eq!(r.column_window().1, w - 1);
        }
    }
}
