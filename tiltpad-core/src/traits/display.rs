//! Drawing surface trait

use crate::color::Color;
use crate::geometry::Rectangle;

/// Something filled rectangles can be drawn on
pub trait Canvas {
    /// Error type for drawing operations
    type Error;

    /// Fill `rect` with its colour
    fn fill_rectangle(&mut self, rect: &Rectangle) -> Result<(), Self::Error>;

    /// Fill the whole surface with black
    fn clear_screen(&mut self) -> Result<(), Self::Error> {
        self.fill_rectangle(&Rectangle::full_screen(Color::BLACK))
    }

    /// Erase `from` to black, then draw `to`
    ///
    /// The building block for sprite movement: the old footprint is
    /// cleared before the new one is painted.
    fn move_rectangle(&mut self, from: &Rectangle, to: &Rectangle) -> Result<(), Self::Error> {
        self.fill_rectangle(&from.with_color(Color::BLACK))?;
        self.fill_rectangle(to)
    }
}
