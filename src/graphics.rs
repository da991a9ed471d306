//! Graphics support via embedded-graphics
//!
//! Implements [`DrawTarget`] for [`Display`], so the drawing primitives
//! (fills, lines, rectangles, text) come from the embedded-graphics
//! ecosystem and operate on the driver's framebuffer in memory. Nothing is
//! sent to the panel until [`Display::show`](crate::Display::show).

use core::convert::Infallible;

use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Size},
    pixelcolor::BinaryColor,
    Pixel,
};

use crate::display::Display;
use crate::interface::DisplayInterface;

impl<I> OriginDimensions for Display<I>
where
    I: DisplayInterface,
{
    fn size(&self) -> Size {
        let dims = self.dimensions();
        Size::new(dims.width as u32, dims.height as u32)
    }
}

impl<I> DrawTarget for Display<I>
where
    I: DisplayInterface,
{
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<P>(&mut self, pixels: P) -> Result<(), Self::Error>
    where
        P: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let dims = self.dimensions();
        for Pixel(point, color) in pixels {
            // Bounds-check before narrowing; a plain `as u16` cast wraps
            // coordinates past u16::MAX back onto the panel.
            if point.x >= 0
                && point.y >= 0
                && (point.x as u32) < u32::from(dims.width)
                && (point.y as u32) < u32::from(dims.height)
            {
                self.set_pixel(point.x as u16, point.y as u16, color == BinaryColor::On);
            }
        }
        Ok(())
    }
}
