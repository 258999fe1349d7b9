//! Drawing surface contract.
//!
//! The simulation only ever paints axis-aligned filled squares, so this is all
//! a backend has to provide. Implemented by [`RenderBuffer`](super::instance::RenderBuffer)
//! (instance list for a GPU or canvas presenter) and by
//! [`PixelBuffer`](crate::image::pixels::PixelBuffer) (CPU raster).

use crate::api::types::Rgb;

pub trait DrawSurface {
    /// Erase everything drawn since the last clear.
    fn clear(&mut self);

    /// Paint an opaque rectangle with its top-left corner at `(x, y)`.
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgb);
}
