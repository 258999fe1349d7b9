//! CPU rasteriser: lets a [`PixelBuffer`] act as a drawing surface.

use crate::api::types::Rgb;
use crate::image::pixels::{PixelBuffer, RGBA_BYTES};
use crate::renderer::surface::DrawSurface;

impl DrawSurface for PixelBuffer {
    fn clear(&mut self) {
        self.bytes_mut().fill(0);
    }

    /// Covers every pixel whose centre lies inside the rect, clipped to the buffer.
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgb) {
        if !(x.is_finite() && y.is_finite() && width > 0.0 && height > 0.0) {
            return;
        }
        let size = self.size();
        let span = |start: f32, len: f32, limit: u32| {
            let lo = (start - 0.5).ceil().max(0.0);
            let hi = (start + len - 0.5).ceil().clamp(0.0, limit as f32);
            (lo as u32, hi as u32)
        };
        let (x0, x1) = span(x, width, size.width);
        let (y0, y1) = span(y, height, size.height);
        if x0 >= x1 {
            return;
        }

        let rgba = [color.r, color.g, color.b, 255];
        let row_bytes = size.width as usize * RGBA_BYTES;
        let data = self.bytes_mut();
        for row in y0..y1 {
            let start = row as usize * row_bytes + x0 as usize * RGBA_BYTES;
            let end = row as usize * row_bytes + x1 as usize * RGBA_BYTES;
            for px in data[start..end].chunks_exact_mut(RGBA_BYTES) {
                px.copy_from_slice(&rgba);
            }
        }
    }
}
