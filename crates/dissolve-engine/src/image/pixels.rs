//! Owned RGBA8 pixel buffers and the image-source contract.

use crate::api::types::Size;
use crate::error::DissolveError;
use crate::image::placement::ImagePlacement;

/// Bytes per pixel (R, G, B, A).
pub const RGBA_BYTES: usize = 4;

/// A decoded image that can be read pixel by pixel.
pub trait ImageSource {
    fn size(&self) -> Size;

    /// RGBA at `(x, y)`. Callers only ask for coordinates inside `size()`.
    fn rgba(&self, x: u32, y: u32) -> [u8; 4];
}

/// Row-major RGBA8 buffer, 4 bytes per pixel, the same layout a canvas
/// `ImageData` read-back produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    size: Size,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Fully transparent buffer.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            data: vec![0; size.area() * RGBA_BYTES],
        }
    }

    /// Buffer with every pixel set to `rgba`.
    pub fn filled(size: Size, rgba: [u8; 4]) -> Self {
        let data = rgba.repeat(size.area());
        Self { size, data }
    }

    /// Wrap raw RGBA bytes, e.g. from `getImageData`.
    pub fn from_rgba(size: Size, data: Vec<u8>) -> Result<Self, DissolveError> {
        let expected = size.area() * RGBA_BYTES;
        if data.len() != expected {
            return Err(DissolveError::BufferLength {
                size,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { size, data })
    }

    /// Draw `image` at `placement` onto a transparent `viewport`-sized buffer.
    ///
    /// Nearest-neighbour scaling. Anything falling outside the viewport is
    /// clipped, so negative offsets and oversized images are safe.
    pub fn compose<I: ImageSource + ?Sized>(
        image: &I,
        placement: &ImagePlacement,
        viewport: Size,
    ) -> Self {
        let mut out = Self::new(viewport);
        let source = image.size();
        if source.is_empty() || placement.size.x <= 0.0 || placement.size.y <= 0.0 {
            return out;
        }

        let start = placement.offset.max(glam::Vec2::ZERO).floor();
        let end = (placement.offset + placement.size).ceil();
        let x_end = (end.x.max(0.0) as u32).min(viewport.width);
        let y_end = (end.y.max(0.0) as u32).min(viewport.height);

        for y in start.y as u32..y_end {
            for x in start.x as u32..x_end {
                if !placement.covers(x, y) {
                    continue;
                }
                let u = (x as f32 + 0.5 - placement.offset.x) / placement.size.x;
                let v = (y as f32 + 0.5 - placement.offset.y) / placement.size.y;
                let sx = ((u * source.width as f32) as u32).min(source.width - 1);
                let sy = ((v * source.height as f32) as u32).min(source.height - 1);
                out.set(x, y, image.rgba(sx, sy));
            }
        }
        out
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// RGBA at `(x, y)`, or `None` outside the buffer.
    pub fn get(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let idx = self.index(x, y)?;
        let px = &self.data[idx..idx + RGBA_BYTES];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Write one pixel. Writes outside the buffer are dropped.
    pub fn set(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        if let Some(idx) = self.index(x, y) {
            self.data[idx..idx + RGBA_BYTES].copy_from_slice(&rgba);
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if !self.size.contains(x, y) {
            return None;
        }
        Some((y as usize * self.size.width as usize + x as usize) * RGBA_BYTES)
    }
}

impl ImageSource for PixelBuffer {
    fn size(&self) -> Size {
        self.size
    }

    fn rgba(&self, x: u32, y: u32) -> [u8; 4] {
        self.get(x, y).unwrap_or([0; 4])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: [u8; 4] = [255, 0, 0, 255];

    #[test]
    fn from_rgba_checks_length() {
        let err = PixelBuffer::from_rgba(Size::new(2, 2), vec![0; 15]).unwrap_err();
        assert!(matches!(
            err,
            DissolveError::BufferLength { expected: 16, actual: 15, .. }
        ));
        assert!(PixelBuffer::from_rgba(Size::new(2, 2), vec![0; 16]).is_ok());
    }

    #[test]
    fn layout_is_row_major() {
        let mut data = vec![0; 3 * 2 * 4];
        // (x=1, y=1) -> index (1 * 3 + 1) * 4
        data[16..20].copy_from_slice(&[1, 2, 3, 4]);
        let buf = PixelBuffer::from_rgba(Size::new(3, 2), data).unwrap();
        assert_eq!(buf.get(1, 1), Some([1, 2, 3, 4]));
        assert_eq!(buf.get(3, 0), None);
        assert_eq!(buf.get(0, 2), None);
    }

    #[test]
    fn compose_fills_viewport_when_scaled_to_fit() {
        let image = PixelBuffer::filled(Size::new(125, 125), RED);
        let viewport = Size::new(100, 100);
        let placement = ImagePlacement::centered(viewport, image.size(), 0.8);
        let out = PixelBuffer::compose(&image, &placement, viewport);
        assert_eq!(out.get(0, 0), Some(RED));
        assert_eq!(out.get(99, 99), Some(RED));
        assert!(out.as_bytes().chunks(4).all(|px| px[3] == 255));
    }

    #[test]
    fn compose_leaves_margins_transparent() {
        let image = PixelBuffer::filled(Size::new(100, 100), RED);
        let viewport = Size::new(100, 100);
        let placement = ImagePlacement::centered(viewport, image.size(), 0.8);
        let out = PixelBuffer::compose(&image, &placement, viewport);
        assert_eq!(out.get(9, 50).map(|px| px[3]), Some(0));
        assert_eq!(out.get(10, 50), Some(RED));
        assert_eq!(out.get(89, 89), Some(RED));
        assert_eq!(out.get(90, 50).map(|px| px[3]), Some(0));
    }

    #[test]
    fn compose_clips_oversized_image() {
        let mut image = PixelBuffer::new(Size::new(500, 500));
        // Mark the image centre; it must land on the viewport centre.
        image.set(250, 250, [0, 255, 0, 255]);
        let viewport = Size::new(40, 40);
        let placement = ImagePlacement::centered(viewport, image.size(), 0.8);
        let out = PixelBuffer::compose(&image, &placement, viewport);
        assert_eq!(out.size(), viewport);
        let marked = out
            .as_bytes()
            .chunks(4)
            .filter(|px| *px == [0, 255, 0, 255])
            .count();
        assert_eq!(marked, 1, "nearest-neighbour downscale hit {} pixels", marked);
        assert_eq!(out.get(20, 20), Some([0, 255, 0, 255]));
    }

    #[test]
    fn compose_of_empty_image_is_transparent() {
        let image = PixelBuffer::new(Size::new(0, 0));
        let viewport = Size::new(8, 8);
        let placement = ImagePlacement::centered(viewport, image.size(), 0.8);
        let out = PixelBuffer::compose(&image, &placement, viewport);
        assert!(out.as_bytes().iter().all(|b| *b == 0));
    }
}
