use std::fmt;

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Width and height in whole pixels (viewport, image or pixel buffer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of pixels covered.
    pub fn area(self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether `(x, y)` lies inside `[0, width) x [0, height)`.
    pub fn contains(self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// An opaque RGB colour captured from one sampled pixel.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels normalised to 0.0-1.0, the layout GPU-side renderers expect.
    pub fn to_unit(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }

    /// Inverse of [`Rgb::to_unit`]. Out-of-range channels are clamped.
    pub fn from_unit(r: f32, g: f32, b: f32) -> Self {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::new(channel(r), channel(g), channel(b))
    }

    /// CSS colour string for canvas fill styles, e.g. `rgb(255,0,0)`.
    pub fn css(self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_matches_canvas_syntax() {
        assert_eq!(Rgb::new(255, 0, 0).css(), "rgb(255,0,0)");
        assert_eq!(Rgb::new(12, 34, 56).css(), "rgb(12,34,56)");
    }

    #[test]
    fn unit_channels_survive_the_trip() {
        let c = Rgb::new(7, 128, 250);
        let [r, g, b] = c.to_unit();
        assert_eq!(Rgb::from_unit(r, g, b), c);
    }

    #[test]
    fn size_contains_is_half_open() {
        let size = Size::new(10, 5);
        assert!(size.contains(0, 0));
        assert!(size.contains(9, 4));
        assert!(!size.contains(10, 0));
        assert!(!size.contains(0, 5));
        assert_eq!(size.area(), 50);
    }
}
