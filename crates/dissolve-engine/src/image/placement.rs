use glam::Vec2;

use crate::api::types::Size;

/// Where the source image lands inside the viewport: scaled, then centred.
/// The offset goes negative when the scaled image is larger than the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImagePlacement {
    /// Top-left corner of the drawn image, in viewport pixels.
    pub offset: Vec2,
    /// Drawn width and height, in viewport pixels.
    pub size: Vec2,
}

impl ImagePlacement {
    pub fn centered(viewport: Size, image: Size, scale: f32) -> Self {
        let size = Vec2::new(image.width as f32, image.height as f32) * scale;
        let viewport = Vec2::new(viewport.width as f32, viewport.height as f32);
        Self {
            offset: (viewport - size) / 2.0,
            size,
        }
    }

    /// Whether a viewport pixel's centre is covered by the drawn image.
    pub fn covers(&self, x: u32, y: u32) -> bool {
        let local = Vec2::new(x as f32 + 0.5, y as f32 + 0.5) - self.offset;
        local.x >= 0.0 && local.y >= 0.0 && local.x < self.size.x && local.y < self.size.y
    }
}
