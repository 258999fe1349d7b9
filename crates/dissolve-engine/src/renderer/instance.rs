use bytemuck::{Pod, Zeroable};

use crate::api::types::Rgb;
use crate::renderer::surface::DrawSurface;

/// Per-particle render data, read straight out of wasm memory by JS-side renderers.
/// 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct ParticleInstance {
    /// Top-left X in viewport pixels.
    pub x: f32,
    /// Top-left Y in viewport pixels.
    pub y: f32,
    /// Edge length of the square.
    pub size: f32,
    /// Colour channels, 0.0-1.0.
    pub r: f32,
    pub g: f32,
    pub b: f32,
    /// Opacity. Particles are always opaque; kept for the renderer's blend state.
    pub alpha: f32,
    pub _pad: f32,
}

impl ParticleInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn color(&self) -> Rgb {
        Rgb::from_unit(self.r, self.g, self.b)
    }
}

/// Flat list of squares drawn this frame, in draw order.
pub struct RenderBuffer {
    pub instances: Vec<ParticleInstance>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(4096)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, instance: ParticleInstance) {
        self.instances.push(instance);
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParticleInstance> {
        self.instances.iter()
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// The instances as raw floats.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }

    /// Raw pointer to instance data for reads from JS.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawSurface for RenderBuffer {
    fn clear(&mut self) {
        self.instances.clear();
    }

    /// Squares only: a non-square rect keeps its width as the size.
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, _height: f32, color: Rgb) {
        let [r, g, b] = color.to_unit();
        self.push(ParticleInstance {
            x,
            y,
            size: width,
            r,
            g,
            b,
            alpha: 1.0,
            _pad: 0.0,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn particle_instance_is_8_floats() {
        assert_eq!(std::mem::size_of::<ParticleInstance>(), 32);
        assert_eq!(ParticleInstance::STRIDE_BYTES, 32);
    }

    #[test]
    fn fill_rect_records_instances_in_order() {
        let mut buf = RenderBuffer::new();
        buf.fill_rect(1.0, 2.0, 3.0, 3.0, Rgb::new(255, 0, 0));
        buf.fill_rect(4.0, 5.0, 3.0, 3.0, Rgb::new(0, 0, 255));
        assert_eq!(buf.instance_count(), 2);
        assert_eq!(buf.instances[0].x, 1.0);
        assert_eq!(buf.instances[0].color(), Rgb::new(255, 0, 0));
        assert_eq!(buf.instances[1].color(), Rgb::new(0, 0, 255));
        assert_eq!(buf.as_floats().len(), 16);
        assert_eq!(buf.as_floats()[2], 3.0);
    }

    #[test]
    fn clear_empties_the_frame() {
        let mut buf = RenderBuffer::new();
        buf.fill_rect(0.0, 0.0, 1.0, 1.0, Rgb::default());
        buf.clear();
        assert_eq!(buf.instance_count(), 0);
    }
}
