//! Grid sampling: one particle per opaque grid pixel.

use glam::UVec2;

use crate::api::types::{Rgb, Size};
use crate::core::particle::Particle;
use crate::image::pixels::PixelBuffer;

/// Grid points stepping by `gap` over `bounds`, row-major (y outer, x inner).
pub fn grid_points(bounds: Size, gap: u32) -> impl Iterator<Item = UVec2> {
    let step = gap.max(1) as usize;
    (0..bounds.height)
        .step_by(step)
        .flat_map(move |y| (0..bounds.width).step_by(step).map(move |x| UVec2::new(x, y)))
}

/// Build the particle arena for a composed viewport buffer.
///
/// Transparent pixels (alpha 0) produce nothing. The opaque grid points are
/// counted first so the arena is allocated once at its final size.
pub fn sample_particles(pixels: &PixelBuffer, gap: u32) -> Vec<Particle> {
    let bounds = pixels.size();
    let opaque = |p: &UVec2| pixels.get(p.x, p.y).is_some_and(|px| px[3] > 0);

    let count = grid_points(bounds, gap).filter(opaque).count();
    let mut particles = Vec::with_capacity(count);

    for point in grid_points(bounds, gap) {
        if let Some([r, g, b, a]) = pixels.get(point.x, point.y) {
            if a > 0 {
                particles.push(Particle::new(point, Rgb::new(r, g, b), gap as f32));
            }
        }
    }
    particles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_is_row_major() {
        let points: Vec<UVec2> = grid_points(Size::new(5, 3), 2).collect();
        assert_eq!(
            points,
            vec![
                UVec2::new(0, 0),
                UVec2::new(2, 0),
                UVec2::new(4, 0),
                UVec2::new(0, 2),
                UVec2::new(2, 2),
                UVec2::new(4, 2),
            ]
        );
    }

    #[test]
    fn dense_grid_count_rounds_up() {
        let pixels = PixelBuffer::filled(Size::new(100, 50), [1, 2, 3, 255]);
        let particles = sample_particles(&pixels, 3);
        // ceil(100 / 3) * ceil(50 / 3) = 34 * 17
        assert_eq!(particles.len(), 34 * 17);
        assert_eq!(particles.capacity(), particles.len());
    }

    #[test]
    fn transparent_pixels_are_skipped() {
        let mut pixels = PixelBuffer::new(Size::new(10, 10));
        pixels.set(4, 2, [9, 8, 7, 1]);
        pixels.set(5, 2, [9, 8, 7, 255]);
        let particles = sample_particles(&pixels, 1);
        assert_eq!(particles.len(), 2);
        assert_eq!(particles[0].origin(), UVec2::new(4, 2));
        assert_eq!(particles[0].color(), Rgb::new(9, 8, 7));
    }

    #[test]
    fn particle_size_is_the_gap() {
        let pixels = PixelBuffer::filled(Size::new(10, 10), [0, 0, 0, 255]);
        let particles = sample_particles(&pixels, 4);
        assert!(particles.iter().all(|p| p.size() == 4.0));
    }
}
