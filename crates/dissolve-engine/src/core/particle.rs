//! A single image particle: spring-back to origin plus pointer repulsion.

use glam::{UVec2, Vec2};

use crate::api::config::Motion;
use crate::api::types::{Rgb, Size};
use crate::core::pointer::PointerState;
use crate::core::rng::Rng;
use crate::renderer::surface::DrawSurface;

/// Below one square pixel the pointer sits on the particle itself and the push
/// direction is undefined, so no force is applied that frame.
pub const MIN_FORCE_DISTANCE_SQ: f32 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    position: Vec2,
    origin: UVec2,
    velocity: Vec2,
    color: Rgb,
    size: f32,
}

impl Particle {
    /// A particle at rest on its origin.
    pub fn new(origin: UVec2, color: Rgb, size: f32) -> Self {
        Self {
            position: origin.as_vec2(),
            origin,
            velocity: Vec2::ZERO,
            color,
            size,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn origin(&self) -> UVec2 {
        self.origin
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    /// Distance between the current position and the origin.
    pub fn displacement(&self) -> f32 {
        self.position.distance(self.origin.as_vec2())
    }

    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        surface.fill_rect(
            self.position.x,
            self.position.y,
            self.size,
            self.size,
            self.color,
        );
    }

    /// Advance one logical step.
    ///
    /// Inside the pointer radius the particle is pushed away with magnitude
    /// `radius` divided by the squared distance to the pointer; `radius` is
    /// itself compared against that squared distance. Friction then decays
    /// the velocity and the particle eases a fixed fraction of the way back
    /// to its origin.
    pub fn update(&mut self, pointer: &PointerState, motion: &Motion) {
        if let Some(target) = pointer.position() {
            let offset = target - self.position;
            let distance = offset.length_squared();
            if distance < pointer.radius() && distance >= MIN_FORCE_DISTANCE_SQ {
                let force = -pointer.radius() / distance;
                let angle = offset.y.atan2(offset.x);
                self.velocity += Vec2::new(angle.cos(), angle.sin()) * force;
            }
        }

        self.velocity *= motion.friction;
        self.position += self.velocity + (self.origin.as_vec2() - self.position) * motion.ease;
    }

    /// Jump to a uniformly random whole-pixel position inside `bounds`.
    pub fn warp(&mut self, bounds: Size, rng: &mut Rng) {
        self.position = rng.pixel_in(bounds).as_vec2();
    }
}
