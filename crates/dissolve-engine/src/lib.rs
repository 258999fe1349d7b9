pub mod api;
pub mod core;
pub mod error;
pub mod image;
pub mod input;
pub mod renderer;

// Re-export key types at crate root for convenience
pub use api::config::{EffectConfig, Motion};
pub use api::types::{Rgb, Size};
pub use crate::core::effect::Effect;
pub use crate::core::particle::{Particle, MIN_FORCE_DISTANCE_SQ};
pub use crate::core::pointer::PointerState;
pub use crate::core::rng::Rng;
pub use error::DissolveError;
pub use image::pixels::{ImageSource, PixelBuffer, RGBA_BYTES};
pub use image::placement::ImagePlacement;
pub use image::sampling::{grid_points, sample_particles};
pub use input::event::InputEvent;
pub use renderer::instance::{ParticleInstance, RenderBuffer};
pub use renderer::surface::DrawSurface;
