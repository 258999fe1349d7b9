pub mod instance;
pub mod raster;
pub mod surface;

pub use instance::{ParticleInstance, RenderBuffer};
pub use surface::DrawSurface;
