pub mod pixels;
pub mod placement;
pub mod sampling;
