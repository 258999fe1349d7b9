//! The effect: owns every particle, the pointer cell and the image placement.

use crate::api::config::{EffectConfig, Motion};
use crate::api::types::Size;
use crate::core::particle::Particle;
use crate::core::pointer::PointerState;
use crate::core::rng::Rng;
use crate::error::DissolveError;
use crate::image::pixels::{ImageSource, PixelBuffer};
use crate::image::placement::ImagePlacement;
use crate::image::sampling::sample_particles;
use crate::renderer::surface::DrawSurface;

pub struct Effect {
    config: EffectConfig,
    motion: Motion,
    viewport: Size,
    image: Size,
    placement: ImagePlacement,
    particles: Vec<Particle>,
    pointer: PointerState,
    rng: Rng,
    initialized: bool,
}

impl Effect {
    /// Create an effect for a `viewport`-sized surface showing an `image`-sized picture.
    /// No particles exist until [`Effect::init`] or [`Effect::init_from_viewport`].
    pub fn new(viewport: Size, image: Size, config: EffectConfig) -> Self {
        let placement = ImagePlacement::centered(viewport, image, config.image_scale);
        Self {
            motion: config.motion(),
            pointer: PointerState::new(config.pointer_radius),
            rng: Rng::new(config.seed),
            viewport,
            image,
            placement,
            particles: Vec::new(),
            initialized: false,
            config,
        }
    }

    /// Draw `image` at the placement onto an off-screen viewport buffer and sample it.
    /// Returns the number of particles created.
    pub fn init<I: ImageSource + ?Sized>(&mut self, image: &I) -> Result<usize, DissolveError> {
        let size = image.size();
        if size.is_empty() {
            return Err(DissolveError::ImageNotLoaded);
        }
        if size != self.image {
            return Err(DissolveError::ImageMismatch {
                expected: self.image,
                actual: size,
            });
        }
        let composed = PixelBuffer::compose(image, &self.placement, self.viewport);
        self.init_from_viewport(&composed)
    }

    /// Sample a buffer that already holds the placed image (e.g. a canvas read-back).
    pub fn init_from_viewport(&mut self, pixels: &PixelBuffer) -> Result<usize, DissolveError> {
        if self.initialized {
            return Err(DissolveError::AlreadyInitialized(self.particles.len()));
        }
        self.config.validate()?;
        if pixels.size() != self.viewport {
            return Err(DissolveError::ViewportMismatch {
                expected: self.viewport,
                actual: pixels.size(),
            });
        }

        self.particles = sample_particles(pixels, self.config.gap);
        self.initialized = true;
        log::info!(
            "sampled {} particles from {} viewport (gap {})",
            self.particles.len(),
            self.viewport,
            self.config.gap
        );
        Ok(self.particles.len())
    }

    /// Paint every particle, in sampling order.
    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        for particle in &self.particles {
            particle.draw(surface);
        }
    }

    /// Advance every particle one step.
    pub fn update(&mut self) {
        let pointer = self.pointer;
        let motion = self.motion;
        for particle in &mut self.particles {
            particle.update(&pointer, &motion);
        }
    }

    /// Scatter every particle to a random position inside the viewport.
    pub fn warp(&mut self) {
        for particle in &mut self.particles {
            particle.warp(self.viewport, &mut self.rng);
        }
        log::debug!("warped {} particles", self.particles.len());
    }

    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer.set(x, y);
    }

    pub fn clear_pointer(&mut self) {
        self.pointer.clear();
    }

    // -- Accessors --

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn placement(&self) -> &ImagePlacement {
        &self.placement
    }

    pub fn config(&self) -> &EffectConfig {
        &self.config
    }
}
