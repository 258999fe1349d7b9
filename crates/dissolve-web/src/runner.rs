use dissolve_engine::{
    DissolveError, DrawSurface, Effect, InputEvent, PixelBuffer, RenderBuffer,
};

/// Drives one [`Effect`]: a tick per display frame, input applied on arrival,
/// and an explicit stop.
///
/// Knows nothing about the browser; the canvas stage and animation loop sit
/// on either side of it, so the frame logic is testable natively.
pub struct DissolveRunner {
    effect: Effect,
    render_buffer: RenderBuffer,
    running: bool,
    frame_count: u64,
}

impl DissolveRunner {
    pub fn new(effect: Effect) -> Self {
        Self {
            effect,
            render_buffer: RenderBuffer::new(),
            running: true,
            frame_count: 0,
        }
    }

    /// Seed the particles from the composed viewport pixels. Call once before ticking.
    pub fn init_from_viewport(&mut self, pixels: &PixelBuffer) -> Result<usize, DissolveError> {
        let count = self.effect.init_from_viewport(pixels)?;
        self.render_buffer = RenderBuffer::with_capacity(count);
        Ok(count)
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        event.apply(&mut self.effect);
    }

    /// Run one logical frame: update, then redraw into the render buffer.
    /// Every call is one fixed step regardless of wall time.
    /// Returns `false` once the runner has been stopped.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        if self.effect.is_initialized() {
            self.effect.update();
            self.render_buffer.clear();
            self.effect.draw(&mut self.render_buffer);
        }
        self.frame_count += 1;
        true
    }

    /// Stop ticking for good. Pending input is still accepted but nothing moves.
    pub fn stop(&mut self) {
        if self.running {
            log::info!("runner stopped after {} frames", self.frame_count);
        }
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn effect(&self) -> &Effect {
        &self.effect
    }

    pub fn render_buffer(&self) -> &RenderBuffer {
        &self.render_buffer
    }

    // ---- Pointer accessors for reads from JS ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn particle_count(&self) -> u32 {
        self.effect.particle_count() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dissolve_engine::{EffectConfig, Size};

    fn runner() -> DissolveRunner {
        let viewport = Size::new(20, 20);
        let config = EffectConfig {
            gap: 5,
            ..EffectConfig::default()
        };
        let mut runner = DissolveRunner::new(Effect::new(viewport, viewport, config));
        runner
            .init_from_viewport(&PixelBuffer::filled(viewport, [10, 20, 30, 255]))
            .unwrap();
        runner
    }

    #[test]
    fn tick_draws_one_instance_per_particle() {
        let mut r = runner();
        assert!(r.tick());
        assert_eq!(r.particle_count(), 16);
        assert_eq!(r.instance_count(), 16);
        assert_eq!(r.frame_count(), 1);
        // Still exactly one instance each after more frames.
        r.tick();
        assert_eq!(r.instance_count(), 16);
    }

    #[test]
    fn tick_before_init_draws_nothing() {
        let viewport = Size::new(20, 20);
        let mut r = DissolveRunner::new(Effect::new(viewport, viewport, EffectConfig::default()));
        assert!(r.tick());
        assert_eq!(r.instance_count(), 0);
    }

    #[test]
    fn stopped_runner_no_longer_ticks() {
        let mut r = runner();
        r.tick();
        r.stop();
        assert!(!r.is_running());
        assert!(!r.tick());
        assert_eq!(r.frame_count(), 1);
    }

    #[test]
    fn input_is_applied_synchronously() {
        let mut r = runner();
        r.handle_input(InputEvent::PointerMove { x: 11.0, y: 12.0 });
        assert!(r.effect().pointer().position().is_some());

        r.handle_input(InputEvent::Warp);
        let moved = r
            .effect()
            .particles()
            .iter()
            .any(|p| p.displacement() > 0.0);
        assert!(moved);
    }

    #[test]
    fn warped_particles_reassemble_over_frames() {
        let mut r = runner();
        r.handle_input(InputEvent::Warp);
        for _ in 0..2_000 {
            r.tick();
        }
        let worst = r
            .effect()
            .particles()
            .iter()
            .map(|p| p.displacement())
            .fold(0.0f32, f32::max);
        assert!(worst < 0.01, "worst displacement {}", worst);
    }
}
