use crate::core::effect::Effect;

/// Input the effect reacts to. Applied the moment it arrives: there is no
/// queue, so a burst of warps simply re-scatters the particles each time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The pointer moved to viewport coordinates (x, y).
    PointerMove { x: f32, y: f32 },
    /// Scatter every particle to a random position.
    Warp,
}

impl InputEvent {
    pub fn apply(self, effect: &mut Effect) {
        match self {
            InputEvent::PointerMove { x, y } => effect.set_pointer(x, y),
            InputEvent::Warp => effect.warp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::EffectConfig;
    use crate::api::types::Size;
    use crate::image::pixels::PixelBuffer;
    use glam::Vec2;

    fn effect() -> Effect {
        let viewport = Size::new(30, 30);
        let mut effect = Effect::new(viewport, viewport, EffectConfig::default());
        effect
            .init_from_viewport(&PixelBuffer::filled(viewport, [0, 0, 0, 255]))
            .unwrap();
        effect
    }

    #[test]
    fn pointer_move_overwrites_the_pointer() {
        let mut effect = effect();
        InputEvent::PointerMove { x: 3.0, y: 4.0 }.apply(&mut effect);
        InputEvent::PointerMove { x: 7.0, y: 8.0 }.apply(&mut effect);
        assert_eq!(effect.pointer().position(), Some(Vec2::new(7.0, 8.0)));
    }

    #[test]
    fn warp_applies_immediately() {
        let mut effect = effect();
        InputEvent::Warp.apply(&mut effect);
        let displaced = effect
            .particles()
            .iter()
            .filter(|p| p.displacement() > 0.0)
            .count();
        assert!(displaced > 0, "warp left every particle on its origin");
    }
}
