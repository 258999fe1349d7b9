use glam::Vec2;

/// The pointer cell an effect reads every update.
///
/// Single writer (the pointer-input collaborator), single reader (the
/// simulation), both on the frame-loop thread, so a plain value suffices.
/// `position` stays `None` until the first pointer-move arrives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    position: Option<Vec2>,
    /// Influence radius in squared-distance units.
    radius: f32,
}

impl PointerState {
    pub fn new(radius: f32) -> Self {
        Self {
            position: None,
            radius,
        }
    }

    /// Overwrite the pointer position. Non-finite coordinates count as "no pointer".
    pub fn set(&mut self, x: f32, y: f32) {
        self.position = if x.is_finite() && y.is_finite() {
            Some(Vec2::new(x, y))
        } else {
            None
        };
    }

    pub fn clear(&mut self) {
        self.position = None;
    }

    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_absent() {
        let pointer = PointerState::new(4000.0);
        assert_eq!(pointer.position(), None);
        assert_eq!(pointer.radius(), 4000.0);
    }

    #[test]
    fn last_write_wins() {
        let mut pointer = PointerState::new(4000.0);
        pointer.set(1.0, 2.0);
        pointer.set(30.0, 40.0);
        assert_eq!(pointer.position(), Some(Vec2::new(30.0, 40.0)));
    }

    #[test]
    fn non_finite_coordinates_mean_absent() {
        let mut pointer = PointerState::new(4000.0);
        pointer.set(5.0, 5.0);
        pointer.set(f32::NAN, 5.0);
        assert_eq!(pointer.position(), None);
        pointer.set(5.0, f32::INFINITY);
        assert_eq!(pointer.position(), None);
    }
}
