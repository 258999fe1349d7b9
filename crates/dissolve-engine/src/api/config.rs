use serde::{Deserialize, Serialize};

use crate::error::DissolveError;

/// Tuning constants for one effect. The defaults are the reference look;
/// hosts normally use `EffectConfig::default()` unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectConfig {
    /// Sampling stride in pixels. Also the edge length of each particle square (default: 3).
    pub gap: u32,
    /// Pointer influence radius, in squared-distance units (default: 4000).
    pub pointer_radius: f32,
    /// Velocity multiplier applied every step (default: 0.8).
    pub friction: f32,
    /// Fraction of the remaining distance to origin covered every step (default: 0.05).
    pub ease: f32,
    /// Image scale relative to its natural size when placed in the viewport (default: 0.8).
    pub image_scale: f32,
    /// Seed for the warp RNG (default: 42).
    pub seed: u64,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            gap: 3,
            pointer_radius: 4000.0,
            friction: 0.8,
            ease: 0.05,
            image_scale: 0.8,
            seed: 42,
        }
    }
}

impl EffectConfig {
    /// Parse a config from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, DissolveError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject constants under which particles blow up or never settle.
    pub fn validate(&self) -> Result<(), DissolveError> {
        if self.gap == 0 {
            return Err(DissolveError::ZeroGap);
        }
        check("ease", self.ease, "0 < ease <= 1", |v| v > 0.0 && v <= 1.0)?;
        check("friction", self.friction, "0 <= friction < 1", |v| {
            (0.0..1.0).contains(&v)
        })?;
        check("image_scale", self.image_scale, "image_scale > 0", |v| v > 0.0)?;
        check("pointer_radius", self.pointer_radius, "pointer_radius > 0", |v| {
            v > 0.0
        })?;
        Ok(())
    }

    /// The per-step motion constants handed to every particle.
    pub fn motion(&self) -> Motion {
        Motion {
            friction: self.friction,
            ease: self.ease,
        }
    }
}

fn check(
    field: &'static str,
    value: f32,
    expected: &'static str,
    in_range: impl Fn(f32) -> bool,
) -> Result<(), DissolveError> {
    if value.is_finite() && in_range(value) {
        Ok(())
    } else {
        Err(DissolveError::OutOfRange {
            field,
            value,
            expected,
        })
    }
}

/// Friction and ease-back, shared by all particles of an effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub friction: f32,
    pub ease: f32,
}

impl Default for Motion {
    fn default() -> Self {
        EffectConfig::default().motion()
    }
}
