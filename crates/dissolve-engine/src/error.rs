use crate::api::types::Size;

/// Everything that can go wrong while configuring or seeding an effect.
/// The per-frame simulation itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum DissolveError {
    /// The image reports zero pixels, i.e. it has not been decoded yet.
    #[error("image has no pixels; it must be fully loaded before sampling")]
    ImageNotLoaded,

    /// Raw RGBA bytes don't match the claimed dimensions.
    #[error("pixel data holds {actual} bytes but {size} RGBA needs {expected}")]
    BufferLength {
        size: Size,
        expected: usize,
        actual: usize,
    },

    /// A composed pixel buffer doesn't cover the effect's viewport exactly.
    #[error("pixel buffer is {actual} but the viewport is {expected}")]
    ViewportMismatch { expected: Size, actual: Size },

    /// The image handed to `init` is not the one the placement was computed for.
    #[error("image is {actual} but the effect was placed for {expected}")]
    ImageMismatch { expected: Size, actual: Size },

    /// `init` may only run once per effect.
    #[error("effect already holds {0} particles; init runs exactly once")]
    AlreadyInitialized(usize),

    /// A zero stride would never advance across the sampling grid.
    #[error("sampling gap must be at least one pixel")]
    ZeroGap,

    /// A tuning constant outside the range where particles stay finite and settle.
    #[error("{field} = {value} is out of range: {expected}")]
    OutOfRange {
        field: &'static str,
        value: f32,
        expected: &'static str,
    },

    #[error("invalid effect config: {0}")]
    Config(#[from] serde_json::Error),
}
