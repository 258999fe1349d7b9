//! Seedable xorshift64 generator behind `warp`, so a scatter can be replayed from its seed.

use glam::UVec2;

use crate::api::types::Size;

#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        // xorshift never leaves the all-zero state.
        Rng { state: seed.max(1) }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Integer in `[0, bound)`, close to uniform for viewport-sized bounds. An empty range yields 0.
    pub fn below(&mut self, bound: u32) -> u32 {
        // Multiply-shift on the high word instead of a division.
        (((self.next_u64() >> 32) * u64::from(bound)) >> 32) as u32
    }

    /// A uniformly random whole-pixel coordinate inside `bounds`.
    pub fn pixel_in(&mut self, bounds: Size) -> UVec2 {
        let x = self.below(bounds.width);
        let y = self.below(bounds.height);
        UVec2::new(x, y)
    }
}
