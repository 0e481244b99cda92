//! Deterministic pseudo-random number generator.
//!
//! Xorshift64 behind a seed scramble. Two runs with the same seed draw the
//! same stat rolls, spawn rings, and shot pitches.

use serde::{Deserialize, Serialize};

/// Seeded xorshift generator. Cheap to clone, safe to snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRng {
    state: u64,
}

impl GameRng {
    /// Seed the generator. Any seed is valid, including 0.
    pub fn new(seed: u64) -> Self {
        // Scramble so neighboring seeds do not start with near-identical
        // streams. Xorshift only needs the state to be nonzero.
        let mut s = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
        s ^= s >> 30;
        s = s.wrapping_mul(0xBF58_476D_1CE4_E5B9);
        s ^= s >> 27;
        Self { state: s | 1 }
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Uniform float in [0, 1).
    pub fn next_f32(&mut self) -> f32 {
        // Top 24 bits, so every value is exactly representable.
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }

    /// Uniform float in [min, max).
    pub fn range_f32(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }

    /// Uniform integer in [min, max], both ends included.
    pub fn roll_i32(&mut self, min: i32, max: i32) -> i32 {
        debug_assert!(min <= max);
        let span = (max as i64 - min as i64 + 1) as u64;
        min + (self.next_u64() % span) as i32
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(0)
    }
}
