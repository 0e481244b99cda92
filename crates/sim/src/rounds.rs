//! Round progression for the arena demo.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::config::ArenaConfig;
use crate::rng::GameRng;

/// Which round is active out of how many.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundTracker {
    pub current: u32,
    pub total: u32,
}

impl RoundTracker {
    pub fn new(total: u32) -> Self {
        Self { current: 1, total }
    }

    /// Whether no round follows the current one.
    #[inline]
    pub fn is_last(&self) -> bool {
        self.current >= self.total
    }

    pub fn advance(&mut self) {
        self.current += 1;
    }

    pub fn reset(&mut self) {
        self.current = 1;
    }
}

/// Enemies fielded by round `round` (1-based): the base count plus the
/// per-round increment for every round already cleared.
pub fn wave_size(config: &ArenaConfig, round: u32) -> u32 {
    config.base_enemies + config.enemies_per_round * round.saturating_sub(1)
}

/// Spawn point on the ring around the arena center: uniform angle,
/// uniform radius within the configured band.
pub fn spawn_point(config: &ArenaConfig, rng: &mut GameRng) -> Vec3 {
    let angle = rng.range_f32(0.0, std::f32::consts::TAU);
    let radius = rng.range_f32(config.spawn_radius_min, config.spawn_radius_max);
    Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius)
}
