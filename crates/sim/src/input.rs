//! Per-tick input handed to the simulations.
//!
//! The host engine owns the camera and the movement controller, so the
//! player's pose arrives here as data next to the button states. Press
//! fields are edge-detected by the host: true for exactly one tick.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::math;

/// Player pose reported by the host's movement controller.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PlayerPose {
    pub position: Vec3,
    /// Heading in radians. Zero faces +Z.
    pub yaw: f32,
}

impl PlayerPose {
    pub fn new(position: Vec3, yaw: f32) -> Self {
        Self { position, yaw }
    }

    /// Pose standing at `position`, facing `target`. Falls back to a
    /// zero heading when the two points stack vertically.
    pub fn facing(position: Vec3, target: Vec3) -> Self {
        let yaw = math::flat_direction(position, target)
            .map(math::yaw_from_direction)
            .unwrap_or(0.0);
        Self { position, yaw }
    }

    #[inline]
    pub fn forward(&self) -> Vec3 {
        math::direction_from_yaw(self.yaw)
    }
}

/// One frame of arena-demo input.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ArenaInput {
    pub pose: PlayerPose,
    /// Trigger held this frame.
    pub fire: bool,
    /// Reload press.
    pub reload: bool,
    /// Pause toggle press.
    pub pause: bool,
    /// Restart press.
    pub restart: bool,
}

impl ArenaInput {
    /// Input frame with every button up.
    pub fn idle(pose: PlayerPose) -> Self {
        Self {
            pose,
            ..Self::default()
        }
    }

    /// Input frame holding the trigger.
    pub fn firing(pose: PlayerPose) -> Self {
        Self {
            pose,
            fire: true,
            ..Self::default()
        }
    }
}

/// One frame of melee-demo input.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MeleeInput {
    pub pose: PlayerPose,
    /// Swing press.
    pub swing: bool,
}

impl MeleeInput {
    pub fn idle(pose: PlayerPose) -> Self {
        Self { pose, swing: false }
    }

    pub fn swinging(pose: PlayerPose) -> Self {
        Self { pose, swing: true }
    }
}
