//! Tunable parameters for both demos.
//!
//! Defaults match the shipped balance. Hosts may tweak a copy and must
//! run `validate` before handing it to a game constructor.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Simulation ticks per second. One tick per rendered frame.
pub const TICK_RATE: u32 = 60;

/// Seconds covered by a single tick.
pub const TICK_DT: f32 = 1.0 / TICK_RATE as f32;

/// Convert a duration in seconds to a whole number of ticks.
pub fn ticks(seconds: f32) -> u64 {
    (seconds * TICK_RATE as f32).round() as u64
}

/// Rejected tunables.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("total_rounds must be at least 1")]
    NoRounds,

    #[error("max_ammo must be at least 1")]
    NoAmmo,

    #[error("spawn radius band {min}..{max} is inverted or negative")]
    BadSpawnBand { min: f32, max: f32 },

    #[error("{name} range {min}..{max} is inverted")]
    BadStatRange { name: &'static str, min: f32, max: f32 },

    #[error("{name} must be positive (got {value})")]
    NotPositive { name: &'static str, value: f32 },
}

/// Arena demo tunables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArenaConfig {
    pub total_rounds: u32,
    /// Enemies fielded in round 1.
    pub base_enemies: u32,
    /// Extra enemies fielded per later round.
    pub enemies_per_round: u32,
    pub spawn_radius_min: f32,
    pub spawn_radius_max: f32,

    pub player_max_hp: i32,
    /// Movement speed the host controller applies, units/second.
    pub player_speed: f32,
    pub player_spawn: Vec3,
    /// Below this height the run is lost.
    pub kill_floor: f32,

    pub max_ammo: u32,
    /// Seconds between shots.
    pub fire_cooldown: f32,
    /// Seconds to refill the magazine.
    pub reload_time: f32,
    /// Seconds the muzzle flash stays visible.
    pub muzzle_flash_time: f32,
    pub shot_damage: i32,
    /// Longest shot the crosshair ray can land.
    pub shot_range: f32,

    pub enemy_hp_min: i32,
    pub enemy_hp_max: i32,
    pub enemy_speed_min: f32,
    pub enemy_speed_max: f32,
    pub enemy_attack_min: i32,
    pub enemy_attack_max: i32,
    /// Beyond this distance an enemy ignores the player entirely.
    pub aggro_radius: f32,
    /// Length of the enemy's line-of-sight ray.
    pub sight_range: f32,
    /// Inside this distance an enemy swings instead of walking.
    pub attack_range: f32,
    /// Seconds between swings from one enemy.
    pub attack_interval: f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            total_rounds: 5,
            base_enemies: 8,
            enemies_per_round: 4,
            spawn_radius_min: 4.0,
            spawn_radius_max: 20.0,

            player_max_hp: 100,
            player_speed: 8.0,
            player_spawn: Vec3::new(0.0, 0.0, -10.0),
            kill_floor: -3.0,

            max_ammo: 10,
            fire_cooldown: 0.15,
            reload_time: 2.0,
            muzzle_flash_time: 0.05,
            shot_damage: 15,
            shot_range: 100.0,

            enemy_hp_min: 80,
            enemy_hp_max: 120,
            enemy_speed_min: 4.0,
            enemy_speed_max: 6.0,
            enemy_attack_min: 6,
            enemy_attack_max: 10,
            aggro_radius: 40.0,
            sight_range: 30.0,
            attack_range: 2.0,
            attack_interval: 1.0,
        }
    }
}

impl ArenaConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_rounds == 0 {
            return Err(ConfigError::NoRounds);
        }
        if self.max_ammo == 0 {
            return Err(ConfigError::NoAmmo);
        }
        if self.spawn_radius_min < 0.0 || self.spawn_radius_max < self.spawn_radius_min {
            return Err(ConfigError::BadSpawnBand {
                min: self.spawn_radius_min,
                max: self.spawn_radius_max,
            });
        }
        if self.enemy_hp_max < self.enemy_hp_min {
            return Err(ConfigError::BadStatRange {
                name: "enemy_hp",
                min: self.enemy_hp_min as f32,
                max: self.enemy_hp_max as f32,
            });
        }
        if self.enemy_speed_max < self.enemy_speed_min {
            return Err(ConfigError::BadStatRange {
                name: "enemy_speed",
                min: self.enemy_speed_min,
                max: self.enemy_speed_max,
            });
        }
        if self.enemy_attack_max < self.enemy_attack_min {
            return Err(ConfigError::BadStatRange {
                name: "enemy_attack",
                min: self.enemy_attack_min as f32,
                max: self.enemy_attack_max as f32,
            });
        }
        for (name, value) in [
            ("player_max_hp", self.player_max_hp as f32),
            ("fire_cooldown", self.fire_cooldown),
            ("reload_time", self.reload_time),
            ("shot_damage", self.shot_damage as f32),
            ("shot_range", self.shot_range),
            ("aggro_radius", self.aggro_radius),
            ("sight_range", self.sight_range),
            ("attack_range", self.attack_range),
            ("attack_interval", self.attack_interval),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { name, value });
            }
        }
        Ok(())
    }
}

/// Melee demo tunables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeleeConfig {
    pub enemy_count: u32,
    /// Gap between neighbors in the starting rank.
    pub enemy_spacing: f32,
    /// Z coordinate of the starting rank.
    pub enemy_line_z: f32,
    pub enemy_hp: i32,
    pub enemy_speed: f32,
    /// Enemies halt once this close to the player.
    pub stop_range: f32,

    pub swing_reach: f32,
    pub swing_damage: i32,
    /// Seconds the sword animation window stays open after a swing.
    pub swing_time: f32,

    /// Movement speed the host controller applies, units/second.
    pub player_speed: f32,
    /// Drop-in point; the host controller settles the player onto the floor.
    pub player_spawn: Vec3,
}

impl Default for MeleeConfig {
    fn default() -> Self {
        Self {
            enemy_count: 4,
            enemy_spacing: 4.0,
            enemy_line_z: 5.0,
            enemy_hp: 30,
            enemy_speed: 1.0,
            stop_range: 1.0,

            swing_reach: 3.0,
            swing_damage: 10,
            swing_time: 1.4,

            player_speed: 2.0,
            player_spawn: Vec3::new(0.0, 10.0, 0.0),
        }
    }
}

impl MeleeConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("enemy_hp", self.enemy_hp as f32),
            ("swing_reach", self.swing_reach),
            ("swing_damage", self.swing_damage as f32),
            ("swing_time", self.swing_time),
            ("stop_range", self.stop_range),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { name, value });
            }
        }
        Ok(())
    }
}
