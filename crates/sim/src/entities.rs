//! Actors shared by the demos.
//!
//! Storage is Vec-based; iteration order is spawn order and stays
//! identical run to run. Hit results from the host resolve through a
//! tagged id lookup, never through downcasting.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::config::ArenaConfig;
use crate::math;
use crate::rng::GameRng;

/// Unique identifier for an actor.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct EntityId(pub u32);

/// Hands out identifiers starting at 1. Zero is never issued, so hosts
/// may use it as a sentinel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityIds {
    next: u32,
}

impl EntityIds {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn next(&mut self) -> EntityId {
        let id = EntityId(self.next);
        self.next += 1;
        id
    }
}

impl Default for EntityIds {
    fn default() -> Self {
        Self::new()
    }
}

/// The first-person player. The host's movement controller owns the pose
/// and reports it every tick; the simulation owns hit points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: EntityId,
    pub position: Vec3,
    /// Heading in radians. Zero faces +Z.
    pub yaw: f32,
    pub hp: i32,
    pub max_hp: i32,
    /// Movement speed for the host controller, units/second.
    pub speed: f32,
}

impl Player {
    /// Aim rays leave from mid-torso.
    pub const EYE_HEIGHT: f32 = 1.5;
    /// Capsule footprint used by the reference spatial query.
    pub const BODY_RADIUS: f32 = 0.5;
    pub const BODY_HEIGHT: f32 = 2.0;

    pub fn new(id: EntityId, config: &ArenaConfig) -> Self {
        Self {
            id,
            position: config.player_spawn,
            yaw: 0.0,
            hp: config.player_max_hp,
            max_hp: config.player_max_hp,
            speed: config.player_speed,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    #[inline]
    pub fn eye(&self) -> Vec3 {
        self.position + Vec3::Y * Self::EYE_HEIGHT
    }

    #[inline]
    pub fn forward(&self) -> Vec3 {
        math::direction_from_yaw(self.yaw)
    }

    /// Apply damage. Hit points never drop below zero.
    pub fn take_damage(&mut self, amount: i32) {
        self.hp = (self.hp - amount).max(0);
    }

    /// Fresh start at the spawn point.
    pub fn respawn(&mut self, config: &ArenaConfig) {
        self.position = config.player_spawn;
        self.yaw = 0.0;
        self.hp = config.player_max_hp;
        self.max_hp = config.player_max_hp;
    }
}

/// A melee-rushing enemy. Arena enemies roll their stats at spawn time;
/// melee-demo enemies use fixed ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: EntityId,
    pub position: Vec3,
    /// Heading in radians. Zero faces +Z.
    pub yaw: f32,
    pub hp: i32,
    pub max_hp: i32,
    /// Walk speed, units/second.
    pub speed: f32,
    /// Damage dealt per swing at the player.
    pub attack_power: i32,
    /// Tick of the most recent swing. None until the first one.
    pub last_attack: Option<u64>,
    /// Overhead bar opacity. Fades while untouched, snaps back on a hit.
    pub bar_alpha: f32,
}

impl Enemy {
    /// Line-of-sight rays leave from chest height.
    pub const EYE_HEIGHT: f32 = 1.0;
    /// Cylinder footprint used by the reference spatial query.
    pub const BODY_RADIUS: f32 = 0.75;
    pub const BODY_HEIGHT: f32 = 2.0;

    /// Roll a new arena enemy from the stat ranges in `config`.
    pub fn spawn(id: EntityId, position: Vec3, config: &ArenaConfig, rng: &mut GameRng) -> Self {
        let hp = rng.roll_i32(config.enemy_hp_min, config.enemy_hp_max);
        let speed = rng.range_f32(config.enemy_speed_min, config.enemy_speed_max);
        let attack_power = rng.roll_i32(config.enemy_attack_min, config.enemy_attack_max);
        Self {
            id,
            position,
            yaw: 0.0,
            hp,
            max_hp: hp,
            speed,
            attack_power,
            last_attack: None,
            bar_alpha: 1.0,
        }
    }

    /// Fixed-stat enemy for the melee demo.
    pub fn fixed(id: EntityId, position: Vec3, hp: i32, speed: f32) -> Self {
        Self {
            id,
            position,
            yaw: 0.0,
            hp,
            max_hp: hp,
            speed,
            attack_power: 0,
            last_attack: None,
            bar_alpha: 1.0,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    #[inline]
    pub fn eye(&self) -> Vec3 {
        self.position + Vec3::Y * Self::EYE_HEIGHT
    }

    #[inline]
    pub fn forward(&self) -> Vec3 {
        math::direction_from_yaw(self.yaw)
    }

    #[inline]
    pub fn hp_fraction(&self) -> f32 {
        if self.max_hp > 0 {
            (self.hp as f32 / self.max_hp as f32).max(0.0)
        } else {
            0.0
        }
    }

    /// Turn on the floor to face `target`. No-op when `target` sits on
    /// this enemy's own column.
    pub fn face(&mut self, target: Vec3) {
        if let Some(dir) = math::flat_direction(self.position, target) {
            self.yaw = math::yaw_from_direction(dir);
        }
    }

    /// Apply damage and light the overhead bar back up. Returns true when
    /// this hit was the killing blow.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        let was_alive = self.is_alive();
        self.hp = (self.hp - amount).max(0);
        self.bar_alpha = 1.0;
        was_alive && !self.is_alive()
    }

    /// Fade the overhead bar a little more.
    pub fn fade_bar(&mut self, dt: f32) {
        self.bar_alpha = (self.bar_alpha - dt).max(0.0);
    }

    /// Whether the swing cooldown has elapsed. The first swing after
    /// spawning is always allowed.
    pub fn ready_to_attack(&self, now: u64, interval_ticks: u64) -> bool {
        match self.last_attack {
            None => true,
            Some(t) => now.saturating_sub(t) >= interval_ticks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ArenaConfig {
        ArenaConfig::default()
    }

    #[test]
    fn ids_start_at_one_and_increase() {
        let mut ids = EntityIds::new();
        assert_eq!(ids.next(), EntityId(1));
        assert_eq!(ids.next(), EntityId(2));
    }

    #[test]
    fn player_damage_clamps_at_zero() {
        let mut player = Player::new(EntityId(1), &config());
        player.take_damage(15);
        player.take_damage(15);
        player.take_damage(15);
        assert_eq!(player.hp, 55);
        assert!(player.is_alive());

        player.take_damage(1000);
        assert_eq!(player.hp, 0);
        assert!(!player.is_alive());
    }

    #[test]
    fn spawned_stats_fall_in_configured_ranges() {
        let cfg = config();
        let mut rng = GameRng::new(3);
        for i in 0..100 {
            let enemy = Enemy::spawn(EntityId(i), Vec3::ZERO, &cfg, &mut rng);
            assert!((cfg.enemy_hp_min..=cfg.enemy_hp_max).contains(&enemy.hp));
            assert_eq!(enemy.hp, enemy.max_hp);
            assert!(enemy.speed >= cfg.enemy_speed_min && enemy.speed < cfg.enemy_speed_max);
            assert!((cfg.enemy_attack_min..=cfg.enemy_attack_max).contains(&enemy.attack_power));
        }
    }

    #[test]
    fn killing_blow_reported_once() {
        let mut enemy = Enemy::fixed(EntityId(1), Vec3::ZERO, 30, 1.0);
        assert!(!enemy.take_damage(10));
        assert!(!enemy.take_damage(10));
        assert!(enemy.take_damage(10));
        assert_eq!(enemy.hp, 0);
        assert!(!enemy.take_damage(10));
        assert_eq!(enemy.hp, 0);
    }

    #[test]
    fn hit_relights_faded_bar() {
        let mut enemy = Enemy::fixed(EntityId(1), Vec3::ZERO, 30, 1.0);
        for _ in 0..30 {
            enemy.fade_bar(1.0 / 60.0);
        }
        assert!(enemy.bar_alpha < 1.0);
        enemy.take_damage(5);
        assert_eq!(enemy.bar_alpha, 1.0);
    }

    #[test]
    fn first_attack_is_immediate() {
        let enemy = Enemy::fixed(EntityId(1), Vec3::ZERO, 30, 1.0);
        assert!(enemy.ready_to_attack(1, 60));
    }

    #[test]
    fn attack_cooldown_gates_swings() {
        let mut enemy = Enemy::fixed(EntityId(1), Vec3::ZERO, 30, 1.0);
        enemy.last_attack = Some(100);
        assert!(!enemy.ready_to_attack(159, 60));
        assert!(enemy.ready_to_attack(160, 60));
    }

    #[test]
    fn face_turns_toward_target() {
        let mut enemy = Enemy::fixed(EntityId(1), Vec3::new(0.0, 0.0, 5.0), 30, 1.0);
        enemy.face(Vec3::ZERO);
        let fwd = enemy.forward();
        assert!(fwd.z < -0.99);
    }
}
