//! Close-quarters sword demo.
//!
//! A short line of slow enemies walks at the player; a swing hurts every
//! enemy inside reach at once. No rounds, no defeat state, just the
//! swing-and-crowd loop.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::config::{ticks, ConfigError, MeleeConfig, TICK_DT};
use crate::entities::{Enemy, EntityIds};
use crate::events::GameEvent;
use crate::input::MeleeInput;
use crate::math;
use crate::snapshot::{self, SnapshotError};
use crate::timer::TimerQueue;

/// Deferred effects carried by the melee timer queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeleeEffect {
    SwingSettle,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeleeState {
    pub tick: u64,
    pub player_position: Vec3,
    pub enemies: Vec<Enemy>,
    /// Raised on a swing, lowered when the swing window runs out.
    pub swinging: bool,
    pub entity_ids: EntityIds,
    pub timers: TimerQueue<MeleeEffect>,
}

/// The melee demo engine.
pub struct MeleeGame {
    pub config: MeleeConfig,
    pub state: MeleeState,
    events: Vec<GameEvent>,
}

impl MeleeGame {
    pub fn new(config: MeleeConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut entity_ids = EntityIds::new();
        let mut enemies = Vec::with_capacity(config.enemy_count as usize);
        for i in 0..config.enemy_count {
            let position = Vec3::new(i as f32 * config.enemy_spacing, 0.0, config.enemy_line_z);
            enemies.push(Enemy::fixed(
                entity_ids.next(),
                position,
                config.enemy_hp,
                config.enemy_speed,
            ));
        }

        Ok(Self {
            state: MeleeState {
                tick: 0,
                player_position: config.player_spawn,
                enemies,
                swinging: false,
                entity_ids,
                timers: TimerQueue::new(),
            },
            config,
            events: Vec::new(),
        })
    }

    #[inline]
    pub fn tick_count(&self) -> u64 {
        self.state.tick
    }

    #[inline]
    pub fn is_swinging(&self) -> bool {
        self.state.swinging
    }

    /// Events since the last drain, in order.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Advance one frame.
    pub fn tick(&mut self, input: &MeleeInput) {
        self.state.tick += 1;
        let now = self.state.tick;

        self.state.player_position = input.pose.position;

        while let Some(MeleeEffect::SwingSettle) = self.state.timers.pop_due(now) {
            if self.state.swinging {
                self.state.swinging = false;
                self.events.push(GameEvent::SwingSettled);
            }
        }

        if input.swing {
            self.swing(now);
        }

        self.advance_enemies();
    }

    /// Serialize the live state for save/rollback.
    pub fn snapshot(&self) -> Result<Vec<u8>, SnapshotError> {
        snapshot::save(&self.state)
    }

    /// Replace the live state with a previously saved one.
    pub fn restore(&mut self, data: &[u8]) -> Result<(), SnapshotError> {
        self.state = snapshot::load(data)?;
        Ok(())
    }

    /// One sword arc: every enemy inside reach takes the hit. Overlapping
    /// swings share the earliest settle, so the flag can drop while a
    /// later arc is still fresh.
    fn swing(&mut self, now: u64) {
        self.state.swinging = true;
        self.events.push(GameEvent::SwingStarted);
        self.state
            .timers
            .schedule(now + ticks(self.config.swing_time), MeleeEffect::SwingSettle);

        let player = self.state.player_position;
        let mut any_killed = false;
        for enemy in self.state.enemies.iter_mut() {
            if player.distance(enemy.position) >= self.config.swing_reach {
                continue;
            }
            let killed = enemy.take_damage(self.config.swing_damage);
            self.events.push(GameEvent::SwingHit {
                id: enemy.id,
                damage: self.config.swing_damage,
            });
            if killed {
                self.events.push(GameEvent::EnemyKilled { id: enemy.id });
                any_killed = true;
            }
        }
        if any_killed {
            self.state.enemies.retain(|e| e.is_alive());
        }
    }

    fn advance_enemies(&mut self) {
        let player = self.state.player_position;
        let stop = self.config.stop_range;
        for enemy in self.state.enemies.iter_mut() {
            if math::flat_distance(enemy.position, player) <= stop {
                continue;
            }
            enemy.face(player);
            enemy.position += enemy.forward() * enemy.speed * TICK_DT;
        }
    }
}
