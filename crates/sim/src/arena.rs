//! Round-based arena shooter.
//!
//! One `tick` per host frame: the host feeds the player pose and button
//! state, lends its raycast service, then drains events and rebuilds the
//! HUD projection. Rounds grow until the last one is cleared or the
//! player goes down.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::audio::SoundSpec;
use crate::config::{ticks, ArenaConfig, ConfigError, TICK_DT};
use crate::entities::{Enemy, EntityId, EntityIds, Player};
use crate::events::GameEvent;
use crate::input::ArenaInput;
use crate::math;
use crate::rng::GameRng;
use crate::rounds::{self, RoundTracker};
use crate::sight::{OpenField, SpatialQuery};
use crate::snapshot::{self, SnapshotError};
use crate::timer::TimerQueue;
use crate::weapon::{FireOutcome, Weapon};

/// Where the arena game stands. `Won` and `Lost` are terminal until a
/// restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Playing,
    Paused,
    Won,
    Lost,
}

/// Deferred effects carried by the arena timer queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimedEffect {
    CooldownOver,
    ReloadDone,
    MuzzleFlashOff,
}

/// Everything the arena demo needs to replay a frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArenaState {
    pub tick: u64,
    pub phase: Phase,
    pub player: Player,
    pub weapon: Weapon,
    pub enemies: Vec<Enemy>,
    pub round: RoundTracker,
    pub muzzle_flash: bool,
    pub rng: GameRng,
    pub entity_ids: EntityIds,
    pub timers: TimerQueue<TimedEffect>,
}

/// The arena demo engine.
pub struct ArenaGame {
    pub config: ArenaConfig,
    pub state: ArenaState,
    events: Vec<GameEvent>,
}

impl ArenaGame {
    pub fn new(config: ArenaConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut entity_ids = EntityIds::new();
        let player = Player::new(entity_ids.next(), &config);
        let weapon = Weapon::new(config.max_ammo);
        let round = RoundTracker::new(config.total_rounds);

        let mut game = Self {
            state: ArenaState {
                tick: 0,
                phase: Phase::Playing,
                player,
                weapon,
                enemies: Vec::new(),
                round,
                muzzle_flash: false,
                rng: GameRng::new(seed),
                entity_ids,
                timers: TimerQueue::new(),
            },
            config,
            events: Vec::new(),
        };
        game.start_round();
        Ok(game)
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    #[inline]
    pub fn tick_count(&self) -> u64 {
        self.state.tick
    }

    /// Events since the last drain, in order.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Mirror the live actors into an `OpenField`. Hosts with a real
    /// collision scene do the equivalent on their side every frame.
    pub fn sync_bodies(&self, field: &mut OpenField) {
        field.clear();
        let player = &self.state.player;
        field.place(
            player.id,
            player.position,
            Player::BODY_RADIUS,
            Player::BODY_HEIGHT,
        );
        for enemy in &self.state.enemies {
            field.place(enemy.id, enemy.position, Enemy::BODY_RADIUS, Enemy::BODY_HEIGHT);
        }
    }

    /// Advance one frame.
    pub fn tick(&mut self, input: &ArenaInput, sight: &dyn SpatialQuery) {
        if input.restart && self.accepts_restart() {
            self.reset();
            return;
        }

        if input.pause {
            match self.state.phase {
                Phase::Playing => {
                    self.state.phase = Phase::Paused;
                    self.events.push(GameEvent::Paused);
                    return;
                }
                Phase::Paused => {
                    self.state.phase = Phase::Playing;
                    self.events.push(GameEvent::Resumed);
                }
                Phase::Won | Phase::Lost => {}
            }
        }

        if self.state.phase != Phase::Playing {
            return;
        }

        self.state.tick += 1;
        let now = self.state.tick;

        self.state.player.position = input.pose.position;
        self.state.player.yaw = input.pose.yaw;

        self.drain_timers(now);

        if input.fire {
            self.try_shoot(now, sight);
        }
        if input.reload {
            self.try_manual_reload(now);
        }

        self.update_enemies(now, sight);

        if self.state.phase == Phase::Playing {
            if self.state.player.position.y < self.config.kill_floor {
                self.lose();
            } else if !self.state.player.is_alive() {
                self.lose();
            }
        }
    }

    /// Back to round 1 with a fresh player, full magazine, and a new
    /// wave. Honored from pause and from both terminal phases.
    pub fn reset(&mut self) {
        debug!("arena reset at tick {}", self.state.tick);
        self.state.phase = Phase::Playing;
        self.state.player.respawn(&self.config);
        self.state.weapon.reset();
        self.state.enemies.clear();
        self.state.round.reset();
        self.state.muzzle_flash = false;
        self.state.timers.clear();
        self.events.push(GameEvent::GameReset);
        self.start_round();
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

    fn accepts_restart(&self) -> bool {
        matches!(
            self.state.phase,
            Phase::Paused | Phase::Won | Phase::Lost
        )
    }

    fn start_round(&mut self) {
        let round = self.state.round.current;
        let count = rounds::wave_size(&self.config, round);
        for _ in 0..count {
            let id = self.state.entity_ids.next();
            let position = rounds::spawn_point(&self.config, &mut self.state.rng);
            self.state
                .enemies
                .push(Enemy::spawn(id, position, &self.config, &mut self.state.rng));
        }
        debug!("round {round} started, {count} enemies");
        self.events.push(GameEvent::RoundStarted {
            round,
            enemies: count,
        });
    }

    fn drain_timers(&mut self, now: u64) {
        while let Some(effect) = self.state.timers.pop_due(now) {
            match effect {
                TimedEffect::CooldownOver => self.state.weapon.on_cooldown_over(),
                TimedEffect::ReloadDone => {
                    self.state.weapon.on_reload_complete();
                    self.events.push(GameEvent::ReloadFinished);
                }
                TimedEffect::MuzzleFlashOff => {
                    if self.state.muzzle_flash {
                        self.state.muzzle_flash = false;
                        self.events.push(GameEvent::MuzzleFlashHidden);
                    }
                }
            }
        }
    }

    fn try_shoot(&mut self, now: u64, sight: &dyn SpatialQuery) {
        let FireOutcome::Fired { last_round } = self.state.weapon.try_fire() else {
            return;
        };

        let sound = SoundSpec::gunshot(&mut self.state.rng);
        self.events.push(GameEvent::ShotFired { sound });
        self.state.muzzle_flash = true;
        self.events.push(GameEvent::MuzzleFlashShown);
        self.state
            .timers
            .schedule(now + ticks(self.config.muzzle_flash_time), TimedEffect::MuzzleFlashOff);

        if last_round {
            self.state
                .weapon
                .start_reload(now, ticks(self.config.reload_time));
            self.state
                .timers
                .schedule(now + ticks(self.config.reload_time), TimedEffect::ReloadDone);
            self.events.push(GameEvent::ReloadStarted);
        } else {
            self.state
                .timers
                .schedule(now + ticks(self.config.fire_cooldown), TimedEffect::CooldownOver);
        }

        let origin = self.state.player.eye();
        let direction = self.state.player.forward();
        let exclude = self.state.player.id;
        if let Some(hit) = sight.first_hit(origin, direction, self.config.shot_range, exclude) {
            self.damage_enemy(hit.entity, self.config.shot_damage);
        }
    }

    fn try_manual_reload(&mut self, now: u64) {
        let duration = ticks(self.config.reload_time);
        if self.state.weapon.start_reload(now, duration) {
            self.state.timers.schedule(now + duration, TimedEffect::ReloadDone);
            self.events.push(GameEvent::ReloadStarted);
        }
    }

    /// Resolve a crosshair hit through the id lookup. Ids that do not
    /// belong to a live enemy fall through silently.
    fn damage_enemy(&mut self, id: EntityId, amount: i32) {
        let Some(enemy) = self.state.enemies.iter_mut().find(|e| e.id == id) else {
            return;
        };
        let killed = enemy.take_damage(amount);
        self.events.push(GameEvent::EnemyHit { id, damage: amount });
        if killed {
            debug!("enemy {} down", id.0);
            self.events.push(GameEvent::EnemyKilled { id });
            self.state.enemies.retain(|e| e.is_alive());
            self.check_round_clear();
        }
    }

    fn check_round_clear(&mut self) {
        if !self.state.enemies.is_empty() || self.state.phase != Phase::Playing {
            return;
        }
        let round = self.state.round.current;
        self.events.push(GameEvent::RoundCleared { round });
        if self.state.round.is_last() {
            debug!("final round cleared");
            self.state.phase = Phase::Won;
            self.events.push(GameEvent::GameWon);
        } else {
            self.state.round.advance();
            self.start_round();
        }
    }

    fn update_enemies(&mut self, now: u64, sight: &dyn SpatialQuery) {
        let attack_interval = ticks(self.config.attack_interval);
        let config = &self.config;
        let events = &mut self.events;
        let ArenaState {
            player, enemies, ..
        } = &mut self.state;
        let player_id = player.id;

        for enemy in enemies.iter_mut() {
            let dist = math::flat_distance(enemy.position, player.position);
            if dist > config.aggro_radius {
                continue;
            }

            enemy.face(player.position);
            enemy.fade_bar(TICK_DT);

            let Some(hit) =
                sight.first_hit(enemy.eye(), enemy.forward(), config.sight_range, enemy.id)
            else {
                continue;
            };
            if hit.entity != player_id {
                continue;
            }

            if dist > config.attack_range {
                enemy.position += enemy.forward() * enemy.speed * TICK_DT;
            } else if enemy.ready_to_attack(now, attack_interval) {
                enemy.last_attack = Some(now);
                player.take_damage(enemy.attack_power);
                events.push(GameEvent::PlayerHit {
                    attacker: enemy.id,
                    damage: enemy.attack_power,
                });
            }
        }
    }

    fn lose(&mut self) {
        debug!("run lost at tick {}", self.state.tick);
        self.state.phase = Phase::Lost;
        self.events.push(GameEvent::GameLost);
    }
}
