//! Sidearm state machine.
//!
//! Ready -> Cooldown -> Ready between shots, with a detour through
//! Reloading whenever the magazine runs dry or the player asks for a
//! refill. Expiries live on the game's timer queue; the weapon itself
//! only reacts to the callbacks.

use serde::{Deserialize, Serialize};

/// What the weapon is doing right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WeaponState {
    #[default]
    Ready,
    /// Between shots.
    Cooldown,
    /// Magazine refill in progress.
    Reloading,
}

/// Result of pulling the trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireOutcome {
    /// A round left the barrel.
    Fired {
        /// The magazine is now empty; the caller starts the auto-reload.
        last_round: bool,
    },
    /// Trigger ignored: cooling down, reloading, or dry.
    Suppressed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weapon {
    pub state: WeaponState,
    pub ammo: u32,
    pub max_ammo: u32,
    reload_started: u64,
    reload_ticks: u64,
}

impl Weapon {
    pub fn new(max_ammo: u32) -> Self {
        Self {
            state: WeaponState::Ready,
            ammo: max_ammo,
            max_ammo,
            reload_started: 0,
            reload_ticks: 0,
        }
    }

    #[inline]
    pub fn can_fire(&self) -> bool {
        self.state == WeaponState::Ready && self.ammo > 0
    }

    #[inline]
    pub fn is_reloading(&self) -> bool {
        self.state == WeaponState::Reloading
    }

    /// Pull the trigger. On `Fired` the caller schedules either the
    /// cooldown expiry or, for the last round, the reload completion.
    pub fn try_fire(&mut self) -> FireOutcome {
        if !self.can_fire() {
            return FireOutcome::Suppressed;
        }
        self.ammo -= 1;
        self.state = WeaponState::Cooldown;
        FireOutcome::Fired {
            last_round: self.ammo == 0,
        }
    }

    /// Begin refilling. Accepted from `Ready` with a part-empty magazine
    /// and as the automatic follow-up to firing the last round.
    pub fn start_reload(&mut self, now: u64, duration_ticks: u64) -> bool {
        let accepted = match self.state {
            WeaponState::Reloading => false,
            WeaponState::Ready => self.ammo < self.max_ammo,
            WeaponState::Cooldown => self.ammo == 0,
        };
        if accepted {
            self.state = WeaponState::Reloading;
            self.reload_started = now;
            self.reload_ticks = duration_ticks;
        }
        accepted
    }

    /// Timer callback: shot spacing elapsed.
    pub fn on_cooldown_over(&mut self) {
        if self.state == WeaponState::Cooldown {
            self.state = WeaponState::Ready;
        }
    }

    /// Timer callback: magazine refilled.
    pub fn on_reload_complete(&mut self) {
        if self.state == WeaponState::Reloading {
            self.ammo = self.max_ammo;
            self.state = WeaponState::Ready;
        }
    }

    /// Refill progress in [0, 1] for the HUD bar. Zero outside a reload.
    pub fn reload_progress(&self, now: u64) -> f32 {
        if self.state != WeaponState::Reloading || self.reload_ticks == 0 {
            return 0.0;
        }
        let elapsed = now.saturating_sub(self.reload_started);
        (elapsed as f32 / self.reload_ticks as f32).min(1.0)
    }

    /// Back to a full magazine, ready to fire.
    pub fn reset(&mut self) {
        self.state = WeaponState::Ready;
        self.ammo = self.max_ammo;
        self.reload_started = 0;
        self.reload_ticks = 0;
    }
}
