//! Events drained by the host once per tick.

use serde::{Deserialize, Serialize};

use crate::audio::SoundSpec;
use crate::entities::EntityId;

/// Everything noteworthy that happened during a tick, in order. The host
/// drains these after `tick` to drive sound, flashes, and screen text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ShotFired { sound: SoundSpec },
    MuzzleFlashShown,
    MuzzleFlashHidden,
    ReloadStarted,
    ReloadFinished,
    EnemyHit { id: EntityId, damage: i32 },
    EnemyKilled { id: EntityId },
    PlayerHit { attacker: EntityId, damage: i32 },
    RoundStarted { round: u32, enemies: u32 },
    RoundCleared { round: u32 },
    GameWon,
    GameLost,
    Paused,
    Resumed,
    GameReset,
    SwingStarted,
    SwingSettled,
    SwingHit { id: EntityId, damage: i32 },
}
