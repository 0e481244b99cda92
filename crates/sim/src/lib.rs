//! Graywave Sim - Deterministic FPS Game Logic
//!
//! This crate contains the game logic for two first-person demos (a
//! round-based arena shooter and a sword melee brawl), kept fully
//! decoupled from any engine. The host owns rendering, audio synthesis,
//! movement and raycasts; this crate owns combat, enemies, rounds, the
//! weapon state machine, deferred timers and HUD projection.
//!
//! # Determinism Rules
//!
//! 1. No `rand::thread_rng()` - Use `GameRng` only
//! 2. No system time - Use the tick counter
//! 3. Ordered iteration - `Vec` not `HashMap` for entities
//! 4. No async - One `tick` call per host frame
//!
//! A run with a fixed seed and the same per-tick inputs replays
//! identically, and any state can be snapshotted and restored mid-run.

pub mod arena;
pub mod audio;
pub mod config;
pub mod entities;
pub mod events;
pub mod hud;
pub mod input;
pub mod math;
pub mod melee;
pub mod rng;
pub mod rounds;
pub mod sight;
pub mod snapshot;
pub mod timer;
pub mod weapon;

pub use arena::{ArenaGame, Phase};
pub use config::{ArenaConfig, MeleeConfig, TICK_DT, TICK_RATE};
pub use entities::{Enemy, EntityId, Player};
pub use events::GameEvent;
pub use hud::{ArenaHud, MeleeHud};
pub use input::{ArenaInput, MeleeInput, PlayerPose};
pub use melee::MeleeGame;
pub use rng::GameRng;
pub use sight::{OpenField, SpatialQuery};
