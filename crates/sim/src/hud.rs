//! HUD (Heads-Up Display) state projection.
//!
//! Pure snapshots of game state for the host to draw. Rebuilt from
//! scratch every frame; nothing here mutates the games.

use crate::arena::{ArenaGame, Phase};
use crate::entities::{Enemy, EntityId};
use crate::melee::MeleeGame;

/// Floor for bar fills. A scale of exactly zero tends to upset engine
/// transforms, so fills never quite reach it.
pub const BAR_FLOOR: f32 = 0.001;

/// Floor for the small overhead enemy bars.
pub const ENEMY_BAR_FLOOR: f32 = 0.01;

/// Hint shown whenever a restart is accepted.
pub const RESTART_HINT: &str = "Restart  (R)";

fn bar_fill(fraction: f32, floor: f32) -> f32 {
    fraction.clamp(0.0, 1.0).max(floor)
}

/// Overhead health bar for one enemy.
#[derive(Debug, Clone, PartialEq)]
pub struct EnemyBar {
    pub id: EntityId,
    /// Remaining-hp fraction, floored so the bar never vanishes outright.
    pub fill: f32,
    /// Fade-out opacity; snaps to 1 when the enemy is hit.
    pub alpha: f32,
    /// True below half health. The melee demo recolors on this.
    pub low: bool,
}

impl EnemyBar {
    fn project(enemy: &Enemy) -> Self {
        Self {
            id: enemy.id,
            fill: bar_fill(enemy.hp_fraction(), ENEMY_BAR_FLOOR),
            alpha: enemy.bar_alpha,
            low: enemy.hp_fraction() < 0.5,
        }
    }
}

/// End-of-game banner text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Banner {
    #[default]
    None,
    GameOver,
    Victory,
}

impl Banner {
    pub fn text(self) -> Option<&'static str> {
        match self {
            Banner::None => None,
            Banner::GameOver => Some("GAME OVER"),
            Banner::Victory => Some("YOU WIN"),
        }
    }
}

/// Arena state for HUD display.
#[derive(Debug, Clone, Default)]
pub struct ArenaHud {
    pub hp_fill: f32,
    pub hp_text: String,
    pub ammo_text: String,
    pub reload_fill: f32,
    pub reloading: bool,
    pub round_text: String,
    pub banner: Banner,
    pub show_restart: bool,
    pub paused: bool,
    pub muzzle_flash: bool,
    pub enemy_bars: Vec<EnemyBar>,
}

impl ArenaHud {
    pub fn project(game: &ArenaGame) -> Self {
        let state = &game.state;
        let player = &state.player;
        let weapon = &state.weapon;

        let reloading = weapon.is_reloading();
        let ammo_text = if reloading {
            "Reloading\u{2026}".to_string()
        } else {
            format!("{:>2} / {}", weapon.ammo, weapon.max_ammo)
        };

        let banner = match state.phase {
            Phase::Won => Banner::Victory,
            Phase::Lost => Banner::GameOver,
            Phase::Playing | Phase::Paused => Banner::None,
        };

        Self {
            hp_fill: bar_fill(player.hp as f32 / player.max_hp as f32, BAR_FLOOR),
            hp_text: format!("{:>3} / {}", player.hp, player.max_hp),
            ammo_text,
            reload_fill: bar_fill(weapon.reload_progress(state.tick), BAR_FLOOR),
            reloading,
            round_text: format!("Round {} / {}", state.round.current, state.round.total),
            banner,
            show_restart: state.phase != Phase::Playing,
            paused: state.phase == Phase::Paused,
            muzzle_flash: state.muzzle_flash,
            enemy_bars: state.enemies.iter().map(EnemyBar::project).collect(),
        }
    }
}

/// Melee state for HUD display.
#[derive(Debug, Clone, Default)]
pub struct MeleeHud {
    /// The sword animation window is open.
    pub swinging: bool,
    pub enemy_bars: Vec<EnemyBar>,
}

impl MeleeHud {
    pub fn project(game: &MeleeGame) -> Self {
        Self {
            swinging: game.state.swinging,
            enemy_bars: game.state.enemies.iter().map(EnemyBar::project).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ticks, ArenaConfig, MeleeConfig};
    use crate::input::{ArenaInput, MeleeInput, PlayerPose};
    use crate::sight::{RayHit, SpatialQuery};
    use glam::Vec3;

    struct NoHits;

    impl SpatialQuery for NoHits {
        fn first_hit(&self, _: Vec3, _: Vec3, _: f32, _: EntityId) -> Option<RayHit> {
            None
        }
    }

    fn arena() -> ArenaGame {
        ArenaGame::new(ArenaConfig::default(), 11).unwrap()
    }

    #[test]
    fn counters_are_right_aligned() {
        let mut game = arena();
        let hud = ArenaHud::project(&game);
        assert_eq!(hud.hp_text, "100 / 100");
        assert_eq!(hud.ammo_text, "10 / 10");
        assert_eq!(hud.round_text, "Round 1 / 5");

        game.state.player.hp = 7;
        game.state.weapon.ammo = 3;
        let hud = ArenaHud::project(&game);
        assert_eq!(hud.hp_text, "  7 / 100");
        assert_eq!(hud.ammo_text, " 3 / 10");
    }

    #[test]
    fn fills_never_reach_zero() {
        let mut game = arena();
        game.state.player.hp = 0;
        let hud = ArenaHud::project(&game);
        assert_eq!(hud.hp_fill, BAR_FLOOR);
        assert_eq!(hud.reload_fill, BAR_FLOOR);
    }

    #[test]
    fn reload_swaps_the_ammo_counter_for_a_label() {
        let mut game = arena();
        let pose = PlayerPose::default();
        game.state.weapon.ammo = 1;
        game.tick(&ArenaInput::firing(pose), &NoHits);
        assert!(game.state.weapon.is_reloading());

        let hud = ArenaHud::project(&game);
        assert_eq!(hud.ammo_text, "Reloading\u{2026}");
        assert!(hud.reloading);

        // Halfway through, the bar sits near the middle.
        for _ in 0..ticks(game.config.reload_time) / 2 {
            game.tick(&ArenaInput::idle(pose), &NoHits);
        }
        let hud = ArenaHud::project(&game);
        assert!(hud.reload_fill > 0.4 && hud.reload_fill < 0.6);
    }

    #[test]
    fn banner_follows_the_phase() {
        let mut game = arena();
        assert_eq!(ArenaHud::project(&game).banner.text(), None);
        assert!(!ArenaHud::project(&game).show_restart);

        let fall = PlayerPose::new(Vec3::new(0.0, -5.0, -10.0), 0.0);
        game.tick(&ArenaInput::idle(fall), &NoHits);
        let hud = ArenaHud::project(&game);
        assert_eq!(hud.banner.text(), Some("GAME OVER"));
        assert!(hud.show_restart);

        game.state.phase = Phase::Won;
        let hud = ArenaHud::project(&game);
        assert_eq!(hud.banner.text(), Some("YOU WIN"));
    }

    #[test]
    fn pause_panel_flag_tracks_the_phase() {
        let mut game = arena();
        let mut pause = ArenaInput::idle(PlayerPose::default());
        pause.pause = true;
        game.tick(&pause, &NoHits);

        let hud = ArenaHud::project(&game);
        assert!(hud.paused);
        assert!(hud.show_restart);
        assert_eq!(hud.banner.text(), None);
    }

    #[test]
    fn overhead_bars_mirror_enemy_health() {
        let mut game = arena();
        game.state.enemies.truncate(1);
        game.state.enemies[0].hp = 100;
        game.state.enemies[0].max_hp = 100;

        let hud = ArenaHud::project(&game);
        assert_eq!(hud.enemy_bars.len(), 1);
        assert_eq!(hud.enemy_bars[0].fill, 1.0);
        assert!(!hud.enemy_bars[0].low);

        game.state.enemies[0].hp = 40;
        let hud = ArenaHud::project(&game);
        assert!((hud.enemy_bars[0].fill - 0.4).abs() < 1e-6);
        assert!(hud.enemy_bars[0].low);

        game.state.enemies[0].hp = 0;
        let hud = ArenaHud::project(&game);
        assert_eq!(hud.enemy_bars[0].fill, ENEMY_BAR_FLOOR);
    }

    #[test]
    fn melee_projection_reports_the_swing_window() {
        let mut game = MeleeGame::new(MeleeConfig::default()).unwrap();
        let hud = MeleeHud::project(&game);
        assert!(!hud.swinging);
        assert_eq!(hud.enemy_bars.len(), 4);
        assert!(hud.enemy_bars.iter().all(|b| b.fill == 1.0 && !b.low));

        let pose = PlayerPose::new(Vec3::new(0.0, 0.0, 4.5), 0.0);
        game.tick(&MeleeInput::swinging(pose));
        game.tick(&MeleeInput::swinging(pose));
        let hud = MeleeHud::project(&game);
        assert!(hud.swinging);
        // 10 of 30 hp left on the near enemy: low and visibly drained.
        let near = &hud.enemy_bars[0];
        assert!(near.low);
        assert!((near.fill - 1.0 / 3.0).abs() < 1e-6);
    }
}
