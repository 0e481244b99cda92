//! Graywave - Headless Demo Driver
//!
//! Runs the game-logic demos without an engine attached. A scripted
//! marksman plays the arena campaign, backing away from the pack while
//! it picks each wave apart; a second script wades into the melee line.
//!
//! Usage: graywave [arena|melee|both] [seed]

use glam::Vec3;
use graywave_sim::{
    math, ArenaConfig, ArenaGame, ArenaHud, ArenaInput, Enemy, GameEvent, MeleeConfig, MeleeGame,
    MeleeInput, OpenField, Phase, PlayerPose, TICK_DT,
};
use log::debug;

fn main() {
    env_logger::init();

    let mode = std::env::args().nth(1).unwrap_or_else(|| "both".to_string());
    let seed = std::env::args()
        .nth(2)
        .and_then(|s| s.parse().ok())
        .unwrap_or(7);

    match mode.as_str() {
        "arena" => run_arena(seed),
        "melee" => run_melee(),
        _ => {
            run_arena(seed);
            run_melee();
        }
    }
}

/// Flat position of the enemy closest to `from`, if any.
fn nearest_enemy(enemies: &[Enemy], from: Vec3) -> Option<Vec3> {
    enemies
        .iter()
        .min_by(|a, b| {
            let da = math::flat_distance(a.position, from);
            let db = math::flat_distance(b.position, from);
            da.partial_cmp(&db).unwrap()
        })
        .map(|e| e.position)
}

/// Marksman script: aim at the nearest hostile, hold the trigger, and
/// back off whenever the pack closes inside twenty units. Player speed
/// beats enemy speed, so the gap only ever grows.
fn marksman_pose(game: &ArenaGame) -> PlayerPose {
    let player = &game.state.player;
    let mut position = player.position;

    let Some(target) = nearest_enemy(&game.state.enemies, position) else {
        return PlayerPose::new(position, player.yaw);
    };

    if math::flat_distance(position, target) < 20.0 {
        if let Some(away) = math::flat_direction(target, position) {
            position += away * player.speed * TICK_DT;
        }
    }
    PlayerPose::facing(position, target)
}

fn run_arena(seed: u64) {
    println!("[arena] seed {seed}");

    let mut game = ArenaGame::new(ArenaConfig::default(), seed).expect("default config is valid");
    let mut field = OpenField::new();
    let mut saved: Option<Vec<u8>> = None;
    let mut first_shot_reported = false;

    for _ in 0..30_000 {
        let pose = marksman_pose(&game);
        game.sync_bodies(&mut field);
        game.tick(&ArenaInput::firing(pose), &field);

        for event in game.drain_events() {
            match event {
                GameEvent::RoundStarted { enemies, .. } => {
                    let hud = ArenaHud::project(&game);
                    println!(
                        "[arena] {} | {} hostiles | hp {} | ammo {}",
                        hud.round_text, enemies, hud.hp_text, hud.ammo_text
                    );
                }
                GameEvent::RoundCleared { round } => {
                    println!("[arena] round {round} clear at tick {}", game.tick_count());
                }
                GameEvent::ShotFired { sound } if !first_shot_reported => {
                    first_shot_reported = true;
                    println!(
                        "[arena] first shot: pitch {:.2}, {} envelope points",
                        sound.pitch,
                        sound.envelope.len()
                    );
                }
                GameEvent::EnemyKilled { id } => {
                    debug!("hostile {} destroyed", id.0);
                }
                GameEvent::PlayerHit { damage, .. } => {
                    println!("[arena] took {damage} damage");
                }
                GameEvent::GameWon => println!("[arena] YOU WIN"),
                GameEvent::GameLost => println!("[arena] GAME OVER"),
                _ => {}
            }
        }

        if saved.is_none() && game.tick_count() >= 1_200 {
            let bytes = game.snapshot().expect("state serializes");
            println!(
                "[arena] snapshot at tick {} ({} bytes)",
                game.tick_count(),
                bytes.len()
            );
            saved = Some(bytes);
        }

        if game.phase() != Phase::Playing {
            break;
        }
    }

    let outcome = match game.phase() {
        Phase::Won => "won",
        Phase::Lost => "lost",
        _ => "unfinished",
    };
    println!(
        "[arena] {} after {} ticks ({:.1} s simulated)",
        outcome,
        game.tick_count(),
        game.tick_count() as f32 * TICK_DT
    );

    // Rewind the finished run to the saved point to show restore works.
    if let Some(bytes) = saved {
        game.restore(&bytes).expect("snapshot restores");
        let hud = ArenaHud::project(&game);
        println!(
            "[arena] restored snapshot: tick {}, {}, hp {}",
            game.tick_count(),
            hud.round_text,
            hud.hp_text
        );
    }
}

fn run_melee() {
    let mut game = MeleeGame::new(MeleeConfig::default()).expect("default config is valid");
    println!("[melee] {} enemies in the line", game.state.enemies.len());

    let mut position = Vec3::ZERO;
    let mut swings = 0u32;

    for _ in 0..10_000 {
        let target = nearest_enemy(&game.state.enemies, position);

        // Walk at the nearest enemy; swing on arrival, then wait out the
        // sword animation before the next arc.
        let mut swing = false;
        if let Some(target) = target {
            if let Some(step) = math::flat_direction(position, target) {
                if math::flat_distance(position, target) > 1.5 {
                    position += step * game.config.player_speed * TICK_DT;
                }
            }
            if math::flat_distance(position, target) < game.config.swing_reach - 0.5
                && !game.is_swinging()
            {
                swing = true;
                swings += 1;
            }
        }

        let pose = PlayerPose::new(position, 0.0);
        let input = if swing {
            MeleeInput::swinging(pose)
        } else {
            MeleeInput::idle(pose)
        };
        game.tick(&input);

        for event in game.drain_events() {
            if let GameEvent::EnemyKilled { .. } = event {
                println!(
                    "[melee] enemy down, {} left at tick {}",
                    game.state.enemies.len(),
                    game.tick_count()
                );
            }
        }

        if game.state.enemies.is_empty() {
            break;
        }
    }

    println!(
        "[melee] line cleared in {} swings over {} ticks",
        swings,
        game.tick_count()
    );
}
