//! Spawning and recycling of falling enemies.
//!
//! Every random draw comes through the caller's `rng`, so tests can drive the
//! engine with a seeded generator.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::consts::*;
use crate::entities::{Enemy, Player, Rect, Run};
use crate::weather::{WeatherKind, WeatherState};

// ── Per-kind tables ──────────────────────────────────────────────────────────

/// Size and speed ranges for one weather kind (pixels, pixels/second).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpawnParams {
    pub width: RangeInclusive<i32>,
    /// `None` means the enemy is square (height = width).
    pub height: Option<RangeInclusive<i32>>,
    pub base_speed: i32,
    pub extra_speed: RangeInclusive<i32>,
}

pub fn spawn_params(kind: WeatherKind) -> SpawnParams {
    match kind {
        // Thin, long, fast drops
        WeatherKind::Rainy => SpawnParams {
            width: 3..=6,
            height: Some(14..=24),
            base_speed: 180,
            extra_speed: 40..=180,
        },
        // Wide, slow puffs
        WeatherKind::Cloudy => SpawnParams {
            width: 40..=72,
            height: Some(24..=40),
            base_speed: 100,
            extra_speed: 20..=80,
        },
        // Round suns, drawn as circles inside a square box
        WeatherKind::Sunny => SpawnParams {
            width: 18..=30,
            height: None,
            base_speed: 140,
            extra_speed: 20..=120,
        },
    }
}

/// Inclusive range of possible speeds for `kind`.
pub fn speed_range(kind: WeatherKind) -> RangeInclusive<f32> {
    let p = spawn_params(kind);
    (p.base_speed + p.extra_speed.start()) as f32..=(p.base_speed + p.extra_speed.end()) as f32
}

fn roll_speed(kind: WeatherKind, rng: &mut impl Rng) -> f32 {
    let p = spawn_params(kind);
    (p.base_speed + rng.gen_range(p.extra_speed)) as f32
}

fn roll_x(width: f32, rng: &mut impl Rng) -> f32 {
    let max_x = (SCREEN_WIDTH - width).max(0.0) as i32;
    rng.gen_range(0..=max_x) as f32
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Player centred horizontally, a little above the bottom edge.
pub fn new_player() -> Player {
    Player {
        rect: Rect::new(
            SCREEN_WIDTH / 2.0 - PLAYER_SIZE / 2.0,
            SCREEN_HEIGHT - PLAYER_START_OFFSET,
            PLAYER_SIZE,
            PLAYER_SIZE,
        ),
        speed: PLAYER_SPEED,
    }
}

/// Build one enemy of `kind` somewhere above the visible area.
pub fn spawn_enemy(kind: WeatherKind, rng: &mut impl Rng) -> Enemy {
    let p = spawn_params(kind);
    let width = rng.gen_range(p.width) as f32;
    let height = match p.height {
        Some(range) => rng.gen_range(range) as f32,
        None => width,
    };
    let speed = roll_speed(kind, rng);
    let x = roll_x(width, rng);
    let y = rng.gen_range(-(SCREEN_HEIGHT as i32)..=-20) as f32;

    Enemy {
        rect: Rect::new(x, y, width, height),
        speed,
        kind,
    }
}

/// Start a fresh run: centred player, `count` enemies, zero score.
///
/// Every enemy takes the weather as it is right now; later weather changes
/// only show up at the next reset.
pub fn reset_run(count: usize, weather: &WeatherState, rng: &mut impl Rng) -> Run {
    let kind = weather.get();
    let enemies = (0..count).map(|_| spawn_enemy(kind, rng)).collect();
    log::debug!("run reset: {} {} enemies", count, kind);

    Run {
        player: new_player(),
        enemies,
        score: 0.0,
    }
}

// ── Recycling ────────────────────────────────────────────────────────────────

/// True once the enemy has fallen far enough below the screen to be reused.
pub fn needs_recycle(enemy: &Enemy) -> bool {
    enemy.rect.y > SCREEN_HEIGHT + RECYCLE_MARGIN
}

/// Move a fallen enemy back above the screen with a fresh speed.
/// Kind and size are kept.
pub fn recycle(enemy: &Enemy, rng: &mut impl Rng) -> Enemy {
    let y = rng.gen_range(-200..=-20) as f32;
    let x = roll_x(enemy.rect.width, rng);
    Enemy {
        rect: Rect { x, y, ..enemy.rect },
        speed: roll_speed(enemy.kind, rng),
        kind: enemy.kind,
    }
}
