//! Pure per-frame game logic.
//!
//! Every public function takes an immutable view of the current `Run` (and,
//! where needed, an RNG handle) and returns a brand-new value.  Side effects
//! are limited to the injected RNG.

use rand::Rng;

use crate::consts::*;
use crate::entities::{Enemy, Player, Rect, Run};
use crate::input::Directions;
use crate::spawn;

// ── Player movement ──────────────────────────────────────────────────────────

/// Unit-length movement direction for the held keys, or `(0, 0)`.
///
/// Opposite keys cancel out; diagonals are normalised so they are no faster
/// than straight moves.
pub fn direction(dirs: &Directions) -> (f32, f32) {
    let mut dx = 0.0f32;
    let mut dy = 0.0f32;
    if dirs.right {
        dx += 1.0;
    }
    if dirs.left {
        dx -= 1.0;
    }
    if dirs.down {
        dy += 1.0;
    }
    if dirs.up {
        dy -= 1.0;
    }

    if dx != 0.0 || dy != 0.0 {
        let len = (dx * dx + dy * dy).sqrt();
        (dx / len, dy / len)
    } else {
        (0.0, 0.0)
    }
}

/// Keep `rect` fully on screen.
pub fn clamp_to_screen(rect: Rect) -> Rect {
    let mut r = rect;
    if r.x < 0.0 {
        r.x = 0.0;
    }
    if r.y < 0.0 {
        r.y = 0.0;
    }
    if r.right() > SCREEN_WIDTH {
        r.x = SCREEN_WIDTH - r.width;
    }
    if r.bottom() > SCREEN_HEIGHT {
        r.y = SCREEN_HEIGHT - r.height;
    }
    r
}

pub fn move_player(player: &Player, dir: (f32, f32), dt: f32) -> Player {
    let moved = Rect {
        x: player.rect.x + dir.0 * player.speed * dt,
        y: player.rect.y + dir.1 * player.speed * dt,
        ..player.rect
    };
    Player {
        rect: clamp_to_screen(moved),
        ..player.clone()
    }
}

// ── Enemies ──────────────────────────────────────────────────────────────────

/// Let one enemy fall for `dt` seconds, recycling it once it leaves the screen.
pub fn fall(enemy: &Enemy, dt: f32, rng: &mut impl Rng) -> Enemy {
    let fallen = Enemy {
        rect: Rect {
            y: enemy.rect.y + enemy.speed * dt,
            ..enemy.rect
        },
        ..enemy.clone()
    };
    if spawn::needs_recycle(&fallen) {
        spawn::recycle(&fallen, rng)
    } else {
        fallen
    }
}

// ── Collision ────────────────────────────────────────────────────────────────

/// Strict AABB overlap; rectangles that only share an edge do not collide.
///
/// Sun enemies are drawn as circles but collide on their bounding box.
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
}

// ── Per-frame tick (nearly pure — RNG is injected) ──────────────────────────

#[derive(Clone, Debug)]
pub struct TickOutcome {
    pub run: Run,
    /// The player overlapped at least one enemy this frame.
    pub collided: bool,
}

/// Advance a run by `dt` seconds of real time.
pub fn tick(run: &Run, dirs: &Directions, dt: f32, rng: &mut impl Rng) -> TickOutcome {
    // ── 1. Player ────────────────────────────────────────────────────────────
    let player = move_player(&run.player, direction(dirs), dt);

    // ── 2. Enemies fall and recycle ──────────────────────────────────────────
    let enemies: Vec<Enemy> = run.enemies.iter().map(|e| fall(e, dt, rng)).collect();

    // ── 3. Collision against the updated positions ───────────────────────────
    let collided = enemies.iter().any(|e| overlaps(&player.rect, &e.rect));

    // ── 4. Score only accrues on frames survived ─────────────────────────────
    let score = if collided {
        run.score
    } else {
        run.score + SCORE_PER_SECOND * dt
    };

    TickOutcome {
        run: Run {
            player,
            enemies,
            score,
        },
        collided,
    }
}
