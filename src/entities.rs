//! All game entity types — pure data, no logic.

use crate::weather::WeatherKind;

/// Axis-aligned rectangle in screen pixels (y grows downward).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

// ── Player & enemy ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub rect: Rect,
    /// Pixels per second.
    pub speed: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub rect: Rect,
    /// Downward speed in pixels per second.
    pub speed: f32,
    /// Weather at spawn time. Survives every recycle.
    pub kind: WeatherKind,
}

// ── One run ───────────────────────────────────────────────────────────────────

/// Everything a single run owns. Rebuilt from scratch on every reset.
#[derive(Clone, Debug)]
pub struct Run {
    pub player: Player,
    /// Fixed-size pool; enemies are recycled, never added or removed.
    pub enemies: Vec<Enemy>,
    /// Survival score, `SCORE_PER_SECOND` per second.
    pub score: f32,
}
