//! What to draw each frame, independent of any drawing backend.
//!
//! `describe` turns a `Game` into a `Scene`: a background colour plus shapes
//! and text in play-field pixel coordinates, painted in order.

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::entities::{Enemy, Rect};
use crate::machine::{Game, GameState};
use crate::weather::WeatherKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

// ── Colour palette ────────────────────────────────────────────────────────────

pub const C_TEXT: Rgba = Rgba::rgb(245, 245, 245);
pub const C_TEXT_DIM: Rgba = Rgba::rgb(130, 130, 130);
pub const C_TEXT_SOFT: Rgba = Rgba::rgb(200, 200, 200);
pub const C_PLAYER: Rgba = Rgba::rgb(80, 200, 120);
pub const C_RAIN: Rgba = Rgba::rgb(70, 140, 255);
pub const C_CLOUD: Rgba = Rgba::rgb(245, 245, 245);
pub const C_SUN: Rgba = Rgba::rgb(250, 210, 60);
pub const C_DIM: Rgba = Rgba::rgba(0, 0, 0, 130);

pub const PLAYER_ROUNDNESS: f32 = 0.2;
pub const PLAYER_SEGMENTS: u32 = 6;

/// Background tint for the live weather.
pub fn background(kind: WeatherKind) -> Rgba {
    match kind {
        WeatherKind::Sunny => Rgba::rgb(20, 24, 34),
        WeatherKind::Cloudy => Rgba::rgb(35, 35, 45),
        WeatherKind::Rainy => Rgba::rgb(15, 18, 30),
    }
}

// ── Scene ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Rect {
        rect: Rect,
        color: Rgba,
    },
    RoundedRect {
        rect: Rect,
        roundness: f32,
        segments: u32,
        color: Rgba,
    },
    Circle {
        cx: f32,
        cy: f32,
        radius: f32,
        color: Rgba,
    },
    /// `x` is the left edge, centre or right edge depending on `align`.
    Text {
        text: String,
        x: f32,
        y: f32,
        size: f32,
        align: Align,
        color: Rgba,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub background: Rgba,
    pub shapes: Vec<Shape>,
}

fn text(text: impl Into<String>, x: f32, y: f32, size: f32, align: Align, color: Rgba) -> Shape {
    Shape::Text {
        text: text.into(),
        x,
        y,
        size,
        align,
        color,
    }
}

// ── Enemies ───────────────────────────────────────────────────────────────────

/// Centre and radius of the three puffs of a cloud drawn inside `rect`:
/// main puff first, then left and right.
pub fn cloud_circles(rect: &Rect) -> [(f32, f32, f32); 3] {
    let cx = rect.x + rect.width * 0.5;
    let cy = rect.y + rect.height * 0.6;
    let r1 = rect.height * 0.55;
    let r_side = r1 * 0.85;
    let offset = r1 * 0.9;
    [
        (cx, cy, r1),
        (cx - offset, cy + 2.0, r_side),
        (cx + offset, cy + 2.0, r_side),
    ]
}

pub fn enemy_shapes(enemy: &Enemy) -> Vec<Shape> {
    match enemy.kind {
        WeatherKind::Rainy => vec![Shape::Rect {
            rect: enemy.rect,
            color: C_RAIN,
        }],
        WeatherKind::Cloudy => cloud_circles(&enemy.rect)
            .iter()
            .map(|&(cx, cy, radius)| Shape::Circle {
                cx,
                cy,
                radius,
                color: C_CLOUD,
            })
            .collect(),
        WeatherKind::Sunny => {
            let r = enemy.rect.width * 0.5;
            vec![Shape::Circle {
                cx: enemy.rect.x + r,
                cy: enemy.rect.y + r,
                radius: r,
                color: C_SUN,
            }]
        }
    }
}

// ── Screens ───────────────────────────────────────────────────────────────────

fn menu(game: &Game, shapes: &mut Vec<Shape>) {
    shapes.push(text("DODGE THE WEATHER", SCREEN_WIDTH / 2.0, 90.0, 60.0, Align::Center, C_TEXT));
    shapes.push(text("Move with WASD or Arrow Keys", 220.0, 200.0, 20.0, Align::Left, C_TEXT_DIM));
    shapes.push(text("Avoid the falling weather", 280.0, 230.0, 20.0, Align::Left, C_TEXT_DIM));
    shapes.push(text("Press SPACE to start", 280.0, 280.0, 24.0, Align::Left, C_TEXT_SOFT));
    shapes.push(text(format!("Best: {}", game.best_score()), 10.0, 10.0, 20.0, Align::Left, C_TEXT_DIM));
}

fn playfield(game: &Game, shapes: &mut Vec<Shape>) {
    shapes.push(Shape::RoundedRect {
        rect: game.run().player.rect,
        roundness: PLAYER_ROUNDNESS,
        segments: PLAYER_SEGMENTS,
        color: C_PLAYER,
    });
    for enemy in &game.run().enemies {
        shapes.extend(enemy_shapes(enemy));
    }
}

fn hud(game: &Game, shapes: &mut Vec<Shape>) {
    let score = game.score().floor() as u32;
    shapes.push(text(format!("Score: {}", score), 10.0, 10.0, 22.0, Align::Left, C_TEXT));
    shapes.push(text(
        format!("Weather: {}", game.weather().get()),
        10.0,
        40.0,
        20.0,
        Align::Left,
        C_TEXT,
    ));
    shapes.push(text(
        format!("Best: {}", game.best_score()),
        SCREEN_WIDTH - 10.0,
        10.0,
        20.0,
        Align::Right,
        C_TEXT_DIM,
    ));
}

fn game_over(game: &Game, shapes: &mut Vec<Shape>) {
    let cx = SCREEN_WIDTH / 2.0;
    shapes.push(Shape::Rect {
        rect: Rect::new(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT),
        color: C_DIM,
    });
    shapes.push(text("GAME OVER", cx, 120.0, 50.0, Align::Center, C_TEXT));
    let score = game.score().floor() as u32;
    shapes.push(text(format!("Score: {}", score), cx - 80.0, 190.0, 30.0, Align::Left, C_TEXT_SOFT));
    shapes.push(text(format!("Best:  {}", game.best_score()), cx - 80.0, 225.0, 24.0, Align::Left, C_TEXT_DIM));
    shapes.push(text("Press R to Restart", cx - 120.0, 270.0, 22.0, Align::Left, C_TEXT));
    shapes.push(text("Press ESC for Menu", cx - 120.0, 300.0, 20.0, Align::Left, C_TEXT_DIM));
}

/// Build the scene for the current frame.
pub fn describe(game: &Game) -> Scene {
    let mut shapes = Vec::new();
    match game.state() {
        GameState::Menu => menu(game, &mut shapes),
        GameState::Playing => {
            playfield(game, &mut shapes);
            hud(game, &mut shapes);
        }
        GameState::GameOver => {
            // The final frame stays visible under the dim.
            playfield(game, &mut shapes);
            game_over(game, &mut shapes);
        }
    }

    Scene {
        background: background(game.weather().get()),
        shapes,
    }
}
