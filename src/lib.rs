//! Weather Dodge: dodge falling sun, cloud and rain obstacles.
//!
//! Core modules:
//! - `weather`: shared weather register and integer ingress
//! - `entities`: pure data for the player, enemies and a run
//! - `spawn`: weather-parameterised spawning and recycling
//! - `compute`: per-frame movement, collision and scoring
//! - `machine`: menu / playing / game-over state machine
//! - `input`, `render`: the boundary towards a front end
//! - `feed`, `config`: weather feed thread and command-line options

pub mod compute;
pub mod config;
pub mod entities;
pub mod feed;
pub mod input;
pub mod machine;
pub mod render;
pub mod spawn;
pub mod weather;

pub use machine::{Game, GameState};
pub use weather::{WeatherKind, WeatherState};

/// Fixed play-field dimensions and tuning.
pub mod consts {
    /// Play-field width in pixels.
    pub const SCREEN_WIDTH: f32 = 800.0;
    /// Play-field height in pixels.
    pub const SCREEN_HEIGHT: f32 = 450.0;

    /// Enemies alive in every run.
    pub const ENEMY_COUNT: usize = 10;

    /// Player square side and speed (pixels/second).
    pub const PLAYER_SIZE: f32 = 36.0;
    pub const PLAYER_SPEED: f32 = 260.0;
    /// Distance from the bottom edge to the player's top on reset.
    pub const PLAYER_START_OFFSET: f32 = 70.0;

    /// Enemies are recycled once their top passes this far below the screen.
    pub const RECYCLE_MARGIN: f32 = 10.0;

    /// Score gained per second survived.
    pub const SCORE_PER_SECOND: f32 = 60.0;
}
