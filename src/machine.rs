//! Menu / playing / game-over state machine and the game session it drives.
//!
//! `transition` is the whole rule table as a pure function.  `Game` owns the
//! session data and carries out the effects each transition asks for.

use rand::Rng;

use crate::compute;
use crate::consts::ENEMY_COUNT;
use crate::entities::Run;
use crate::input::FrameInput;
use crate::spawn;
use crate::weather::{WeatherKind, WeatherState};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GameState {
    #[default]
    Menu,
    Playing,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Start,
    Restart,
    ToMenu,
    /// The player touched an enemy.
    Collision,
    /// Debug override of the weather register.
    ForceWeather(WeatherKind),
}

/// Work a transition asks the session to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// New player, new enemy pool from the current weather, score 0.
    ResetRun,
    /// Fold the finished run's score into the best score.
    RecordBest,
    SetWeather(WeatherKind),
}

/// Next state and side effect for `event` in `state`.
/// Pairs without a rule leave the state alone and do nothing.
pub fn transition(state: GameState, event: Event) -> (GameState, Option<Effect>) {
    use GameState::*;
    match (state, event) {
        (Menu, Event::Start) => (Playing, Some(Effect::ResetRun)),
        (Playing, Event::Collision) => (GameOver, Some(Effect::RecordBest)),
        (Playing, Event::ForceWeather(kind)) => (Playing, Some(Effect::SetWeather(kind))),
        (GameOver, Event::Restart) => (Playing, Some(Effect::ResetRun)),
        (GameOver, Event::ToMenu) => (Menu, None),
        (s, _) => (s, None),
    }
}

// ── Session ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Game {
    state: GameState,
    run: Run,
    best_score: u32,
    weather: WeatherState,
}

impl Game {
    /// New session at the menu.  A baseline run is spawned so there is always
    /// something to inspect or draw.
    pub fn new(weather: WeatherState, rng: &mut impl Rng) -> Self {
        let run = spawn::reset_run(ENEMY_COUNT, &weather, rng);
        Self {
            state: GameState::Menu,
            run,
            best_score: 0,
            weather,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn run(&self) -> &Run {
        &self.run
    }

    /// Mutable access to the current run, for front ends and tests that need
    /// to stage a position.
    pub fn run_mut(&mut self) -> &mut Run {
        &mut self.run
    }

    pub fn score(&self) -> f32 {
        self.run.score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn weather(&self) -> &WeatherState {
        &self.weather
    }

    /// Feed one event through the rule table and apply its effect.
    pub fn handle(&mut self, event: Event, rng: &mut impl Rng) {
        let (next, effect) = transition(self.state, event);
        if next != self.state {
            log::debug!("{:?} --{:?}--> {:?}", self.state, event, next);
        }
        self.state = next;

        match effect {
            Some(Effect::ResetRun) => {
                self.run = spawn::reset_run(ENEMY_COUNT, &self.weather, rng);
            }
            Some(Effect::RecordBest) => {
                let final_score = self.run.score.floor() as u32;
                if final_score > self.best_score {
                    log::info!("new best score {} (was {})", final_score, self.best_score);
                    self.best_score = final_score;
                }
            }
            Some(Effect::SetWeather(kind)) => {
                log::info!("weather forced to {}", kind);
                self.weather.set(kind);
            }
            None => {}
        }
    }

    /// Run one frame: turn `input` into events for the current state and, while
    /// playing, advance the simulation by `dt` seconds.
    pub fn frame(&mut self, input: &FrameInput, dt: f32, rng: &mut impl Rng) {
        match self.state {
            GameState::Menu => {
                if input.start {
                    self.handle(Event::Start, rng);
                }
            }
            GameState::Playing => {
                for kind in input.forced_weather() {
                    self.handle(Event::ForceWeather(kind), rng);
                }

                let outcome = compute::tick(&self.run, &input.directions, dt, rng);
                self.run = outcome.run;
                if outcome.collided {
                    self.handle(Event::Collision, rng);
                }
            }
            GameState::GameOver => {
                if input.restart {
                    self.handle(Event::Restart, rng);
                }
                if input.to_menu {
                    self.handle(Event::ToMenu, rng);
                }
            }
        }
    }
}
