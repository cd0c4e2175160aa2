use weather_dodge::consts::*;
use weather_dodge::entities::*;
use weather_dodge::input::{Directions, FrameInput};
use weather_dodge::machine::*;
use weather_dodge::{WeatherKind, WeatherState};

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn new_game(kind: WeatherKind) -> (Game, StdRng) {
    let mut rng = seeded_rng();
    let game = Game::new(WeatherState::new(kind), &mut rng);
    (game, rng)
}

fn start() -> FrameInput {
    FrameInput {
        start: true,
        ..FrameInput::default()
    }
}

fn restart() -> FrameInput {
    FrameInput {
        restart: true,
        ..FrameInput::default()
    }
}

fn to_menu() -> FrameInput {
    FrameInput {
        to_menu: true,
        ..FrameInput::default()
    }
}

/// Move every enemy far above the screen so nothing can hit the player.
fn clear_sky(game: &mut Game) {
    for e in &mut game.run_mut().enemies {
        e.rect.y = -10_000.0;
        e.speed = 0.0;
    }
}

/// Drop an enemy right on top of the player.
fn crash(game: &mut Game) {
    let player = game.run().player.rect;
    let e = &mut game.run_mut().enemies[0];
    e.rect = Rect::new(player.x + 5.0, player.y + 5.0, 10.0, 10.0);
    e.speed = 0.0;
}

/// Play one run ending with `score` points on the board.
fn finish_run_with(game: &mut Game, rng: &mut StdRng, score: f32) {
    assert_eq!(game.state(), GameState::Playing);
    game.run_mut().score = score;
    crash(game);
    game.frame(&FrameInput::default(), 0.016, rng);
    assert_eq!(game.state(), GameState::GameOver);
}

// ── transition table ──────────────────────────────────────────────────────────

#[test]
fn table_rows() {
    use GameState::*;
    assert_eq!(transition(Menu, Event::Start), (Playing, Some(Effect::ResetRun)));
    assert_eq!(transition(Playing, Event::Collision), (GameOver, Some(Effect::RecordBest)));
    assert_eq!(transition(GameOver, Event::Restart), (Playing, Some(Effect::ResetRun)));
    assert_eq!(transition(GameOver, Event::ToMenu), (Menu, None));
    assert_eq!(
        transition(Playing, Event::ForceWeather(WeatherKind::Rainy)),
        (Playing, Some(Effect::SetWeather(WeatherKind::Rainy)))
    );
}

#[test]
fn unlisted_pairs_are_noops() {
    use GameState::*;
    let noops = [
        (Menu, Event::Restart),
        (Menu, Event::ToMenu),
        (Menu, Event::Collision),
        (Menu, Event::ForceWeather(WeatherKind::Cloudy)),
        (Playing, Event::Start),
        (Playing, Event::Restart),
        (Playing, Event::ToMenu),
        (GameOver, Event::Start),
        (GameOver, Event::Collision),
        (GameOver, Event::ForceWeather(WeatherKind::Rainy)),
    ];
    for (state, event) in noops {
        assert_eq!(transition(state, event), (state, None), "{:?} + {:?}", state, event);
    }
}

// ── Game session ──────────────────────────────────────────────────────────────

#[test]
fn new_game_starts_at_menu_with_baseline_run() {
    let (game, _) = new_game(WeatherKind::Sunny);
    assert_eq!(game.state(), GameState::Menu);
    assert_eq!(game.best_score(), 0);
    assert_eq!(game.score(), 0.0);
    assert_eq!(game.run().enemies.len(), ENEMY_COUNT);
}

#[test]
fn menu_ignores_everything_but_start() {
    let (mut game, mut rng) = new_game(WeatherKind::Sunny);
    let before = game.run().enemies.clone();
    let noise = FrameInput {
        directions: Directions {
            up: true,
            down: false,
            left: true,
            right: false,
        },
        restart: true,
        to_menu: true,
        force_rainy: true,
        ..FrameInput::default()
    };
    game.frame(&noise, 0.5, &mut rng);
    assert_eq!(game.state(), GameState::Menu);
    assert_eq!(game.run().enemies, before);
    assert_eq!(game.weather().get(), WeatherKind::Sunny);
}

#[test]
fn start_from_menu_resets_run() {
    // Menu + start → Playing with zero score and a fresh pool above the screen
    let (mut game, mut rng) = new_game(WeatherKind::Cloudy);
    game.run_mut().score = 99.0;
    game.frame(&start(), 0.016, &mut rng);
    assert_eq!(game.state(), GameState::Playing);
    assert_eq!(game.score(), 0.0);
    assert_eq!(game.run().enemies.len(), ENEMY_COUNT);
    assert!(game.run().enemies.iter().all(|e| e.rect.y < 0.0));
    assert!(game.run().enemies.iter().all(|e| e.kind == WeatherKind::Cloudy));
}

#[test]
fn collision_ends_run_and_records_best() {
    // Best 30 from an earlier run, this run floors to 42
    let (mut game, mut rng) = new_game(WeatherKind::Sunny);
    game.frame(&start(), 0.016, &mut rng);
    finish_run_with(&mut game, &mut rng, 30.9);
    assert_eq!(game.best_score(), 30);

    game.frame(&restart(), 0.016, &mut rng);
    assert_eq!(game.state(), GameState::Playing);
    assert_eq!(game.score(), 0.0);

    game.run_mut().player.rect = Rect::new(382.0, 380.0, 36.0, 36.0);
    finish_run_with(&mut game, &mut rng, 42.7);
    assert_eq!(game.best_score(), 42);
    assert_eq!(game.score(), 42.7);
}

#[test]
fn worse_run_does_not_lower_best() {
    let (mut game, mut rng) = new_game(WeatherKind::Sunny);
    game.frame(&start(), 0.016, &mut rng);
    finish_run_with(&mut game, &mut rng, 120.0);
    game.frame(&restart(), 0.016, &mut rng);
    finish_run_with(&mut game, &mut rng, 5.0);
    assert_eq!(game.best_score(), 120);
}

#[test]
fn playing_accrues_score_without_collision() {
    let (mut game, mut rng) = new_game(WeatherKind::Sunny);
    game.frame(&start(), 0.016, &mut rng);
    clear_sky(&mut game);
    let mut last = game.score();
    for _ in 0..30 {
        game.frame(&FrameInput::default(), 1.0 / 60.0, &mut rng);
        assert!(game.score() >= last);
        last = game.score();
    }
    assert!((game.score() - 30.0).abs() < 1e-3);
    assert_eq!(game.state(), GameState::Playing);
}

#[test]
fn to_menu_keeps_scores() {
    let (mut game, mut rng) = new_game(WeatherKind::Sunny);
    game.frame(&start(), 0.016, &mut rng);
    finish_run_with(&mut game, &mut rng, 55.5);

    game.frame(&to_menu(), 0.016, &mut rng);
    assert_eq!(game.state(), GameState::Menu);
    assert_eq!(game.score(), 55.5);
    assert_eq!(game.best_score(), 55);

    // Score only resets on the next start
    game.frame(&start(), 0.016, &mut rng);
    assert_eq!(game.score(), 0.0);
    assert_eq!(game.best_score(), 55);
}

#[test]
fn restart_wins_over_menu_in_same_frame() {
    let (mut game, mut rng) = new_game(WeatherKind::Sunny);
    game.frame(&start(), 0.016, &mut rng);
    finish_run_with(&mut game, &mut rng, 10.0);
    let both = FrameInput {
        restart: true,
        to_menu: true,
        ..FrameInput::default()
    };
    game.frame(&both, 0.016, &mut rng);
    assert_eq!(game.state(), GameState::Playing);
}

#[test]
fn game_over_is_frozen() {
    let (mut game, mut rng) = new_game(WeatherKind::Sunny);
    game.frame(&start(), 0.016, &mut rng);
    finish_run_with(&mut game, &mut rng, 10.0);
    let enemies = game.run().enemies.clone();
    game.frame(&FrameInput::default(), 1.0, &mut rng);
    assert_eq!(game.run().enemies, enemies);
    assert_eq!(game.score(), 10.0);
}

#[test]
fn debug_weather_only_while_playing_and_only_next_run() {
    let (mut game, mut rng) = new_game(WeatherKind::Sunny);
    game.frame(&start(), 0.016, &mut rng);
    clear_sky(&mut game);

    let force = FrameInput {
        force_rainy: true,
        ..FrameInput::default()
    };
    game.frame(&force, 0.016, &mut rng);
    assert_eq!(game.weather().get(), WeatherKind::Rainy);
    // Existing enemies keep their kind
    assert!(game.run().enemies.iter().all(|e| e.kind == WeatherKind::Sunny));

    finish_run_with(&mut game, &mut rng, 1.0);
    let force_cloudy = FrameInput {
        force_cloudy: true,
        ..FrameInput::default()
    };
    game.frame(&force_cloudy, 0.016, &mut rng);
    assert_eq!(game.weather().get(), WeatherKind::Rainy);

    game.frame(&restart(), 0.016, &mut rng);
    assert!(game.run().enemies.iter().all(|e| e.kind == WeatherKind::Rainy));
}

#[test]
fn external_weather_change_applies_at_next_reset() {
    let (mut game, mut rng) = new_game(WeatherKind::Sunny);
    let feed = game.weather().clone();
    game.frame(&start(), 0.016, &mut rng);
    feed.set_code(1);
    assert!(game.run().enemies.iter().all(|e| e.kind == WeatherKind::Sunny));

    finish_run_with(&mut game, &mut rng, 3.0);
    game.frame(&restart(), 0.016, &mut rng);
    assert!(game.run().enemies.iter().all(|e| e.kind == WeatherKind::Cloudy));
}

#[test]
fn handle_applies_events_directly() {
    let (mut game, mut rng) = new_game(WeatherKind::Sunny);
    game.handle(Event::Collision, &mut rng);
    assert_eq!(game.state(), GameState::Menu);
    game.handle(Event::Start, &mut rng);
    assert_eq!(game.state(), GameState::Playing);
    game.handle(Event::ForceWeather(WeatherKind::Cloudy), &mut rng);
    assert_eq!(game.weather().get(), WeatherKind::Cloudy);
    game.handle(Event::Collision, &mut rng);
    assert_eq!(game.state(), GameState::GameOver);
}
