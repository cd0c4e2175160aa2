mod display;

use std::collections::HashMap;
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::thread_rng;

use weather_dodge::config::Config;
use weather_dodge::input::{Directions, FrameInput};
use weather_dodge::{feed, render, Game, WeatherState};

// ── Held-key model ────────────────────────────────────────────────────────────

/// A key counts as held if its last press/repeat event arrived within this
/// window.  Covers terminals that never report key releases: OS key repeat
/// runs at 15 Hz or faster, so a held key refreshes well before it expires.
const HOLD_WINDOW: Duration = Duration::from_millis(150);

/// Returns true if any of `keys` was seen within `HOLD_WINDOW` of `now`.
fn is_held(key_seen: &HashMap<KeyCode, Instant>, keys: &[KeyCode], now: Instant) -> bool {
    keys.iter().any(|key| {
        key_seen
            .get(key)
            .map(|&last| now.saturating_duration_since(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    })
}

const UP: &[KeyCode] = &[KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('W')];
const DOWN: &[KeyCode] = &[KeyCode::Down, KeyCode::Char('s'), KeyCode::Char('S')];
const LEFT: &[KeyCode] = &[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')];
const RIGHT: &[KeyCode] = &[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')];

/// Record a one-shot key press.  Returns `false` when the key means quit.
fn press(input: &mut FrameInput, code: &KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') => return false,
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return false,
        KeyCode::Char(' ') | KeyCode::Enter => input.start = true,
        KeyCode::Char('r') | KeyCode::Char('R') => input.restart = true,
        KeyCode::Esc => input.to_menu = true,
        KeyCode::F(1) | KeyCode::Char('1') => input.force_sunny = true,
        KeyCode::F(2) | KeyCode::Char('2') => input.force_cloudy = true,
        KeyCode::F(3) | KeyCode::Char('3') => input.force_rainy = true,
        _ => {}
    }
    true
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.
///
/// Every frame drains pending key events, measures the real time since the
/// previous frame, advances the game by that much and draws the result.
fn game_loop<W: Write>(
    out: &mut W,
    game: &mut Game,
    rx: &mpsc::Receiver<Event>,
    frame_time: Duration,
) -> std::io::Result<()> {
    let mut rng = thread_rng();

    // Maps each held key → the moment it was last seen (press or repeat).
    let mut key_seen: HashMap<KeyCode, Instant> = HashMap::new();
    let mut last_frame = Instant::now();

    loop {
        let frame_start = Instant::now();
        let dt = frame_start.duration_since(last_frame).as_secs_f32();
        last_frame = frame_start;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        let mut input = FrameInput::default();
        while let Ok(ev) = rx.try_recv() {
            if let Event::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) = ev
            {
                match kind {
                    KeyEventKind::Press => {
                        if !press(&mut input, &code, modifiers) {
                            log::info!("quit requested");
                            return Ok(());
                        }
                        key_seen.insert(code, frame_start);
                    }
                    KeyEventKind::Repeat => {
                        key_seen.insert(code, frame_start);
                    }
                    KeyEventKind::Release => {
                        key_seen.remove(&code);
                    }
                }
            }
        }

        input.directions = Directions {
            up: is_held(&key_seen, UP, frame_start),
            down: is_held(&key_seen, DOWN, frame_start),
            left: is_held(&key_seen, LEFT, frame_start),
            right: is_held(&key_seen, RIGHT, frame_start),
        };

        game.frame(&input, dt, &mut rng);

        let (cols, rows) = terminal::size()?;
        display::render(out, &render::describe(game), game.state(), cols, rows)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

// ── Logging ───────────────────────────────────────────────────────────────────

/// Logs go to `--log-file` when given.  Without one the terminal is the only
/// sink and it is busy drawing, so logging stays off unless RUST_LOG asks.
fn init_logging(config: &Config) -> std::io::Result<()> {
    let default_filter = if config.log_file.is_some() { "info" } else { "off" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));
    if let Some(path) = &config.log_file {
        let file = File::create(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    let config = Config::parse();
    init_logging(&config)?;

    let weather = WeatherState::new(config.weather);
    log::info!("starting with {} weather at {} fps", config.weather, config.fps);
    if let Some(path) = &config.weather_file {
        log::info!("polling weather reports from {}", path.display());
        feed::spawn_weather_feed(path.clone(), weather.clone(), config.weather_poll_interval());
    }

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back to HOLD_WINDOW.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread to blocking event reads so the frame loop never waits
    // on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(e) => {
                log::warn!("input thread stopped: {}", e);
                break;
            }
        }
    });

    let mut game = Game::new(weather, &mut thread_rng());
    let result = game_loop(&mut out, &mut game, &rx, config.frame_duration());

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    log::info!("best score this session: {}", game.best_score());
    result
}
