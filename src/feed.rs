//! Background weather feed.
//!
//! Some other process (a weather lookup script, a cron job, a person with an
//! editor) writes the current weather into a file; this thread polls it and
//! pushes every change through `WeatherState::set_code`.

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use crate::weather::{WeatherKind, WeatherState};

/// Read a weather report: an integer code or a weather name.
///
/// Integers are passed through unchecked so the register's out-of-range
/// policy applies to them.
pub fn parse_signal(s: &str) -> Option<i32> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(code) = s.parse::<i32>() {
        return Some(code);
    }
    s.parse::<WeatherKind>().ok().map(|kind| kind.code() as i32)
}

/// Poll `path` every `interval` and forward changed reports to `weather`.
/// The thread runs until the process exits.
pub fn spawn_weather_feed(
    path: PathBuf,
    weather: WeatherState,
    interval: Duration,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let mut last_code: Option<i32> = None;
        let mut last_problem: Option<String> = None;

        loop {
            let problem = match std::fs::read_to_string(&path) {
                Ok(contents) => match parse_signal(&contents) {
                    Some(code) => {
                        if last_code != Some(code) {
                            weather.set_code(code);
                            log::info!("weather feed: {} -> {}", code, weather.get());
                            last_code = Some(code);
                        }
                        None
                    }
                    None => Some(format!("unrecognised weather report {:?}", contents.trim())),
                },
                Err(e) => Some(format!("cannot read {}: {}", path.display(), e)),
            };

            // Only log a problem when it first shows up.
            if problem.is_some() && problem != last_problem {
                if let Some(msg) = &problem {
                    log::warn!("weather feed: {}", msg);
                }
            }
            last_problem = problem;

            thread::sleep(interval);
        }
    })
}
