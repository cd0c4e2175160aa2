//! Weather register shared between the game and whoever reports the weather.
//!
//! The register is a single atomic byte behind an `Arc`, so a feed thread can
//! write it between frames while the game reads it without locking.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WeatherKind {
    #[default]
    Sunny,
    Cloudy,
    Rainy,
}

impl WeatherKind {
    pub const ALL: [WeatherKind; 3] = [WeatherKind::Sunny, WeatherKind::Cloudy, WeatherKind::Rainy];

    /// Map an external integer code (0 sunny, 1 cloudy, 2 rainy).
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(WeatherKind::Sunny),
            1 => Some(WeatherKind::Cloudy),
            2 => Some(WeatherKind::Rainy),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            WeatherKind::Sunny => 0,
            WeatherKind::Cloudy => 1,
            WeatherKind::Rainy => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            WeatherKind::Sunny => "Sunny",
            WeatherKind::Cloudy => "Cloudy",
            WeatherKind::Rainy => "Rainy",
        }
    }
}

impl fmt::Display for WeatherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts a name ("rainy", "Rain", ...) or an in-range integer code.
impl FromStr for WeatherKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(code) = s.parse::<i32>() {
            return WeatherKind::from_code(code)
                .ok_or_else(|| format!("weather code {} out of range (expected 0, 1 or 2)", code));
        }
        match s.to_lowercase().as_str() {
            "sunny" | "sun" | "clear" => Ok(WeatherKind::Sunny),
            "cloudy" | "cloud" | "overcast" => Ok(WeatherKind::Cloudy),
            "rainy" | "rain" => Ok(WeatherKind::Rainy),
            _ => Err(format!("unknown weather '{}'", s)),
        }
    }
}

/// Handle to the process-wide weather value. Clones share the same register.
#[derive(Clone, Debug, Default)]
pub struct WeatherState {
    code: Arc<AtomicU8>,
}

impl WeatherState {
    pub fn new(kind: WeatherKind) -> Self {
        Self {
            code: Arc::new(AtomicU8::new(kind.code())),
        }
    }

    pub fn get(&self) -> WeatherKind {
        // Only valid codes are ever stored.
        WeatherKind::from_code(self.code.load(Ordering::Relaxed) as i32).unwrap_or_default()
    }

    pub fn set(&self, kind: WeatherKind) {
        self.code.store(kind.code(), Ordering::Relaxed);
    }

    /// Integer ingress for external weather reports.
    ///
    /// Codes outside 0..=2 fall back to `Sunny`, matching how spawning has
    /// always treated unknown kinds.
    pub fn set_code(&self, code: i32) {
        let kind = WeatherKind::from_code(code).unwrap_or_else(|| {
            log::warn!("weather code {} out of range, using Sunny", code);
            WeatherKind::Sunny
        });
        self.set(kind);
    }
}
