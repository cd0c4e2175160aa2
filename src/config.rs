//! Command-line configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::weather::WeatherKind;

#[derive(Parser, Debug, Clone)]
#[command(name = "weather_dodge")]
#[command(about = "Dodge the falling weather in your terminal")]
pub struct Config {
    /// Weather before any report arrives (sunny, cloudy, rainy or 0-2)
    #[arg(long, default_value_t = WeatherKind::Sunny)]
    pub weather: WeatherKind,
    /// File holding the current weather report, polled in the background
    #[arg(long)]
    pub weather_file: Option<PathBuf>,
    /// How often to poll the weather file, in milliseconds
    #[arg(long, default_value_t = 500)]
    pub weather_poll_ms: u64,
    /// Target frames per second
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..=240))]
    pub fps: u32,
    /// Write logs here (the terminal is busy drawing the game)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.fps as f64)
    }

    pub fn weather_poll_interval(&self) -> Duration {
        Duration::from_millis(self.weather_poll_ms.max(10))
    }
}
