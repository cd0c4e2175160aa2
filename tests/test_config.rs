use std::time::Duration;

use clap::Parser;
use weather_dodge::config::Config;
use weather_dodge::WeatherKind;

#[test]
fn defaults() {
    let c = Config::try_parse_from(["weather_dodge"]).unwrap();
    assert_eq!(c.weather, WeatherKind::Sunny);
    assert_eq!(c.fps, 60);
    assert!(c.weather_file.is_none());
    assert!(c.log_file.is_none());
    assert_eq!(c.weather_poll_interval(), Duration::from_millis(500));
}

#[test]
fn weather_by_name_or_code() {
    let c = Config::try_parse_from(["weather_dodge", "--weather", "rainy"]).unwrap();
    assert_eq!(c.weather, WeatherKind::Rainy);
    let c = Config::try_parse_from(["weather_dodge", "--weather", "1"]).unwrap();
    assert_eq!(c.weather, WeatherKind::Cloudy);
    assert!(Config::try_parse_from(["weather_dodge", "--weather", "7"]).is_err());
}

#[test]
fn fps_bounds_and_frame_time() {
    let c = Config::try_parse_from(["weather_dodge", "--fps", "30"]).unwrap();
    assert!((c.frame_duration().as_secs_f64() - 1.0 / 30.0).abs() < 1e-9);
    assert!(Config::try_parse_from(["weather_dodge", "--fps", "0"]).is_err());
}
