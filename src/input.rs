//! Per-frame input as the game sees it.
//!
//! A front end fills a `FrameInput` from whatever device it polls; key
//! bindings are its business.  Directions are "held" queries, everything else
//! is "pressed this frame".

use crate::weather::WeatherKind;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Directions {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub directions: Directions,
    pub start: bool,
    pub restart: bool,
    pub to_menu: bool,
    /// Debug overrides for the weather register.
    pub force_sunny: bool,
    pub force_cloudy: bool,
    pub force_rainy: bool,
}

impl FrameInput {
    /// Weather overrides pressed this frame, in sunny, cloudy, rainy order.
    pub fn forced_weather(&self) -> impl Iterator<Item = WeatherKind> {
        [
            (self.force_sunny, WeatherKind::Sunny),
            (self.force_cloudy, WeatherKind::Cloudy),
            (self.force_rainy, WeatherKind::Rainy),
        ]
        .into_iter()
        .filter_map(|(pressed, kind)| pressed.then_some(kind))
    }
}
