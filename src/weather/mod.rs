//! Weather domain — the daily rain roll.
//!
//! Rain is a single global flag. It is rolled once per day when the player
//! sleeps; the farming domain reads it at till-time and reacts to
//! `RainStartedEvent` by soaking every tilled cell.

use bevy::prelude::*;
use rand::Rng;

use crate::shared::*;

pub struct WeatherPlugin;

impl Plugin for WeatherPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            reroll_weather_on_day_end.run_if(in_state(GameState::Playing)),
        );
    }
}

pub fn reroll_weather_on_day_end(
    mut day_end_events: EventReader<DayEndEvent>,
    mut weather: ResMut<WeatherState>,
    mut rain_events: EventWriter<RainStartedEvent>,
) {
    for _ in day_end_events.read() {
        weather.raining = rand::thread_rng().gen_bool(RAIN_CHANCE);
        if weather.raining {
            rain_events.send(RainStartedEvent);
        }
    }
}
