//! Soil tilling and watering systems.

use bevy::prelude::*;

use crate::shared::*;
use super::grid::SoilGrid;
use super::render::{rebuild_soil_tiles, spawn_water_overlay};
use super::{FarmViews, FarmingAtlases};

// ─────────────────────────────────────────────────────────────────────────────
// Hoe — till a farmable tile
// ─────────────────────────────────────────────────────────────────────────────

pub fn handle_hoe_tool_use(
    mut tool_events: EventReader<ToolUseEvent>,
    mut grid: ResMut<SoilGrid>,
    mut views: ResMut<FarmViews>,
    mut commands: Commands,
    mut sfx_events: EventWriter<PlaySfxEvent>,
    weather: Res<WeatherState>,
    atlases: Res<FarmingAtlases>,
) {
    for event in tool_events.read() {
        if event.tool != ToolKind::Hoe {
            continue;
        }

        // Breaking soil is the only thing that changes the tile adjacency
        // pattern, so a successful till triggers exactly one rebuild.
        let Some(_cell) = grid.till(event.point) else {
            continue;
        };

        sfx_events.send(PlaySfxEvent {
            sfx_id: "hoe".to_string(),
        });

        rebuild_soil_tiles(&mut commands, &grid, &mut views, &atlases);

        // Rain soaks fresh soil immediately.
        if weather.raining {
            for cell in grid.water_all() {
                spawn_water_overlay(&mut commands, &mut views, &atlases, cell);
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Watering can — water a tilled tile
// ─────────────────────────────────────────────────────────────────────────────

/// Watering has no dedicated sound cue; the can's pour loop belongs to the
/// player's tool animation, outside this domain.
pub fn handle_watering_can_tool_use(
    mut tool_events: EventReader<ToolUseEvent>,
    mut grid: ResMut<SoilGrid>,
    mut views: ResMut<FarmViews>,
    mut commands: Commands,
    atlases: Res<FarmingAtlases>,
) {
    for event in tool_events.read() {
        if event.tool != ToolKind::WateringCan {
            continue;
        }

        if let Some(cell) = grid.water_at(event.point) {
            spawn_water_overlay(&mut commands, &mut views, &atlases, cell);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Rain — bulk watering
// ─────────────────────────────────────────────────────────────────────────────

pub fn handle_rain_started(
    mut rain_events: EventReader<RainStartedEvent>,
    mut grid: ResMut<SoilGrid>,
    mut views: ResMut<FarmViews>,
    mut commands: Commands,
    atlases: Res<FarmingAtlases>,
) {
    for _ in rain_events.read() {
        for cell in grid.water_all() {
            spawn_water_overlay(&mut commands, &mut views, &atlases, cell);
        }
    }
}
