//! Farming domain — soil grid, tilling, watering, planting, plant growth.
//!
//! Communicates with other domains exclusively through crate::shared
//! events/resources. The `SoilGrid` resource is the single source of truth;
//! soil tiles and water overlays are derived view entities.

use bevy::prelude::*;
use std::collections::HashMap;

use crate::shared::*;

pub mod grid;
pub mod tiles;

pub mod plants;
pub mod events_handler;
pub mod render;
pub mod soil;

use grid::SoilGrid;
use tiles::SoilTileKind;

/// Marker component for tilled-soil view entities. Pure projections of the
/// grid — rebuilt wholesale whenever tilling changes, never mutated in place.
#[derive(Component, Debug, Clone)]
pub struct SoilTileView {
    pub grid_x: i32,
    pub grid_y: i32,
    pub kind: SoilTileKind,
}

/// Marker component for water overlay entities, one per watered cell.
#[derive(Component, Debug, Clone)]
pub struct WaterOverlay {
    pub grid_x: i32,
    pub grid_y: i32,
}

/// Owned collections of the farming domain's derived entities, keyed by grid
/// cell where the mapping matters. Soil tile views are rebuilt wholesale, so
/// a flat list suffices for them.
#[derive(Resource, Default, Debug)]
pub struct FarmViews {
    pub soil_tiles: Vec<Entity>,
    pub water_overlays: HashMap<(i32, i32), Entity>,
    pub plants: HashMap<(i32, i32), Entity>,
}

/// Texture atlas handles for farming sprites (soil shapes, water overlay
/// frames, plant growth frames). Loaded once on entering Playing.
#[derive(Resource, Default)]
pub struct FarmingAtlases {
    pub loaded: bool,
    pub soil_image: Handle<Image>,
    pub soil_layout: Handle<TextureAtlasLayout>,
    pub water_image: Handle<Image>,
    pub water_layout: Handle<TextureAtlasLayout>,
    pub water_frames: usize,
    pub plants_image: Handle<Image>,
    pub plants_layout: Handle<TextureAtlasLayout>,
}

pub struct FarmingPlugin;

impl Plugin for FarmingPlugin {
    fn build(&self, app: &mut App) {
        app
            // Internal resources
            .init_resource::<SoilGrid>()
            .init_resource::<FarmViews>()
            .init_resource::<FarmingAtlases>()
            // ------------------------------------------------------------------
            // Setup — runs once on first Playing frame
            // ------------------------------------------------------------------
            .add_systems(
                OnEnter(GameState::Playing),
                (load_farming_atlases, setup_soil_grid),
            )
            // ------------------------------------------------------------------
            // Tool/seed responses
            // ------------------------------------------------------------------
            .add_systems(
                Update,
                (
                    soil::handle_hoe_tool_use,
                    soil::handle_watering_can_tool_use,
                    soil::handle_rain_started,
                    plants::handle_plant_seed,
                    plants::handle_harvest_attempt,
                )
                    .run_if(in_state(GameState::Playing)),
            )
            // ------------------------------------------------------------------
            // DayEnd processing — growth, then overnight water reset
            // ------------------------------------------------------------------
            .add_systems(
                Update,
                events_handler::on_day_end.run_if(in_state(GameState::Playing)),
            );
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Setup systems
// ─────────────────────────────────────────────────────────────────────────────

/// Loads the farming texture atlases once when the Playing state is entered.
///
/// Assets:
///   assets/tilesets/tilled_soil.png — 256×256, 64×64 tiles, 4 cols × 4 rows
///   assets/sprites/soil_water.png   — 192×64, 64×64 tiles, 3 frames
///   assets/sprites/plants.png       — 384×128, 64×64 tiles, 6 cols × 2 rows
fn load_farming_atlases(
    asset_server: Res<AssetServer>,
    mut layouts: ResMut<Assets<TextureAtlasLayout>>,
    mut atlases: ResMut<FarmingAtlases>,
) {
    if atlases.loaded {
        return;
    }

    atlases.soil_image = asset_server.load("tilesets/tilled_soil.png");
    atlases.soil_layout = layouts.add(TextureAtlasLayout::from_grid(
        UVec2::new(64, 64),
        4,
        4,
        None,
        None,
    ));

    atlases.water_image = asset_server.load("sprites/soil_water.png");
    atlases.water_layout = layouts.add(TextureAtlasLayout::from_grid(
        UVec2::new(64, 64),
        3,
        1,
        None,
        None,
    ));
    atlases.water_frames = 3;

    atlases.plants_image = asset_server.load("sprites/plants.png");
    atlases.plants_layout = layouts.add(TextureAtlasLayout::from_grid(
        UVec2::new(64, 64),
        6,
        2,
        None,
        None,
    ));

    atlases.loaded = true;
}

/// Builds the soil grid from the farm map's farmable layer.
fn setup_soil_grid(farm_map: Res<FarmMap>, mut grid: ResMut<SoilGrid>) {
    *grid = SoilGrid::from_map(&farm_map);
}
