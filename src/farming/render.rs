//! View-entity maintenance — soil tile views and water overlays.
//!
//! Both entity kinds are projections of `SoilGrid` state and are never read
//! back as truth: soil views are destroyed and recreated wholesale on every
//! tilling change, water overlays are created per newly-watered cell and
//! destroyed in bulk when the water is cleared.

use bevy::prelude::*;
use rand::Rng;

use crate::shared::*;
use super::grid::SoilGrid;
use super::{FarmViews, FarmingAtlases, SoilTileView, WaterOverlay};

/// Throw away every soil tile view and respawn one per tilled cell with its
/// freshly classified shape.
pub fn rebuild_soil_tiles(
    commands: &mut Commands,
    grid: &SoilGrid,
    views: &mut FarmViews,
    atlases: &FarmingAtlases,
) {
    for entity in views.soil_tiles.drain(..) {
        commands.entity(entity).despawn();
    }

    for (x, y) in grid.tilled_cells() {
        let kind = grid.classify_cell(x, y);
        let mut sprite = Sprite::from_atlas_image(
            atlases.soil_image.clone(),
            TextureAtlas {
                layout: atlases.soil_layout.clone(),
                index: kind.atlas_index(),
            },
        );
        sprite.custom_size = Some(Vec2::splat(TILE_SIZE));

        let pos = grid_to_world(x, y);
        let entity = commands
            .spawn((
                sprite,
                Transform::from_translation(pos.extend(Z_SOIL)),
                SoilTileView {
                    grid_x: x,
                    grid_y: y,
                    kind,
                },
            ))
            .id();
        views.soil_tiles.push(entity);
    }
}

/// Spawn one water overlay on a newly-watered cell, with a random frame from
/// the soil-water sequence.
pub fn spawn_water_overlay(
    commands: &mut Commands,
    views: &mut FarmViews,
    atlases: &FarmingAtlases,
    cell: (i32, i32),
) {
    let frame = rand::thread_rng().gen_range(0..atlases.water_frames.max(1));
    let mut sprite = Sprite::from_atlas_image(
        atlases.water_image.clone(),
        TextureAtlas {
            layout: atlases.water_layout.clone(),
            index: frame,
        },
    );
    sprite.custom_size = Some(Vec2::splat(TILE_SIZE));

    let pos = grid_to_world(cell.0, cell.1);
    let entity = commands
        .spawn((
            sprite,
            Transform::from_translation(pos.extend(Z_SOIL_WATER)),
            WaterOverlay {
                grid_x: cell.0,
                grid_y: cell.1,
            },
        ))
        .id();
    views.water_overlays.insert(cell, entity);
}

/// Despawn every water overlay.
pub fn clear_water_overlays(commands: &mut Commands, views: &mut FarmViews) {
    for (_, entity) in views.water_overlays.drain() {
        commands.entity(entity).despawn();
    }
}
