//! Handler for the cross-domain DayEndEvent.
//!
//! Overnight order matters: plants drink the water that was standing when
//! the day ended, and only then does the soil dry out. Any rain for the new
//! day arrives afterwards via RainStartedEvent from the weather domain.

use bevy::prelude::*;

use crate::shared::*;
use super::grid::SoilGrid;
use super::plants::{grow_all, Plant};
use super::render::clear_water_overlays;
use super::FarmViews;

pub fn on_day_end(
    mut day_end_events: EventReader<DayEndEvent>,
    mut grid: ResMut<SoilGrid>,
    mut views: ResMut<FarmViews>,
    mut commands: Commands,
    mut plants: Query<(Entity, &mut Plant, &mut Sprite, &mut Transform, Option<&Hitbox>)>,
    registry: Res<SpeciesRegistry>,
) {
    for _ in day_end_events.read() {
        grow_all(&mut commands, &grid, &registry, &mut plants);

        grid.remove_water();
        clear_water_overlays(&mut commands, &mut views);
    }
}
