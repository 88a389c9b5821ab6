//! Data domain — populates the registries and the farm map at boot, then
//! hands control to the Playing state.

use bevy::prelude::*;

use crate::shared::*;

mod map;
mod species;

pub use map::parse_farm_map;

pub struct DataPlugin;

impl Plugin for DataPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Loading), load_game_data);
    }
}

fn load_game_data(
    mut registry: ResMut<SpeciesRegistry>,
    mut farm_map: ResMut<FarmMap>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    species::populate_species(&mut registry);
    *farm_map = map::parse_farm_map(map::FARM_LAYOUT);

    info!(
        "loaded {} plant species, {} farmable cells, {} trees",
        registry.species.len(),
        farm_map.farmable.len(),
        farm_map.trees.len()
    );

    next_state.set(GameState::Playing);
}
