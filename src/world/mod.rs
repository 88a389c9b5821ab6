//! World domain — trees, their fruit, and transient particle effects.
//!
//! Communicates with other domains exclusively through crate::shared
//! events/resources.

use bevy::prelude::*;

use crate::shared::*;

pub mod particles;
pub mod trees;

/// Image handles for tree sprites. Trees use whole images rather than an
/// atlas because the two sizes have different dimensions.
#[derive(Resource, Default)]
pub struct TreeImages {
    pub loaded: bool,
    pub small: Handle<Image>,
    pub large: Handle<Image>,
    pub stump_small: Handle<Image>,
    pub stump_large: Handle<Image>,
    pub apple: Handle<Image>,
}

impl TreeImages {
    pub fn trunk(&self, size: TreeSize) -> Handle<Image> {
        match size {
            TreeSize::Small => self.small.clone(),
            TreeSize::Large => self.large.clone(),
        }
    }

    pub fn stump(&self, size: TreeSize) -> Handle<Image> {
        match size {
            TreeSize::Small => self.stump_small.clone(),
            TreeSize::Large => self.stump_large.clone(),
        }
    }
}

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TreeImages>()
            .add_systems(
                OnEnter(GameState::Playing),
                (load_tree_images, trees::spawn_trees).chain(),
            )
            .add_systems(
                Update,
                (
                    trees::tick_tree_invulnerability,
                    trees::handle_axe_tool_use,
                    trees::check_tree_death,
                    particles::expire_particles,
                )
                    .run_if(in_state(GameState::Playing)),
            );
    }
}

fn load_tree_images(asset_server: Res<AssetServer>, mut images: ResMut<TreeImages>) {
    if images.loaded {
        return;
    }
    images.small = asset_server.load("sprites/tree_small.png");
    images.large = asset_server.load("sprites/tree_large.png");
    images.stump_small = asset_server.load("sprites/stump_small.png");
    images.stump_large = asset_server.load("sprites/stump_large.png");
    images.apple = asset_server.load("sprites/apple.png");
    images.loaded = true;
}
