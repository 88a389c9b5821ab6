mod shared;
mod input;
mod farming;
mod world;
mod weather;
mod inventory;
mod audio;
mod data;

use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};

use shared::*;

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Sproutfield".into(),
                        resolution: WindowResolution::new(SCREEN_WIDTH, SCREEN_HEIGHT),
                        present_mode: PresentMode::AutoVsync,
                        resizable: true,
                        ..default()
                    }),
                    ..default()
                })
                .set(ImagePlugin::default_nearest()),
        )
        // Game state
        .init_state::<GameState>()
        // Shared resources
        .init_resource::<Inventory>()
        .init_resource::<WeatherState>()
        .init_resource::<SpeciesRegistry>()
        .init_resource::<FarmMap>()
        // Events
        .add_event::<ToolUseEvent>()
        .add_event::<PlantSeedEvent>()
        .add_event::<HarvestAttemptEvent>()
        .add_event::<DayEndEvent>()
        .add_event::<RainStartedEvent>()
        .add_event::<ItemPickupEvent>()
        .add_event::<PlaySfxEvent>()
        // Domain plugins
        .add_plugins(data::DataPlugin)
        .add_plugins(farming::FarmingPlugin)
        .add_plugins(world::WorldPlugin)
        .add_plugins(weather::WeatherPlugin)
        .add_plugins(inventory::InventoryPlugin)
        .add_plugins(audio::GameAudioPlugin)
        .add_plugins(input::InputPlugin)
        // Camera
        .add_systems(Startup, setup_camera)
        .run();
}

fn setup_camera(mut commands: Commands) {
    // Centre the view on the farm layout (20×14 tiles, map y grows down).
    commands.spawn((
        Camera2d,
        Transform::from_xyz(9.5 * TILE_SIZE, -6.5 * TILE_SIZE, 0.0),
    ));
}
