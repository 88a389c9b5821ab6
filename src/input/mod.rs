//! Input bridge — translates raw mouse/keyboard state into the shared
//! events the simulation consumes. Deliberately thin: everything below the
//! event layer is input-agnostic.
//!
//!   1..3  select hoe / watering can / axe
//!   4, 5  select corn / tomato seeds
//!   click use the selected tool or seed at the cursor
//!   space harvest at the cursor
//!   enter sleep (end the day)

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::shared::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Tool(ToolKind),
    Seeds(SpeciesId),
}

#[derive(Resource, Debug, Clone)]
pub struct SelectedTool(pub Selection);

impl Default for SelectedTool {
    fn default() -> Self {
        Self(Selection::Tool(ToolKind::Hoe))
    }
}

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SelectedTool>().add_systems(
            Update,
            (switch_selection, use_at_cursor, end_day).run_if(in_state(GameState::Playing)),
        );
    }
}

fn switch_selection(keys: Res<ButtonInput<KeyCode>>, mut selected: ResMut<SelectedTool>) {
    if keys.just_pressed(KeyCode::Digit1) {
        selected.0 = Selection::Tool(ToolKind::Hoe);
    } else if keys.just_pressed(KeyCode::Digit2) {
        selected.0 = Selection::Tool(ToolKind::WateringCan);
    } else if keys.just_pressed(KeyCode::Digit3) {
        selected.0 = Selection::Tool(ToolKind::Axe);
    } else if keys.just_pressed(KeyCode::Digit4) {
        selected.0 = Selection::Seeds("corn".to_string());
    } else if keys.just_pressed(KeyCode::Digit5) {
        selected.0 = Selection::Seeds("tomato".to_string());
    }
}

fn use_at_cursor(
    buttons: Res<ButtonInput<MouseButton>>,
    keys: Res<ButtonInput<KeyCode>>,
    selected: Res<SelectedTool>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    mut tool_events: EventWriter<ToolUseEvent>,
    mut plant_events: EventWriter<PlantSeedEvent>,
    mut harvest_events: EventWriter<HarvestAttemptEvent>,
) {
    let Some(point) = cursor_world_point(&windows, &cameras) else {
        return;
    };

    if buttons.just_pressed(MouseButton::Left) {
        match &selected.0 {
            Selection::Tool(tool) => {
                tool_events.send(ToolUseEvent { tool: *tool, point });
            }
            Selection::Seeds(species) => {
                plant_events.send(PlantSeedEvent {
                    point,
                    species: species.clone(),
                });
            }
        }
    }

    if keys.just_pressed(KeyCode::Space) {
        harvest_events.send(HarvestAttemptEvent { point });
    }
}

fn end_day(keys: Res<ButtonInput<KeyCode>>, mut day_end_events: EventWriter<DayEndEvent>) {
    if keys.just_pressed(KeyCode::Enter) {
        day_end_events.send(DayEndEvent);
    }
}

fn cursor_world_point(
    windows: &Query<&Window, With<PrimaryWindow>>,
    cameras: &Query<(&Camera, &GlobalTransform)>,
) -> Option<Vec2> {
    let window = windows.get_single().ok()?;
    let (camera, camera_transform) = cameras.get_single().ok()?;
    let cursor = window.cursor_position()?;
    camera.viewport_to_world_2d(camera_transform, cursor).ok()
}
