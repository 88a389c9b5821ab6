//! Fire-and-forget sound effect playback.
//!
//! Other domains send `PlaySfxEvent` with a cue id; this module maps the id
//! to an asset path and a per-cue volume preset, then spawns a one-shot
//! audio source that despawns when finished. Unknown cues are ignored.

use bevy::audio::Volume;
use bevy::prelude::*;

use crate::shared::*;

pub struct GameAudioPlugin;

impl Plugin for GameAudioPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, handle_play_sfx);
    }
}

fn sfx_path(sfx_id: &str) -> Option<&'static str> {
    match sfx_id {
        "hoe" => Some("audio/hoe.ogg"),
        "plant" => Some("audio/plant.ogg"),
        "axe" => Some("audio/axe.ogg"),
        _ => None,
    }
}

/// Per-cue volume presets. The tool cues sit well below full scale so they
/// don't drown the ambience.
pub fn sfx_volume(sfx_id: &str) -> f32 {
    match sfx_id {
        "hoe" => 0.1,
        "plant" => 0.2,
        _ => 1.0,
    }
}

pub fn handle_play_sfx(
    mut events: EventReader<PlaySfxEvent>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
) {
    for event in events.read() {
        if let Some(path) = sfx_path(&event.sfx_id) {
            commands.spawn((
                AudioPlayer::new(asset_server.load(path)),
                PlaybackSettings::DESPAWN.with_volume(Volume::new(sfx_volume(&event.sfx_id))),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_cues_have_quiet_presets() {
        assert_eq!(sfx_volume("hoe"), 0.1);
        assert_eq!(sfx_volume("plant"), 0.2);
        assert_eq!(sfx_volume("axe"), 1.0);
        assert_eq!(sfx_volume("anything_else"), 1.0);
    }
}
