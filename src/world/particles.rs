//! Expiry for transient particle sprites.

use bevy::prelude::*;

use crate::shared::Particle;

pub fn expire_particles(
    time: Res<Time>,
    mut particles: Query<(Entity, &mut Particle)>,
    mut commands: Commands,
) {
    for (entity, mut particle) in particles.iter_mut() {
        particle.timer.tick(time.delta());
        if particle.timer.finished() {
            commands.entity(entity).despawn();
        }
    }
}
