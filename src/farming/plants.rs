//! Plant entities and their growth state machine.

use bevy::prelude::*;

use crate::shared::*;
use super::grid::SoilGrid;
use super::{FarmViews, FarmingAtlases};

/// Width trimmed off a sprouted plant's collision box.
const PLANT_HITBOX_TRIM_X: f32 = 26.0;
/// Fraction of the sprite height removed from the collision box.
const PLANT_HITBOX_TRIM_Y: f32 = 0.4;

// ─────────────────────────────────────────────────────────────────────────────
// Plant component
// ─────────────────────────────────────────────────────────────────────────────

/// A growing plant, bound to exactly one tilled cell. The cell back-reference
/// is non-owning; the grid's PLANT tag enforces one plant per cell.
#[derive(Component, Debug, Clone)]
pub struct Plant {
    pub species: SpeciesId,
    pub cell: (i32, i32),
    pub age: f32,
    pub max_age: f32,
    pub grow_speed: f32,
    pub harvestable: bool,
}

impl Plant {
    pub fn new(def: &SpeciesDef, cell: (i32, i32)) -> Self {
        Self {
            species: def.id.clone(),
            cell,
            age: 0.0,
            max_age: def.max_age(),
            grow_speed: def.grow_speed,
            harvestable: false,
        }
    }

    /// One growth tick. Age only ever moves forward and clamps at `max_age`,
    /// latching the harvestable flag. Returns true when the age changed.
    pub fn grow(&mut self, watered: bool) -> bool {
        if !watered || self.age >= self.max_age {
            return false;
        }
        self.age += self.grow_speed;
        if self.age >= self.max_age {
            self.age = self.max_age;
            self.harvestable = true;
        }
        true
    }

    /// Current sprite frame within the species' sequence.
    pub fn frame(&self) -> usize {
        self.age.floor() as usize
    }

    /// A plant breaks the soil surface once its integer age passes zero;
    /// from then on it renders on the main layer and blocks movement.
    pub fn sprouted(&self) -> bool {
        self.frame() > 0
    }
}

/// Sprite anchor for a plant on `cell`: bottom-centre of the cell, lifted by
/// the species offset, with the z layer picked from the sprout state.
pub fn plant_transform(cell: (i32, i32), lift: f32, sprouted: bool) -> Transform {
    let base = cell_bottom_center(cell.0, cell.1);
    let z = if sprouted { Z_MAIN } else { Z_GROUND_PLANT };
    Transform::from_xyz(base.x, base.y + lift + TILE_SIZE * 0.5, z)
}

// ─────────────────────────────────────────────────────────────────────────────
// Planting
// ─────────────────────────────────────────────────────────────────────────────

pub fn handle_plant_seed(
    mut plant_events: EventReader<PlantSeedEvent>,
    mut grid: ResMut<SoilGrid>,
    mut views: ResMut<FarmViews>,
    mut commands: Commands,
    mut sfx_events: EventWriter<PlaySfxEvent>,
    registry: Res<SpeciesRegistry>,
    atlases: Res<FarmingAtlases>,
) {
    for event in plant_events.read() {
        let Some(def) = registry.get(&event.species) else {
            continue;
        };
        let Some(&seedling_frame) = def.frames.first() else {
            continue;
        };

        // The grid refuses untilled or already-planted cells.
        let Some(cell) = grid.plant_at(event.point) else {
            continue;
        };

        sfx_events.send(PlaySfxEvent {
            sfx_id: "plant".to_string(),
        });

        let plant = Plant::new(def, cell);
        let mut sprite = Sprite::from_atlas_image(
            atlases.plants_image.clone(),
            TextureAtlas {
                layout: atlases.plants_layout.clone(),
                index: seedling_frame,
            },
        );
        sprite.custom_size = Some(Vec2::splat(TILE_SIZE));

        let entity = commands
            .spawn((sprite, plant_transform(cell, def.anchor_lift, false), plant))
            .id();
        views.plants.insert(cell, entity);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Growth pass (called from events_handler::on_day_end)
// ─────────────────────────────────────────────────────────────────────────────

/// Advance every plant whose cell is watered, syncing sprite frame, anchor,
/// layer, and collision box.
pub fn grow_all(
    commands: &mut Commands,
    grid: &SoilGrid,
    registry: &SpeciesRegistry,
    plants: &mut Query<(Entity, &mut Plant, &mut Sprite, &mut Transform, Option<&Hitbox>)>,
) {
    for (entity, mut plant, mut sprite, mut transform, hitbox) in plants.iter_mut() {
        let watered = grid.is_watered_cell(plant.cell.0, plant.cell.1);
        if !plant.grow(watered) {
            continue;
        }

        let Some(def) = registry.get(&plant.species) else {
            continue;
        };

        if let Some(atlas) = sprite.texture_atlas.as_mut() {
            if let Some(&frame) = def.frames.get(plant.frame()).or(def.frames.last()) {
                atlas.index = frame;
            }
        }

        // Re-anchor on every frame change; the layer switch is one-way
        // because sprouted() can never go back to false.
        *transform = plant_transform(plant.cell, def.anchor_lift, plant.sprouted());

        if plant.sprouted() && hitbox.is_none() {
            commands.entity(entity).insert(Hitbox {
                size: Vec2::new(
                    TILE_SIZE - PLANT_HITBOX_TRIM_X,
                    TILE_SIZE * (1.0 - PLANT_HITBOX_TRIM_Y),
                ),
            });
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Harvest
// ─────────────────────────────────────────────────────────────────────────────

pub fn handle_harvest_attempt(
    mut harvest_events: EventReader<HarvestAttemptEvent>,
    mut grid: ResMut<SoilGrid>,
    mut views: ResMut<FarmViews>,
    mut commands: Commands,
    mut pickup_events: EventWriter<ItemPickupEvent>,
    plants: Query<(&Plant, &Sprite, &Transform)>,
) {
    for event in harvest_events.read() {
        let cell = world_to_grid(event.point);
        let Some(&entity) = views.plants.get(&cell) else {
            continue;
        };
        let Ok((plant, sprite, transform)) = plants.get(entity) else {
            continue;
        };
        if !plant.harvestable {
            continue;
        }

        pickup_events.send(ItemPickupEvent {
            item_id: plant.species.clone(),
            quantity: 1,
        });

        // Leave a brief afterimage where the plant stood.
        commands.spawn((
            sprite.clone(),
            transform.with_translation(transform.translation.with_z(Z_PARTICLES)),
            Particle::new(PARTICLE_MILLIS),
        ));

        commands.entity(entity).despawn();
        views.plants.remove(&cell);
        grid.clear_plant(cell.0, cell.1);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn test_species(grow_speed: f32, frames: usize) -> SpeciesDef {
        SpeciesDef {
            id: "test".to_string(),
            name: "Test".to_string(),
            frames: (0..frames).collect(),
            grow_speed,
            anchor_lift: 0.0,
        }
    }

    #[test]
    fn unwatered_plants_do_not_grow() {
        let def = test_species(1.0, 6);
        let mut plant = Plant::new(&def, (0, 0));
        for _ in 0..10 {
            assert!(!plant.grow(false));
        }
        assert_eq!(plant.age, 0.0);
        assert!(!plant.harvestable);
    }

    #[test]
    fn age_is_min_of_ticks_times_speed_and_max() {
        let def = test_species(0.7, 6); // max_age = 5
        let mut plant = Plant::new(&def, (0, 0));
        for k in 1..=10 {
            plant.grow(true);
            let expected = (k as f32 * 0.7).min(5.0);
            assert!(
                (plant.age - expected).abs() < 1e-5,
                "after {} ticks expected {} got {}",
                k,
                expected,
                plant.age
            );
            assert_eq!(plant.harvestable, plant.age == 5.0);
        }
        assert_eq!(plant.age, 5.0, "age clamps at max");
    }

    #[test]
    fn harvestable_latches_exactly_at_max_age() {
        let def = test_species(1.0, 4); // max_age = 3
        let mut plant = Plant::new(&def, (2, 2));
        plant.grow(true);
        plant.grow(true);
        assert!(!plant.harvestable, "not harvestable below max age");
        plant.grow(true);
        assert!(plant.harvestable);
        assert!(!plant.grow(true), "mature plants no longer change");
        assert_eq!(plant.age, 3.0);
    }

    #[test]
    fn sprout_threshold_is_integer_age_above_zero() {
        let def = test_species(0.7, 6);
        let mut plant = Plant::new(&def, (0, 0));
        assert!(!plant.sprouted());
        plant.grow(true); // age 0.7 → still frame 0
        assert!(!plant.sprouted());
        plant.grow(true); // age 1.4 → frame 1
        assert!(plant.sprouted());
    }
}
