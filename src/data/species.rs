//! Plant species definitions.

use crate::shared::*;

/// Populate the SpeciesRegistry with all growable species.
///
/// Frame indices point into assets/sprites/plants.png (6 cols × 2 rows of
/// 64×64 cells): corn occupies row 0, tomato row 1. Six frames each, so both
/// species mature at age 5; corn gains a full year of age per watered day
/// while tomato takes roughly half again as long.
pub fn populate_species(registry: &mut SpeciesRegistry) {
    let all = [
        SpeciesDef {
            id: "corn".into(),
            name: "Corn".into(),
            frames: vec![0, 1, 2, 3, 4, 5],
            grow_speed: 1.0,
            anchor_lift: 16.0,
        },
        SpeciesDef {
            id: "tomato".into(),
            name: "Tomato".into(),
            frames: vec![6, 7, 8, 9, 10, 11],
            grow_speed: 0.7,
            anchor_lift: 8.0,
        },
    ];

    for def in all {
        registry.species.insert(def.id.clone(), def);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_species_has_a_seedling_and_a_mature_frame() {
        let mut registry = SpeciesRegistry::default();
        populate_species(&mut registry);
        assert!(!registry.species.is_empty());
        for def in registry.species.values() {
            assert!(def.frames.len() >= 2, "{} needs at least 2 frames", def.id);
            assert!(def.grow_speed > 0.0);
            assert_eq!(def.max_age(), def.frames.len() as f32 - 1.0);
        }
    }
}
