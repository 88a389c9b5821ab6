//! Trees — choppable resource entities with fruit and a stump afterlife.

use bevy::prelude::*;
use rand::Rng;

use crate::shared::*;
use super::TreeImages;

const FRUIT_SIZE: f32 = 20.0;
/// Stump collision trim, matching the narrower base left after the fall.
const STUMP_HITBOX_TRIM_X: f32 = 10.0;
const STUMP_HITBOX_TRIM_Y: f32 = 0.6;

// ─────────────────────────────────────────────────────────────────────────────
// Size properties
// ─────────────────────────────────────────────────────────────────────────────

impl TreeSize {
    pub fn sprite_size(self) -> Vec2 {
        match self {
            TreeSize::Small => Vec2::new(64.0, 96.0),
            TreeSize::Large => Vec2::new(96.0, 128.0),
        }
    }

    pub fn stump_size(self) -> Vec2 {
        match self {
            TreeSize::Small => Vec2::new(40.0, 44.0),
            TreeSize::Large => Vec2::new(60.0, 56.0),
        }
    }

    /// Wood credited when the tree falls.
    pub fn wood_yield(self) -> u32 {
        match self {
            TreeSize::Small => 1,
            TreeSize::Large => 2,
        }
    }

    /// Fruit attachment slots, in pixels from the sprite's top-left corner
    /// (x right, y down).
    pub fn fruit_slots(self) -> &'static [(f32, f32)] {
        match self {
            TreeSize::Small => &[
                (18.0, 18.0),
                (30.0, 38.0),
                (12.0, 50.0),
                (38.0, 46.0),
                (22.0, 30.0),
                (40.0, 14.0),
            ],
            TreeSize::Large => &[
                (30.0, 24.0),
                (60.0, 66.0),
                (50.0, 50.0),
                (16.0, 40.0),
                (45.0, 12.0),
                (42.0, 70.0),
            ],
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Components
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Component, Debug, Clone)]
pub struct Tree {
    pub size: TreeSize,
    pub health: u8,
    pub alive: bool,
    /// Window after a hit during which further chops are ignored.
    pub invuln: Timer,
}

impl Tree {
    pub fn new(size: TreeSize) -> Self {
        let mut invuln = Timer::from_seconds(TREE_INVULN_SECS, TimerMode::Once);
        // Start expired so the first chop lands.
        invuln.tick(invuln.duration());
        Self {
            size,
            health: TREE_START_HEALTH,
            alive: true,
            invuln,
        }
    }
}

/// A fruit hanging off a tree.
#[derive(Component, Debug, Clone)]
pub struct Fruit {
    pub tree: Entity,
}

// ─────────────────────────────────────────────────────────────────────────────
// Spawning
// ─────────────────────────────────────────────────────────────────────────────

/// Spawn trees from the farm map, each with a random sprinkling of fruit.
pub fn spawn_trees(mut commands: Commands, farm_map: Res<FarmMap>, images: Res<TreeImages>) {
    let mut rng = rand::thread_rng();

    for &(x, y, size) in &farm_map.trees {
        let sprite_size = size.sprite_size();
        let base = cell_bottom_center(x, y);
        let translation = Vec3::new(base.x, base.y + sprite_size.y * 0.5, Z_MAIN);

        let mut sprite = Sprite::from_image(images.trunk(size));
        sprite.custom_size = Some(sprite_size);

        let tree = commands
            .spawn((
                sprite,
                Transform::from_translation(translation),
                Tree::new(size),
                Hitbox {
                    size: Vec2::new(sprite_size.x * 0.8, sprite_size.y * 0.25),
                },
            ))
            .id();

        for &slot in size.fruit_slots() {
            if rng.gen_range(0..=10) < 2 {
                spawn_fruit(&mut commands, &images, tree, translation, sprite_size, slot);
            }
        }
    }
}

fn spawn_fruit(
    commands: &mut Commands,
    images: &TreeImages,
    tree: Entity,
    tree_translation: Vec3,
    tree_size: Vec2,
    slot: (f32, f32),
) {
    let top_left = Vec2::new(
        tree_translation.x - tree_size.x * 0.5,
        tree_translation.y + tree_size.y * 0.5,
    );
    let mut sprite = Sprite::from_image(images.apple.clone());
    sprite.custom_size = Some(Vec2::splat(FRUIT_SIZE));

    commands.spawn((
        sprite,
        Transform::from_xyz(top_left.x + slot.0, top_left.y - slot.1, Z_FRUIT),
        Fruit { tree },
    ));
}

// ─────────────────────────────────────────────────────────────────────────────
// Damage
// ─────────────────────────────────────────────────────────────────────────────

pub fn tick_tree_invulnerability(time: Res<Time>, mut trees: Query<&mut Tree>) {
    for mut tree in trees.iter_mut() {
        tree.invuln.tick(time.delta());
    }
}

/// Axe swings chop the tree under the point. Each landed hit knocks one
/// health off and shakes loose a random fruit if any remain.
pub fn handle_axe_tool_use(
    mut tool_events: EventReader<ToolUseEvent>,
    mut trees: Query<(Entity, &mut Tree, &Sprite, &Transform)>,
    fruit: Query<(Entity, &Fruit, &Sprite, &Transform)>,
    mut commands: Commands,
    mut pickup_events: EventWriter<ItemPickupEvent>,
    mut sfx_events: EventWriter<PlaySfxEvent>,
) {
    for event in tool_events.read() {
        if event.tool != ToolKind::Axe {
            continue;
        }

        for (entity, mut tree, sprite, transform) in trees.iter_mut() {
            let size = sprite.custom_size.unwrap_or_else(|| tree.size.sprite_size());
            let delta = event.point - transform.translation.truncate();
            if delta.x.abs() > size.x * 0.5 || delta.y.abs() > size.y * 0.5 {
                continue;
            }

            if tree.alive && tree.invuln.finished() {
                tree.invuln.reset();
                tree.health = tree.health.saturating_sub(1);

                sfx_events.send(PlaySfxEvent {
                    sfx_id: "axe".to_string(),
                });

                shake_loose_fruit(entity, &fruit, &mut commands, &mut pickup_events);
            }
            // One tree per swing.
            break;
        }
    }
}

/// Detach one random fruit from the tree, leaving a particle where it hung
/// and crediting an apple.
fn shake_loose_fruit(
    tree: Entity,
    fruit: &Query<(Entity, &Fruit, &Sprite, &Transform)>,
    commands: &mut Commands,
    pickup_events: &mut EventWriter<ItemPickupEvent>,
) {
    let attached: Vec<_> = fruit
        .iter()
        .filter(|(_, f, _, _)| f.tree == tree)
        .collect();
    if attached.is_empty() {
        return;
    }

    let (entity, _, sprite, transform) =
        attached[rand::thread_rng().gen_range(0..attached.len())];

    commands.spawn((
        sprite.clone(),
        transform.with_translation(transform.translation.with_z(Z_PARTICLES)),
        Particle::new(PARTICLE_MILLIS),
    ));

    pickup_events.send(ItemPickupEvent {
        item_id: "apple".to_string(),
        quantity: 1,
    });

    commands.entity(entity).despawn();
}

// ─────────────────────────────────────────────────────────────────────────────
// Death
// ─────────────────────────────────────────────────────────────────────────────

/// A tree at zero health falls exactly once: a particle of the trunk, then
/// the stump takes its place on the same base line and the wood is credited.
pub fn check_tree_death(
    mut trees: Query<(Entity, &mut Tree, &mut Sprite, &mut Transform, &mut Hitbox)>,
    fruit: Query<(Entity, &Fruit)>,
    mut commands: Commands,
    mut pickup_events: EventWriter<ItemPickupEvent>,
    images: Res<TreeImages>,
) {
    for (entity, mut tree, mut sprite, mut transform, mut hitbox) in trees.iter_mut() {
        if !tree.alive || tree.health > 0 {
            continue;
        }

        let old_size = sprite.custom_size.unwrap_or_else(|| tree.size.sprite_size());

        commands.spawn((
            sprite.clone(),
            transform.with_translation(transform.translation.with_z(Z_PARTICLES)),
            Particle::new(300),
        ));

        // Swap in the stump, keeping the bottom-centre anchor.
        let bottom = transform.translation.y - old_size.y * 0.5;
        let stump_size = tree.size.stump_size();
        sprite.image = images.stump(tree.size);
        sprite.texture_atlas = None;
        sprite.custom_size = Some(stump_size);
        transform.translation.y = bottom + stump_size.y * 0.5;

        hitbox.size = Vec2::new(
            stump_size.x - STUMP_HITBOX_TRIM_X,
            stump_size.y * (1.0 - STUMP_HITBOX_TRIM_Y),
        );

        tree.alive = false;

        pickup_events.send(ItemPickupEvent {
            item_id: "wood".to_string(),
            quantity: tree.size.wood_yield(),
        });

        // Any fruit still hanging falls with the tree.
        for (fruit_entity, f) in fruit.iter() {
            if f.tree == entity {
                commands.entity(fruit_entity).despawn();
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wood_yield_by_size() {
        assert_eq!(TreeSize::Small.wood_yield(), 1);
        assert_eq!(TreeSize::Large.wood_yield(), 2);
    }

    #[test]
    fn fruit_slots_fit_inside_the_sprite() {
        for size in [TreeSize::Small, TreeSize::Large] {
            let bounds = size.sprite_size();
            for &(x, y) in size.fruit_slots() {
                assert!(x >= 0.0 && x <= bounds.x, "{:?} slot x {}", size, x);
                assert!(y >= 0.0 && y <= bounds.y, "{:?} slot y {}", size, y);
            }
        }
    }

    #[test]
    fn new_trees_take_the_first_hit() {
        let tree = Tree::new(TreeSize::Small);
        assert!(tree.invuln.finished());
        assert_eq!(tree.health, TREE_START_HEALTH);
        assert!(tree.alive);
    }
}
