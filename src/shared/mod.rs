//! Shared components, resources, events, and states for Sproutfield.
//!
//! This is the type contract. Every domain plugin imports from here.
//! No domain imports from any other domain directly.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ═══════════════════════════════════════════════════════════════════════
// GAME STATE — top-level state machine
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, States, Default)]
pub enum GameState {
    #[default]
    Loading,
    Playing,
}

// ═══════════════════════════════════════════════════════════════════════
// TOOLS
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolKind {
    Hoe,
    WateringCan,
    Axe,
}

// ═══════════════════════════════════════════════════════════════════════
// SPECIES — plant definitions loaded at boot
// ═══════════════════════════════════════════════════════════════════════

/// Unique identifier for a plant species. String ids keep the registry
/// data-driven; the harvested crop item shares the same id.
pub type SpeciesId = String;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesDef {
    pub id: SpeciesId,
    pub name: String,
    /// Atlas indices of the growth frames, seedling first. The plant is
    /// mature once its age reaches the last frame.
    pub frames: Vec<usize>,
    /// Age gained per watered growth tick.
    pub grow_speed: f32,
    /// How far (in pixels) the sprite's base sits above the bottom edge of
    /// its soil cell.
    pub anchor_lift: f32,
}

impl SpeciesDef {
    /// Maximum age, in frames. `frames.len() - 1` so frame 0 is the seedling.
    pub fn max_age(&self) -> f32 {
        self.frames.len().saturating_sub(1) as f32
    }
}

#[derive(Resource, Debug, Clone, Default)]
pub struct SpeciesRegistry {
    pub species: HashMap<SpeciesId, SpeciesDef>,
}

impl SpeciesRegistry {
    pub fn get(&self, id: &str) -> Option<&SpeciesDef> {
        self.species.get(id)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// FARM MAP — seed data from the map source
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TreeSize {
    Small,
    Large,
}

/// The farmable-tile layer and object placements for the farm, produced once
/// at boot by the data plugin. Grid coordinates use map convention: x grows
/// right, y grows down, (0, 0) is the top-left tile.
#[derive(Resource, Debug, Clone, Default)]
pub struct FarmMap {
    pub width: i32,
    pub height: i32,
    pub farmable: Vec<(i32, i32)>,
    pub trees: Vec<(i32, i32, TreeSize)>,
}

// ═══════════════════════════════════════════════════════════════════════
// INVENTORY
// ═══════════════════════════════════════════════════════════════════════

/// Item kinds are plain string ids ("corn", "apple", "wood", ...).
pub type ItemId = String;

#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    pub items: HashMap<ItemId, u32>,
}

impl Inventory {
    pub fn add(&mut self, item_id: &str, quantity: u32) {
        *self.items.entry(item_id.to_string()).or_insert(0) += quantity;
    }

    pub fn count(&self, item_id: &str) -> u32 {
        self.items.get(item_id).copied().unwrap_or(0)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// WEATHER
// ═══════════════════════════════════════════════════════════════════════

/// Whether it is currently raining. Rolled once per day; the farming domain
/// reads it when tilling (rain immediately waters fresh soil).
#[derive(Resource, Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct WeatherState {
    pub raining: bool,
}

// ═══════════════════════════════════════════════════════════════════════
// COLLISION
// ═══════════════════════════════════════════════════════════════════════

/// Axis-aligned collision box centred on the entity's translation.
/// Consumed by movement/collision systems outside this crate's core.
#[derive(Component, Debug, Clone, Copy)]
pub struct Hitbox {
    pub size: Vec2,
}

// ═══════════════════════════════════════════════════════════════════════
// PARTICLES
// ═══════════════════════════════════════════════════════════════════════

/// Short-lived effect sprite. Any domain may spawn one; the world domain's
/// expiry system despawns it when the timer runs out.
#[derive(Component, Debug, Clone)]
pub struct Particle {
    pub timer: Timer,
}

impl Particle {
    pub fn new(millis: u64) -> Self {
        Self {
            timer: Timer::new(std::time::Duration::from_millis(millis), TimerMode::Once),
        }
    }
}

/// Default particle lifetime.
pub const PARTICLE_MILLIS: u64 = 200;

// ═══════════════════════════════════════════════════════════════════════
// GRID ↔ WORLD MAPPING
// ═══════════════════════════════════════════════════════════════════════

/// World-space centre of the tile at grid (x, y). Map y grows down, world y
/// grows up, so rows are mirrored.
pub fn grid_to_world(x: i32, y: i32) -> Vec2 {
    Vec2::new(x as f32 * TILE_SIZE, -(y as f32) * TILE_SIZE)
}

/// Grid cell containing a world-space point. The result may be out of the
/// map's bounds; callers look it up through the grid, which bounds-guards.
pub fn world_to_grid(point: Vec2) -> (i32, i32) {
    (
        ((point.x + TILE_SIZE * 0.5) / TILE_SIZE).floor() as i32,
        ((-point.y + TILE_SIZE * 0.5) / TILE_SIZE).floor() as i32,
    )
}

/// World-space bottom-centre of the tile at grid (x, y). Plants and trees
/// anchor their sprites here.
pub fn cell_bottom_center(x: i32, y: i32) -> Vec2 {
    let c = grid_to_world(x, y);
    Vec2::new(c.x, c.y - TILE_SIZE * 0.5)
}

// ═══════════════════════════════════════════════════════════════════════
// EVENTS — cross-domain communication
// ═══════════════════════════════════════════════════════════════════════

/// A tool swung at a world-space point. Out-of-range points are silently
/// ignored by every consumer.
#[derive(Event, Debug, Clone)]
pub struct ToolUseEvent {
    pub tool: ToolKind,
    pub point: Vec2,
}

/// A seed planted at a world-space point.
#[derive(Event, Debug, Clone)]
pub struct PlantSeedEvent {
    pub point: Vec2,
    pub species: SpeciesId,
}

/// The player tries to pick a mature plant at a world-space point.
#[derive(Event, Debug, Clone)]
pub struct HarvestAttemptEvent {
    pub point: Vec2,
}

/// Fired when the player sleeps. Drives plant growth, water reset, and the
/// next day's weather roll.
#[derive(Event, Debug, Clone)]
pub struct DayEndEvent;

/// Fired by the weather domain whenever a day starts rainy.
#[derive(Event, Debug, Clone)]
pub struct RainStartedEvent;

#[derive(Event, Debug, Clone)]
pub struct ItemPickupEvent {
    pub item_id: ItemId,
    pub quantity: u32,
}

#[derive(Event, Debug, Clone)]
pub struct PlaySfxEvent {
    pub sfx_id: String,
}

// ═══════════════════════════════════════════════════════════════════════
// CONSTANTS
// ═══════════════════════════════════════════════════════════════════════

pub const TILE_SIZE: f32 = 64.0;
pub const SCREEN_WIDTH: f32 = 1280.0;
pub const SCREEN_HEIGHT: f32 = 720.0;

/// Render layers, back to front.
pub const Z_GROUND: f32 = 0.0;
pub const Z_SOIL: f32 = 2.0;
pub const Z_SOIL_WATER: f32 = 3.0;
pub const Z_GROUND_PLANT: f32 = 4.0;
pub const Z_MAIN: f32 = 5.0;
pub const Z_FRUIT: f32 = 7.0;
pub const Z_PARTICLES: f32 = 8.0;

pub const TREE_START_HEALTH: u8 = 5;
/// Seconds a tree ignores further chops after taking a hit.
pub const TREE_INVULN_SECS: f32 = 0.2;

/// Daily chance of rain.
pub const RAIN_CHANCE: f64 = 0.3;
