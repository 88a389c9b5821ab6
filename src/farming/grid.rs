//! The soil grid — per-cell tag state and its mutation rules.
//!
//! Each cell carries a fixed-size tag bitmask instead of a dynamic tag list,
//! so repeated tilling/watering cannot stack duplicate state.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::shared::*;
use super::tiles::{classify, SoilTileKind};

// ─────────────────────────────────────────────────────────────────────────────
// Cell tags
// ─────────────────────────────────────────────────────────────────────────────

/// Per-cell tag set. At most one of each tag; combinations are constrained by
/// the grid operations (WATERED and PLANT only ever appear on tilled cells).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellTags(u8);

impl CellTags {
    pub const FARMABLE: u8 = 1 << 0;
    pub const SOIL_PATCH: u8 = 1 << 1;
    pub const WATERED: u8 = 1 << 2;
    pub const PLANT: u8 = 1 << 3;

    pub fn contains(self, tag: u8) -> bool {
        self.0 & tag != 0
    }

    pub fn insert(&mut self, tag: u8) {
        self.0 |= tag;
    }

    pub fn remove(&mut self, tag: u8) {
        self.0 &= !tag;
    }

    pub fn farmable(self) -> bool {
        self.contains(Self::FARMABLE)
    }

    pub fn tilled(self) -> bool {
        self.contains(Self::SOIL_PATCH)
    }

    pub fn watered(self) -> bool {
        self.contains(Self::WATERED)
    }

    pub fn has_plant(self) -> bool {
        self.contains(Self::PLANT)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Soil grid
// ─────────────────────────────────────────────────────────────────────────────

/// Rectangular grid of soil cells. Dimensions are fixed at construction from
/// the farmable-tile map; all point-based operations bounds-guard and treat
/// out-of-range points as "no match".
#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct SoilGrid {
    width: i32,
    height: i32,
    cells: Vec<CellTags>,
}

impl SoilGrid {
    /// Build a grid sized to the farm map, seeding FARMABLE tags from its
    /// farmable-tile layer.
    pub fn from_map(map: &FarmMap) -> Self {
        let mut grid = Self {
            width: map.width,
            height: map.height,
            cells: vec![CellTags::default(); (map.width * map.height).max(0) as usize],
        };
        for &(x, y) in &map.farmable {
            if let Some(cell) = grid.get_mut(x, y) {
                cell.insert(CellTags::FARMABLE);
            }
        }
        grid
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn get(&self, x: i32, y: i32) -> Option<CellTags> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[(y * self.width + x) as usize])
    }

    fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut CellTags> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some(&mut self.cells[(y * self.width + x) as usize])
    }

    fn cell_tilled(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_some_and(|c| c.tilled())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────

    /// Till the farmable cell under `point`. Returns the cell when soil was
    /// actually broken, so the caller can reclassify tiles and play the hoe
    /// cue. Tilling an already-tilled cell (or anything non-farmable) is a
    /// no-op.
    pub fn till(&mut self, point: Vec2) -> Option<(i32, i32)> {
        let (x, y) = world_to_grid(point);
        let cell = self.get_mut(x, y)?;
        if !cell.farmable() || cell.tilled() {
            return None;
        }
        cell.insert(CellTags::SOIL_PATCH);
        Some((x, y))
    }

    /// Water the tilled cell under `point`. Returns the cell when it was
    /// newly watered, so the caller can emit one water overlay.
    pub fn water_at(&mut self, point: Vec2) -> Option<(i32, i32)> {
        let (x, y) = world_to_grid(point);
        let cell = self.get_mut(x, y)?;
        if !cell.tilled() || cell.watered() {
            return None;
        }
        cell.insert(CellTags::WATERED);
        Some((x, y))
    }

    /// Water every tilled cell that isn't already wet (rain). Returns the
    /// newly-watered cells, one water overlay each.
    pub fn water_all(&mut self) -> Vec<(i32, i32)> {
        let mut watered = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                let cell = &mut self.cells[(y * self.width + x) as usize];
                if cell.tilled() && !cell.watered() {
                    cell.insert(CellTags::WATERED);
                    watered.push((x, y));
                }
            }
        }
        watered
    }

    /// Strip WATERED from every cell. The caller despawns the overlays.
    pub fn remove_water(&mut self) {
        for cell in &mut self.cells {
            cell.remove(CellTags::WATERED);
        }
    }

    /// Mark the tilled cell under `point` as planted. Returns the cell when
    /// a plant may be placed there; planting on an occupied or untilled cell
    /// is a no-op.
    pub fn plant_at(&mut self, point: Vec2) -> Option<(i32, i32)> {
        let (x, y) = world_to_grid(point);
        let cell = self.get_mut(x, y)?;
        if !cell.tilled() || cell.has_plant() {
            return None;
        }
        cell.insert(CellTags::PLANT);
        Some((x, y))
    }

    /// Release the PLANT tag after a harvest or plant removal.
    pub fn clear_plant(&mut self, x: i32, y: i32) {
        if let Some(cell) = self.get_mut(x, y) {
            cell.remove(CellTags::PLANT);
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────

    pub fn is_watered(&self, point: Vec2) -> bool {
        let (x, y) = world_to_grid(point);
        self.is_watered_cell(x, y)
    }

    pub fn is_watered_cell(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_some_and(|c| c.watered())
    }

    pub fn tilled_cells(&self) -> Vec<(i32, i32)> {
        let mut out = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                if self.cell_tilled(x, y) {
                    out.push((x, y));
                }
            }
        }
        out
    }

    /// Classify the tile shape of the tilled cell at (x, y) from its four
    /// axis-neighbors. Neighbors beyond the grid edge count as untilled.
    pub fn classify_cell(&self, x: i32, y: i32) -> SoilTileKind {
        classify(
            self.cell_tilled(x, y - 1),
            self.cell_tilled(x, y + 1),
            self.cell_tilled(x - 1, y),
            self.cell_tilled(x + 1, y),
        )
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    /// 3×3 all-farmable grid for the point-based operations.
    fn small_grid() -> SoilGrid {
        let mut farmable = Vec::new();
        for y in 0..3 {
            for x in 0..3 {
                farmable.push((x, y));
            }
        }
        SoilGrid::from_map(&FarmMap {
            width: 3,
            height: 3,
            farmable,
            trees: Vec::new(),
        })
    }

    fn center_of(x: i32, y: i32) -> Vec2 {
        grid_to_world(x, y)
    }

    #[test]
    fn tilling_is_idempotent() {
        let mut grid = small_grid();
        let p = center_of(1, 1);
        assert_eq!(grid.till(p), Some((1, 1)), "first till breaks the soil");
        assert_eq!(grid.till(p), None, "second till is a no-op");
        assert!(grid.get(1, 1).unwrap().tilled());
    }

    #[test]
    fn tilling_outside_the_grid_is_ignored() {
        let mut grid = small_grid();
        assert_eq!(grid.till(Vec2::new(-500.0, 300.0)), None);
        assert_eq!(grid.till(Vec2::new(9999.0, -9999.0)), None);
    }

    #[test]
    fn tilling_non_farmable_is_ignored() {
        let mut grid = SoilGrid::from_map(&FarmMap {
            width: 2,
            height: 2,
            farmable: vec![(0, 0)],
            trees: Vec::new(),
        });
        assert_eq!(grid.till(center_of(1, 1)), None);
        assert_eq!(grid.till(center_of(0, 0)), Some((0, 0)));
    }

    #[test]
    fn watering_requires_tilled_soil() {
        let mut grid = small_grid();
        let p = center_of(0, 0);
        assert_eq!(grid.water_at(p), None, "untilled cell can't be watered");
        grid.till(p);
        assert_eq!(grid.water_at(p), Some((0, 0)));
        assert_eq!(grid.water_at(p), None, "already wet");
        assert!(grid.is_watered(p));
    }

    #[test]
    fn water_all_only_touches_tilled_cells() {
        let mut grid = small_grid();
        grid.till(center_of(0, 0));
        grid.till(center_of(2, 2));
        grid.water_at(center_of(0, 0));

        let watered = grid.water_all();
        assert_eq!(watered, vec![(2, 2)], "only the dry tilled cell");
        assert!(grid.is_watered_cell(0, 0));
        assert!(grid.is_watered_cell(2, 2));
        assert!(!grid.is_watered_cell(1, 1), "untilled cell stays dry");
    }

    #[test]
    fn remove_water_clears_everything() {
        let mut grid = small_grid();
        for y in 0..3 {
            for x in 0..3 {
                grid.till(center_of(x, y));
            }
        }
        grid.water_all();
        grid.remove_water();
        for y in 0..3 {
            for x in 0..3 {
                assert!(!grid.is_watered_cell(x, y));
            }
        }
    }

    #[test]
    fn planting_twice_is_a_no_op() {
        let mut grid = small_grid();
        let p = center_of(1, 1);
        assert_eq!(grid.plant_at(p), None, "needs tilled soil first");
        grid.till(p);
        assert_eq!(grid.plant_at(p), Some((1, 1)));
        assert_eq!(grid.plant_at(p), None, "cell already has a plant");

        grid.clear_plant(1, 1);
        assert_eq!(grid.plant_at(p), Some((1, 1)), "replantable after harvest");
    }

    #[test]
    fn lone_tilled_cell_is_isolated() {
        let mut grid = small_grid();
        grid.till(center_of(1, 1));
        assert_eq!(grid.classify_cell(1, 1), SoilTileKind::O);
    }

    #[test]
    fn center_and_left_neighbor_pair() {
        let mut grid = small_grid();
        grid.till(center_of(1, 1));
        grid.till(center_of(0, 1));
        assert_eq!(grid.classify_cell(1, 1), SoilTileKind::R);
        assert_eq!(grid.classify_cell(0, 1), SoilTileKind::L);
    }

    #[test]
    fn edge_neighbors_count_as_untilled() {
        let mut grid = small_grid();
        grid.till(center_of(0, 0));
        // Corner cell: off-grid top/left neighbors must not panic or count.
        assert_eq!(grid.classify_cell(0, 0), SoilTileKind::O);
    }
}
