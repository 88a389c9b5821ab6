//! The farm layout — the map data source that seeds the soil grid and the
//! tree placements.

use crate::shared::*;

/// One row per line, one tile per character:
///   `.`  plain grass
///   `F`  farmable ground
///   `s`  small tree
///   `L`  large tree
pub const FARM_LAYOUT: &[&str] = &[
    "....................",
    "..s......L.......s..",
    "....................",
    "...FFFFFF..FFFFFF...",
    "...FFFFFF..FFFFFF...",
    "...FFFFFF..FFFFFF...",
    "...FFFFFF..FFFFFF...",
    "....................",
    "...FFFFFF..FFFFFF...",
    "...FFFFFF..FFFFFF...",
    "...FFFFFF..FFFFFF...",
    "...FFFFFF..FFFFFF...",
    "....................",
    "..L.......s......L..",
];

/// Build a FarmMap from a character layout. Unknown characters are treated
/// as plain grass.
pub fn parse_farm_map(layout: &[&str]) -> FarmMap {
    let height = layout.len() as i32;
    let width = layout.iter().map(|row| row.chars().count()).max().unwrap_or(0) as i32;

    let mut map = FarmMap {
        width,
        height,
        farmable: Vec::new(),
        trees: Vec::new(),
    };

    for (y, row) in layout.iter().enumerate() {
        for (x, ch) in row.chars().enumerate() {
            let (x, y) = (x as i32, y as i32);
            match ch {
                'F' => map.farmable.push((x, y)),
                's' => map.trees.push((x, y, TreeSize::Small)),
                'L' => map.trees.push((x, y, TreeSize::Large)),
                _ => {}
            }
        }
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_parses() {
        let map = parse_farm_map(FARM_LAYOUT);
        assert_eq!(map.width, 20);
        assert_eq!(map.height, 14);
        assert!(!map.farmable.is_empty());
        assert!(!map.trees.is_empty());
        for &(x, y) in &map.farmable {
            assert!(x >= 0 && x < map.width);
            assert!(y >= 0 && y < map.height);
        }
    }

    #[test]
    fn tree_sizes_come_from_their_glyphs() {
        let map = parse_farm_map(&["sL"]);
        assert_eq!(map.trees, vec![(0, 0, TreeSize::Small), (1, 0, TreeSize::Large)]);
        assert!(map.farmable.is_empty());
    }
}
