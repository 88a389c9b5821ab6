//! Tile-shape classification for tilled soil.
//!
//! A tilled cell's visual variant depends only on which of its four
//! axis-neighbors are also tilled. The rules below are layered: each later
//! rule overwrites the earlier result, so the most specific matching shape
//! wins. Keep the order — the straights/corners/T-junctions intentionally
//! re-test combinations the earlier rules touched.

use serde::{Deserialize, Serialize};

/// The 16 soil tile shapes. Variant names follow the tileset keys: letters
/// name the sides on which the patch continues into a neighbor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(clippy::upper_case_acronyms)]
pub enum SoilTileKind {
    /// Isolated patch, no tilled neighbors.
    O,
    /// Four-way cross.
    X,
    /// Right end-cap of a horizontal run (left neighbor only).
    R,
    /// Left end-cap of a horizontal run (right neighbor only).
    L,
    /// Horizontal straight.
    LR,
    /// Bottom end-cap of a vertical run (top neighbor only).
    B,
    /// Top end-cap of a vertical run (bottom neighbor only).
    T,
    /// Vertical straight.
    TB,
    /// Top-right corner (left + bottom neighbors).
    TR,
    /// Top-left corner (right + bottom neighbors).
    TL,
    /// Bottom-right corner (left + top neighbors).
    BR,
    /// Bottom-left corner (right + top neighbors).
    BL,
    /// T-junction open right (top + bottom + right).
    TBR,
    /// T-junction open left (top + bottom + left).
    TBL,
    /// T-junction open up (left + right + top).
    LRB,
    /// T-junction open down (left + right + bottom).
    LRT,
}

impl SoilTileKind {
    /// Lowercase tileset key for this shape.
    pub fn key(self) -> &'static str {
        match self {
            SoilTileKind::O => "o",
            SoilTileKind::X => "x",
            SoilTileKind::R => "r",
            SoilTileKind::L => "l",
            SoilTileKind::LR => "lr",
            SoilTileKind::B => "b",
            SoilTileKind::T => "t",
            SoilTileKind::TB => "tb",
            SoilTileKind::TR => "tr",
            SoilTileKind::TL => "tl",
            SoilTileKind::BR => "br",
            SoilTileKind::BL => "bl",
            SoilTileKind::TBR => "tbr",
            SoilTileKind::TBL => "tbl",
            SoilTileKind::LRB => "lrb",
            SoilTileKind::LRT => "lrt",
        }
    }

    /// Index into the 4×4 tilled-soil atlas.
    pub fn atlas_index(self) -> usize {
        match self {
            SoilTileKind::O => 0,
            SoilTileKind::X => 1,
            SoilTileKind::R => 2,
            SoilTileKind::L => 3,
            SoilTileKind::LR => 4,
            SoilTileKind::B => 5,
            SoilTileKind::T => 6,
            SoilTileKind::TB => 7,
            SoilTileKind::TR => 8,
            SoilTileKind::TL => 9,
            SoilTileKind::BR => 10,
            SoilTileKind::BL => 11,
            SoilTileKind::TBR => 12,
            SoilTileKind::TBL => 13,
            SoilTileKind::LRB => 14,
            SoilTileKind::LRT => 15,
        }
    }
}

/// Resolve the tile shape from the tilled status of the four axis-neighbors.
/// Callers are responsible for bounds: a neighbor beyond the grid edge is
/// passed as `false`.
pub fn classify(t: bool, b: bool, l: bool, r: bool) -> SoilTileKind {
    let mut kind = SoilTileKind::O;

    // all sides
    if t && b && l && r {
        kind = SoilTileKind::X;
    }

    // horizontal tiles only
    if l && !(t || r || b) {
        kind = SoilTileKind::R;
    }
    if r && !(t || l || b) {
        kind = SoilTileKind::L;
    }
    if r && l && !(t || b) {
        kind = SoilTileKind::LR;
    }

    // vertical tiles only
    if t && !(r || l || b) {
        kind = SoilTileKind::B;
    }
    if b && !(r || l || t) {
        kind = SoilTileKind::T;
    }
    if b && t && !(r || l) {
        kind = SoilTileKind::TB;
    }

    // corners
    if l && b && !(t || r) {
        kind = SoilTileKind::TR;
    }
    if r && b && !(t || l) {
        kind = SoilTileKind::TL;
    }
    if l && t && !(b || r) {
        kind = SoilTileKind::BR;
    }
    if r && t && !(b || l) {
        kind = SoilTileKind::BL;
    }

    // T shapes
    if t && b && r && !l {
        kind = SoilTileKind::TBR;
    }
    if t && b && l && !r {
        kind = SoilTileKind::TBL;
    }
    if l && r && t && !b {
        kind = SoilTileKind::LRB;
    }
    if l && r && b && !t {
        kind = SoilTileKind::LRT;
    }

    kind
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_sixteen_neighbor_combinations() {
        use SoilTileKind::*;

        // (top, bottom, left, right) → expected shape.
        let table = [
            ((false, false, false, false), O),
            ((false, false, true, false), R),
            ((false, false, false, true), L),
            ((false, false, true, true), LR),
            ((true, false, false, false), B),
            ((false, true, false, false), T),
            ((true, true, false, false), TB),
            ((false, true, true, false), TR),
            ((false, true, false, true), TL),
            ((true, false, true, false), BR),
            ((true, false, false, true), BL),
            ((true, true, false, true), TBR),
            ((true, true, true, false), TBL),
            ((true, false, true, true), LRB),
            ((false, true, true, true), LRT),
            ((true, true, true, true), X),
        ];

        assert_eq!(table.len(), 16, "every combination covered exactly once");
        for ((t, b, l, r), expected) in table {
            assert_eq!(
                classify(t, b, l, r),
                expected,
                "t={} b={} l={} r={}",
                t,
                b,
                l,
                r
            );
        }
    }

    #[test]
    fn more_specific_shapes_override_simpler_ones() {
        // Full surround must resolve to the cross, not any straight/corner.
        assert_eq!(classify(true, true, true, true), SoilTileKind::X);
        // Three-neighbor patterns must resolve to T-junctions, not corners.
        assert_eq!(classify(true, true, false, true), SoilTileKind::TBR);
        assert_eq!(classify(false, true, true, true), SoilTileKind::LRT);
    }

    #[test]
    fn keys_are_unique() {
        use std::collections::HashSet;
        let kinds = [
            SoilTileKind::O,
            SoilTileKind::X,
            SoilTileKind::R,
            SoilTileKind::L,
            SoilTileKind::LR,
            SoilTileKind::B,
            SoilTileKind::T,
            SoilTileKind::TB,
            SoilTileKind::TR,
            SoilTileKind::TL,
            SoilTileKind::BR,
            SoilTileKind::BL,
            SoilTileKind::TBR,
            SoilTileKind::TBL,
            SoilTileKind::LRB,
            SoilTileKind::LRT,
        ];
        let keys: HashSet<&str> = kinds.iter().map(|k| k.key()).collect();
        let indices: HashSet<usize> = kinds.iter().map(|k| k.atlas_index()).collect();
        assert_eq!(keys.len(), 16);
        assert_eq!(indices.len(), 16);
    }
}
