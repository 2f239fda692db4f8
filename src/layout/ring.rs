use std::collections::BTreeSet;

use crate::geometry::{Coordinate, GridSize};

use super::grid::GridAssignment;

/// Grid used by the similarity-rating screen.
pub const RING_GRID: GridSize = GridSize::square(7);

/// Pixel edge of each ring item.
pub const RING_ITEM_PX: u32 = 40;

/// Thirteen cells tracing a closed loop around the centre of [`RING_GRID`].
pub const RATING_RING: [Coordinate; 13] = [
    Coordinate::new(0, 2),
    Coordinate::new(0, 4),
    Coordinate::new(1, 5),
    Coordinate::new(2, 6),
    Coordinate::new(3, 6),
    Coordinate::new(4, 5),
    Coordinate::new(5, 4),
    Coordinate::new(6, 3),
    Coordinate::new(5, 2),
    Coordinate::new(4, 1),
    Coordinate::new(3, 0),
    Coordinate::new(2, 0),
    Coordinate::new(1, 1),
];

/// Fixed rating layout: every ring cell shows `target_asset`, nothing else
/// is populated.
pub fn ring_layout(target_asset: impl Into<String>) -> GridAssignment {
    GridAssignment::from_parts(
        RING_GRID,
        RATING_RING.into_iter().collect(),
        BTreeSet::new(),
        target_asset.into(),
        String::new(),
    )
}
