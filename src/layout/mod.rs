//! Layout module orchestrator.
//!
//! Callers import layout types from here; sampling lives in the private
//! `sampler` module.

pub mod grid;
pub mod ring;
mod sampler;

pub use grid::{
    CellTag, ExclusionPolicy, GridAssignment, LayoutGenerator, LayoutRequest, generate_layout,
};
pub use ring::{RATING_RING, RING_GRID, RING_ITEM_PX, ring_layout};
pub use sampler::CoordinateSampler;
