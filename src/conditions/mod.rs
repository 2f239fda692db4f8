//! Condition enumeration for the visual-search experiment.
//!
//! A condition pairs a target stimulus with a distractor stimulus, a set
//! size and whether the target is shown. The full space for one color is
//! the cross product of dimension, distance, set size and presence plus an
//! opposite-color control per dimension and set size.

mod enumerate;
pub mod palette;
mod taxonomy;

pub use enumerate::{
    Condition, ConditionEnumerator, DistractorPaths, DistractorVariant, conditions_per_set,
    distractor_paths, enumerate_condition_set, enumerate_conditions,
};
pub use taxonomy::{Color, Dimension, Distance, SetSize};
