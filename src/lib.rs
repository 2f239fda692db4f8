//! Stimulus generation for a visual-search experiment.
//!
//! Two independent pieces feed the host experiment runner:
//! the layout generator places a target population and a distractor
//! population on a grid, and the condition enumerator walks the
//! color × dimension × distance × set size × presence space that drives
//! trial construction. Both read the shared [`StimulusCatalog`].

pub mod conditions;
pub mod config;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod logging;
pub mod metrics;
pub mod render;
pub mod sizing;
pub mod trial;

pub use conditions::{
    Color, Condition, ConditionEnumerator, Dimension, Distance, DistractorPaths,
    DistractorVariant, SetSize, distractor_paths, enumerate_condition_set, enumerate_conditions,
};
pub use config::{DiagnosticsConfig, StimulusCatalog};
pub use error::{GenerationError, Result};
pub use geometry::{Coordinate, GridSize};
pub use layout::{
    CellTag, ExclusionPolicy, GridAssignment, LayoutGenerator, LayoutRequest, generate_layout,
    ring_layout,
};
pub use logging::{FileSink, LogEvent, LogLevel, LogSink, Logger, LoggingError, LoggingResult, MemorySink};
pub use metrics::{GenerationMetrics, MetricSnapshot};
pub use render::{HtmlRenderer, RendererSettings};
pub use sizing::{DisplayCalibration, ItemFootprint, visual_angle_to_px};
pub use trial::{TrialSettings, TrialSpec, build_trials, trial_seed};
