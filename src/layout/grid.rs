//! Target/distractor placement on a stimulus grid.
//!
//! Targets are drawn first, then distractors, optionally avoiding every
//! target cell. The result is a [`GridAssignment`]: a total map from each
//! grid cell to a [`CellTag`] plus the asset shown for each populated tag.
//!
//! # Example
//! ```
//! use vizsearch_stimuli::layout::{ExclusionPolicy, LayoutGenerator, LayoutRequest};
//! use vizsearch_stimuli::GridSize;
//!
//! let request = LayoutRequest::new(GridSize::square(10), 1, 10)
//!     .with_assets("stimuli/BLUE/BLUE_LUM.svg", "stimuli/YELLOW/YELLOW_LUM.svg")
//!     .with_exclusion(ExclusionPolicy::ExcludeTargets);
//! let layout = LayoutGenerator::new().generate_seeded(&request, 42)?;
//! assert_eq!(layout.targets().len(), 1);
//! assert_eq!(layout.distractors().len(), 10);
//! # Ok::<(), vizsearch_stimuli::GenerationError>(())
//! ```

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::config::DiagnosticsConfig;
use crate::error::{GenerationError, Result};
use crate::geometry::{Coordinate, GridSize};
use crate::logging::{LogLevel, event_with_fields, json_kv};

use super::sampler::CoordinateSampler;

/// Whether the distractor draw must avoid target cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionPolicy {
    /// Distractors are drawn independently and may land on a target cell.
    None,
    #[default]
    ExcludeTargets,
}

/// What occupies a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CellTag {
    Target,
    Distractor,
    Empty,
}

/// Parameters for one generated grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutRequest {
    pub size: GridSize,
    pub target_count: u32,
    pub distractor_count: u32,
    #[serde(default)]
    pub exclusion: ExclusionPolicy,
    #[serde(default)]
    pub target_asset: String,
    #[serde(default)]
    pub distractor_asset: String,
}

impl LayoutRequest {
    pub fn new(size: GridSize, target_count: u32, distractor_count: u32) -> Self {
        Self {
            size,
            target_count,
            distractor_count,
            exclusion: ExclusionPolicy::default(),
            target_asset: String::new(),
            distractor_asset: String::new(),
        }
    }

    pub fn with_assets(mut self, target: impl Into<String>, distractor: impl Into<String>) -> Self {
        self.target_asset = target.into();
        self.distractor_asset = distractor.into();
        self
    }

    pub fn with_exclusion(mut self, exclusion: ExclusionPolicy) -> Self {
        self.exclusion = exclusion;
        self
    }

    /// Check that both populations fit before any sampling happens.
    pub fn validate(&self) -> Result<()> {
        self.size.validate()?;
        let capacity = self.size.capacity();
        let targets = u64::from(self.target_count);
        let distractors = u64::from(self.distractor_count);

        let fits = match self.exclusion {
            ExclusionPolicy::ExcludeTargets => targets + distractors <= capacity,
            ExclusionPolicy::None => targets <= capacity && distractors <= capacity,
        };
        if !fits {
            return Err(GenerationError::ConstraintViolation(format!(
                "{} targets and {} distractors exceed a {}x{} grid under {:?}",
                self.target_count,
                self.distractor_count,
                self.size.rows,
                self.size.columns,
                self.exclusion
            )));
        }
        Ok(())
    }
}

/// Generated placement of targets and distractors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridAssignment {
    size: GridSize,
    targets: BTreeSet<Coordinate>,
    distractors: BTreeSet<Coordinate>,
    target_asset: String,
    distractor_asset: String,
}

impl GridAssignment {
    pub(crate) fn from_parts(
        size: GridSize,
        targets: BTreeSet<Coordinate>,
        distractors: BTreeSet<Coordinate>,
        target_asset: String,
        distractor_asset: String,
    ) -> Self {
        Self {
            size,
            targets,
            distractors,
            target_asset,
            distractor_asset,
        }
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn targets(&self) -> &BTreeSet<Coordinate> {
        &self.targets
    }

    pub fn distractors(&self) -> &BTreeSet<Coordinate> {
        &self.distractors
    }

    /// Tag of a cell. A cell drawn for both populations (only possible
    /// without exclusion) shows the distractor.
    pub fn tag_at(&self, coordinate: Coordinate) -> CellTag {
        if self.distractors.contains(&coordinate) {
            CellTag::Distractor
        } else if self.targets.contains(&coordinate) {
            CellTag::Target
        } else {
            CellTag::Empty
        }
    }

    /// Asset shown for a populated tag.
    pub fn asset_for(&self, tag: CellTag) -> Option<&str> {
        match tag {
            CellTag::Target => Some(&self.target_asset),
            CellTag::Distractor => Some(&self.distractor_asset),
            CellTag::Empty => None,
        }
    }

    /// Every cell with its tag, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Coordinate, CellTag)> + '_ {
        self.size.cells().map(|c| (c, self.tag_at(c)))
    }

    /// Target cells hidden under a distractor.
    pub fn occluded_targets(&self) -> usize {
        self.targets.intersection(&self.distractors).count()
    }

    pub fn populated(&self) -> usize {
        self.targets.union(&self.distractors).count()
    }
}

/// Runs layout requests through the coordinate sampler.
#[derive(Debug, Clone, Default)]
pub struct LayoutGenerator {
    diagnostics: DiagnosticsConfig,
}

impl LayoutGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_diagnostics(diagnostics: DiagnosticsConfig) -> Self {
        Self { diagnostics }
    }

    pub fn diagnostics(&self) -> &DiagnosticsConfig {
        &self.diagnostics
    }

    pub fn generate<R: Rng + ?Sized>(
        &self,
        request: &LayoutRequest,
        rng: &mut R,
    ) -> Result<GridAssignment> {
        request.validate()?;

        let mut sampler = CoordinateSampler::new(rng, request.size)?;
        let targets = sampler.draw(request.target_count, &BTreeSet::new())?;
        let distractors = match request.exclusion {
            ExclusionPolicy::ExcludeTargets => sampler.draw(request.distractor_count, &targets)?,
            ExclusionPolicy::None => sampler.draw(request.distractor_count, &BTreeSet::new())?,
        };

        let assignment = GridAssignment::from_parts(
            request.size,
            targets,
            distractors,
            request.target_asset.clone(),
            request.distractor_asset.clone(),
        );
        self.record(request, &assignment, sampler.draws(), sampler.rejections());
        Ok(assignment)
    }

    pub fn generate_seeded(&self, request: &LayoutRequest, seed: u64) -> Result<GridAssignment> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.generate(request, &mut rng)
    }

    fn record(&self, request: &LayoutRequest, assignment: &GridAssignment, draws: u64, rejections: u64) {
        self.diagnostics
            .update_metrics(|metrics| metrics.record_layout(draws, rejections));

        let target = self.diagnostics.target("layout");
        self.diagnostics.emit(event_with_fields(
            LogLevel::Debug,
            &target,
            "layout_generated",
            [
                json_kv("rows", request.size.rows),
                json_kv("columns", request.size.columns),
                json_kv("targets", request.target_count),
                json_kv("distractors", request.distractor_count),
                json_kv("draws", json!(draws)),
                json_kv("rejections", json!(rejections)),
            ],
        ));

        let occluded = assignment.occluded_targets();
        if occluded > 0 {
            self.diagnostics.emit(event_with_fields(
                LogLevel::Warn,
                &target,
                "targets_occluded",
                [json_kv("occluded", json!(occluded))],
            ));
        }
    }
}

/// Generate a layout from the thread RNG without assets attached.
pub fn generate_layout(
    rows: u32,
    columns: u32,
    target_count: u32,
    distractor_count: u32,
    exclusion: ExclusionPolicy,
) -> Result<GridAssignment> {
    let request = LayoutRequest::new(GridSize::new(rows, columns), target_count, distractor_count)
        .with_exclusion(exclusion);
    LayoutGenerator::new().generate(&request, &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::{Logger, MemorySink};

    #[test]
    fn one_target_among_ten_distractors() {
        let layout = generate_layout(10, 10, 1, 10, ExclusionPolicy::ExcludeTargets).unwrap();
        assert_eq!(layout.targets().len(), 1);
        assert_eq!(layout.distractors().len(), 10);
        assert!(layout.targets().is_disjoint(layout.distractors()));
        assert_eq!(layout.populated(), 11);
    }

    #[test]
    fn cells_cover_the_grid_row_major() {
        let request = LayoutRequest::new(GridSize::new(3, 4), 2, 5).with_assets("t.svg", "d.svg");
        let layout = LayoutGenerator::new().generate_seeded(&request, 9).unwrap();
        let cells: Vec<_> = layout.cells().collect();
        assert_eq!(cells.len(), 12);
        assert_eq!(cells[4].0, Coordinate::new(1, 0));
        assert_eq!(cells.iter().filter(|(_, t)| *t == CellTag::Target).count(), 2);
        assert_eq!(cells.iter().filter(|(_, t)| *t == CellTag::Distractor).count(), 5);
        assert_eq!(layout.asset_for(CellTag::Target), Some("t.svg"));
        assert_eq!(layout.asset_for(CellTag::Empty), None);
    }

    #[test]
    fn same_seed_same_layout() {
        let request = LayoutRequest::new(GridSize::square(36), 1, 31);
        let generator = LayoutGenerator::new();
        let a = generator.generate_seeded(&request, 1234).unwrap();
        let b = generator.generate_seeded(&request, 1234).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn degenerate_populations() {
        let generator = LayoutGenerator::new();
        let only_distractors = generator
            .generate_seeded(&LayoutRequest::new(GridSize::square(4), 0, 16), 2)
            .unwrap();
        assert!(only_distractors.targets().is_empty());
        assert!(only_distractors.cells().all(|(_, t)| t == CellTag::Distractor));

        let only_targets = generator
            .generate_seeded(&LayoutRequest::new(GridSize::square(4), 3, 0), 2)
            .unwrap();
        assert!(only_targets.distractors().is_empty());

        let single = generator
            .generate_seeded(&LayoutRequest::new(GridSize::square(1), 1, 0), 2)
            .unwrap();
        assert_eq!(single.tag_at(Coordinate::new(0, 0)), CellTag::Target);
    }

    #[test]
    fn full_grid_with_exclusion_fills_every_cell() {
        let layout = LayoutGenerator::new()
            .generate_seeded(&LayoutRequest::new(GridSize::new(3, 3), 4, 5), 77)
            .unwrap();
        assert!(layout.cells().all(|(_, t)| t != CellTag::Empty));
    }

    #[test]
    fn over_capacity_is_a_constraint_violation() {
        let err = generate_layout(2, 2, 1, 4, ExclusionPolicy::ExcludeTargets).unwrap_err();
        assert!(matches!(err, GenerationError::ConstraintViolation(_)));
        assert!(generate_layout(0, 5, 0, 0, ExclusionPolicy::None).is_err());

        let err = generate_layout(2, 2, 0, 5, ExclusionPolicy::None).unwrap_err();
        assert!(matches!(err, GenerationError::ConstraintViolation(_)));
        assert!(generate_layout(2, 2, 5, 0, ExclusionPolicy::None).is_err());
    }

    #[test]
    fn without_exclusion_each_population_only_needs_to_fit_alone() {
        let layout = generate_layout(2, 2, 2, 4, ExclusionPolicy::None).unwrap();
        assert_eq!(layout.targets().len(), 2);
        assert_eq!(layout.distractors().len(), 4);
        assert_eq!(layout.occluded_targets(), 2);
        assert!(layout.cells().all(|(_, t)| t == CellTag::Distractor));
    }

    #[test]
    fn occlusion_is_logged_as_warning() {
        let sink = MemorySink::new();
        let mut diagnostics = DiagnosticsConfig::default().with_logger(Logger::new(sink.clone()));
        diagnostics.enable_metrics();
        let generator = LayoutGenerator::with_diagnostics(diagnostics);

        let request = LayoutRequest::new(GridSize::square(1), 1, 1).with_exclusion(ExclusionPolicy::None);
        generator.generate_seeded(&request, 0).unwrap();

        let events = sink.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].message, "layout_generated");
        assert_eq!(events[1].level, LogLevel::Warn);

        let snapshot = generator
            .diagnostics()
            .metrics_handle()
            .unwrap()
            .lock()
            .unwrap()
            .snapshot();
        assert_eq!(snapshot.layouts, 1);
        assert_eq!(snapshot.draws, 2);
    }

    #[test]
    fn requests_deserialize_with_default_policy() {
        let request: LayoutRequest = serde_json::from_str(
            r#"{ "size": { "rows": 10, "columns": 10 }, "target_count": 1, "distractor_count": 10 }"#,
        )
        .unwrap();
        assert_eq!(request.exclusion, ExclusionPolicy::ExcludeTargets);
        assert!(request.validate().is_ok());
    }
}
