//! Plain-data trial objects for the host experiment runner.
//!
//! A [`TrialSpec`] is what the runner's grid plugin consumes: duration,
//! grid size, population sizes and the two stimuli. It carries the
//! originating condition so responses can be joined back to it.

use serde::{Deserialize, Serialize};

use crate::conditions::Condition;
use crate::error::Result;
use crate::geometry::GridSize;
use crate::layout::{ExclusionPolicy, LayoutRequest};

/// Plugin name the host runner registers the grid display under.
pub const GRID_PLUGIN: &str = "multiple-ensembles-grid";

/// Per-experiment trial parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialSettings {
    pub duration_ms: u32,
    pub grid: GridSize,
    #[serde(default)]
    pub exclusion: ExclusionPolicy,
}

impl Default for TrialSettings {
    fn default() -> Self {
        Self {
            duration_ms: 1000,
            grid: GridSize::square(10),
            exclusion: ExclusionPolicy::ExcludeTargets,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrialSpec {
    #[serde(rename = "type")]
    pub plugin: &'static str,
    pub trial_duration: u32,
    /// `[rows, columns]`.
    pub grid_size: [u32; 2],
    /// `[distractors, targets]`.
    pub distribution_sizes: [u32; 2],
    /// `[distractor, target]`.
    pub stimuli: [String; 2],
    #[serde(skip)]
    pub exclusion: ExclusionPolicy,
    pub data: Condition,
}

impl TrialSpec {
    /// Set size counts every item on screen: a present target displaces one
    /// distractor.
    pub fn from_condition(condition: &Condition, settings: &TrialSettings) -> Self {
        let items = condition.set_size.count();
        let (targets, distractors) = if condition.target_present {
            (1, items - 1)
        } else {
            (0, items)
        };

        Self {
            plugin: GRID_PLUGIN,
            trial_duration: settings.duration_ms,
            grid_size: [settings.grid.rows, settings.grid.columns],
            distribution_sizes: [distractors, targets],
            stimuli: [
                condition.distractor_asset.clone(),
                condition.target_asset.clone(),
            ],
            exclusion: settings.exclusion,
            data: condition.clone(),
        }
    }

    pub fn target_count(&self) -> u32 {
        self.distribution_sizes[1]
    }

    pub fn distractor_count(&self) -> u32 {
        self.distribution_sizes[0]
    }

    /// Layout request for this trial; fails if the grid cannot hold the set.
    pub fn layout_request(&self) -> Result<LayoutRequest> {
        let [rows, columns] = self.grid_size;
        let [distractor, target] = &self.stimuli;
        let request = LayoutRequest::new(
            GridSize::new(rows, columns),
            self.target_count(),
            self.distractor_count(),
        )
        .with_assets(target.clone(), distractor.clone())
        .with_exclusion(self.exclusion);
        request.validate()?;
        Ok(request)
    }

    /// Stable label identifying the trial's condition.
    pub fn label(&self) -> String {
        format!(
            "{}|{}|{}|{}",
            self.data.target_name,
            self.data.distractor_name,
            self.data.set_size,
            if self.data.target_present {
                "present"
            } else {
                "absent"
            }
        )
    }
}

/// One trial per condition, in condition order.
pub fn build_trials(conditions: &[Condition], settings: &TrialSettings) -> Vec<TrialSpec> {
    conditions
        .iter()
        .map(|condition| TrialSpec::from_condition(condition, settings))
        .collect()
}

/// Deterministic RNG seed for a trial label within a session.
pub fn trial_seed(session: &str, label: &str) -> u64 {
    let mut hasher = blake3::Hasher::new();
    hasher.update(session.as_bytes());
    hasher.update(&[0]);
    hasher.update(label.as_bytes());
    let digest = hasher.finalize();
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest.as_bytes()[..8]);
    u64::from_le_bytes(bytes)
}
