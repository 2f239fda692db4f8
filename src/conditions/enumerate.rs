use serde::Serialize;
use serde_json::json;

use crate::config::{DiagnosticsConfig, StimulusCatalog};
use crate::error::Result;
use crate::logging::{LogLevel, event_with_fields, json_kv};

use super::taxonomy::{Color, Dimension, Distance, SetSize};

/// How a condition's distractor relates to its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DistractorVariant {
    /// Same dimension, opposite color family.
    Opposite,
    /// Same color family, stepped along `dimension` by `distance`.
    Step {
        dimension: Dimension,
        distance: Distance,
    },
}

/// One cell of the experiment's condition space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Condition {
    pub color: Color,
    pub dimension: Dimension,
    pub target_asset: String,
    pub target_name: String,
    pub distractor_asset: String,
    pub distractor_name: String,
    pub variant: DistractorVariant,
    pub set_size: SetSize,
    pub target_present: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_color: Option<String>,
}

/// Target asset with every candidate distractor for one color and dimension:
/// the opposite-color stimulus first, then each dimension/distance step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistractorPaths {
    pub target: String,
    pub distractors: Vec<String>,
}

/// Walks the condition space of one color against a stimulus catalog.
#[derive(Debug, Clone)]
pub struct ConditionEnumerator<'a> {
    catalog: &'a StimulusCatalog,
    color_codes: bool,
    diagnostics: DiagnosticsConfig,
}

impl Default for ConditionEnumerator<'static> {
    fn default() -> Self {
        Self::new(StimulusCatalog::global())
    }
}

impl<'a> ConditionEnumerator<'a> {
    pub fn new(catalog: &'a StimulusCatalog) -> Self {
        Self {
            catalog,
            color_codes: true,
            diagnostics: DiagnosticsConfig::default(),
        }
    }

    /// Whether conditions carry the distractor's display color code.
    pub fn with_color_codes(mut self, enabled: bool) -> Self {
        self.color_codes = enabled;
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: DiagnosticsConfig) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Every condition for `color`, dimension-major.
    pub fn enumerate(&self, color: Color) -> Result<Vec<Condition>> {
        let mut conditions = Vec::with_capacity(Dimension::ALL.len() * conditions_per_set());
        for dimension in Dimension::ALL {
            conditions.extend(self.enumerate_set(color, dimension)?);
        }

        self.diagnostics
            .update_metrics(|metrics| metrics.record_conditions(conditions.len()));
        self.diagnostics.emit(event_with_fields(
            LogLevel::Debug,
            &self.diagnostics.target("conditions"),
            "conditions_enumerated",
            [
                json_kv("color", color.as_str()),
                json_kv("count", json!(conditions.len())),
            ],
        ));
        Ok(conditions)
    }

    /// Conditions for one color and dimension: opposite-color controls for
    /// each set size, then each set size against every dimension/distance
    /// step. Each core is emitted target-present then target-absent.
    pub fn enumerate_set(&self, color: Color, dimension: Dimension) -> Result<Vec<Condition>> {
        let mut conditions = Vec::with_capacity(conditions_per_set());

        for set_size in SetSize::ALL {
            self.push_pair(
                &mut conditions,
                color,
                dimension,
                DistractorVariant::Opposite,
                set_size,
            )?;
        }

        for set_size in SetSize::ALL {
            for step_dimension in Dimension::ALL {
                for distance in Distance::ALL {
                    let variant = DistractorVariant::Step {
                        dimension: step_dimension,
                        distance,
                    };
                    self.push_pair(&mut conditions, color, dimension, variant, set_size)?;
                }
            }
        }

        Ok(conditions)
    }

    pub fn distractor_paths(&self, color: Color, dimension: Dimension) -> DistractorPaths {
        let opposite = self.catalog.opposite_asset_path(color, dimension);
        let steps = Dimension::ALL.into_iter().flat_map(|step_dimension| {
            Distance::ALL
                .into_iter()
                .map(move |distance| (step_dimension, distance))
        });

        DistractorPaths {
            target: self.catalog.asset_path(color, dimension, None),
            distractors: std::iter::once(opposite)
                .chain(steps.map(|(step_dimension, distance)| {
                    self.catalog
                        .asset_path(color, step_dimension, Some(distance))
                }))
                .collect(),
        }
    }

    fn push_pair(
        &self,
        out: &mut Vec<Condition>,
        color: Color,
        dimension: Dimension,
        variant: DistractorVariant,
        set_size: SetSize,
    ) -> Result<()> {
        let (distractor_color, distractor_dimension, distance) = match variant {
            DistractorVariant::Opposite => (color.opposite(), dimension, None),
            DistractorVariant::Step {
                dimension: step_dimension,
                distance,
            } => (color, step_dimension, Some(distance)),
        };

        let distractor_name =
            self.catalog
                .stimulus_name(distractor_color, distractor_dimension, distance);
        let display_color = if self.color_codes {
            Some(self.catalog.color_code(&distractor_name)?.to_string())
        } else {
            None
        };

        let present = Condition {
            color,
            dimension,
            target_asset: self.catalog.asset_path(color, dimension, None),
            target_name: self.catalog.stimulus_name(color, dimension, None),
            distractor_asset: self
                .catalog
                .asset_path(distractor_color, distractor_dimension, distance),
            distractor_name,
            variant,
            set_size,
            target_present: true,
            display_color,
        };
        let absent = Condition {
            target_present: false,
            ..present.clone()
        };
        out.push(present);
        out.push(absent);
        Ok(())
    }
}

/// Conditions produced per color and dimension.
pub const fn conditions_per_set() -> usize {
    let cores = 1 + Dimension::ALL.len() * Distance::ALL.len();
    cores * SetSize::ALL.len() * 2
}

/// Every condition for a color given by name, using the built-in catalog.
pub fn enumerate_conditions(color: &str) -> Result<Vec<Condition>> {
    let color: Color = color.parse()?;
    ConditionEnumerator::default().enumerate(color)
}

/// Conditions for one color and dimension given by name.
pub fn enumerate_condition_set(color: &str, dimension: &str) -> Result<Vec<Condition>> {
    let color: Color = color.parse()?;
    let dimension: Dimension = dimension.parse()?;
    ConditionEnumerator::default().enumerate_set(color, dimension)
}

/// Target path plus the 13 candidate distractor paths for a color and dimension.
pub fn distractor_paths(color: &str, dimension: &str) -> Result<DistractorPaths> {
    let color: Color = color.parse()?;
    let dimension: Dimension = dimension.parse()?;
    Ok(ConditionEnumerator::default().distractor_paths(color, dimension))
}
