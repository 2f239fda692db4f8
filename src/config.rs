//! Process-wide stimulus catalog.
//!
//! Both generators read asset locations and display color codes from one
//! immutable [`StimulusCatalog`]. The built-in catalog is created lazily on
//! first use; experiments with a different asset layout load their own from
//! JSON and pass it explicitly.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex, OnceLock};

use serde::{Deserialize, Serialize};

use crate::conditions::palette::{DEFAULT_PALETTE, is_hex_code};
use crate::conditions::{Color, Dimension, Distance};
use crate::error::{GenerationError, Result};
use crate::logging::{LogEvent, Logger};
use crate::metrics::GenerationMetrics;

pub const DEFAULT_STIMULI_ROOT: &str = "stimuli/";
pub const DEFAULT_EXTENSION: &str = "svg";

static GLOBAL_CATALOG: OnceLock<StimulusCatalog> = OnceLock::new();

/// Asset naming rules plus the name to color code table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StimulusCatalog {
    root: String,
    extension: String,
    palette: BTreeMap<String, String>,
}

/// On-disk form of a catalog. Omitted fields fall back to the built-in
/// values; palette entries are merged over the built-in table unless
/// `replace_palette` is set.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    root: Option<String>,
    extension: Option<String>,
    #[serde(default)]
    palette: BTreeMap<String, String>,
    #[serde(default)]
    replace_palette: bool,
}

impl Default for StimulusCatalog {
    fn default() -> Self {
        Self {
            root: DEFAULT_STIMULI_ROOT.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            palette: DEFAULT_PALETTE
                .iter()
                .map(|(name, code)| ((*name).to_string(), (*code).to_string()))
                .collect(),
        }
    }
}

impl StimulusCatalog {
    /// The shared built-in catalog.
    pub fn global() -> &'static StimulusCatalog {
        GLOBAL_CATALOG.get_or_init(StimulusCatalog::default)
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(raw)?;
        Self::from_file(file)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    fn from_file(file: CatalogFile) -> Result<Self> {
        let mut catalog = Self::default();
        if let Some(root) = file.root {
            catalog.root = root;
        }
        if let Some(extension) = file.extension {
            catalog.extension = extension.trim_start_matches('.').to_string();
        }
        if file.replace_palette {
            catalog.palette.clear();
        }
        catalog.palette.extend(file.palette);
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<()> {
        if self.extension.is_empty() {
            return Err(GenerationError::Config(
                "asset extension must not be empty".to_string(),
            ));
        }
        if let Some((name, code)) = self.palette.iter().find(|(_, code)| !is_hex_code(code)) {
            return Err(GenerationError::Config(format!(
                "palette entry `{name}` has malformed color code `{code}`"
            )));
        }
        Ok(())
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Stimulus name, e.g. `BLUE_LUM` or `BLUE_HUE_+2`.
    pub fn stimulus_name(
        &self,
        color: Color,
        dimension: Dimension,
        distance: Option<Distance>,
    ) -> String {
        match distance {
            Some(distance) => format!("{color}_{dimension}_{distance}"),
            None => format!("{color}_{dimension}"),
        }
    }

    /// Asset path, e.g. `stimuli/BLUE/BLUE_LUM.svg`.
    pub fn asset_path(
        &self,
        color: Color,
        dimension: Dimension,
        distance: Option<Distance>,
    ) -> String {
        format!(
            "{}{}/{}.{}",
            self.root,
            color,
            self.stimulus_name(color, dimension, distance),
            self.extension
        )
    }

    /// Base asset of the opposite color on the same dimension.
    pub fn opposite_asset_path(&self, color: Color, dimension: Dimension) -> String {
        self.asset_path(color.opposite(), dimension, None)
    }

    /// Display color code for a stimulus name.
    pub fn color_code(&self, name: &str) -> Result<&str> {
        self.palette
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| GenerationError::MissingAsset(name.to_string()))
    }

    pub fn palette(&self) -> &BTreeMap<String, String> {
        &self.palette
    }
}

/// Optional observability hooks shared by the generators.
#[derive(Debug, Clone)]
pub struct DiagnosticsConfig {
    /// Structured logger; `None` keeps generation silent.
    pub logger: Option<Logger>,
    /// Shared counters updated after every call.
    pub metrics: Option<Arc<Mutex<GenerationMetrics>>>,
    /// Target prefix for emitted log events.
    pub target_prefix: String,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            logger: None,
            metrics: None,
            target_prefix: "vizsearch".to_string(),
        }
    }
}

impl DiagnosticsConfig {
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Enable metrics collection if it has not already been configured.
    pub fn enable_metrics(&mut self) {
        if self.metrics.is_none() {
            self.metrics = Some(Arc::new(Mutex::new(GenerationMetrics::new())));
        }
    }

    pub fn metrics_handle(&self) -> Option<Arc<Mutex<GenerationMetrics>>> {
        self.metrics.as_ref().map(Arc::clone)
    }

    pub(crate) fn target(&self, component: &str) -> String {
        format!("{}::{}", self.target_prefix, component)
    }

    /// Log failures never abort generation.
    pub(crate) fn emit(&self, event: LogEvent) {
        if let Some(logger) = &self.logger {
            let _ = logger.log_event(event);
        }
    }

    pub(crate) fn update_metrics(&self, update: impl FnOnce(&mut GenerationMetrics)) {
        if let Some(metrics) = &self.metrics {
            if let Ok(mut guard) = metrics.lock() {
                update(&mut guard);
            }
        }
    }

    /// Emit the current metrics snapshot, if metrics are enabled.
    pub fn log_snapshot(&self) {
        let snapshot = self
            .metrics
            .as_ref()
            .and_then(|metrics| metrics.lock().ok().map(|guard| guard.snapshot()));
        if let Some(snapshot) = snapshot {
            self.emit(snapshot.to_log_event(&self.target("metrics")));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::MemorySink;

    #[test]
    fn base_path_has_no_distance_suffix() {
        let catalog = StimulusCatalog::global();
        assert_eq!(
            catalog.asset_path(Color::Blue, Dimension::Lum, None),
            "stimuli/BLUE/BLUE_LUM.svg"
        );
        assert_eq!(catalog.stimulus_name(Color::Red, Dimension::Chr, None), "RED_CHR");
    }

    #[test]
    fn distance_is_embedded_before_extension() {
        let catalog = StimulusCatalog::global();
        for distance in Distance::ALL {
            let path = catalog.asset_path(Color::Green, Dimension::Hue, Some(distance));
            assert!(path.ends_with(&format!("_{distance}.svg")));
            assert!(path.starts_with("stimuli/GREEN/GREEN_HUE"));
        }
    }

    #[test]
    fn opposite_asset_keeps_dimension() {
        let catalog = StimulusCatalog::global();
        assert_eq!(
            catalog.opposite_asset_path(Color::Green, Dimension::Hue),
            "stimuli/RED/RED_HUE.svg"
        );
    }

    #[test]
    fn every_stimulus_name_has_a_color_code() {
        let catalog = StimulusCatalog::global();
        for color in Color::ALL {
            for dimension in Dimension::ALL {
                let base = catalog.stimulus_name(color, dimension, None);
                assert!(catalog.color_code(&base).is_ok());
                for distance in Distance::ALL {
                    let name = catalog.stimulus_name(color, dimension, Some(distance));
                    assert!(is_hex_code(catalog.color_code(&name).unwrap()));
                }
            }
        }
    }

    #[test]
    fn missing_name_is_a_missing_asset() {
        let err = StimulusCatalog::global().color_code("BLUE_SAT").unwrap_err();
        assert!(matches!(err, GenerationError::MissingAsset(name) if name == "BLUE_SAT"));
    }

    #[test]
    fn json_overrides_merge_over_defaults() {
        let catalog = StimulusCatalog::from_json_str(
            r##"{ "root": "assets/", "extension": ".png", "palette": { "BLUE_LUM": "#000000" } }"##,
        )
        .unwrap();
        assert_eq!(
            catalog.asset_path(Color::Blue, Dimension::Lum, None),
            "assets/BLUE/BLUE_LUM.png"
        );
        assert_eq!(catalog.color_code("BLUE_LUM").unwrap(), "#000000");
        assert_eq!(catalog.palette().len(), DEFAULT_PALETTE.len());
    }

    #[test]
    fn replacing_palette_drops_defaults() {
        let catalog = StimulusCatalog::from_json_str(
            r##"{ "replace_palette": true, "palette": { "RED_HUE": "#D22D2D" } }"##,
        )
        .unwrap();
        assert_eq!(catalog.palette().len(), 1);
        assert!(catalog.color_code("BLUE_LUM").is_err());
    }

    #[test]
    fn malformed_codes_are_rejected() {
        let err = StimulusCatalog::from_json_str(r#"{ "palette": { "RED_HUE": "red" } }"#)
            .unwrap_err();
        assert!(matches!(err, GenerationError::Config(_)));
        assert!(StimulusCatalog::from_json_str(r#"{ "colour": 1 }"#).is_err());
    }

    #[test]
    fn diagnostics_snapshot_reaches_logger() {
        let sink = MemorySink::new();
        let mut diagnostics = DiagnosticsConfig::default().with_logger(Logger::new(sink.clone()));
        diagnostics.log_snapshot();
        assert!(sink.events().is_empty());

        diagnostics.enable_metrics();
        diagnostics.update_metrics(|metrics| metrics.record_conditions(3));
        diagnostics.log_snapshot();

        let events = sink.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].target, "vizsearch::metrics");
        assert_eq!(events[0].fields["conditions"], 3);
    }

    #[test]
    fn loads_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(&path, r#"{ "root": "img/" }"#).unwrap();
        let catalog = StimulusCatalog::from_path(&path).unwrap();
        assert_eq!(catalog.root(), "img/");
        assert_eq!(catalog.extension(), "svg");
    }
}
