//! Configuration types for the scatter viewer.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::color_scheme::ColorScheme;
use crate::data::dataset::DatasetKey;
use crate::data::loader::CsvDatasetLoader;
use crate::data::neighbors::{NeighborExclusion, DEFAULT_NEIGHBOR_COUNT};
use crate::error::ConfigError;
use crate::events::EventController;
use crate::mapper::OriginMode;
use crate::picker::DEFAULT_PICK_TOLERANCE_PX;
use crate::render::shape::{MarkerShape, ShapeMap};

// ─────────────────────────────────────────────────────────────────────────────
// Canvas geometry
// ─────────────────────────────────────────────────────────────────────────────

/// Fixed canvas size and the padding kept free around the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasGeometry {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Default for CanvasGeometry {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            padding: 50.0,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Interaction
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Half-width of the square pick window, in pixels.
    pub pick_tolerance_px: f64,
    /// Number of neighbors highlighted by a modified click.
    pub neighbor_count: usize,
    pub neighbor_exclusion: NeighborExclusion,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            pick_tolerance_px: DEFAULT_PICK_TOLERANCE_PX,
            neighbor_count: DEFAULT_NEIGHBOR_COUNT,
            neighbor_exclusion: NeighborExclusion::Identity,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Datasets
// ─────────────────────────────────────────────────────────────────────────────

/// Per-dataset presentation: where the axes cross and how labels are drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetConfig {
    pub key: DatasetKey,
    /// Display name for the dataset toggle. Defaults to the key.
    #[serde(default)]
    pub name: Option<String>,
    /// Explicit CSV path; otherwise `<data_dir>/<key>.csv`.
    #[serde(default)]
    pub source: Option<PathBuf>,
    #[serde(default)]
    pub origin: OriginMode,
    #[serde(default = "fallback_shapes")]
    pub shapes: ShapeMap,
}

fn fallback_shapes() -> ShapeMap {
    ShapeMap::new().with_fallback(MarkerShape::Circle)
}

impl DatasetConfig {
    /// Config for a key nobody described: corner origin, every label a circle.
    pub fn new(key: DatasetKey) -> Self {
        Self {
            key,
            name: None,
            source: None,
            origin: OriginMode::Corner,
            shapes: fallback_shapes(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_origin(mut self, origin: OriginMode) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_shapes(mut self, shapes: ShapeMap) -> Self {
        self.shapes = shapes;
        self
    }

    pub fn with_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(path.into());
        self
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(self.key.as_str())
    }
}

/// The two bundled datasets: `data1` (axes through the data origin, labels
/// a/b/c) and `data2` (corner axes, labels foo/baz/bar).
pub fn default_datasets() -> Vec<DatasetConfig> {
    vec![
        DatasetConfig::new(DatasetKey::from("data1"))
            .with_name("Data 1")
            .with_origin(OriginMode::DataZero)
            .with_shapes(ShapeMap::from_pairs([
                ("a", MarkerShape::Circle),
                ("b", MarkerShape::Square),
                ("c", MarkerShape::Triangle),
            ])),
        DatasetConfig::new(DatasetKey::from("data2"))
            .with_name("Data 2")
            .with_origin(OriginMode::Corner)
            .with_shapes(ShapeMap::from_pairs([
                ("foo", MarkerShape::Circle),
                ("baz", MarkerShape::Square),
                ("bar", MarkerShape::Triangle),
            ])),
    ]
}

// ─────────────────────────────────────────────────────────────────────────────
// ViewerConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration for the viewer.
///
/// | Field          | Purpose |
/// |----------------|---------|
/// | `canvas`       | Canvas size and padding |
/// | `interaction`  | Pick tolerance and neighbor search |
/// | `datasets`     | Known datasets with origin mode and shape vocabulary |
/// | `color_scheme` | Window visuals and point palette |
/// | `events`       | Optional event subscription handle |
#[derive(Clone)]
pub struct ViewerConfig {
    /// Native window title.
    pub title: String,
    pub canvas: CanvasGeometry,
    /// Spacing of tick marks; bounds are rounded outward to a multiple of it.
    pub tick_step: f64,
    pub interaction: InteractionConfig,
    pub color_scheme: ColorScheme,
    pub datasets: Vec<DatasetConfig>,
    /// Dataset shown at startup. `None` = first entry of `datasets`.
    pub initial_dataset: Option<DatasetKey>,
    /// Directory holding `<key>.csv` files.
    pub data_dir: PathBuf,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,
    pub events: Option<EventController>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "Scatter View".to_string(),
            canvas: CanvasGeometry::default(),
            tick_step: 10.0,
            interaction: InteractionConfig::default(),
            color_scheme: ColorScheme::default(),
            datasets: default_datasets(),
            initial_dataset: None,
            data_dir: PathBuf::from("data"),
            native_options: None,
            events: None,
        }
    }
}

impl ViewerConfig {
    pub fn dataset(&self, key: &DatasetKey) -> Option<&DatasetConfig> {
        self.datasets.iter().find(|d| &d.key == key)
    }

    /// Presentation for `key`, falling back to [`DatasetConfig::new`] for unknown keys.
    pub fn dataset_or_default(&self, key: &DatasetKey) -> DatasetConfig {
        self.dataset(key)
            .cloned()
            .unwrap_or_else(|| DatasetConfig::new(key.clone()))
    }

    pub fn initial_key(&self) -> DatasetKey {
        self.initial_dataset
            .clone()
            .or_else(|| self.datasets.first().map(|d| d.key.clone()))
            .unwrap_or_else(|| DatasetKey::from("data1"))
    }

    /// CSV loader rooted at `data_dir`, honoring per-dataset `source` paths.
    pub fn csv_loader(&self) -> CsvDatasetLoader {
        self.datasets
            .iter()
            .fold(CsvDatasetLoader::new(&self.data_dir), |loader, d| match &d.source {
                Some(path) => loader.with_source(d.key.clone(), path),
                None => loader,
            })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::Invalid(msg));

        let c = &self.canvas;
        if !(c.width > 2.0 * c.padding && c.height > 2.0 * c.padding) || c.padding < 0.0 {
            return invalid(format!(
                "canvas {}x{} leaves no plot area with padding {}",
                c.width, c.height, c.padding
            ));
        }
        if !(self.tick_step > 0.0) || !self.tick_step.is_finite() {
            return invalid(format!("tick_step must be positive, got {}", self.tick_step));
        }
        if !(self.interaction.pick_tolerance_px > 0.0) {
            return invalid(format!(
                "pick_tolerance_px must be positive, got {}",
                self.interaction.pick_tolerance_px
            ));
        }
        if self.interaction.neighbor_count == 0 {
            return invalid("neighbor_count must be at least 1".to_string());
        }
        if self.datasets.is_empty() {
            return invalid("at least one dataset must be configured".to_string());
        }
        let mut seen = HashSet::new();
        for d in &self.datasets {
            if !seen.insert(&d.key) {
                return invalid(format!("duplicate dataset key '{}'", d.key));
            }
        }
        if let Some(key) = &self.initial_dataset {
            if self.dataset(key).is_none() {
                return invalid(format!("initial dataset '{key}' is not configured"));
            }
        }
        Ok(())
    }

    /// Read a YAML (`.yaml`/`.yml`) or JSON (`.json`) file and apply it on top
    /// of the defaults.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let file: ViewerConfigFile = match ext.as_str() {
            "yaml" | "yml" => serde_yaml::from_str(&text)?,
            "json" => serde_json::from_str(&text)?,
            other => return Err(ConfigError::UnsupportedFormat(other.to_string())),
        };

        let mut cfg = ViewerConfig::default();
        file.apply_to(&mut cfg)?;
        // relative data paths are relative to the config file
        if let Some(dir) = path.parent() {
            if cfg.data_dir.is_relative() {
                cfg.data_dir = dir.join(&cfg.data_dir);
            }
            for d in &mut cfg.datasets {
                if let Some(src) = &d.source {
                    if src.is_relative() {
                        d.source = Some(dir.join(src));
                    }
                }
            }
        }
        log::info!("Loaded viewer config from {:?}", path);
        Ok(cfg)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serializable mirror
// ─────────────────────────────────────────────────────────────────────────────

/// On-disk form of [`ViewerConfig`]. Every field is optional; missing fields
/// keep their default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewerConfigFile {
    pub title: Option<String>,
    pub canvas: Option<CanvasGeometry>,
    pub tick_step: Option<f64>,
    pub interaction: Option<InteractionConfig>,
    /// Built-in scheme name, see [`ColorScheme::from_name`].
    pub color_scheme: Option<String>,
    pub datasets: Option<Vec<DatasetConfig>>,
    pub initial_dataset: Option<DatasetKey>,
    pub data_dir: Option<PathBuf>,
}

impl ViewerConfigFile {
    /// Apply stored settings to a ViewerConfig instance.
    pub fn apply_to(self, cfg: &mut ViewerConfig) -> Result<(), ConfigError> {
        if let Some(title) = self.title {
            cfg.title = title;
        }
        if let Some(canvas) = self.canvas {
            cfg.canvas = canvas;
        }
        if let Some(step) = self.tick_step {
            cfg.tick_step = step;
        }
        if let Some(interaction) = self.interaction {
            cfg.interaction = interaction;
        }
        if let Some(name) = self.color_scheme {
            cfg.color_scheme = ColorScheme::from_name(&name)
                .ok_or_else(|| ConfigError::Invalid(format!("unknown color scheme '{name}'")))?;
        }
        if let Some(datasets) = self.datasets {
            cfg.datasets = datasets;
        }
        if self.initial_dataset.is_some() {
            cfg.initial_dataset = self.initial_dataset;
        }
        if let Some(dir) = self.data_dir {
            cfg.data_dir = dir;
        }
        Ok(())
    }
}
