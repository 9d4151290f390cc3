//! scatterview crate root: re-exports and module wiring.
//!
//! An interactive 2D scatter-plot viewer built on egui/eframe. Clicking a
//! point colors every other point by quadrant around it; Ctrl/Cmd-clicking
//! highlights its nearest neighbors instead.
//!
//! Modules:
//! - `data`: points, datasets, CSV loading, neighbor search, selection state
//! - `mapper`: data ↔ pixel coordinate mapping
//! - `picker`: hit-testing a pointer position against the points
//! - `render`: stateless scene drawing onto a [`Canvas`]
//! - `viewer`: ties dataset, selection and loads together
//! - `config`: viewer configuration and YAML/JSON config files
//! - `events`: subscription to selection and dataset events
//! - `app`: eframe window, top bar and info window

pub mod app;
pub mod color_scheme;
pub mod config;
pub mod data;
pub mod error;
pub mod events;
pub mod mapper;
pub mod picker;
pub mod render;
pub mod viewer;

// Public re-exports for a compact external API
pub use app::{run_viewer, ScatterApp};
pub use color_scheme::{ColorScheme, PointPalette};
pub use config::{CanvasGeometry, DatasetConfig, InteractionConfig, ViewerConfig};
pub use data::dataset::{Bounds, Dataset, DatasetKey};
pub use data::loader::{CsvDatasetLoader, DatasetLoader, LoadQueue, LoadTicket};
pub use data::neighbors::{nearest, NeighborExclusion};
pub use data::point::{Point, PointId};
pub use data::selection::{Click, ClickKind, SelectionChange, SelectionState, ViewState};
pub use error::{ConfigError, LoadError};
pub use events::{EventController, EventFilter, EventKind, ViewerEvent};
pub use mapper::{CoordinateMapper, OriginMode, PixelPos};
pub use picker::pick;
pub use render::{render_scene, Canvas, RecordingCanvas, Scene};
pub use viewer::Viewer;
