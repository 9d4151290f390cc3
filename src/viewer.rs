//! Top-level view model: active dataset, selection state and pending loads.
//!
//! [`Viewer`] has no egui dependency beyond drawing through a [`Canvas`], so
//! the whole interaction flow (switch, load, click, redraw) can be driven from
//! tests.

use std::sync::Arc;
use std::time::Duration;

use crate::color_scheme::PointPalette;
use crate::config::{DatasetConfig, ViewerConfig};
use crate::data::dataset::{Dataset, DatasetKey};
use crate::data::loader::{DatasetLoader, LoadOutcome, LoadQueue};
use crate::data::point::{Point, PointId};
use crate::data::selection::{Click, ClickKind, SelectionChange, ViewState};
use crate::events::{
    ClickMeta, DatasetMeta, EventController, EventKind, SelectionMeta, ViewerEvent,
};
use crate::mapper::{CoordinateMapper, PixelPos};
use crate::render::{render_scene, Canvas, Scene};

pub struct Viewer {
    config: ViewerConfig,
    /// Key most recently requested; the displayed dataset may still be older.
    active_key: DatasetKey,
    active: DatasetConfig,
    /// Presentation of the dataset on screen.
    shown: DatasetConfig,
    dataset: Option<Dataset>,
    mapper: Option<CoordinateMapper>,
    view: ViewState,
    loads: LoadQueue,
    last_error: Option<String>,
    events: Option<EventController>,
    redraw: bool,
}

impl Viewer {
    /// Create the viewer and start loading the initial dataset.
    pub fn new(config: ViewerConfig, loader: Arc<dyn DatasetLoader>) -> Self {
        let active_key = config.initial_key();
        let active = config.dataset_or_default(&active_key);
        let events = config.events.clone();
        let mut viewer = Self {
            config,
            active_key: active_key.clone(),
            shown: active.clone(),
            active,
            dataset: None,
            mapper: None,
            view: ViewState::new(),
            loads: LoadQueue::new(loader),
            last_error: None,
            events,
            redraw: true,
        };
        viewer.request_load(active_key);
        viewer
    }

    /// Viewer backed by the config's CSV loader.
    pub fn with_csv(config: ViewerConfig) -> Self {
        let loader = Arc::new(config.csv_loader());
        Self::new(config, loader)
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn active_key(&self) -> &DatasetKey {
        &self.active_key
    }

    /// Presentation settings of the requested dataset.
    pub fn active_dataset_config(&self) -> &DatasetConfig {
        &self.active
    }

    /// Presentation settings of the dataset on screen.
    pub fn shown_dataset_config(&self) -> &DatasetConfig {
        &self.shown
    }

    /// The dataset currently displayed, if any has loaded yet.
    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    pub fn points(&self) -> &[Point] {
        self.dataset.as_ref().map(Dataset::points).unwrap_or_default()
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Mapper for the displayed dataset; `None` when nothing (or nothing
    /// non-empty) is loaded.
    pub fn mapper(&self) -> Option<&CoordinateMapper> {
        self.mapper.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loads.is_pending()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn selected_point(&self) -> Option<&Point> {
        let id = self.view.selected()?;
        self.dataset.as_ref()?.get(id)
    }

    pub fn anchor(&self) -> Option<PixelPos> {
        self.view.anchor()
    }

    /// Switch to `key`. The selection is cleared right away; the previous
    /// dataset stays on screen until the new one arrives.
    pub fn switch_dataset(&mut self, key: DatasetKey) {
        log::info!("Switching dataset '{}' -> '{}'", self.active_key, key);
        self.view.reset();
        self.active = self.config.dataset_or_default(&key);
        self.active_key = key.clone();
        self.redraw = true;
        self.request_load(key.clone());

        let mut ev = ViewerEvent::new(EventKind::DATASET_SWITCHED);
        ev.dataset = Some(DatasetMeta {
            key,
            point_count: None,
            error: None,
        });
        self.emit(ev);
    }

    /// Reload the active dataset from its source. The selection is kept
    /// until the fresh copy arrives.
    pub fn reload(&mut self) {
        let key = self.active_key.clone();
        self.request_load(key);
    }

    fn request_load(&mut self, key: DatasetKey) {
        log::info!("Requesting load of dataset '{}'", key);
        self.loads.request(key);
    }

    /// Apply the latest load result if it has arrived. Returns `true` when
    /// something was applied.
    pub fn poll(&mut self) -> bool {
        match self.loads.poll() {
            Some(outcome) => {
                self.apply_outcome(outcome);
                true
            }
            None => false,
        }
    }

    /// Block up to `timeout` for the pending load and apply it.
    pub fn wait_for_load(&mut self, timeout: Duration) -> bool {
        match self.loads.wait(timeout) {
            Some(outcome) => {
                self.apply_outcome(outcome);
                true
            }
            None => false,
        }
    }

    fn apply_outcome(&mut self, outcome: LoadOutcome) {
        let LoadOutcome { key, result, .. } = outcome;
        match result {
            Ok(points) => {
                let dataset = Dataset::new(key.clone(), points, self.config.tick_step);
                self.shown = self.config.dataset_or_default(&key);
                self.mapper = dataset
                    .bounds()
                    .map(|b| CoordinateMapper::new(b, self.config.canvas, self.shown.origin));
                log::info!("Applied dataset '{}' ({} points)", key, dataset.len());
                let count = dataset.len();
                self.dataset = Some(dataset);
                self.last_error = None;
                // ids from the previous dataset mean nothing now
                self.view.reset();
                self.redraw = true;

                let mut ev = ViewerEvent::new(EventKind::DATASET_LOADED);
                ev.dataset = Some(DatasetMeta {
                    key,
                    point_count: Some(count),
                    error: None,
                });
                self.emit(ev);
            }
            Err(e) => {
                log::error!("Failed to load dataset '{}': {}", key, e);
                let msg = e.to_string();
                self.last_error = Some(msg.clone());
                self.redraw = true;
                // the toggle follows what is on screen
                if let Some(shown) = &self.dataset {
                    self.active_key = shown.key().clone();
                    self.active = self.shown.clone();
                }

                let mut ev = ViewerEvent::new(EventKind::LOAD_FAILED);
                ev.dataset = Some(DatasetMeta {
                    key,
                    point_count: None,
                    error: Some(msg),
                });
                self.emit(ev);
            }
        }
    }

    /// Feed a canvas click through the picker and the selection state machine.
    ///
    /// Returns `None` when the click hit no point or nothing is loaded.
    pub fn click(&mut self, click: Click) -> Option<SelectionChange> {
        let mapper = self.mapper?;
        let points = self.dataset.as_ref()?.points();
        let change = self
            .view
            .handle_click(click, points, &mapper, &self.config.interaction)?;

        let mut kinds = EventKind::CLICK;
        kinds |= match &change {
            SelectionChange::Selected(_) => EventKind::POINT_SELECTED,
            SelectionChange::NeighborsShown { .. } => EventKind::NEIGHBORS_SHOWN,
            SelectionChange::Cleared => EventKind::SELECTION_CLEARED,
        };
        let with_point = |id: PointId| points.get(id).map(|p| (id, p.clone()));
        let mut ev = ViewerEvent::new(kinds);
        ev.click = Some(ClickMeta {
            pos: click.pos,
            modified: click.kind == ClickKind::Modified,
        });
        ev.selection = Some(SelectionMeta {
            selected: self.view.selected().and_then(with_point),
            neighbors: self
                .view
                .neighbors()
                .iter()
                .filter_map(|id| with_point(*id))
                .collect(),
        });
        self.emit(ev);
        Some(change)
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        if self.view.reset() {
            let mut ev = ViewerEvent::new(EventKind::SELECTION_CLEARED);
            ev.selection = Some(SelectionMeta {
                selected: None,
                neighbors: Vec::new(),
            });
            self.emit(ev);
        }
    }

    /// Draw the full scene.
    pub fn render(&self, canvas: &mut dyn Canvas, palette: &PointPalette) {
        let scene = Scene {
            points: self.points(),
            mapper: self.mapper.as_ref(),
            view: &self.view,
            shapes: &self.shown.shapes,
            palette,
            tick_step: self.config.tick_step,
        };
        render_scene(canvas, &scene);
    }

    /// Consume the pending redraw request. Returns `true` at most once per change.
    pub fn take_redraw(&mut self) -> bool {
        let view_changed = self.view.take_changed();
        std::mem::take(&mut self.redraw) || view_changed
    }

    pub(crate) fn emit(&self, event: ViewerEvent) {
        if let Some(ctrl) = &self.events {
            ctrl.emit(event);
        }
    }
}
