//! Native window wrapper around [`Viewer`].

use std::time::Duration;

use eframe::egui;

use crate::color_scheme::{ColorScheme, PointPalette};
use crate::config::ViewerConfig;
use crate::data::selection::Click;
use crate::events::{EventKind, ExportMeta, ViewerEvent};
use crate::mapper::PixelPos;
use crate::render::{Canvas, EguiCanvas, Marker};
use crate::viewer::Viewer;

use super::info_window::InfoWindow;
use super::screenshot::Screenshot;

/// How often to poll while a dataset load is outstanding.
const LOAD_POLL_INTERVAL: Duration = Duration::from_millis(50);
const LEGEND_ICON_SIZE: f32 = 16.0;

/// Standalone viewer application implementing [`eframe::App`].
///
/// Layout: a top bar (dataset toggle, legend, reload, screenshot, status)
/// above a fixed-size canvas. The info window floats over the canvas and
/// Escape clears the selection.
pub struct ScatterApp {
    pub viewer: Viewer,
    color_scheme: ColorScheme,
    palette: PointPalette,
    /// Applied once on the first frame.
    color_scheme_applied: bool,
    screenshot: Screenshot,
}

impl ScatterApp {
    pub fn new(config: ViewerConfig) -> Self {
        Self::with_viewer(Viewer::with_csv(config))
    }

    pub fn with_viewer(viewer: Viewer) -> Self {
        let color_scheme = viewer.config().color_scheme.clone();
        let palette = color_scheme.palette();
        Self {
            viewer,
            color_scheme,
            palette,
            color_scheme_applied: false,
            screenshot: Screenshot::default(),
        }
    }

    fn top_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            self.dataset_toggle(ui);
            ui.separator();
            self.legend(ui);
            ui.separator();
            self.scheme_picker(ui);
            ui.separator();
            if ui
                .button("⟳ Reload")
                .on_hover_text("Read the current dataset again")
                .clicked()
            {
                self.viewer.reload();
            }
            if ui
                .button("🖼 Save PNG")
                .on_hover_text("Save a screenshot of the window")
                .clicked()
            {
                self.screenshot.request(ui.ctx());
            }
            if self.viewer.is_loading() {
                ui.spinner();
            }
            if let Some(err) = self.viewer.last_error() {
                ui.colored_label(ui.visuals().error_fg_color, err);
            }
        });
    }

    fn dataset_toggle(&mut self, ui: &mut egui::Ui) {
        let current = self.viewer.active_key().clone();
        let mut chosen = None;
        egui::ComboBox::from_id_salt("dataset_toggle")
            .selected_text(self.viewer.active_dataset_config().display_name())
            .show_ui(ui, |ui| {
                for d in &self.viewer.config().datasets {
                    if ui
                        .selectable_label(d.key == current, d.display_name())
                        .clicked()
                        && d.key != current
                    {
                        chosen = Some(d.key.clone());
                    }
                }
            });
        if let Some(key) = chosen {
            self.viewer.switch_dataset(key);
        }
    }

    fn scheme_picker(&mut self, ui: &mut egui::Ui) {
        let mut chosen = None;
        egui::ComboBox::from_id_salt("color_scheme")
            .selected_text(self.color_scheme.label())
            .show_ui(ui, |ui| {
                for scheme in ColorScheme::all() {
                    if ui
                        .selectable_label(*scheme == self.color_scheme, scheme.label())
                        .clicked()
                    {
                        chosen = Some(scheme.clone());
                    }
                }
            });
        if let Some(scheme) = chosen {
            scheme.apply(ui.ctx());
            self.palette = scheme.palette();
            self.color_scheme = scheme;
        }
    }

    fn legend(&self, ui: &mut egui::Ui) {
        let shapes = &self.viewer.shown_dataset_config().shapes;
        for entry in shapes.entries() {
            let (rect, _) = ui.allocate_exact_size(
                egui::vec2(LEGEND_ICON_SIZE, LEGEND_ICON_SIZE),
                egui::Sense::hover(),
            );
            let mut canvas = EguiCanvas::new(ui.painter(), rect);
            let center = PixelPos::new(LEGEND_ICON_SIZE as f64 / 2.0, LEGEND_ICON_SIZE as f64 / 2.0);
            canvas.marker(
                &Marker::new(entry.shape, center),
                self.palette.default,
                None,
            );
            ui.label(format!("Label: {}", entry.label))
                .on_hover_text(entry.shape.label());
        }
    }

    fn canvas(&mut self, ui: &mut egui::Ui) {
        let geometry = self.viewer.config().canvas;
        let size = egui::vec2(geometry.width as f32, geometry.height as f32);
        let (response, painter) = ui.allocate_painter(size, egui::Sense::click());
        let rect = response.rect;

        if response.clicked() {
            if let Some(pointer) = response.interact_pointer_pos() {
                let rel = pointer - rect.min;
                let modified = ui.input(|i| i.modifiers.ctrl || i.modifiers.command);
                let click = if modified {
                    Click::modified(rel.x as f64, rel.y as f64)
                } else {
                    Click::plain(rel.x as f64, rel.y as f64)
                };
                if let Some(change) = self.viewer.click(click) {
                    log::debug!("Selection changed: {:?}", change);
                }
            }
        }

        let mut canvas = EguiCanvas::new(&painter, rect);
        self.viewer.render(&mut canvas, &self.palette);

        if let Some(info) =
            InfoWindow::from_view(self.viewer.selected_point(), self.viewer.anchor())
        {
            info.show(ui.ctx(), rect.min);
        }
    }
}

impl eframe::App for ScatterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.color_scheme_applied {
            self.color_scheme.apply(ctx);
            self.color_scheme_applied = true;
        }

        self.viewer.poll();

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.viewer.clear_selection();
        }

        egui::TopBottomPanel::top("scatter_top_bar").show(ctx, |ui| self.top_bar(ui));
        egui::CentralPanel::default().show(ctx, |ui| self.canvas(ui));

        if let Some(path) = self.screenshot.handle(ctx) {
            let mut ev = ViewerEvent::new(EventKind::SCREENSHOT);
            ev.export = Some(ExportMeta {
                path: Some(path.to_string_lossy().to_string()),
            });
            self.viewer.emit(ev);
        }

        if self.viewer.take_redraw() {
            ctx.request_repaint();
        }
        if self.viewer.is_loading() || self.screenshot.is_pending() {
            ctx.request_repaint_after(LOAD_POLL_INTERVAL);
        }
    }
}
