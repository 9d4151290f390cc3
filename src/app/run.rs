//! Top-level entry point for running the viewer as a native window.

use eframe::egui;

use crate::config::ViewerConfig;

use super::scatter_app::ScatterApp;

/// Launch the viewer in a native window.
///
/// Starts loading the initial dataset, opens a window sized to fit the canvas
/// plus the top bar, and enters the eframe event loop. Blocks until the
/// window is closed.
pub fn run_viewer(mut cfg: ViewerConfig) -> eframe::Result<()> {
    let title = cfg.title.clone();
    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);

    if opts.viewport.inner_size.is_none() {
        // canvas, central panel margins and the top bar
        let size = egui::vec2(cfg.canvas.width as f32 + 20.0, cfg.canvas.height as f32 + 60.0);
        opts.viewport = opts.viewport.clone().with_inner_size(size);
    }

    let app = ScatterApp::new(cfg);
    eframe::run_native(&title, opts, Box::new(|_cc| Ok(Box::new(app))))
}
