//! Floating details box for the selected point.

use eframe::egui;

use crate::data::point::Point;
use crate::mapper::PixelPos;

/// Offset of the window's top-left corner from the click that selected the point.
pub const INFO_WINDOW_OFFSET: f64 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub struct InfoWindow {
    pub label: String,
    pub x: f64,
    pub y: f64,
    /// Canvas-relative top-left corner.
    pub pos: PixelPos,
}

impl InfoWindow {
    /// Build the window for `point` anchored at `anchor`. Nothing is shown
    /// unless both are present.
    pub fn from_view(point: Option<&Point>, anchor: Option<PixelPos>) -> Option<Self> {
        let point = point?;
        let anchor = anchor?;
        Some(Self {
            label: point.label.clone(),
            x: point.x,
            y: point.y,
            pos: PixelPos::new(anchor.x + INFO_WINDOW_OFFSET, anchor.y + INFO_WINDOW_OFFSET),
        })
    }

    pub fn lines(&self) -> [String; 3] {
        [
            format!("Label: {}", self.label),
            format!("X: {:.2}", self.x),
            format!("Y: {:.2}", self.y),
        ]
    }

    /// Show as a foreground popup; `canvas_min` is the screen position of the
    /// canvas' top-left corner.
    pub fn show(&self, ctx: &egui::Context, canvas_min: egui::Pos2) {
        let at = canvas_min + egui::vec2(self.pos.x as f32, self.pos.y as f32);
        egui::Area::new(egui::Id::new("scatter_info_window"))
            .order(egui::Order::Foreground)
            .fixed_pos(at)
            .interactable(false)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    for line in self.lines() {
                        ui.label(line);
                    }
                });
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn needs_point_and_anchor() {
        let p = Point::new(1.0, 2.0, "a");
        assert!(InfoWindow::from_view(Some(&p), None).is_none());
        assert!(InfoWindow::from_view(None, Some(PixelPos::new(5.0, 5.0))).is_none());
    }

    #[test]
    fn offset_and_two_decimals() {
        let p = Point::new(3.14159, -2.0, "baz");
        let w = InfoWindow::from_view(Some(&p), Some(PixelPos::new(100.0, 40.0))).unwrap();
        assert_eq!(w.pos, PixelPos::new(110.0, 50.0));
        assert_eq!(w.lines(), ["Label: baz", "X: 3.14", "Y: -2.00"]);
    }
}
