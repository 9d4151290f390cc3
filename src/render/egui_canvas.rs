//! [`Canvas`] backend drawing through an egui [`Painter`].

use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Shape, Stroke, Vec2};

use crate::mapper::PixelPos;

use super::canvas::Canvas;
use super::shape::Marker;

const TICK_FONT_SIZE: f32 = 11.0;

/// Draws onto `rect` of an egui painter; canvas pixel `(0, 0)` is `rect.min`.
pub struct EguiCanvas<'p> {
    painter: &'p Painter,
    rect: Rect,
}

impl<'p> EguiCanvas<'p> {
    pub fn new(painter: &'p Painter, rect: Rect) -> Self {
        Self { painter, rect }
    }

    fn pos(&self, p: PixelPos) -> Pos2 {
        self.rect.min + Vec2::new(p.x as f32, p.y as f32)
    }
}

impl Canvas for EguiCanvas<'_> {
    fn clear(&mut self, color: Color32) {
        self.painter.rect_filled(self.rect, 0.0, color);
    }

    fn line(&mut self, from: PixelPos, to: PixelPos, stroke: Stroke) {
        self.painter
            .line_segment([self.pos(from), self.pos(to)], stroke);
    }

    fn text(&mut self, pos: PixelPos, text: &str, color: Color32) {
        self.painter.text(
            self.pos(pos),
            Align2::CENTER_CENTER,
            text,
            FontId::proportional(TICK_FONT_SIZE),
            color,
        );
    }

    fn marker(&mut self, marker: &Marker, fill: Color32, outline: Option<Stroke>) {
        let stroke = outline.unwrap_or(Stroke::NONE);
        match *marker {
            Marker::Circle { center, radius } => {
                self.painter
                    .circle(self.pos(center), radius as f32, fill, stroke);
            }
            Marker::Square { min, side } => {
                let rect = Rect::from_min_size(self.pos(min), Vec2::splat(side as f32));
                self.painter.rect_filled(rect, 0.0, fill);
                if outline.is_some() {
                    self.painter
                        .rect_stroke(rect, 0.0, stroke, egui::StrokeKind::Middle);
                }
            }
            Marker::Triangle { vertices } => {
                let points = vertices.iter().map(|v| self.pos(*v)).collect();
                self.painter
                    .add(Shape::convex_polygon(points, fill, stroke));
            }
        }
    }
}
