//! Drawing surface abstraction.
//!
//! The renderer only talks to [`Canvas`]; the egui backend lives in
//! [`super::egui_canvas`], and [`RecordingCanvas`] captures draw calls so the
//! scene can be inspected without a window.

use egui::{Color32, Stroke};

use crate::mapper::PixelPos;

use super::shape::Marker;

pub trait Canvas {
    /// Fill the whole canvas with `color`.
    fn clear(&mut self, color: Color32);
    fn line(&mut self, from: PixelPos, to: PixelPos, stroke: Stroke);
    /// Draw `text` centred on `pos`.
    fn text(&mut self, pos: PixelPos, text: &str, color: Color32);
    fn marker(&mut self, marker: &Marker, fill: Color32, outline: Option<Stroke>);
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color32),
    Line {
        from: PixelPos,
        to: PixelPos,
        stroke: Stroke,
    },
    Text {
        pos: PixelPos,
        text: String,
        color: Color32,
    },
    Marker {
        marker: Marker,
        fill: Color32,
        outline: Option<Stroke>,
    },
}

/// Canvas that records every draw call in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    pub commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded markers with their fill and outline, in draw order.
    pub fn markers(&self) -> Vec<(Marker, Color32, Option<Stroke>)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Marker {
                    marker,
                    fill,
                    outline,
                } => Some((*marker, *fill, *outline)),
                _ => None,
            })
            .collect()
    }

    /// Recorded text labels, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn lines(&self) -> Vec<(PixelPos, PixelPos, Stroke)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Line { from, to, stroke } => Some((*from, *to, *stroke)),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, color: Color32) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(color));
    }

    fn line(&mut self, from: PixelPos, to: PixelPos, stroke: Stroke) {
        self.commands.push(DrawCommand::Line { from, to, stroke });
    }

    fn text(&mut self, pos: PixelPos, text: &str, color: Color32) {
        self.commands.push(DrawCommand::Text {
            pos,
            text: text.to_string(),
            color,
        });
    }

    fn marker(&mut self, marker: &Marker, fill: Color32, outline: Option<Stroke>) {
        self.commands.push(DrawCommand::Marker {
            marker: *marker,
            fill,
            outline,
        });
    }
}
