//! Marker shapes and the per-dataset label → shape vocabulary.

use serde::{Deserialize, Serialize};

use crate::mapper::PixelPos;

/// Circle radius in pixels.
pub const CIRCLE_RADIUS: f64 = 5.0;
/// Half the side length of a square marker.
pub const SQUARE_HALF_SIZE: f64 = 5.0;
/// Distance from the centre to the apex / base of a triangle marker.
pub const TRIANGLE_SIZE: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarkerShape {
    Circle,
    Square,
    Triangle,
}

impl MarkerShape {
    pub fn label(&self) -> &'static str {
        match self {
            MarkerShape::Circle => "Circle",
            MarkerShape::Square => "Square",
            MarkerShape::Triangle => "Triangle",
        }
    }
}

/// A concrete marker placed on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Marker {
    Circle { center: PixelPos, radius: f64 },
    /// Axis-aligned square given by its top-left corner and side length.
    Square { min: PixelPos, side: f64 },
    /// Apex first, then the two base corners.
    Triangle { vertices: [PixelPos; 3] },
}

impl Marker {
    pub fn new(shape: MarkerShape, center: PixelPos) -> Self {
        let PixelPos { x, y } = center;
        match shape {
            MarkerShape::Circle => Marker::Circle {
                center,
                radius: CIRCLE_RADIUS,
            },
            MarkerShape::Square => Marker::Square {
                min: PixelPos::new(x - SQUARE_HALF_SIZE, y - SQUARE_HALF_SIZE),
                side: 2.0 * SQUARE_HALF_SIZE,
            },
            MarkerShape::Triangle => Marker::Triangle {
                vertices: [
                    PixelPos::new(x, y - TRIANGLE_SIZE),
                    PixelPos::new(x + TRIANGLE_SIZE, y + TRIANGLE_SIZE),
                    PixelPos::new(x - TRIANGLE_SIZE, y + TRIANGLE_SIZE),
                ],
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeEntry {
    pub label: String,
    pub shape: MarkerShape,
}

/// Label → shape mapping for one dataset.
///
/// Labels without an entry use `fallback`; with no fallback they are not
/// drawn (they can still be picked).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ShapeMap {
    #[serde(default)]
    pub entries: Vec<ShapeEntry>,
    #[serde(default)]
    pub fallback: Option<MarkerShape>,
}

impl ShapeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(label, shape)` pairs, keeping their order for the legend.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, MarkerShape)>) -> Self {
        Self {
            entries: pairs
                .into_iter()
                .map(|(label, shape)| ShapeEntry {
                    label: label.to_string(),
                    shape,
                })
                .collect(),
            fallback: None,
        }
    }

    pub fn with_fallback(mut self, shape: MarkerShape) -> Self {
        self.fallback = Some(shape);
        self
    }

    pub fn shape_for(&self, label: &str) -> Option<MarkerShape> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.shape)
            .or(self.fallback)
    }

    pub fn entries(&self) -> &[ShapeEntry] {
        &self.entries
    }
}
