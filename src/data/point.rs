//! Labeled data points.

use serde::{Deserialize, Serialize};

/// Index of a point inside its dataset.
///
/// Two points are *the same point* when their ids are equal; two points are
/// merely *at the same position* when [`Point::same_position`] holds.
pub type PointId = usize;

/// A single labeled point in data space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub label: String,
}

impl Point {
    pub fn new(x: f64, y: f64, label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            label: label.into(),
        }
    }

    /// Value equality on coordinates only; the label is ignored.
    pub fn same_position(&self, other: &Point) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// Euclidean distance in data units.
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}
