use std::fmt;

use serde::{Deserialize, Serialize};

use super::point::{Point, PointId};

/// Identifier selecting which point collection is active.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DatasetKey(pub String);

impl DatasetKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DatasetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DatasetKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Visible axis range: data extrema rounded outward to a multiple of the tick step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Compute rounded bounds for `points`. Returns `None` for an empty slice.
    ///
    /// Minimums are floored and maximums ceiled to a multiple of `step`
    /// (e.g. `step = 10` turns `[-3, 27]` into `[-10, 30]`).
    pub fn from_points(points: &[Point], step: f64) -> Option<Self> {
        let first = points.first()?;
        let mut min_x = first.x;
        let mut max_x = first.x;
        let mut min_y = first.y;
        let mut max_y = first.y;
        for p in &points[1..] {
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }
        Some(Self {
            min_x: round_to_step(min_x, step, f64::floor),
            max_x: round_to_step(max_x, step, f64::ceil),
            min_y: round_to_step(min_y, step, f64::floor),
            max_y: round_to_step(max_y, step, f64::ceil),
        })
    }

    /// Width of the x range. Infinite when the range exceeds `f64::MAX`.
    pub fn x_span(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn y_span(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// `round(v / step) * step`, keeping `v` when that leaves the finite range.
fn round_to_step(v: f64, step: f64, round: fn(f64) -> f64) -> f64 {
    let r = round(v / step) * step;
    if r.is_finite() {
        r
    } else {
        v
    }
}

/// An ordered, immutable collection of points for one dataset key.
#[derive(Debug, Clone)]
pub struct Dataset {
    key: DatasetKey,
    points: Vec<Point>,
    bounds: Option<Bounds>,
}

impl Dataset {
    pub fn new(key: DatasetKey, points: Vec<Point>, tick_step: f64) -> Self {
        let bounds = Bounds::from_points(&points, tick_step);
        Self {
            key,
            points,
            bounds,
        }
    }

    pub fn key(&self) -> &DatasetKey {
        &self.key
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn get(&self, id: PointId) -> Option<&Point> {
        self.points.get(id)
    }

    /// `None` when the dataset is empty.
    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
