//! Hit-testing: pointer position → data point.

use crate::data::point::{Point, PointId};
use crate::mapper::{CoordinateMapper, PixelPos};

/// Default half-width (in pixels) of the square pick window.
pub const DEFAULT_PICK_TOLERANCE_PX: f64 = 10.0;

/// Return the first point (in dataset order) whose projection lies strictly
/// within `tolerance` pixels of `pointer` on both axes.
///
/// The window is a square, not a circle, and the first match wins even when a
/// later point is closer.
pub fn pick(
    pointer: PixelPos,
    points: &[Point],
    mapper: &CoordinateMapper,
    tolerance: f64,
) -> Option<PointId> {
    points.iter().position(|p| {
        let px = mapper.to_pixel(p);
        (px.x - pointer.x).abs() < tolerance && (px.y - pointer.y).abs() < tolerance
    })
}
