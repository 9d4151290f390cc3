//! Scene rendering.
//!
//! [`render_scene`] redraws everything from scratch on every call; it holds no
//! state between frames. Draw order:
//! - clear
//! - axes through the origin pixel, ticks and tick labels
//! - reference lines through the selected point (if any)
//! - all points, colored by [`point_role`]
//! - the selected point again, outlined

pub mod canvas;
pub mod egui_canvas;
pub mod shape;

use egui::{Color32, Stroke};

use crate::color_scheme::PointPalette;
use crate::data::point::{Point, PointId};
use crate::data::selection::ViewState;
use crate::mapper::{CoordinateMapper, PixelPos};

pub use canvas::{Canvas, DrawCommand, RecordingCanvas};
pub use egui_canvas::EguiCanvas;
pub use shape::{Marker, MarkerShape, ShapeEntry, ShapeMap};

pub const AXIS_WIDTH: f32 = 2.0;
pub const REFERENCE_LINE_WIDTH: f32 = 1.0;
pub const HIGHLIGHT_WIDTH: f32 = 2.0;
/// Tick marks extend this far on each side of the axis.
pub const TICK_HALF_LENGTH: f64 = 5.0;
/// Distance between an axis and its tick labels.
pub const TICK_LABEL_OFFSET: f64 = 15.0;
/// Upper bound on tick intervals per axis; past it the step is widened.
pub const MAX_TICKS_PER_AXIS: usize = 100;

/// Position of a point relative to the selected point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    TopRight,
    TopLeft,
    BottomLeft,
    BottomRight,
}

impl Quadrant {
    /// Classify `p` around `origin`. Points on a dividing line go to the first
    /// matching quadrant in the order top-right, top-left, bottom-left.
    pub fn classify(p: &Point, origin: &Point) -> Self {
        if p.x >= origin.x && p.y >= origin.y {
            Quadrant::TopRight
        } else if p.x <= origin.x && p.y >= origin.y {
            Quadrant::TopLeft
        } else if p.x <= origin.x && p.y <= origin.y {
            Quadrant::BottomLeft
        } else {
            Quadrant::BottomRight
        }
    }
}

/// What a point represents in the current view, which decides its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointRole {
    Default,
    Selected,
    Neighbor,
    Muted,
    Quadrant(Quadrant),
}

impl PointRole {
    pub fn color(self, palette: &PointPalette) -> Color32 {
        match self {
            PointRole::Default => palette.default,
            PointRole::Selected => palette.selected,
            PointRole::Neighbor => palette.neighbor,
            PointRole::Muted => palette.muted,
            PointRole::Quadrant(Quadrant::TopRight) => palette.top_right,
            PointRole::Quadrant(Quadrant::TopLeft) => palette.top_left,
            PointRole::Quadrant(Quadrant::BottomLeft) => palette.bottom_left,
            PointRole::Quadrant(Quadrant::BottomRight) => palette.bottom_right,
        }
    }
}

/// Role of point `id`; the first matching rule wins:
/// 1. nothing selected → `Default`
/// 2. same position as the selected point → `Selected`
/// 3. in the neighbor set → `Neighbor`
/// 4. neighbor mode active → `Muted`
/// 5. otherwise → its `Quadrant` around the selected point
pub fn point_role(id: PointId, points: &[Point], view: &ViewState) -> PointRole {
    let Some(point) = points.get(id) else {
        return PointRole::Default;
    };
    let Some(selected) = view.selected().and_then(|s| points.get(s)) else {
        return PointRole::Default;
    };
    if point.same_position(selected) {
        PointRole::Selected
    } else if view.neighbors().contains(&id) {
        PointRole::Neighbor
    } else if !view.neighbors().is_empty() {
        PointRole::Muted
    } else {
        PointRole::Quadrant(Quadrant::classify(point, selected))
    }
}

/// Everything needed to draw one frame.
pub struct Scene<'a> {
    pub points: &'a [Point],
    /// `None` when there is nothing to draw (no dataset or an empty one).
    pub mapper: Option<&'a CoordinateMapper>,
    pub view: &'a ViewState,
    pub shapes: &'a ShapeMap,
    pub palette: &'a PointPalette,
    pub tick_step: f64,
}

pub fn render_scene(canvas: &mut dyn Canvas, scene: &Scene<'_>) {
    let palette = scene.palette;
    canvas.clear(palette.background);

    let Some(mapper) = scene.mapper else {
        return;
    };
    if scene.points.is_empty() {
        return;
    }

    draw_axes(canvas, mapper, palette, scene.tick_step);

    let selected = scene.view.selected().and_then(|id| scene.points.get(id));
    if let Some(sel) = selected {
        draw_reference_lines(canvas, mapper, palette, sel);
    }

    for (id, point) in scene.points.iter().enumerate() {
        let Some(shape) = scene.shapes.shape_for(&point.label) else {
            continue;
        };
        let color = point_role(id, scene.points, scene.view).color(palette);
        canvas.marker(&Marker::new(shape, mapper.to_pixel(point)), color, None);
    }

    if let Some(sel) = selected {
        if let Some(shape) = scene.shapes.shape_for(&sel.label) {
            canvas.marker(
                &Marker::new(shape, mapper.to_pixel(sel)),
                palette.default,
                Some(Stroke::new(HIGHLIGHT_WIDTH, palette.highlight)),
            );
        }
    }
}

fn draw_axes(canvas: &mut dyn Canvas, mapper: &CoordinateMapper, palette: &PointPalette, step: f64) {
    let stroke = Stroke::new(AXIS_WIDTH, palette.axis);
    let origin = mapper.origin_pixel();

    canvas.line(
        PixelPos::new(origin.x, mapper.top()),
        PixelPos::new(origin.x, mapper.bottom()),
        stroke,
    );
    canvas.line(
        PixelPos::new(mapper.left(), origin.y),
        PixelPos::new(mapper.right(), origin.y),
        stroke,
    );

    let bounds = mapper.bounds();
    for x in tick_values(bounds.min_x, bounds.max_x, step) {
        let px = mapper.to_pixel_x(x);
        canvas.line(
            PixelPos::new(px, origin.y - TICK_HALF_LENGTH),
            PixelPos::new(px, origin.y + TICK_HALF_LENGTH),
            stroke,
        );
        canvas.text(
            PixelPos::new(px, origin.y + TICK_LABEL_OFFSET),
            &tick_label(x),
            palette.tick_label,
        );
    }
    for y in tick_values(bounds.min_y, bounds.max_y, step) {
        let py = mapper.to_pixel_y(y);
        canvas.line(
            PixelPos::new(origin.x - TICK_HALF_LENGTH, py),
            PixelPos::new(origin.x + TICK_HALF_LENGTH, py),
            stroke,
        );
        canvas.text(
            PixelPos::new(origin.x - TICK_LABEL_OFFSET, py),
            &tick_label(y),
            palette.tick_label,
        );
    }
}

fn draw_reference_lines(
    canvas: &mut dyn Canvas,
    mapper: &CoordinateMapper,
    palette: &PointPalette,
    selected: &Point,
) {
    let stroke = Stroke::new(REFERENCE_LINE_WIDTH, palette.reference_line);
    let at = mapper.to_pixel(selected);
    canvas.line(
        PixelPos::new(at.x, mapper.top()),
        PixelPos::new(at.x, mapper.bottom()),
        stroke,
    );
    canvas.line(
        PixelPos::new(mapper.left(), at.y),
        PixelPos::new(mapper.right(), at.y),
        stroke,
    );
}

/// Multiples of `step` from `min` (rounded up to a multiple) through `max`.
///
/// When the range holds more than [`MAX_TICKS_PER_AXIS`] steps, a coarser
/// step of 1, 2 or 5 times a power of ten times `step` is used instead.
pub fn tick_values(min: f64, max: f64, step: f64) -> Vec<f64> {
    if !(step > 0.0) || !step.is_finite() || !min.is_finite() || !max.is_finite() || min > max {
        return Vec::new();
    }
    // divide first: `max - min` overflows for ranges near f64::MAX
    let intervals = max / step - min / step;
    if !intervals.is_finite() {
        return Vec::new();
    }
    let limit = MAX_TICKS_PER_AXIS as f64;
    let step = if intervals > limit {
        step * nice_multiplier(intervals / limit)
    } else {
        step
    };
    let first = (min / step).ceil();
    let last = (max / step + 1e-9).floor();
    if last < first {
        return Vec::new();
    }
    let count = (last - first) as u64;
    (0..=count).map(|i| (first + i as f64) * step).collect()
}

/// Smallest of 1, 2, 5 times a power of ten that is at least `raw`.
fn nice_multiplier(raw: f64) -> f64 {
    let magnitude = 10f64.powf(raw.log10().floor());
    [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .map(|f| f * magnitude)
        .find(|m| *m >= raw)
        .unwrap_or(10.0 * magnitude)
}

/// Tick label text: `-10`, `0`, `2.5`, `1.7e19`.
pub fn tick_label(value: f64) -> String {
    if value.abs() >= 1e15 {
        return format!("{value:e}");
    }
    // nine decimals absorb float noise from `index * step`
    let fixed = format!("{value:.9}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
