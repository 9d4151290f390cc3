//! Coordinate mapping between data space and canvas pixels.
//!
//! Pixel coordinates are relative to the canvas' own top-left corner, with Y
//! growing downwards. Data Y grows upwards, so the Y mapping is inverted.

use serde::{Deserialize, Serialize};

use crate::config::CanvasGeometry;
use crate::data::dataset::Bounds;
use crate::data::point::Point;

/// A position on the canvas in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PixelPos {
    pub x: f64,
    pub y: f64,
}

impl PixelPos {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Where the axes cross on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OriginMode {
    /// Axes cross at the data-space origin `(0, 0)`.
    DataZero,
    /// Axes are pinned to the bottom-left corner of the plot area.
    #[default]
    Corner,
}

/// Data ↔ pixel transform for one dataset on one canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    bounds: Bounds,
    geometry: CanvasGeometry,
    origin_mode: OriginMode,
}

impl CoordinateMapper {
    pub fn new(bounds: Bounds, geometry: CanvasGeometry, origin_mode: OriginMode) -> Self {
        Self {
            bounds,
            geometry,
            origin_mode,
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn origin_mode(&self) -> OriginMode {
        self.origin_mode
    }

    /// Drawable width between the left and right padding.
    fn plot_width(&self) -> f64 {
        self.geometry.width - 2.0 * self.geometry.padding
    }

    /// Drawable height between the top and bottom padding.
    fn plot_height(&self) -> f64 {
        self.geometry.height - 2.0 * self.geometry.padding
    }

    pub fn to_pixel_x(&self, x: f64) -> f64 {
        let t = fraction(x, self.bounds.min_x, self.bounds.max_x);
        self.geometry.padding + t * self.plot_width()
    }

    pub fn to_pixel_y(&self, y: f64) -> f64 {
        let t = fraction(y, self.bounds.min_y, self.bounds.max_y);
        self.geometry.height - self.geometry.padding - t * self.plot_height()
    }

    pub fn to_pixel(&self, point: &Point) -> PixelPos {
        PixelPos::new(self.to_pixel_x(point.x), self.to_pixel_y(point.y))
    }

    /// Inverse of [`to_pixel_x`](Self::to_pixel_x). A single-valued axis maps back to its minimum.
    pub fn to_data_x(&self, px: f64) -> f64 {
        let t = (px - self.geometry.padding) / self.plot_width();
        interpolate(t, self.bounds.min_x, self.bounds.max_x)
    }

    /// Inverse of [`to_pixel_y`](Self::to_pixel_y). A single-valued axis maps back to its minimum.
    pub fn to_data_y(&self, py: f64) -> f64 {
        let t = (self.geometry.height - self.geometry.padding - py) / self.plot_height();
        interpolate(t, self.bounds.min_y, self.bounds.max_y)
    }

    /// Pixel position where the two axes cross.
    pub fn origin_pixel(&self) -> PixelPos {
        match self.origin_mode {
            OriginMode::DataZero => PixelPos::new(self.to_pixel_x(0.0), self.to_pixel_y(0.0)),
            OriginMode::Corner => PixelPos::new(
                self.geometry.padding,
                self.geometry.height - self.geometry.padding,
            ),
        }
    }

    /// Top edge of the plot area.
    pub fn top(&self) -> f64 {
        self.geometry.padding
    }

    /// Bottom edge of the plot area.
    pub fn bottom(&self) -> f64 {
        self.geometry.height - self.geometry.padding
    }

    /// Left edge of the plot area.
    pub fn left(&self) -> f64 {
        self.geometry.padding
    }

    /// Right edge of the plot area.
    pub fn right(&self) -> f64 {
        self.geometry.width - self.geometry.padding
    }
}

/// Position of `v` within `[min, max]` as a fraction; `0.5` when the range is
/// a single value.
fn fraction(v: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    let t = if span == 0.0 {
        0.5
    } else if span.is_finite() {
        (v - min) / span
    } else {
        // span overflowed: work on halves, which always fit
        (v / 2.0 - min / 2.0) / (max / 2.0 - min / 2.0)
    };
    if t.is_finite() {
        t
    } else {
        0.5
    }
}

/// Inverse of [`fraction`]. A single-valued (or unusable) range maps to `min`.
fn interpolate(t: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    let v = if span == 0.0 || !t.is_finite() {
        min
    } else if span.is_finite() {
        min + t * span
    } else {
        2.0 * (min / 2.0 + t * (max / 2.0 - min / 2.0))
    };
    if v.is_finite() {
        v
    } else {
        min
    }
}
