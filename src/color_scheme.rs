//! Color scheme definitions for the scatter view.
//!
//! A [`ColorScheme`] bundles the egui visuals used for the window chrome with
//! the [`PointPalette`] used by the renderer.

use eframe::egui::{Color32, Context, Visuals};

/// Colors for every role a point or canvas element can take.
#[derive(Clone, Debug, PartialEq)]
pub struct PointPalette {
    pub background: Color32,
    pub axis: Color32,
    pub tick_label: Color32,
    pub reference_line: Color32,
    /// Fill when nothing is selected.
    pub default: Color32,
    pub selected: Color32,
    pub neighbor: Color32,
    /// Points that are neither selected nor neighbors in neighbor mode.
    pub muted: Color32,
    pub top_right: Color32,
    pub top_left: Color32,
    pub bottom_left: Color32,
    pub bottom_right: Color32,
    /// Outline drawn around the selected point.
    pub highlight: Color32,
}

impl PointPalette {
    /// CSS named colors on a white canvas.
    pub fn classic() -> Self {
        Self {
            background: Color32::WHITE,
            axis: Color32::from_rgb(128, 128, 128),
            tick_label: Color32::BLACK,
            reference_line: Color32::from_rgb(211, 211, 211),
            default: Color32::from_rgb(255, 0, 0),
            selected: Color32::from_rgb(0, 0, 255),
            neighbor: Color32::from_rgb(0, 128, 0),
            muted: Color32::from_rgb(128, 128, 128),
            top_right: Color32::from_rgb(128, 0, 128),
            top_left: Color32::from_rgb(255, 165, 0),
            bottom_left: Color32::from_rgb(255, 192, 203),
            bottom_right: Color32::from_rgb(0, 255, 255),
            highlight: Color32::from_rgb(0, 0, 255),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color32::from_rgb(27, 27, 27),
            axis: Color32::from_rgb(140, 140, 140),
            tick_label: Color32::from_rgb(220, 220, 220),
            reference_line: Color32::from_rgb(70, 70, 70),
            default: Color32::from_rgb(214, 39, 40),
            selected: Color32::from_rgb(31, 119, 180),
            neighbor: Color32::from_rgb(44, 160, 44),
            muted: Color32::from_rgb(90, 90, 90),
            top_right: Color32::from_rgb(148, 103, 189),
            top_left: Color32::from_rgb(255, 127, 14),
            bottom_left: Color32::from_rgb(227, 119, 194),
            bottom_right: Color32::from_rgb(23, 190, 207),
            highlight: Color32::from_rgb(100, 170, 255),
        }
    }
}

impl Default for PointPalette {
    fn default() -> Self {
        Self::classic()
    }
}

/// Visual theme for the viewer, including user-defined custom schemes.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum ColorScheme {
    /// Light window, white canvas, CSS named point colors.
    #[default]
    Classic,
    /// Dark window and canvas.
    Dark,
    /// User-defined custom color scheme.
    Custom(CustomColorScheme),
}

/// User-defined custom color scheme.
#[derive(Clone, Debug, PartialEq)]
pub struct CustomColorScheme {
    /// Visuals for egui context (optional, fallback to light).
    pub visuals: Option<Visuals>,
    pub palette: PointPalette,
    /// Optional label for UI display.
    pub label: Option<String>,
}

impl ColorScheme {
    /// All built-in schemes (useful for combo-box UIs).
    pub fn all() -> &'static [ColorScheme] {
        &[ColorScheme::Classic, ColorScheme::Dark]
    }

    /// Look up a built-in scheme by its config name (`"classic"`, `"dark"`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "classic" | "light" => Some(ColorScheme::Classic),
            "dark" => Some(ColorScheme::Dark),
            _ => None,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> String {
        match self {
            ColorScheme::Classic => "Classic".to_string(),
            ColorScheme::Dark => "Dark".to_string(),
            ColorScheme::Custom(custom) => {
                custom.label.clone().unwrap_or_else(|| "Custom".to_string())
            }
        }
    }

    /// Apply this scheme's visuals to an egui context.
    pub fn apply(&self, ctx: &Context) {
        match self {
            ColorScheme::Classic => ctx.set_visuals(Visuals::light()),
            ColorScheme::Dark => ctx.set_visuals(Visuals::dark()),
            ColorScheme::Custom(custom) => {
                ctx.set_visuals(custom.visuals.clone().unwrap_or_else(Visuals::light));
            }
        }
    }

    /// Point and canvas colors for this scheme.
    pub fn palette(&self) -> PointPalette {
        match self {
            ColorScheme::Classic => PointPalette::classic(),
            ColorScheme::Dark => PointPalette::dark(),
            ColorScheme::Custom(custom) => custom.palette.clone(),
        }
    }
}
