//! Selection state machine.
//!
//! A plain click toggles quadrant mode, a modified click (Ctrl/Cmd held)
//! toggles neighbor mode:
//!
//! | State            | Plain click on `hit`                 | Modified click on `hit`                 |
//! |------------------|--------------------------------------|-----------------------------------------|
//! | `Idle`           | `Quadrant(hit)`                      | `Neighbors(hit)`                        |
//! | `Quadrant(p)`    | `Idle` if `hit` is at `p`'s position, else `Quadrant(hit)` | `Neighbors(hit)` (never toggles off) |
//! | `Neighbors(p)`   | `Quadrant(hit)`                      | `Idle` if `hit` is at `p`'s position, else `Neighbors(hit)` |
//!
//! Clicks that hit no point are ignored in every state.

use crate::config::InteractionConfig;
use crate::mapper::{CoordinateMapper, PixelPos};
use crate::picker::pick;

use super::neighbors::nearest;
use super::point::{Point, PointId};

/// Whether the click carried the selection modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickKind {
    Plain,
    Modified,
}

/// A pointer click in canvas-relative pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Click {
    pub pos: PixelPos,
    pub kind: ClickKind,
}

impl Click {
    pub fn plain(x: f64, y: f64) -> Self {
        Self {
            pos: PixelPos::new(x, y),
            kind: ClickKind::Plain,
        }
    }

    pub fn modified(x: f64, y: f64) -> Self {
        Self {
            pos: PixelPos::new(x, y),
            kind: ClickKind::Modified,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Idle,
    /// A point is selected; other points get quadrant colors.
    Quadrant { selected: PointId },
    /// A point is selected together with its nearest neighbors (closest first).
    /// `neighbors` is never empty.
    Neighbors {
        selected: PointId,
        neighbors: Vec<PointId>,
    },
}

/// Outcome of a click that changed the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionChange {
    Selected(PointId),
    NeighborsShown {
        selected: PointId,
        neighbors: Vec<PointId>,
    },
    Cleared,
}

/// Interaction state owned by the viewer: selection, info anchor and a
/// pending-redraw flag.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    state: SelectionState,
    anchor: Option<PixelPos>,
    changed: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn selected(&self) -> Option<PointId> {
        match &self.state {
            SelectionState::Idle => None,
            SelectionState::Quadrant { selected } => Some(*selected),
            SelectionState::Neighbors { selected, .. } => Some(*selected),
        }
    }

    pub fn neighbors(&self) -> &[PointId] {
        match &self.state {
            SelectionState::Neighbors { neighbors, .. } => neighbors,
            _ => &[],
        }
    }

    /// Where the info window should be anchored (the last selecting click).
    pub fn anchor(&self) -> Option<PixelPos> {
        self.anchor
    }

    pub fn is_idle(&self) -> bool {
        self.state == SelectionState::Idle
    }

    /// Return to `Idle`. Returns `true` if anything was selected before.
    pub fn reset(&mut self) -> bool {
        if self.is_idle() && self.anchor.is_none() {
            return false;
        }
        self.state = SelectionState::Idle;
        self.anchor = None;
        self.changed = true;
        true
    }

    /// Consume the change notification. Returns `true` at most once per change.
    pub fn take_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }

    /// Resolve `click` against `points` and apply it.
    ///
    /// Returns `None` when the click hit nothing (state untouched).
    pub fn handle_click(
        &mut self,
        click: Click,
        points: &[Point],
        mapper: &CoordinateMapper,
        interaction: &InteractionConfig,
    ) -> Option<SelectionChange> {
        let hit = pick(click.pos, points, mapper, interaction.pick_tolerance_px)?;
        self.apply(hit, click, points, interaction)
    }

    /// Apply a click that already resolved to `hit`.
    pub fn apply(
        &mut self,
        hit: PointId,
        click: Click,
        points: &[Point],
        interaction: &InteractionConfig,
    ) -> Option<SelectionChange> {
        let hit_point = points.get(hit)?;
        let at_selected = |selected: PointId| {
            points
                .get(selected)
                .is_some_and(|p| p.same_position(hit_point))
        };

        // A click only toggles off the mode it would enter.
        let toggles_off = match (click.kind, &self.state) {
            (ClickKind::Plain, SelectionState::Quadrant { selected }) => at_selected(*selected),
            (ClickKind::Modified, SelectionState::Neighbors { selected, .. }) => {
                at_selected(*selected)
            }
            _ => false,
        };

        let change = match click.kind {
            _ if toggles_off => self.clear(),
            ClickKind::Plain => self.select_quadrant(hit, click.pos),
            ClickKind::Modified => {
                let neighbors = nearest(
                    hit,
                    points,
                    interaction.neighbor_count,
                    interaction.neighbor_exclusion,
                );
                if neighbors.is_empty() {
                    // nothing to highlight: same as quadrant mode
                    self.select_quadrant(hit, click.pos)
                } else {
                    self.state = SelectionState::Neighbors {
                        selected: hit,
                        neighbors: neighbors.clone(),
                    };
                    self.anchor = Some(click.pos);
                    SelectionChange::NeighborsShown {
                        selected: hit,
                        neighbors,
                    }
                }
            }
        };
        self.changed = true;
        Some(change)
    }

    fn select_quadrant(&mut self, hit: PointId, anchor: PixelPos) -> SelectionChange {
        self.state = SelectionState::Quadrant { selected: hit };
        self.anchor = Some(anchor);
        SelectionChange::Selected(hit)
    }

    fn clear(&mut self) -> SelectionChange {
        self.state = SelectionState::Idle;
        self.anchor = None;
        SelectionChange::Cleared
    }
}
