//! Event system for the scatter viewer.
//!
//! Callers subscribe via [`EventController`] to selection, dataset and export
//! events. Each event carries a set of [`EventKind`] flags (bitflags-style)
//! so that one occurrence can match several categories (a click that selects
//! a point is both `CLICK` and `POINT_SELECTED`).
//!
//! The caller specifies an [`EventFilter`] to receive only the events they
//! care about. The filter is a simple OR mask: an event is delivered when
//! `(event.kinds & filter) != 0`.

use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, Mutex};

use crate::data::dataset::DatasetKey;
use crate::data::point::{Point, PointId};
use crate::mapper::PixelPos;

// ─────────────────────────────────────────────────────────────────────────────
// EventKind – bitflags
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventKind(pub u64);

impl EventKind {
    /// A click on the canvas that hit a point.
    pub const CLICK: Self = Self(1 << 0);
    /// A point was selected in quadrant mode.
    pub const POINT_SELECTED: Self = Self(1 << 1);
    /// A point was selected together with its nearest neighbors.
    pub const NEIGHBORS_SHOWN: Self = Self(1 << 2);
    /// The selection was toggled off or reset.
    pub const SELECTION_CLEARED: Self = Self(1 << 3);
    /// The active dataset key changed (the load may still be running).
    pub const DATASET_SWITCHED: Self = Self(1 << 4);
    /// A dataset finished loading and is now displayed.
    pub const DATASET_LOADED: Self = Self(1 << 5);
    /// A dataset failed to load; the previous one stays displayed.
    pub const LOAD_FAILED: Self = Self(1 << 6);
    /// A screenshot was saved.
    pub const SCREENSHOT: Self = Self(1 << 7);

    /// Wildcard: matches *every* event kind.
    pub const ALL: Self = Self(u64::MAX);

    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Check whether `self` contains all bits in `other`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Check whether `self` intersects with `other` (at least one bit in common).
    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for EventKind {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for EventKind {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "EMPTY");
        }
        if *self == EventKind::ALL {
            return write!(f, "ALL");
        }

        let pairs: &[(EventKind, &str)] = &[
            (EventKind::CLICK, "CLICK"),
            (EventKind::POINT_SELECTED, "POINT_SELECTED"),
            (EventKind::NEIGHBORS_SHOWN, "NEIGHBORS_SHOWN"),
            (EventKind::SELECTION_CLEARED, "SELECTION_CLEARED"),
            (EventKind::DATASET_SWITCHED, "DATASET_SWITCHED"),
            (EventKind::DATASET_LOADED, "DATASET_LOADED"),
            (EventKind::LOAD_FAILED, "LOAD_FAILED"),
            (EventKind::SCREENSHOT, "SCREENSHOT"),
        ];

        let mut names = Vec::new();
        let mut known_bits: u64 = 0;
        for (kind, name) in pairs {
            known_bits |= kind.0;
            if self.contains(*kind) {
                names.push((*name).to_string());
            }
        }
        let extra = self.0 & !known_bits;
        if extra != 0 {
            names.push(format!("0x{:x}", extra));
        }
        write!(f, "{}", names.join("|"))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Metadata
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct ClickMeta {
    /// Canvas-relative click position.
    pub pos: PixelPos,
    /// Whether the selection modifier was held.
    pub modified: bool,
}

#[derive(Debug, Clone)]
pub struct SelectionMeta {
    /// The selected point, `None` when the selection was cleared.
    pub selected: Option<(PointId, Point)>,
    /// Neighbors of the selected point, closest first.
    pub neighbors: Vec<(PointId, Point)>,
}

#[derive(Debug, Clone)]
pub struct DatasetMeta {
    pub key: DatasetKey,
    /// Number of points, once loaded.
    pub point_count: Option<usize>,
    /// Load failure message.
    pub error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ExportMeta {
    pub path: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// ViewerEvent
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct ViewerEvent {
    pub kinds: EventKind,
    /// Seconds since the controller was created; set on emit.
    pub timestamp: f64,
    pub click: Option<ClickMeta>,
    pub selection: Option<SelectionMeta>,
    pub dataset: Option<DatasetMeta>,
    pub export: Option<ExportMeta>,
}

impl ViewerEvent {
    pub fn new(kinds: EventKind) -> Self {
        Self {
            kinds,
            timestamp: 0.0,
            click: None,
            selection: None,
            dataset: None,
            export: None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// EventFilter
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct EventFilter {
    pub mask: EventKind,
}

impl EventFilter {
    pub const fn all() -> Self {
        Self {
            mask: EventKind::ALL,
        }
    }

    pub const fn only(mask: EventKind) -> Self {
        Self { mask }
    }

    #[inline]
    pub fn matches(&self, event: &ViewerEvent) -> bool {
        event.kinds.intersects(self.mask)
    }
}

impl Default for EventFilter {
    fn default() -> Self {
        Self::all()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// EventController
// ─────────────────────────────────────────────────────────────────────────────

struct Subscriber {
    filter: EventFilter,
    sender: Sender<ViewerEvent>,
}

/// Distributes viewer events to subscribers.
///
/// Attach it to [`ViewerConfig::events`](crate::config::ViewerConfig::events)
/// before launching the UI, then call [`subscribe`](Self::subscribe).
#[derive(Clone)]
pub struct EventController {
    inner: Arc<Mutex<EventCtrlInner>>,
}

struct EventCtrlInner {
    subscribers: Vec<Subscriber>,
    start_instant: std::time::Instant,
}

impl EventController {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(EventCtrlInner {
                subscribers: Vec::new(),
                start_instant: std::time::Instant::now(),
            })),
        }
    }

    pub fn subscribe(&self, filter: EventFilter) -> Receiver<ViewerEvent> {
        let (tx, rx) = std::sync::mpsc::channel();
        let mut inner = self.inner.lock().unwrap();
        inner.subscribers.push(Subscriber { filter, sender: tx });
        rx
    }

    pub fn subscribe_all(&self) -> Receiver<ViewerEvent> {
        self.subscribe(EventFilter::all())
    }

    /// Send `event` to every subscriber whose filter matches.
    ///
    /// Subscribers whose receiver was dropped are removed the next time an
    /// event matches them.
    pub fn emit(&self, mut event: ViewerEvent) {
        let mut inner = self.inner.lock().unwrap();
        event.timestamp = inner.start_instant.elapsed().as_secs_f64();
        inner.subscribers.retain(|sub| {
            if sub.filter.matches(&event) {
                sub.sender.send(event.clone()).is_ok()
            } else {
                true
            }
        });
    }

    /// Number of live subscribers (as of the last emit).
    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().unwrap().subscribers.len()
    }
}

impl Default for EventController {
    fn default() -> Self {
        Self::new()
    }
}
