//! Persistent widget state
//!
//! Immediate-mode widgets are re-declared every frame, so anything that must
//! survive between frames lives here, keyed by the caller-chosen widget name.
//! Entries are created on first reference and kept for the lifetime of the
//! owning [`Gui`](crate::ui::Gui).

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::ui::widgets::Rect;

/// Geometry remembered by a container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerGeometry {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Width in pixels
    pub w: i32,
    /// Height in pixels
    pub h: i32,
}

impl ContainerGeometry {
    /// Screen rectangle covered by the container
    pub const fn rect(&self) -> Rect {
        Rect::from_origin_size(self.x, self.y, self.w, self.h)
    }
}

/// Frame-rate measurement window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FpsWindow {
    /// Start of the current window
    pub window_start: Instant,
    /// Frames counted since `window_start`
    pub count: u32,
    /// Average reported at the end of the previous window
    pub last_average: u32,
}

impl FpsWindow {
    /// Fresh window starting at `now`
    pub const fn new(now: Instant) -> Self {
        Self {
            window_start: now,
            count: 0,
            last_average: 1,
        }
    }

    /// Account for one frame drawn at `now`
    ///
    /// Once `update_interval` has elapsed the frames counted so far become the
    /// new average and a new window starts at `now`; otherwise the frame is
    /// counted.
    #[must_use]
    pub fn tick(self, now: Instant, update_interval: Duration) -> Self {
        if now.saturating_duration_since(self.window_start) >= update_interval {
            let average = f64::from(self.count) / update_interval.as_secs_f64();
            Self {
                window_start: now,
                count: 0,
                last_average: average as u32,
            }
        } else {
            Self {
                count: self.count + 1,
                ..self
            }
        }
    }
}

/// Value persisted for a widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoredValue {
    /// Checkbox state
    Toggle(bool),
    /// Container geometry
    Container(ContainerGeometry),
    /// FPS counter window
    FpsWindow(FpsWindow),
}

impl StoredValue {
    /// Short kind name for diagnostics
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Toggle(_) => "toggle",
            Self::Container(_) => "container",
            Self::FpsWindow(_) => "fps window",
        }
    }
}

/// Name-keyed widget state table
#[derive(Debug, Default)]
pub struct WidgetStore {
    values: HashMap<String, StoredValue>,
}

impl WidgetStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Value stored under `name`
    pub fn get(&self, name: &str) -> Option<StoredValue> {
        self.values.get(name).copied()
    }

    /// Value stored under `name`, inserting `init` on first reference
    pub fn get_or_init(&mut self, name: &str, init: StoredValue) -> StoredValue {
        if let Some(value) = self.values.get(name) {
            return *value;
        }
        log::debug!("Creating {} state for widget '{name}'", init.kind());
        self.values.insert(name.to_owned(), init);
        init
    }

    /// Overwrite the value stored under `name`
    pub fn set(&mut self, name: &str, value: StoredValue) {
        match self.values.get_mut(name) {
            Some(slot) => *slot = value,
            None => {
                self.values.insert(name.to_owned(), value);
            }
        }
    }

    /// Whether `name` has been referenced
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of stored widgets
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no widget has stored state yet
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
