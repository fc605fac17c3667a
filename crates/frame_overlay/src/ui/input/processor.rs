//! UI Input Processing
//!
//! Tracks the cursor and a one-shot click flag fed by the host's windowing
//! layer. Widgets query the tracker while they draw; the first widget whose box
//! contains a pending click consumes it, so a single physical click can satisfy
//! at most one widget per frame. Arbitration is purely by call order.
//!
//! The state sits behind a lock. [`MouseHandle`] is the event-injection API and
//! may be moved to whichever thread delivers window events.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::input::collision;
use crate::ui::widgets::Rect;

/// Kind of raw mouse event delivered by the windowing layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseEventKind {
    /// Pointer moved
    Move,
    /// Left button pressed
    LeftButtonDown,
    /// Right button pressed
    RightButtonDown,
    /// Middle button pressed
    MiddleButtonDown,
    /// Left button released
    LeftButtonUp,
    /// Right button released
    RightButtonUp,
    /// Middle button released
    MiddleButtonUp,
    /// Left button double click
    LeftButtonDoubleClick,
    /// Right button double click
    RightButtonDoubleClick,
    /// Middle button double click
    MiddleButtonDoubleClick,
    /// Vertical wheel scroll
    Wheel,
    /// Horizontal wheel scroll
    HorizontalWheel,
}

impl MouseEventKind {
    /// Map a HighGUI-style numeric event code (`0` = move, `1` = left down, ...)
    pub const fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            0 => Self::Move,
            1 => Self::LeftButtonDown,
            2 => Self::RightButtonDown,
            3 => Self::MiddleButtonDown,
            4 => Self::LeftButtonUp,
            5 => Self::RightButtonUp,
            6 => Self::MiddleButtonUp,
            7 => Self::LeftButtonDoubleClick,
            8 => Self::RightButtonDoubleClick,
            9 => Self::MiddleButtonDoubleClick,
            10 => Self::Wheel,
            11 => Self::HorizontalWheel,
            _ => return None,
        })
    }
}

/// Click flag state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClickState {
    /// No click waiting to be consumed
    #[default]
    Idle,
    /// A left-button press is waiting for a widget to claim it
    ClickPending,
}

/// Snapshot of the tracked mouse state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MouseState {
    /// Last reported X position
    pub x: i32,
    /// Last reported Y position
    pub y: i32,
    /// Pending click flag
    pub click: ClickState,
    /// Kind of the most recent event, if any arrived yet
    pub last_event: Option<MouseEventKind>,
}

impl MouseState {
    fn apply(&mut self, kind: MouseEventKind, x: i32, y: i32) {
        self.x = x;
        self.y = y;
        self.last_event = Some(kind);

        match kind {
            MouseEventKind::LeftButtonDown => self.click = ClickState::ClickPending,
            // Dragging after a press cancels it
            MouseEventKind::Move => self.click = ClickState::Idle,
            _ => {}
        }
    }
}

/// Result of hit-testing a widget box against the mouse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hit {
    /// Cursor lies inside the box
    pub hovered: bool,
    /// A pending click lay inside the box and has been consumed
    pub clicked: bool,
}

/// Mouse tracker owned by the GUI
#[derive(Debug, Default)]
pub struct UIInputProcessor {
    state: Arc<Mutex<MouseState>>,
}

impl UIInputProcessor {
    /// Create a tracker at `(0, 0)` with no pending click
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a raw mouse event
    pub fn update(&self, kind: MouseEventKind, x: i32, y: i32) {
        apply_event(&self.state, kind, x, y);
    }

    /// Handle for feeding events from another thread
    pub fn handle(&self) -> MouseHandle {
        MouseHandle {
            state: Arc::clone(&self.state),
        }
    }

    /// Test hover and click for `rect` under a single lock
    ///
    /// A pending click inside `rect` is consumed, so any later hit test in the same
    /// frame sees `clicked == false`.
    pub fn hit_test(&self, rect: &Rect) -> Hit {
        let mut state = self.state.lock();
        let hovered = collision::point_in_rect(state.x, state.y, rect);
        let clicked = hovered && state.click == ClickState::ClickPending;
        if clicked {
            state.click = ClickState::Idle;
            log::debug!("Click at ({}, {}) consumed by {:?}", state.x, state.y, rect);
        }
        Hit { hovered, clicked }
    }

    /// Whether the cursor lies inside `rect`; never consumes a click
    pub fn is_over(&self, rect: &Rect) -> bool {
        let state = self.state.lock();
        collision::point_in_rect(state.x, state.y, rect)
    }

    /// Consume a pending click inside `rect`
    pub fn test_and_consume(&self, rect: &Rect) -> bool {
        self.hit_test(rect).clicked
    }

    /// Current mouse state
    pub fn snapshot(&self) -> MouseState {
        *self.state.lock()
    }

    /// Get current mouse position
    pub fn mouse_position(&self) -> (i32, i32) {
        let state = self.state.lock();
        (state.x, state.y)
    }
}

/// Cloneable, thread-safe entry point for raw mouse events
#[derive(Debug, Clone)]
pub struct MouseHandle {
    state: Arc<Mutex<MouseState>>,
}

impl MouseHandle {
    /// Record a raw mouse event
    pub fn send(&self, kind: MouseEventKind, x: i32, y: i32) {
        apply_event(&self.state, kind, x, y);
    }

    /// Record an event given as a HighGUI-style numeric code
    ///
    /// Unknown codes are ignored.
    pub fn send_code(&self, code: i32, x: i32, y: i32) {
        match MouseEventKind::from_code(code) {
            Some(kind) => self.send(kind, x, y),
            None => log::warn!("Ignoring unknown mouse event code {code}"),
        }
    }
}

fn apply_event(state: &Mutex<MouseState>, kind: MouseEventKind, x: i32, y: i32) {
    state.lock().apply(kind, x, y);
    if kind != MouseEventKind::Move {
        log::trace!("Mouse {kind:?} at ({x}, {y})");
    }
}
