//! UI widgets module
//!
//! Geometry primitives plus the widget renderers. Every renderer is a method on
//! [`Frame`](crate::ui::Frame), declared in the file named after the widget.

pub mod core;
pub mod layout;
pub mod text;
pub mod button;
pub mod checkbox;
pub mod panel;

// Re-export core types
pub use self::core::{Coord, Font, Pivot, Point, Rect};
pub use layout::UILayout;
pub use text::FPS_COUNTER_KEY;
