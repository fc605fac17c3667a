//! UI System Module
//!
//! Immediate-mode overlay widgets painted straight onto video frames.
//!
//! Architecture:
//! - Gui: central system owning widget state, mouse tracking and color schemas
//! - Frame: one render pass over a borrowed canvas; widgets are its methods
//! - widgets/: geometry primitives and the widget renderers
//! - input/: mouse event tracking and click consumption
//! - backend: raster primitives the widgets draw with

pub mod manager;
pub mod backend;
pub mod error;
pub mod input;
pub mod schema;
pub mod store;
pub mod widgets;

#[cfg(test)]
pub(crate) mod testing;

pub use manager::{Frame, Gui};
pub use backend::Canvas;
pub use error::{GuiError, GuiResult};

// Re-export input types
pub use input::{ClickState, MouseEventKind, MouseHandle, MouseState};

// Re-export schema and store types
pub use schema::{ColorSchemas, Palette, Role};
pub use store::{ContainerGeometry, FpsWindow, StoredValue, WidgetStore};

// Re-export widgets
pub use widgets::{Coord, Font, Pivot, Point, Rect, UILayout, FPS_COUNTER_KEY};
