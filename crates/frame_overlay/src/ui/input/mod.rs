//! UI input handling module

pub mod processor;

// Re-export commonly used types
pub use processor::{ClickState, Hit, MouseEventKind, MouseHandle, MouseState, UIInputProcessor};
