//! # Frame Overlay
//!
//! Immediate-mode GUI painted directly onto video frames, for camera tools
//! that show a live feed with a few controls on top.
//!
//! ## Features
//!
//! - **Immediate mode**: widgets are declared every frame; only named widgets
//!   keep state between frames
//! - **Anchored layout**: absolute or normalized coordinates relative to any
//!   canvas corner
//! - **Color schemas**: built-in palettes plus palettes from configuration
//! - **Thread-safe input**: mouse events may arrive from the windowing thread
//! - **Software raster backend**: `image` frames with `fontdue` text
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use frame_overlay::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let fonts = FontBook::load(&["fonts/DejaVuSans.ttf"])?;
//!     let mut gui = Gui::new("Camera");
//!     let mut image = RgbImage::new(640, 480);
//!
//!     let mut canvas = ImageCanvas::new(&mut image, &fonts);
//!     let mut frame = gui.frame(&mut canvas);
//!     frame.label("Waiting...", Point::nw(2, 2), true, &Font::default());
//!     if frame.button("Quit", Point::new(0.99, 0.99, Pivot::SouthEast), 0, 0, &Font::default()) {
//!         return Ok(());
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

// Core modules
pub mod core;
pub mod config;
pub mod foundation;

pub mod input;
pub mod render;
pub mod ui;

pub use image::{Rgb, RgbImage};

/// Common imports for overlay users
pub mod prelude {
    pub use crate::{
        core::config::{Config, ConfigError, GuiConfig, SchemaConfig},
        render::{FontBook, ImageCanvas},
        ui::{
            Canvas, Coord, Font, Frame, Gui, GuiError, GuiResult, MouseEventKind, MouseHandle, Pivot, Point,
            Rect, Role,
        },
        Rgb, RgbImage,
    };
}
