//! # Raster Backend
//!
//! Software rendering of the overlay onto `image::RgbImage` frames.
//!
//! - [`FontBook`]: `fontdue` faces addressed by [`Font::face`](crate::ui::Font)
//! - [`ImageCanvas`]: [`Canvas`](crate::ui::Canvas) implementation over a frame
//! - `raster`: clipped fills, outlines and coverage blending

pub mod font_book;
pub mod image_canvas;
pub mod raster;

pub use font_book::{FontBook, FontError, FontResult};
pub use image_canvas::{ImageCanvas, BASE_PIXEL_HEIGHT};
