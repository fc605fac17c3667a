//! UI Render Backend Trait
//!
//! Defines the raster primitives the GUI paints with. Keeps widget logic
//! independent of the pixel buffer and text rasterizer behind it.

use image::Rgb;

use crate::ui::widgets::{Font, Rect};

/// Mutable raster surface borrowed by the GUI for one frame
///
/// Rectangles use inclusive corners and may lie partly or fully outside the
/// surface; implementations clip rather than fail.
pub trait Canvas {
    /// Surface size as `(width, height)` in pixels
    fn size(&self) -> (u32, u32);

    /// Fill `rect` with `color`
    fn fill_rect(&mut self, rect: Rect, color: Rgb<u8>);

    /// Outline `rect` with a border `thickness` pixels wide
    fn stroke_rect(&mut self, rect: Rect, color: Rgb<u8>, thickness: u32);

    /// Size of `text` rendered with `font` as `(width, height)` above the baseline
    fn text_size(&self, text: &str, font: &Font) -> (i32, i32);

    /// Draw single-line `text` with its baseline starting at `origin`
    fn draw_text(&mut self, text: &str, origin: (i32, i32), font: &Font, color: Rgb<u8>);
}
