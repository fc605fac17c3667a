//! Core UI widget primitives
//!
//! Shared geometry and font types used by all widgets.

use std::fmt;
use std::str::FromStr;

use image::Rgb;

use crate::ui::GuiError;

/// Corner of a widget's bounding box that a [`Point`] designates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Pivot {
    /// Top-left corner; the box extends right and down
    #[default]
    NorthWest,
    /// Top-right corner; the box extends left and down
    NorthEast,
    /// Bottom-left corner; the box extends right and up
    SouthWest,
    /// Bottom-right corner; the box extends left and up
    SouthEast,
}

impl Pivot {
    /// Every supported pivot
    pub const ALL: [Self; 4] = [
        Self::NorthWest,
        Self::NorthEast,
        Self::SouthWest,
        Self::SouthEast,
    ];

    /// Whether the pivot sits on the top edge
    pub const fn is_north(self) -> bool {
        matches!(self, Self::NorthWest | Self::NorthEast)
    }

    /// Whether the pivot sits on the left edge
    pub const fn is_west(self) -> bool {
        matches!(self, Self::NorthWest | Self::SouthWest)
    }

    /// Short compass name (`nw`, `ne`, `sw`, `se`)
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NorthWest => "nw",
            Self::NorthEast => "ne",
            Self::SouthWest => "sw",
            Self::SouthEast => "se",
        }
    }
}

impl FromStr for Pivot {
    type Err = GuiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nw" => Ok(Self::NorthWest),
            "ne" => Ok(Self::NorthEast),
            "sw" => Ok(Self::SouthWest),
            "se" => Ok(Self::SouthEast),
            _ => Err(GuiError::InvalidPivot(s.to_string())),
        }
    }
}

impl fmt::Display for Pivot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One axis of a [`Point`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coord {
    /// Fixed offset in pixels
    Absolute(i32),
    /// Fraction of the canvas extent, nominally `0.0..=1.0`
    Normalized(f32),
}

impl Coord {
    /// Resolve against a canvas extent, truncating normalized values toward zero
    pub fn resolve(self, extent: u32) -> i32 {
        match self {
            Self::Absolute(pixels) => pixels,
            Self::Normalized(fraction) => (f64::from(fraction) * f64::from(extent)) as i32,
        }
    }
}

impl From<i32> for Coord {
    fn from(pixels: i32) -> Self {
        Self::Absolute(pixels)
    }
}

impl From<f32> for Coord {
    fn from(fraction: f32) -> Self {
        Self::Normalized(fraction)
    }
}

impl From<f64> for Coord {
    fn from(fraction: f64) -> Self {
        Self::Normalized(fraction as f32)
    }
}

/// Pivot-anchored widget position
///
/// Each axis is either absolute or normalized independently, so
/// `Point::new(0.99, 1, Pivot::NorthEast)` is valid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate
    pub x: Coord,
    /// Vertical coordinate
    pub y: Coord,
    /// Corner of the widget box that sits on `(x, y)`
    pub pivot: Pivot,
}

impl Point {
    /// Create a point with an explicit pivot
    pub fn new(x: impl Into<Coord>, y: impl Into<Coord>, pivot: Pivot) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            pivot,
        }
    }

    /// Create a point anchored at the widget's top-left corner
    pub fn nw(x: impl Into<Coord>, y: impl Into<Coord>) -> Self {
        Self::new(x, y, Pivot::NorthWest)
    }

    /// Create a point from a textual pivot such as `"se"`
    ///
    /// # Errors
    /// [`GuiError::InvalidPivot`] if `pivot` is not one of `nw`, `ne`, `sw`, `se`.
    pub fn parse(x: impl Into<Coord>, y: impl Into<Coord>, pivot: &str) -> Result<Self, GuiError> {
        Ok(Self::new(x, y, pivot.parse()?))
    }
}

/// Axis-aligned pixel rectangle with inclusive corners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Left edge
    pub x1: i32,
    /// Top edge
    pub y1: i32,
    /// Right edge
    pub x2: i32,
    /// Bottom edge
    pub y2: i32,
}

impl Rect {
    /// Create a rectangle from its top-left and bottom-right corners
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Create a rectangle from its top-left corner and size
    pub const fn from_origin_size(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::new(x, y, x.saturating_add(width), y.saturating_add(height))
    }

    /// Horizontal extent (`x2 - x1`)
    pub const fn width(&self) -> i32 {
        self.x2.saturating_sub(self.x1)
    }

    /// Vertical extent (`y2 - y1`)
    pub const fn height(&self) -> i32 {
        self.y2.saturating_sub(self.y1)
    }

    /// Grow (positive) or shrink (negative) every edge by `delta`
    pub const fn expand(&self, delta: i32) -> Self {
        Self::new(
            self.x1.saturating_sub(delta),
            self.y1.saturating_sub(delta),
            self.x2.saturating_add(delta),
            self.y2.saturating_add(delta),
        )
    }
}

/// Text style for a widget caption
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    /// Index into the raster backend's font collection
    pub face: usize,
    /// Scale factor relative to the backend's base glyph height
    pub size: f32,
    /// Stroke weight in pixels
    pub thickness: u32,
    /// Caption color; `None` uses the active schema's text color
    pub color: Option<Rgb<u8>>,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            face: 0,
            size: 1.2,
            thickness: 2,
            color: None,
        }
    }
}

impl Font {
    /// Use a different face from the font collection
    #[must_use]
    pub const fn with_face(mut self, face: usize) -> Self {
        self.face = face;
        self
    }

    /// Set the scale factor
    #[must_use]
    pub const fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Set the stroke weight
    #[must_use]
    pub const fn with_thickness(mut self, thickness: u32) -> Self {
        self.thickness = thickness;
        self
    }

    /// Override the schema's text color
    #[must_use]
    pub const fn with_color(mut self, color: Rgb<u8>) -> Self {
        self.color = Some(color);
        self
    }
}
