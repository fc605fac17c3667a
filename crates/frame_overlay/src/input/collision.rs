//! Collision detection for input processing
//!
//! Hit testing for widget boxes. This is input system responsibility -
//! determining what the user pointed at or clicked on.

use crate::ui::widgets::Rect;

/// Check if a point is inside a rectangle
///
/// Both axes are inclusive: a point lying exactly on an edge is inside.
///
/// # Arguments
/// * `point_x` - X coordinate of the point in canvas pixels
/// * `point_y` - Y coordinate of the point in canvas pixels
/// * `rect` - Rectangle with inclusive corners
pub const fn point_in_rect(point_x: i32, point_y: i32, rect: &Rect) -> bool {
    point_x >= rect.x1 && point_x <= rect.x2 && point_y >= rect.y1 && point_y <= rect.y2
}
