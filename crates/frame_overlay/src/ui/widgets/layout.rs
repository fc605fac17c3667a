//! UI layout calculations
//!
//! Converts pivot-anchored points into screen-space rectangles.

use super::core::{Point, Rect};

/// Layout calculator for widget boxes
pub struct UILayout;

impl UILayout {
    /// Resolve a point to absolute pixels
    ///
    /// Absolute axes pass through unchanged, normalized axes are scaled by the
    /// canvas extent and truncated.
    pub fn resolve_anchor(point: &Point, canvas_width: u32, canvas_height: u32) -> (i32, i32) {
        (point.x.resolve(canvas_width), point.y.resolve(canvas_height))
    }

    /// Calculate the box of a `box_width` x `box_height` widget anchored at `point`
    ///
    /// The pivot corner of the box touches the resolved anchor and the box
    /// extends toward the opposite edges. Results are not clamped to the canvas;
    /// edges past the `i32` range saturate.
    pub fn resolve_box(
        point: &Point,
        box_width: i32,
        box_height: i32,
        canvas_width: u32,
        canvas_height: u32,
    ) -> Rect {
        let (x, y) = Self::resolve_anchor(point, canvas_width, canvas_height);

        let (x1, x2) = if point.pivot.is_west() {
            (x, x.saturating_add(box_width))
        } else {
            (x.saturating_sub(box_width), x)
        };
        let (y1, y2) = if point.pivot.is_north() {
            (y, y.saturating_add(box_height))
        } else {
            (y.saturating_sub(box_height), y)
        };

        Rect::new(x1, y1, x2, y2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::widgets::Pivot;

    fn anchor_corner(rect: &Rect, pivot: Pivot) -> (i32, i32) {
        let x = if pivot.is_west() { rect.x1 } else { rect.x2 };
        let y = if pivot.is_north() { rect.y1 } else { rect.y2 };
        (x, y)
    }

    #[test]
    fn test_anchor_corner_touches_anchor() {
        let points = [
            (120, 80),
            (0, 0),
            (-30, 700),
        ];
        let sizes = [(1, 1), (57, 23), (400, 0), (0, 300)];

        for pivot in Pivot::ALL {
            for &(x, y) in &points {
                for &(w, h) in &sizes {
                    let point = Point::new(x, y, pivot);
                    let rect = UILayout::resolve_box(&point, w, h, 800, 600);

                    assert_eq!(anchor_corner(&rect, pivot), (x, y), "pivot {pivot}");
                    assert_eq!(rect.width(), w);
                    assert_eq!(rect.height(), h);
                }
            }
        }
    }

    #[test]
    fn test_normalized_center_anchor() {
        let point = Point::new(0.5, 0.5, Pivot::NorthWest);
        assert_eq!(UILayout::resolve_anchor(&point, 800, 600), (400, 300));

        let rect = UILayout::resolve_box(&point, 100, 50, 800, 600);
        assert_eq!(rect, Rect::new(400, 300, 500, 350));
    }

    #[test]
    fn test_south_east_box_extends_off_canvas() {
        let point = Point::new(10, 10, Pivot::SouthEast);
        let rect = UILayout::resolve_box(&point, 100, 40, 800, 600);

        assert_eq!((rect.x2, rect.y2), (10, 10));
        assert_eq!(rect, Rect::new(-90, -30, 10, 10));
    }

    #[test]
    fn test_mixed_axes_north_east() {
        let point = Point::new(0.99, 1, Pivot::NorthEast);
        let rect = UILayout::resolve_box(&point, 60, 30, 800, 600);

        assert_eq!(rect, Rect::new(732, 1, 792, 31));
    }

    #[test]
    fn test_extreme_anchors_saturate() {
        let points = [
            Point::new(i32::MAX, i32::MAX, Pivot::NorthWest),
            Point::new(i32::MIN, i32::MIN, Pivot::NorthWest),
            Point::new(f32::INFINITY, 0.5, Pivot::NorthWest),
            Point::new(f32::NEG_INFINITY, f32::INFINITY, Pivot::NorthWest),
            Point::new(1.0e12, -1.0e12, Pivot::NorthWest),
        ];

        for pivot in Pivot::ALL {
            for point in points {
                let point = Point { pivot, ..point };
                let rect = UILayout::resolve_box(&point, 10, 10, 800, 600);

                assert!(rect.x1 <= rect.x2, "pivot {pivot}: {rect:?}");
                assert!(rect.y1 <= rect.y2, "pivot {pivot}: {rect:?}");
                assert!(rect.width() <= 10 && rect.height() <= 10);
            }
        }

        let rect = UILayout::resolve_box(&Point::new(f32::INFINITY, 0.5, Pivot::NorthWest), 10, 10, 800, 600);
        assert_eq!(rect, Rect::new(i32::MAX, 300, i32::MAX, 310));

        let rect = UILayout::resolve_box(&Point::new(i32::MIN, i32::MIN, Pivot::SouthEast), 10, 10, 800, 600);
        assert_eq!(rect, Rect::new(i32::MIN, i32::MIN, i32::MIN, i32::MIN));
    }

    #[test]
    fn test_origin_size_saturates() {
        let rect = Rect::from_origin_size(i32::MAX - 2, i32::MIN, 10, 10);
        assert_eq!(rect, Rect::new(i32::MAX - 2, i32::MIN, i32::MAX, i32::MIN + 10));
        assert_eq!(rect.expand(1), Rect::new(i32::MAX - 3, i32::MIN, i32::MAX, i32::MIN + 11));
    }
}
