//! Pixel-level primitives on RGB images
//!
//! All rectangles use inclusive corners and are clipped against the image.

use image::{Rgb, RgbImage};

use crate::ui::Rect;

/// Clip `rect` to the image, returning inclusive pixel bounds
fn clip(image: &RgbImage, rect: Rect) -> Option<(u32, u32, u32, u32)> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return None;
    }
    let max_x = i64::from(width) - 1;
    let max_y = i64::from(height) - 1;

    let x1 = i64::from(rect.x1.min(rect.x2)).max(0);
    let y1 = i64::from(rect.y1.min(rect.y2)).max(0);
    let x2 = i64::from(rect.x1.max(rect.x2)).min(max_x);
    let y2 = i64::from(rect.y1.max(rect.y2)).min(max_y);

    if x1 > x2 || y1 > y2 {
        return None;
    }
    Some((x1 as u32, y1 as u32, x2 as u32, y2 as u32))
}

/// Fill `rect` with `color`
pub fn fill_rect(image: &mut RgbImage, rect: Rect, color: Rgb<u8>) {
    let Some((x1, y1, x2, y2)) = clip(image, rect) else {
        return;
    };
    for y in y1..=y2 {
        for x in x1..=x2 {
            image.put_pixel(x, y, color);
        }
    }
}

/// Outline `rect` with a border centred on its edges
///
/// A thickness of 2 covers the edge and one pixel outside it, as line drawing
/// with a pen of that width would.
pub fn stroke_rect(image: &mut RgbImage, rect: Rect, color: Rgb<u8>, thickness: u32) {
    let thickness = thickness.max(1) as i32;
    let outer = thickness / 2;
    let inner = (thickness - 1) / 2;

    for d in -inner..=outer {
        let ring = rect.expand(d);
        if ring.x1 > ring.x2 || ring.y1 > ring.y2 {
            continue;
        }
        fill_rect(image, Rect::new(ring.x1, ring.y1, ring.x2, ring.y1), color);
        fill_rect(image, Rect::new(ring.x1, ring.y2, ring.x2, ring.y2), color);
        fill_rect(image, Rect::new(ring.x1, ring.y1, ring.x1, ring.y2), color);
        fill_rect(image, Rect::new(ring.x2, ring.y1, ring.x2, ring.y2), color);
    }
}

/// Blend `color` into the pixel at `(x, y)` with `coverage` in `0..=255`
pub fn blend_pixel(image: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>, coverage: u8) {
    let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
        return;
    };
    if x >= image.width() || y >= image.height() || coverage == 0 {
        return;
    }

    let alpha = u16::from(coverage);
    let pixel = image.get_pixel_mut(x, y);
    for (dst, src) in pixel.0.iter_mut().zip(color.0) {
        let mixed = (u16::from(src) * alpha + u16::from(*dst) * (255 - alpha) + 127) / 255;
        *dst = mixed as u8;
    }
}
