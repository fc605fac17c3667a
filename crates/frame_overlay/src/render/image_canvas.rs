//! `Canvas` over an RGB video frame
//!
//! Text is rasterized per glyph with `fontdue` and alpha-blended onto the
//! frame. A font's `thickness` widens strokes by stamping each glyph
//! `thickness` times, one pixel apart.

use image::{Rgb, RgbImage};

use super::font_book::FontBook;
use super::raster;
use crate::ui::{Canvas, Font, Rect};

/// Pixel height of a font at `size == 1.0`
pub const BASE_PIXEL_HEIGHT: f32 = 22.0;

/// Raster canvas borrowing a frame and a font book
pub struct ImageCanvas<'a> {
    image: &'a mut RgbImage,
    fonts: &'a FontBook,
}

impl<'a> ImageCanvas<'a> {
    /// Wrap `image` for one frame
    pub fn new(image: &'a mut RgbImage, fonts: &'a FontBook) -> Self {
        Self { image, fonts }
    }

    /// Frame being drawn on
    pub fn image(&self) -> &RgbImage {
        &*self.image
    }
}

fn pixel_height(font: &Font) -> f32 {
    (font.size * BASE_PIXEL_HEIGHT).max(1.0)
}

impl Canvas for ImageCanvas<'_> {
    fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb<u8>) {
        raster::fill_rect(self.image, rect, color);
    }

    fn stroke_rect(&mut self, rect: Rect, color: Rgb<u8>, thickness: u32) {
        raster::stroke_rect(self.image, rect, color, thickness);
    }

    fn text_size(&self, text: &str, font: &Font) -> (i32, i32) {
        let face = self.fonts.face(font.face);
        let px = pixel_height(font);

        let advance: f32 = text.chars().map(|ch| face.metrics(ch, px).advance_width).sum();
        let ascent = face
            .horizontal_line_metrics(px)
            .map_or(px, |metrics| metrics.ascent);

        let extra = font.thickness.saturating_sub(1) as i32;
        (advance.ceil() as i32 + extra, ascent.ceil() as i32)
    }

    fn draw_text(&mut self, text: &str, origin: (i32, i32), font: &Font, color: Rgb<u8>) {
        let face = self.fonts.face(font.face);
        let px = pixel_height(font);
        let stamps = font.thickness.max(1) as i32;
        let (x0, baseline) = origin;

        let mut pen = x0 as f32;
        for ch in text.chars() {
            let (metrics, coverage) = face.rasterize(ch, px);
            let left = (pen.round() as i32).saturating_add(metrics.xmin);
            // fontdue measures ymin upwards from the baseline to the bitmap bottom
            let top = baseline
                .saturating_sub(metrics.ymin)
                .saturating_sub(metrics.height as i32);

            if metrics.width > 0 {
                for (i, alpha) in coverage.iter().enumerate() {
                    if *alpha == 0 {
                        continue;
                    }
                    let x = left.saturating_add((i % metrics.width) as i32);
                    let y = top.saturating_add((i / metrics.width) as i32);
                    for stamp in 0..stamps {
                        raster::blend_pixel(self.image, x.saturating_add(stamp), y, color, *alpha);
                    }
                }
            }
            pen += metrics.advance_width;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{Gui, Point};

    const MONO: &[u8] = include_bytes!("../../tests/fixtures/DejaVuSansMono.ttf");
    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

    fn fonts() -> FontBook {
        FontBook::from_bytes(MONO).unwrap()
    }

    fn plain(size: f32, thickness: u32) -> Font {
        Font::default().with_size(size).with_thickness(thickness)
    }

    /// Coordinates of every pixel that differs from `background`
    fn ink(image: &RgbImage, background: Rgb<u8>) -> Vec<(i32, i32)> {
        image
            .enumerate_pixels()
            .filter(|(_, _, pixel)| **pixel != background)
            .map(|(x, y, _)| (x as i32, y as i32))
            .collect()
    }

    #[test]
    fn test_text_size_follows_font_metrics() {
        let fonts = fonts();
        let mut image = RgbImage::new(4, 4);
        let canvas = ImageCanvas::new(&mut image, &fonts);

        let face = fontdue::Font::from_bytes(MONO, fontdue::FontSettings::default()).unwrap();
        let px = 1.0 * BASE_PIXEL_HEIGHT;
        let advance: f32 = "Hello".chars().map(|ch| face.metrics(ch, px).advance_width).sum();
        let ascent = face.horizontal_line_metrics(px).unwrap().ascent;

        assert_eq!(
            canvas.text_size("Hello", &plain(1.0, 1)),
            (advance.ceil() as i32, ascent.ceil() as i32)
        );
    }

    #[test]
    fn test_text_size_monospace_thickness_and_scale() {
        let fonts = fonts();
        let mut image = RgbImage::new(4, 4);
        let canvas = ImageCanvas::new(&mut image, &fonts);

        let (narrow, _) = canvas.text_size("iiii", &plain(1.0, 1));
        let (wide, _) = canvas.text_size("WWWW", &plain(1.0, 1));
        assert_eq!(narrow, wide);

        let (thin, height) = canvas.text_size("Hi", &plain(1.0, 1));
        let (bold, bold_height) = canvas.text_size("Hi", &plain(1.0, 3));
        assert_eq!(bold, thin + 2);
        assert_eq!(bold_height, height);

        let (_, double) = canvas.text_size("Hi", &plain(2.0, 1));
        assert!((double - 2 * height).abs() <= 1, "{double} vs {height}");
    }

    #[test]
    fn test_draw_text_sits_on_baseline() {
        let fonts = fonts();
        let mut image = RgbImage::new(200, 100);
        let font = plain(1.0, 1);
        let (w, h) = {
            let mut canvas = ImageCanvas::new(&mut image, &fonts);
            canvas.draw_text("HH", (20, 60), &font, WHITE);
            canvas.text_size("HH", &font)
        };

        let ink = ink(&image, Rgb([0, 0, 0]));
        assert!(!ink.is_empty());
        for (x, y) in ink {
            assert!((19..=20 + w).contains(&x), "x {x} outside text box");
            assert!((60 - h - 1..=60).contains(&y), "y {y} outside text box");
        }
    }

    #[test]
    fn test_thickness_stamps_to_the_right() {
        let fonts = fonts();
        let draw = |thickness| {
            let mut image = RgbImage::new(100, 60);
            ImageCanvas::new(&mut image, &fonts).draw_text("H", (10, 40), &plain(1.0, thickness), WHITE);
            ink(&image, Rgb([0, 0, 0]))
        };

        let thin = draw(1);
        let bold = draw(3);
        let right = |ink: &[(i32, i32)]| ink.iter().map(|&(x, _)| x).max().unwrap();
        let left = |ink: &[(i32, i32)]| ink.iter().map(|&(x, _)| x).min().unwrap();

        assert!(bold.len() > thin.len());
        assert_eq!(right(&bold), right(&thin) + 2);
        assert_eq!(left(&bold), left(&thin));
    }

    #[test]
    fn test_draw_text_clips_at_any_origin() {
        let fonts = fonts();
        let mut image = RgbImage::new(50, 50);
        {
            let mut canvas = ImageCanvas::new(&mut image, &fonts);
            canvas.draw_text("clip", (i32::MAX, i32::MIN), &plain(1.0, 3), WHITE);
            canvas.draw_text("clip", (i32::MIN, i32::MAX), &plain(1.0, 3), WHITE);
        }
        assert!(ink(&image, Rgb([0, 0, 0])).is_empty());

        ImageCanvas::new(&mut image, &fonts).draw_text("clip", (-10, 5), &plain(1.0, 1), WHITE);
        assert!(!ink(&image, Rgb([0, 0, 0])).is_empty());
    }

    #[test]
    fn test_label_text_stays_inside_its_box() {
        let fonts = fonts();
        let mut gui = Gui::new("test");
        let mut image = RgbImage::new(200, 100);
        let font = plain(1.0, 2).with_color(WHITE);

        let (w, h) = {
            let mut canvas = ImageCanvas::new(&mut image, &fonts);
            let size = canvas.text_size("Hi", &font);
            gui.frame(&mut canvas).label("Hi", Point::nw(10, 10), true, &font);
            size
        };

        // 5 px padding on every side
        let (x2, y2) = (10 + w + 10, 10 + h + 10);
        let fill = *image.get_pixel(10, 10);
        assert_eq!(*image.get_pixel(x2 as u32, y2 as u32), fill);
        assert_eq!(*image.get_pixel(x2 as u32 + 1, y2 as u32), Rgb([0, 0, 0]));

        let text: Vec<_> = ink(&image, Rgb([0, 0, 0]))
            .into_iter()
            .filter(|&(x, y)| *image.get_pixel(x as u32, y as u32) != fill)
            .collect();
        assert!(!text.is_empty());
        for (x, y) in text {
            assert!((15..=x2 - 5).contains(&x) && (15..=y2 - 5).contains(&y), "({x}, {y})");
        }
    }
}
