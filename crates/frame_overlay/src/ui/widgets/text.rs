//! Text widgets - labels and the FPS counter

use std::time::{Duration, Instant};

use super::core::{Font, Point};
use crate::ui::backend::Canvas;
use crate::ui::manager::Frame;
use crate::ui::schema::Role;
use crate::ui::store::{FpsWindow, StoredValue};

/// Space between a label's text and its box edge
const LABEL_PADDING: i32 = 5;

/// Store key of the FPS counter window
pub const FPS_COUNTER_KEY: &str = "_fpscnt";

impl<C: Canvas> Frame<'_, C> {
    /// Draws a single-line text label
    ///
    /// With `bg` set the box is filled with the schema's `textbg` color first.
    /// The text uses the font's color when given, the schema's `text` color
    /// otherwise.
    pub fn label(&mut self, caption: &str, point: Point, bg: bool, font: &Font) {
        let (text_w, text_h) = self.canvas.text_size(caption, font);
        let rect = self.resolve(&point, text_w + 2 * LABEL_PADDING, text_h + 2 * LABEL_PADDING);

        let text_color = font.color.unwrap_or_else(|| self.color(Role::Text));
        if bg {
            let bg_color = self.color(Role::TextBg);
            self.canvas.fill_rect(rect, bg_color);
        }
        self.canvas.draw_text(
            caption,
            (rect.x1.saturating_add(LABEL_PADDING), rect.y2.saturating_sub(LABEL_PADDING)),
            font,
            text_color,
        );
    }

    /// Draws the frames-per-second counter as a label with background
    ///
    /// Every call counts one frame. Once `update_interval` has passed since the
    /// window started, the count becomes the displayed average and a new window
    /// begins. Returns the average currently displayed.
    pub fn fps_counter(&mut self, point: Point, update_interval: Duration, font: &Font) -> u32 {
        self.fps_counter_at(point, update_interval, font, Instant::now())
    }

    /// [`fps_counter`](Self::fps_counter) with an explicit timestamp
    pub fn fps_counter_at(
        &mut self,
        point: Point,
        update_interval: Duration,
        font: &Font,
        now: Instant,
    ) -> u32 {
        let fresh = FpsWindow::new(now);
        let window = match self.gui.store.get_or_init(FPS_COUNTER_KEY, StoredValue::FpsWindow(fresh)) {
            StoredValue::FpsWindow(window) => window,
            other => {
                log::warn!("'{FPS_COUNTER_KEY}' held {} state, restarting the FPS window", other.kind());
                fresh
            }
        };

        let window = window.tick(now, update_interval);
        if window.count == 0 {
            log::trace!("FPS window rolled over at {}fps", window.last_average);
        }
        self.gui.store.set(FPS_COUNTER_KEY, StoredValue::FpsWindow(window));

        self.label(&format!("{}fps", window.last_average), point, true, font);
        window.last_average
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::testing::{DrawCommand, RecordingCanvas};
    use crate::ui::Gui;
    use image::Rgb;

    #[test]
    fn test_label_geometry_and_colors() {
        let mut gui = Gui::new("test");
        let mut canvas = RecordingCanvas::new(800, 600);

        gui.frame(&mut canvas)
            .label("hello", Point::nw(10, 20), true, &Font::default());

        // 5 chars * 10px wide, 20px tall, padded by 5 on each side
        let rect = crate::ui::widgets::Rect::new(10, 20, 70, 50);
        assert_eq!(
            canvas.commands,
            vec![
                DrawCommand::Fill(rect, Rgb([0xD2, 0xDE, 0xFF])),
                DrawCommand::Text("hello".to_string(), (15, 45), Rgb([0, 0, 0])),
            ]
        );
    }

    #[test]
    fn test_label_font_color_override_without_background() {
        let mut gui = Gui::new("test");
        let mut canvas = RecordingCanvas::new(800, 600);
        let font = Font::default().with_color(Rgb([200, 10, 10]));

        gui.frame(&mut canvas).label("x", Point::nw(0, 0), false, &font);

        assert_eq!(
            canvas.commands,
            vec![DrawCommand::Text("x".to_string(), (5, 25), Rgb([200, 10, 10]))]
        );
    }

    #[test]
    fn test_fps_counter_averages_over_window() {
        let mut gui = Gui::new("test");
        let mut canvas = RecordingCanvas::new(800, 600);
        let interval = Duration::from_secs(1);
        let start = Instant::now();
        let point = Point::nw(0, 0);
        let font = Font::default();

        // 30 frames inside the first second
        for i in 0..30 {
            let now = start + Duration::from_millis(i * 30);
            let shown = gui.frame(&mut canvas).fps_counter_at(point, interval, &font, now);
            assert_eq!(shown, 1);
        }
        match gui.value(FPS_COUNTER_KEY).unwrap() {
            StoredValue::FpsWindow(window) => assert_eq!(window.count, 30),
            other => panic!("unexpected {other:?}"),
        }

        let rollover = start + Duration::from_millis(1000);
        let shown = gui.frame(&mut canvas).fps_counter_at(point, interval, &font, rollover);
        assert_eq!(shown, 30);

        match gui.value(FPS_COUNTER_KEY).unwrap() {
            StoredValue::FpsWindow(window) => {
                assert_eq!(window.count, 0);
                assert_eq!(window.window_start, rollover);
                assert_eq!(window.last_average, 30);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(canvas.texts().contains(&"30fps".to_string()));
    }

    #[test]
    fn test_fps_counter_reports_displayed_average() {
        let mut gui = Gui::new("test");
        let mut canvas = RecordingCanvas::new(800, 600);

        let shown = gui
            .frame(&mut canvas)
            .fps_counter(Point::nw(0, 0), Duration::from_secs(60), &Font::default());

        assert_eq!(shown, 1);
        assert_eq!(canvas.texts(), vec![format!("{shown}fps")]);
    }

    #[test]
    fn test_fps_counter_average_scales_with_interval() {
        let mut gui = Gui::new("test");
        let mut canvas = RecordingCanvas::new(800, 600);
        let interval = Duration::from_millis(500);
        let start = Instant::now();
        let font = Font::default();

        for i in 0..10 {
            let now = start + Duration::from_millis(i * 40);
            gui.frame(&mut canvas).fps_counter_at(Point::nw(0, 0), interval, &font, now);
        }
        let shown = gui
            .frame(&mut canvas)
            .fps_counter_at(Point::nw(0, 0), interval, &font, start + interval);

        approx::assert_relative_eq!(f64::from(shown), 20.0);
    }
}
