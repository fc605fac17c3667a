//! Checkbox widget - persistent on/off toggles

use super::core::{Font, Point, Rect};
use crate::ui::backend::Canvas;
use crate::ui::manager::Frame;
use crate::ui::schema::Role;
use crate::ui::store::StoredValue;

/// Space between the box edge and its content
const OUTER_PADDING: i32 = 5;

/// Space between the indicator and the caption
const INNER_PADDING: i32 = 15;

impl<C: Canvas> Frame<'_, C> {
    /// Draws a checkbox and reports whether it toggled this frame
    ///
    /// The checked state is stored under `name`. `checked` only seeds that state
    /// the first time `name` is seen; later calls ignore it. A pending click
    /// inside the box flips the state once and is consumed. Read the state back
    /// with [`Gui::toggle_value`](crate::ui::Gui::toggle_value).
    pub fn checkbox(
        &mut self,
        name: &str,
        caption: &str,
        point: Point,
        checked: bool,
        bg: bool,
        font: &Font,
    ) -> bool {
        let (mut value, reset) = match self.gui.store.get_or_init(name, StoredValue::Toggle(checked)) {
            StoredValue::Toggle(value) => (value, false),
            other => {
                log::warn!("Widget name '{name}' already holds {} state, resetting it", other.kind());
                (checked, true)
            }
        };

        let (text_w, text_h) = self.canvas.text_size(caption, font);
        let indicator = text_h;
        let w = indicator + INNER_PADDING + text_w + 2 * OUTER_PADDING;
        let h = text_h + 2 * OUTER_PADDING;
        let rect = self.resolve(&point, w, h);

        let hit = self.gui.input.hit_test(&rect);
        if hit.clicked {
            value = !value;
            log::debug!("Checkbox '{name}' toggled to {value}");
        }
        if hit.clicked || reset {
            self.gui.store.set(name, StoredValue::Toggle(value));
        }

        let indicator_rect = Rect::from_origin_size(
            rect.x1.saturating_add(OUTER_PADDING),
            rect.y1.saturating_add(OUTER_PADDING),
            indicator,
            indicator,
        );
        let fill = self.color(if hit.hovered { Role::Hover } else { Role::Bg });
        let state = self.color(if value { Role::On } else { Role::Off });
        let line = self.color(Role::Line);
        let text_color = font.color.unwrap_or_else(|| self.color(Role::Text));

        if bg {
            self.canvas.fill_rect(rect, fill);
        }
        self.canvas.fill_rect(indicator_rect, state);
        self.canvas.stroke_rect(indicator_rect, line, 1);
        self.canvas.draw_text(
            caption,
            (
                indicator_rect.x2.saturating_add(INNER_PADDING),
                rect.y2.saturating_sub(OUTER_PADDING),
            ),
            font,
            text_color,
        );

        hit.clicked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::input::MouseEventKind;
    use crate::ui::testing::{DrawCommand, RecordingCanvas};
    use crate::ui::{Gui, GuiError};
    use image::Rgb;

    const BLUE_ON: Rgb<u8> = Rgb([0x90, 0xEE, 0x90]);
    const BLUE_OFF: Rgb<u8> = Rgb([0x6A, 0x96, 0xC6]);

    #[test]
    fn test_checkbox_geometry() {
        let mut gui = Gui::new("test");
        let mut canvas = RecordingCanvas::new(800, 600);

        gui.frame(&mut canvas)
            .checkbox("boxes", "Boxes", Point::nw(10, 10), false, true, &Font::default());

        // indicator 20 + inner 15 + text 50 + outer 2*5, text 20 + 2*5
        let rect = Rect::new(10, 10, 105, 40);
        let indicator = Rect::new(15, 15, 35, 35);
        assert_eq!(canvas.commands[0], DrawCommand::Fill(rect, Rgb([0x9A, 0xB6, 0xE6])));
        assert_eq!(canvas.commands[1], DrawCommand::Fill(indicator, BLUE_OFF));
        assert_eq!(canvas.commands[2], DrawCommand::Stroke(indicator, Rgb([0x69, 0x69, 0x69]), 1));
        assert_eq!(
            canvas.commands[3],
            DrawCommand::Text("Boxes".to_string(), (50, 35), Rgb([0, 0, 0]))
        );
    }

    #[test]
    fn test_default_is_sticky() {
        let mut gui = Gui::new("test");
        let mut canvas = RecordingCanvas::new(800, 600);

        gui.frame(&mut canvas)
            .checkbox("cb", "On", Point::nw(0, 0), true, true, &Font::default());
        gui.frame(&mut canvas)
            .checkbox("cb", "On", Point::nw(0, 0), false, true, &Font::default());

        assert_eq!(gui.toggle_value("cb"), Ok(true));
        assert!(canvas
            .commands
            .iter()
            .all(|cmd| !matches!(cmd, DrawCommand::Fill(_, color) if *color == BLUE_OFF)));
    }

    #[test]
    fn test_toggles_once_per_click_and_persists() {
        let mut gui = Gui::new("test");
        let mut canvas = RecordingCanvas::new(800, 600);
        let font = Font::default();

        gui.on_mouse_event(MouseEventKind::LeftButtonDown, 12, 12);
        let toggled = gui
            .frame(&mut canvas)
            .checkbox("cb", "Flip", Point::nw(0, 0), false, true, &font);
        assert!(toggled);
        assert_eq!(gui.toggle_value("cb"), Ok(true));

        for default in [false, true, false] {
            let toggled = gui
                .frame(&mut canvas)
                .checkbox("cb", "Flip", Point::nw(0, 0), default, true, &font);
            assert!(!toggled);
            assert_eq!(gui.toggle_value("cb"), Ok(true));
        }

        gui.on_mouse_event(MouseEventKind::LeftButtonDown, 12, 12);
        gui.frame(&mut canvas)
            .checkbox("cb", "Flip", Point::nw(0, 0), true, true, &font);
        assert_eq!(gui.toggle_value("cb"), Ok(false));
    }

    #[test]
    fn test_checked_indicator_uses_on_color() {
        let mut gui = Gui::new("test");
        let mut canvas = RecordingCanvas::new(800, 600);

        gui.frame(&mut canvas)
            .checkbox("cb", "x", Point::nw(0, 0), true, false, &Font::default());

        assert_eq!(canvas.commands[0], DrawCommand::Fill(Rect::new(5, 5, 25, 25), BLUE_ON));
    }

    #[test]
    fn test_unknown_name_not_found() {
        let gui = Gui::new("test");
        assert_eq!(
            gui.toggle_value("never"),
            Err(GuiError::NotFound("never".to_string()))
        );
    }
}
