//! Button widget - interactive clickable buttons

use super::core::{Font, Point};
use crate::ui::backend::Canvas;
use crate::ui::manager::Frame;
use crate::ui::schema::Role;

/// Space between the caption and the button edge
const BUTTON_PADDING: i32 = 10;

/// Border width in pixels
const BUTTON_LINE_WIDTH: u32 = 2;

impl<C: Canvas> Frame<'_, C> {
    /// Draws a button and reports whether it was clicked this frame
    ///
    /// The button is at least `w` x `h` pixels and never smaller than its
    /// padded caption; pass `0` for either to size it to the caption. Returns
    /// `true` when a pending click lies inside the button and no earlier widget
    /// in this frame claimed it. The click is consumed.
    pub fn button(&mut self, caption: &str, point: Point, w: i32, h: i32, font: &Font) -> bool {
        let (text_w, text_h) = self.canvas.text_size(caption, font);
        let w = w.max(text_w + 2 * BUTTON_PADDING);
        let h = h.max(text_h + 2 * BUTTON_PADDING);
        let rect = self.resolve(&point, w, h);

        let hit = self.gui.input.hit_test(&rect);

        let fill = self.color(if hit.hovered { Role::Hover } else { Role::Bg });
        let line = self.color(Role::Line);
        let text_color = font.color.unwrap_or_else(|| self.color(Role::Text));

        self.canvas.fill_rect(rect, fill);
        self.canvas.stroke_rect(rect, line, BUTTON_LINE_WIDTH);
        self.canvas.draw_text(
            caption,
            (rect.x1.saturating_add(BUTTON_PADDING), rect.y2.saturating_sub((h - text_h) / 2)),
            font,
            text_color,
        );

        if hit.clicked {
            log::debug!("Button '{caption}' clicked");
        }
        hit.clicked
    }
}
