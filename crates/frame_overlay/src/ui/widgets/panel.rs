//! Container widget - rectangular backdrops with a border
//!
//! Containers only paint; widgets declared after a container are positioned
//! against the canvas, not the container.

use crate::ui::backend::Canvas;
use crate::ui::manager::Frame;
use crate::ui::schema::Role;
use crate::ui::store::{ContainerGeometry, StoredValue};

/// Border width in pixels
const CONTAINER_LINE_WIDTH: u32 = 2;

impl<C: Canvas> Frame<'_, C> {
    /// Draws a container backdrop
    ///
    /// The geometry passed the first time `name` is seen is stored and reused on
    /// every later call, whatever coordinates those calls pass. With `bg` unset
    /// nothing is drawn.
    pub fn container(&mut self, name: &str, x: i32, y: i32, w: i32, h: i32, bg: bool) {
        let requested = ContainerGeometry { x, y, w, h };
        let geometry = match self.gui.store.get_or_init(name, StoredValue::Container(requested)) {
            StoredValue::Container(geometry) => geometry,
            other => {
                log::warn!("Widget name '{name}' already holds {} state, resetting it", other.kind());
                self.gui.store.set(name, StoredValue::Container(requested));
                requested
            }
        };

        if bg {
            let rect = geometry.rect();
            let fill = self.color(Role::Bg);
            let line = self.color(Role::Line);
            self.canvas.fill_rect(rect, fill);
            self.canvas.stroke_rect(rect, line, CONTAINER_LINE_WIDTH);
        }
    }
}
