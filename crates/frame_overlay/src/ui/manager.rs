//! UI Manager
//!
//! Central immediate-mode GUI. Owns the widget store, the mouse tracker and the
//! color schemas; borrows a canvas for exactly one frame at a time.
//!
//! ```rust,ignore
//! let mut gui = Gui::new("Face Enrollment");
//! loop {
//!     let mut canvas = ImageCanvas::new(&mut image, &fonts);
//!     let mut frame = gui.frame(&mut canvas);
//!     frame.label("Waiting...", Point::nw(2, 2), true, &Font::default());
//!     if frame.button("Quit", Point::new(0.99, 0.99, Pivot::SouthEast), 0, 0, &Font::default()) {
//!         break;
//!     }
//! }
//! ```

use std::time::Duration;

use image::Rgb;

use super::backend::Canvas;
use super::input::{MouseEventKind, MouseHandle, UIInputProcessor};
use super::schema::{ColorSchemas, Role};
use super::store::{StoredValue, WidgetStore};
use super::widgets::{Point, Rect, UILayout};
use super::{GuiError, GuiResult};
use crate::core::config::{ConfigError, GuiConfig};

/// Immediate-mode overlay GUI
pub struct Gui {
    /// Label of the window the overlay is shown in
    window: String,

    /// Persistent widget state by name
    pub(crate) store: WidgetStore,

    /// Cursor and click tracking
    pub(crate) input: UIInputProcessor,

    /// Named palettes
    schemas: ColorSchemas,

    /// Default FPS counter window
    fps_interval: Duration,
}

impl Gui {
    /// Create a GUI with the built-in schemas and blue active
    pub fn new(window: impl Into<String>) -> Self {
        let window = window.into();
        log::info!("Creating overlay GUI for window '{window}'");
        Self {
            window,
            store: WidgetStore::new(),
            input: UIInputProcessor::new(),
            schemas: ColorSchemas::new(),
            fps_interval: Duration::from_secs(1),
        }
    }

    /// Create a GUI from configuration
    ///
    /// Registers the configured schemas, then activates `default_schema`.
    ///
    /// # Errors
    /// Returns an error if the configuration does not validate or names an
    /// unknown default schema.
    pub fn with_config(window: impl Into<String>, config: &GuiConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut gui = Self::new(window);
        for schema in &config.schemas {
            gui.schemas.register(schema.name.clone(), schema.palette()?);
        }
        gui.set_color_schema(&config.default_schema)?;
        gui.fps_interval = config.fps_update_interval()?;
        Ok(gui)
    }

    /// Label of the window the overlay belongs to
    pub fn window(&self) -> &str {
        &self.window
    }

    /// Start a frame on `canvas`
    ///
    /// Widgets can only be declared through the returned [`Frame`], so drawing
    /// without a canvas is impossible. The canvas stays borrowed until the frame
    /// is dropped.
    pub fn frame<'a, C: Canvas>(&'a mut self, canvas: &'a mut C) -> Frame<'a, C> {
        let (width, height) = canvas.size();
        Frame {
            gui: self,
            canvas,
            width,
            height,
        }
    }

    /// Feed a raw mouse event from the windowing layer
    pub fn on_mouse_event(&self, kind: MouseEventKind, x: i32, y: i32) {
        self.input.update(kind, x, y);
    }

    /// Thread-safe handle for delivering mouse events from another thread
    pub fn mouse_handle(&self) -> MouseHandle {
        self.input.handle()
    }

    /// Switch the active color schema
    ///
    /// # Errors
    /// [`GuiError::UnknownSchema`] if `name` is not registered; the active
    /// schema stays as it was.
    pub fn set_color_schema(&mut self, name: &str) -> GuiResult<()> {
        match self.schemas.set_active(name) {
            Ok(()) => {
                log::info!("Color schema set to '{name}'");
                Ok(())
            }
            Err(err) => {
                log::warn!("{err}; keeping '{}'", self.schemas.active());
                Err(err)
            }
        }
    }

    /// Names of all available color schemas
    pub fn color_schemas(&self) -> Vec<String> {
        self.schemas.names()
    }

    /// Name of the active color schema
    pub fn active_color_schema(&self) -> &str {
        self.schemas.active()
    }

    /// Default interval used by [`Frame::fps_counter`]
    pub const fn fps_update_interval(&self) -> Duration {
        self.fps_interval
    }

    /// Persisted value of the widget called `name`
    ///
    /// # Errors
    /// [`GuiError::NotFound`] if no widget call has used that name.
    pub fn value(&self, name: &str) -> GuiResult<StoredValue> {
        self.store
            .get(name)
            .ok_or_else(|| GuiError::NotFound(name.to_string()))
    }

    /// Checked state of the checkbox called `name`
    ///
    /// # Errors
    /// [`GuiError::NotFound`] if `name` is unknown or is not a checkbox.
    pub fn toggle_value(&self, name: &str) -> GuiResult<bool> {
        match self.value(name)? {
            StoredValue::Toggle(value) => Ok(value),
            _ => Err(GuiError::NotFound(name.to_string())),
        }
    }
}

/// One render pass of the GUI over a borrowed canvas
///
/// Widgets are processed in call order; a click goes to the first widget
/// declared this frame whose box contains it.
pub struct Frame<'a, C: Canvas> {
    pub(crate) gui: &'a mut Gui,
    pub(crate) canvas: &'a mut C,
    width: u32,
    height: u32,
}

impl<C: Canvas> Frame<'_, C> {
    /// Canvas size captured when the frame started
    pub const fn canvas_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Configured FPS counter window
    pub fn fps_update_interval(&self) -> Duration {
        self.gui.fps_interval
    }

    /// Color for `role` in the active schema
    pub fn color(&self, role: Role) -> Rgb<u8> {
        self.gui.schemas.color(role)
    }

    /// Box of a `width` x `height` widget anchored at `point` on this canvas
    pub fn resolve(&self, point: &Point, width: i32, height: i32) -> Rect {
        UILayout::resolve_box(point, width, height, self.width, self.height)
    }
}
