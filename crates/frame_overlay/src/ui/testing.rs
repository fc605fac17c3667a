//! Canvas double for widget tests

use image::Rgb;

use super::backend::Canvas;
use super::widgets::{Font, Rect};

/// Width of every glyph
pub const GLYPH_WIDTH: i32 = 10;
/// Height of every line of text
pub const GLYPH_HEIGHT: i32 = 20;

/// Primitive recorded by [`RecordingCanvas`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    Fill(Rect, Rgb<u8>),
    Stroke(Rect, Rgb<u8>, u32),
    Text(String, (i32, i32), Rgb<u8>),
}

/// Canvas with fixed text metrics that records what was drawn
pub struct RecordingCanvas {
    width: u32,
    height: u32,
    pub commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn texts(&self) -> Vec<String> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text(text, _, _) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb<u8>) {
        self.commands.push(DrawCommand::Fill(rect, color));
    }

    fn stroke_rect(&mut self, rect: Rect, color: Rgb<u8>, thickness: u32) {
        self.commands.push(DrawCommand::Stroke(rect, color, thickness));
    }

    fn text_size(&self, text: &str, _font: &Font) -> (i32, i32) {
        (text.len() as i32 * GLYPH_WIDTH, GLYPH_HEIGHT)
    }

    fn draw_text(&mut self, text: &str, origin: (i32, i32), _font: &Font, color: Rgb<u8>) {
        self.commands.push(DrawCommand::Text(text.to_string(), origin, color));
    }
}
