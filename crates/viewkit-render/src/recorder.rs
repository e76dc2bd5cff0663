//! Renderer that records draw calls instead of rasterizing them.
//!
//! Used by headless hosts and by widget tests to inspect what was drawn.

use kurbo::{Point, Size};
use peniko::Color;
use viewkit_core::TextureHandle;

use crate::font::Font;
use crate::renderer::GuiRenderer;

/// One recorded primitive.
#[derive(Debug, Clone)]
pub enum DrawCommand {
    Quad {
        position: Point,
        size: Size,
        color: Color,
    },
    HueRamp {
        position: Point,
        size: Size,
        base: Color,
    },
    ShadeSquare {
        position: Point,
        size: Size,
        base: Color,
    },
    Text {
        position: Point,
        text: String,
        color: Color,
    },
    Image {
        position: Point,
        size: Size,
        texture: TextureHandle,
        color: Color,
        flipped: bool,
    },
}

/// Collects [`DrawCommand`]s for one or more frames.
#[derive(Debug, Clone)]
pub struct CommandRecorder {
    viewport: Size,
    commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            commands: Vec::new(),
        }
    }

    /// Everything recorded since the last [`clear`](Self::clear).
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drop recorded commands, typically at the start of a frame.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Recorded text strings in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Recorded image draws as (position, size, texture).
    pub fn images(&self) -> Vec<(Point, Size, TextureHandle)> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Image {
                    position,
                    size,
                    texture,
                    ..
                } => Some((*position, *size, *texture)),
                _ => None,
            })
            .collect()
    }

    /// Recorded solid quads as (position, size, color).
    pub fn quads(&self) -> Vec<(Point, Size, Color)> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Quad {
                    position,
                    size,
                    color,
                } => Some((*position, *size, *color)),
                _ => None,
            })
            .collect()
    }
}

impl GuiRenderer for CommandRecorder {
    fn viewport_size(&self) -> Size {
        self.viewport
    }

    fn draw_quad(&mut self, position: Point, size: Size, color: Color) {
        self.commands.push(DrawCommand::Quad {
            position,
            size,
            color,
        });
    }

    fn draw_hue_ramp(&mut self, position: Point, size: Size, base: Color) {
        self.commands.push(DrawCommand::HueRamp {
            position,
            size,
            base,
        });
    }

    fn draw_shade_square(&mut self, position: Point, size: Size, base: Color) {
        self.commands.push(DrawCommand::ShadeSquare {
            position,
            size,
            base,
        });
    }

    fn draw_text(&mut self, position: Point, text: &str, _font: &Font, color: Color) {
        self.commands.push(DrawCommand::Text {
            position,
            text: text.to_string(),
            color,
        });
    }

    fn draw_image(
        &mut self,
        position: Point,
        size: Size,
        texture: &TextureHandle,
        color: Color,
        flipped: bool,
    ) {
        self.commands.push(DrawCommand::Image {
            position,
            size,
            texture: *texture,
            color,
            flipped,
        });
    }
}
