//! Colored block with a single line of text.
//!
//! Shared by [`TextButton`](crate::TextButton) and
//! [`LoadDialog`](crate::LoadDialog), which both draw a text label over a
//! filled rectangle.

use kurbo::{Size, Vec2};
use peniko::Color;
use viewkit_core::color;
use viewkit_render::Font;

/// Horizontal placement of the text inside its block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Text plus the block it sits on. Vertically the text is always centered.
#[derive(Debug, Clone)]
pub struct TextBlock {
    text: String,
    font: Font,
    pub block_color: Color,
    pub text_color: Color,
    alignment: TextAlignment,
    text_border: Vec2,
    text_size: Size,
    font_position: Vec2,
}

impl TextBlock {
    pub fn new(text: impl Into<String>, font: Font, size: Size) -> Self {
        let text = text.into();
        let text_size = font.measure(&text);
        let mut block = Self {
            text,
            font,
            block_color: color::DIM_GRAY,
            text_color: color::WHITE,
            alignment: TextAlignment::Left,
            text_border: Vec2::new(4.0, 0.0),
            text_size,
            font_position: Vec2::ZERO,
        };
        block.layout(size);
        block
    }

    pub fn with_alignment(mut self, alignment: TextAlignment, size: Size) -> Self {
        self.alignment = alignment;
        self.layout(size);
        self
    }

    pub fn with_colors(mut self, block_color: Color, text_color: Color) -> Self {
        self.block_color = block_color;
        self.text_color = text_color;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    pub fn text_border(&self) -> Vec2 {
        self.text_border
    }

    /// Measured size of the current text.
    pub fn text_size(&self) -> Size {
        self.text_size
    }

    /// Offset of the text origin from the block origin.
    pub fn font_position(&self) -> Vec2 {
        self.font_position
    }

    fn layout(&mut self, size: Size) {
        let y = size.height * 0.5 - self.text_size.height * 0.5;
        let x = match self.alignment {
            TextAlignment::Left => self.text_border.x,
            TextAlignment::Center => (size.width - self.text_size.width) * 0.5,
            TextAlignment::Right => size.width - self.text_size.width - self.text_border.x,
        };
        self.font_position = Vec2::new(x, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn font() -> Font {
        Font::monospace(10.0, 5.0)
    }

    #[test]
    fn test_left_alignment_uses_border() {
        let block = TextBlock::new("abcd", font(), Size::new(100.0, 30.0));
        let pos = block.font_position();
        assert!((pos.x - 4.0).abs() < f64::EPSILON);
        assert!((pos.y - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_center_and_right_alignment() {
        let size = Size::new(100.0, 30.0);
        let centered =
            TextBlock::new("abcd", font(), size).with_alignment(TextAlignment::Center, size);
        assert!((centered.font_position().x - 40.0).abs() < f64::EPSILON);

        let right =
            TextBlock::new("abcd", font(), size).with_alignment(TextAlignment::Right, size);
        assert!((right.font_position().x - 76.0).abs() < f64::EPSILON);
    }
}
