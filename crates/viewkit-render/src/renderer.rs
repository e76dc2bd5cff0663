//! Renderer trait abstraction.

use kurbo::{Point, Size};
use peniko::Color;
use thiserror::Error;
use viewkit_core::TextureHandle;

use crate::font::Font;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Texture {0} is not registered with the renderer")]
    UnknownTexture(u64),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Draw primitives used by widgets.
///
/// Widgets only issue primitives; rasterization belongs to the backend.
/// All positions are in screen coordinates.
pub trait GuiRenderer {
    /// Size of the visible screen area.
    fn viewport_size(&self) -> Size;

    /// Solid rectangle.
    fn draw_quad(&mut self, position: Point, size: Size, color: Color);

    /// Vertical hue ramp. `base` tints the ramp (white leaves it unchanged).
    fn draw_hue_ramp(&mut self, position: Point, size: Size, base: Color);

    /// Shade square for the hue `base`: black on the left edge, `base` at the
    /// top-right corner, white at the bottom-right corner.
    fn draw_shade_square(&mut self, position: Point, size: Size, base: Color);

    /// Single line of text, top-left anchored.
    fn draw_text(&mut self, position: Point, text: &str, font: &Font, color: Color);

    /// Textured rectangle, optionally flipped vertically.
    fn draw_image(
        &mut self,
        position: Point,
        size: Size,
        texture: &TextureHandle,
        color: Color,
        flipped: bool,
    );
}
