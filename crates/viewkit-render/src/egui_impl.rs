//! egui painter backend.

use std::collections::HashMap;

use egui::{Align2, Color32, FontId, Mesh, Painter, Pos2, Rect, Shape, TextureId};
use kurbo::{Point, Size};
use peniko::Color;
use viewkit_core::color::{self, HUE_STOPS};
use viewkit_core::TextureHandle;

use crate::font::Font;
use crate::renderer::{GuiRenderer, RenderResult, RendererError};

/// Cells per side of the shade square mesh.
const SHADE_GRID: usize = 16;

/// Paints widget primitives onto an egui layer.
pub struct EguiRenderer<'a> {
    painter: &'a Painter,
    textures: &'a HashMap<u64, TextureId>,
}

impl<'a> EguiRenderer<'a> {
    /// Wrap a painter. `textures` maps [`TextureHandle::id`] to egui textures.
    pub fn new(painter: &'a Painter, textures: &'a HashMap<u64, TextureId>) -> Self {
        Self { painter, textures }
    }

    fn texture_id(&self, texture: &TextureHandle) -> RenderResult<TextureId> {
        self.textures
            .get(&texture.id)
            .copied()
            .ok_or(RendererError::UnknownTexture(texture.id))
    }
}

fn to_color32(color: Color) -> Color32 {
    let c = color.to_rgba8();
    Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

fn to_pos(point: Point) -> Pos2 {
    Pos2::new(point.x as f32, point.y as f32)
}

fn to_rect(position: Point, size: Size) -> Rect {
    Rect::from_min_size(
        to_pos(position),
        egui::vec2(size.width as f32, size.height as f32),
    )
}

/// Multiply two colors channel by channel.
fn tint(a: Color, b: Color) -> Color32 {
    let a = a.to_rgba8();
    let b = b.to_rgba8();
    let mul = |x: u8, y: u8| ((u16::from(x) * u16::from(y)) / 255) as u8;
    Color32::from_rgba_unmultiplied(mul(a.r, b.r), mul(a.g, b.g), mul(a.b, b.b), mul(a.a, b.a))
}

/// Append a quad with per-corner colors (top-left, top-right, bottom-left, bottom-right).
fn push_quad(mesh: &mut Mesh, rect: Rect, corners: [Color32; 4]) {
    let base = mesh.vertices.len() as u32;
    mesh.colored_vertex(rect.left_top(), corners[0]);
    mesh.colored_vertex(rect.right_top(), corners[1]);
    mesh.colored_vertex(rect.left_bottom(), corners[2]);
    mesh.colored_vertex(rect.right_bottom(), corners[3]);
    mesh.add_triangle(base, base + 1, base + 2);
    mesh.add_triangle(base + 1, base + 3, base + 2);
}

impl GuiRenderer for EguiRenderer<'_> {
    fn viewport_size(&self) -> Size {
        let clip = self.painter.clip_rect();
        Size::new(f64::from(clip.width()), f64::from(clip.height()))
    }

    fn draw_quad(&mut self, position: Point, size: Size, color: Color) {
        self.painter
            .rect_filled(to_rect(position, size), 0.0, to_color32(color));
    }

    fn draw_hue_ramp(&mut self, position: Point, size: Size, base: Color) {
        let rect = to_rect(position, size);
        let segments = HUE_STOPS.len() - 1;
        let step = rect.height() / segments as f32;
        let mut mesh = Mesh::default();
        for (i, pair) in HUE_STOPS.windows(2).enumerate() {
            let top = tint(pair[0], base);
            let bottom = tint(pair[1], base);
            let slice = Rect::from_min_max(
                Pos2::new(rect.left(), rect.top() + step * i as f32),
                Pos2::new(rect.right(), rect.top() + step * (i + 1) as f32),
            );
            push_quad(&mut mesh, slice, [top, top, bottom, bottom]);
        }
        self.painter.add(Shape::mesh(mesh));
    }

    fn draw_shade_square(&mut self, position: Point, size: Size, base: Color) {
        let rect = to_rect(position, size);
        let cell = egui::vec2(
            rect.width() / SHADE_GRID as f32,
            rect.height() / SHADE_GRID as f32,
        );
        let at = |i: usize, j: usize| {
            let x = i as f32 / SHADE_GRID as f32;
            let y = j as f32 / SHADE_GRID as f32;
            to_color32(color::shade(base, x, y))
        };
        let mut mesh = Mesh::default();
        for j in 0..SHADE_GRID {
            for i in 0..SHADE_GRID {
                let min = rect.min + egui::vec2(cell.x * i as f32, cell.y * j as f32);
                let cell_rect = Rect::from_min_size(min, cell);
                push_quad(
                    &mut mesh,
                    cell_rect,
                    [at(i, j), at(i + 1, j), at(i, j + 1), at(i + 1, j + 1)],
                );
            }
        }
        self.painter.add(Shape::mesh(mesh));
    }

    fn draw_text(&mut self, position: Point, text: &str, font: &Font, color: Color) {
        self.painter.text(
            to_pos(position),
            Align2::LEFT_TOP,
            text,
            FontId::proportional(font.size as f32),
            to_color32(color),
        );
    }

    fn draw_image(
        &mut self,
        position: Point,
        size: Size,
        texture: &TextureHandle,
        color: Color,
        flipped: bool,
    ) {
        let id = match self.texture_id(texture) {
            Ok(id) => id,
            Err(e) => {
                log::warn!("Skipping image draw: {}", e);
                return;
            }
        };
        let uv = if flipped {
            Rect::from_min_max(Pos2::new(0.0, 1.0), Pos2::new(1.0, 0.0))
        } else {
            Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(1.0, 1.0))
        };
        let mut mesh = Mesh::with_texture(id);
        mesh.add_rect_with_uv(to_rect(position, size), uv, to_color32(color));
        self.painter.add(Shape::mesh(mesh));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::epaint::Vertex;
    use egui::{Id, LayerId, Order, RawInput};
    use viewkit_core::color::{BLACK, RED, WHITE};

    /// Run one egui pass, draw through an [`EguiRenderer`], and return what it painted.
    fn paint(draw: impl FnOnce(&mut EguiRenderer<'_>)) -> Vec<Shape> {
        let textures = HashMap::from([(7, TextureId::User(7))]);
        let mut draw = Some(draw);
        let output = egui::Context::default().run(RawInput::default(), |ctx| {
            let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("viewkit")));
            if let Some(draw) = draw.take() {
                draw(&mut EguiRenderer::new(&painter, &textures));
            }
        });
        output.shapes.into_iter().map(|clipped| clipped.shape).collect()
    }

    fn mesh_vertices(shapes: &[Shape]) -> Vec<Vec<Vertex>> {
        shapes
            .iter()
            .filter_map(|shape| match shape {
                Shape::Mesh(mesh) => Some(mesh.vertices.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_to_color32() {
        assert_eq!(to_color32(RED), Color32::from_rgb(255, 0, 0));
    }

    #[test]
    fn test_white_tint_is_identity() {
        assert_eq!(tint(RED, WHITE), Color32::from_rgb(255, 0, 0));
    }

    #[test]
    fn test_push_quad_builds_two_triangles() {
        let mut mesh = Mesh::default();
        let rect = Rect::from_min_size(Pos2::ZERO, egui::vec2(10.0, 10.0));
        push_quad(&mut mesh, rect, [Color32::BLACK; 4]);
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.indices.len(), 6);
    }

    #[test]
    fn test_quad_paints_filled_rect() {
        let shapes = paint(|r| r.draw_quad(Point::new(1.0, 2.0), Size::new(3.0, 4.0), RED));
        assert_eq!(shapes.len(), 1);
        match &shapes[0] {
            Shape::Rect(rect) => {
                assert_eq!(rect.fill, Color32::from_rgb(255, 0, 0));
                assert_eq!(rect.rect.min, Pos2::new(1.0, 2.0));
            }
            other => panic!("expected a rect, got {:?}", other),
        }
    }

    #[test]
    fn test_hue_ramp_mesh() {
        let shapes = paint(|r| r.draw_hue_ramp(Point::ZERO, Size::new(10.0, 60.0), WHITE));
        let meshes = mesh_vertices(&shapes);
        assert_eq!(meshes.len(), 1);
        let vertices = &meshes[0];
        assert_eq!(vertices.len(), 24);
        assert_eq!(vertices[0].color, Color32::from_rgb(255, 0, 0));
        assert_eq!(vertices[2].color, Color32::from_rgb(238, 130, 238));
        assert_eq!(vertices[2].pos, Pos2::new(0.0, 10.0));
    }

    #[test]
    fn test_shade_square_corners() {
        let shapes = paint(|r| r.draw_shade_square(Point::ZERO, Size::new(16.0, 16.0), RED));
        let meshes = mesh_vertices(&shapes);
        let vertices = &meshes[0];
        assert_eq!(vertices.len(), SHADE_GRID * SHADE_GRID * 4);
        assert_eq!(vertices[0].color, to_color32(BLACK));
        // Top-right corner of the last cell in the first row.
        assert_eq!(vertices[(SHADE_GRID - 1) * 4 + 1].color, to_color32(RED));
        assert_eq!(vertices[vertices.len() - 1].color, to_color32(WHITE));
    }

    #[test]
    fn test_flipped_image_swaps_v() {
        let texture = TextureHandle::new(7, 4, 2);
        let shapes = paint(|r| {
            r.draw_image(Point::ZERO, Size::new(8.0, 4.0), &texture, WHITE, true);
        });
        assert_eq!(shapes.len(), 1);
        match &shapes[0] {
            Shape::Mesh(mesh) => {
                assert_eq!(mesh.texture_id, TextureId::User(7));
                assert_eq!(mesh.vertices[0].uv, Pos2::new(0.0, 1.0));
                assert_eq!(mesh.vertices[3].uv, Pos2::new(1.0, 0.0));
            }
            other => panic!("expected a mesh, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_texture_paints_nothing() {
        let texture = TextureHandle::new(99, 4, 2);
        let shapes = paint(|r| {
            r.draw_image(Point::ZERO, Size::new(8.0, 4.0), &texture, WHITE, false);
        });
        assert!(mesh_vertices(&shapes).is_empty());
    }

    #[test]
    fn test_text_paints_text_shape() {
        let font = Font::monospace(12.0, 6.0);
        let shapes = paint(|r| r.draw_text(Point::new(5.0, 5.0), "hue", &font, WHITE));
        assert_eq!(shapes.len(), 1);
        assert!(matches!(shapes[0], Shape::Text(_)));
    }
}
