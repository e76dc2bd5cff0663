//! Screen-space rectangle owned by each widget.

use kurbo::{Point, Rect, Size, Vec2};
use serde::{Deserialize, Serialize};

/// Placement of a widget relative to its parent's size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Alignment {
    /// Position is taken as-is, relative to the parent's top-left corner.
    #[default]
    None,
    /// Position is an inset from the parent's top-right corner.
    TopRight,
    /// Position is an inset from the parent's bottom-left corner.
    BottomLeft,
    /// Position is an inset from the parent's bottom-right corner.
    BottomRight,
    /// Widget is centered in the parent; position is an additional offset.
    Center,
}

impl Alignment {
    /// Resolve an aligned position into a top-left position inside `parent`.
    pub fn resolve(self, position: Point, size: Size, parent: Size) -> Point {
        match self {
            Alignment::None => position,
            Alignment::TopRight => {
                Point::new(parent.width - size.width - position.x, position.y)
            }
            Alignment::BottomLeft => {
                Point::new(position.x, parent.height - size.height - position.y)
            }
            Alignment::BottomRight => Point::new(
                parent.width - size.width - position.x,
                parent.height - size.height - position.y,
            ),
            Alignment::Center => Point::new(
                (parent.width - size.width) / 2.0 + position.x,
                (parent.height - size.height) / 2.0 + position.y,
            ),
        }
    }
}

/// Position, size and layer of a widget.
///
/// `position` is relative to the parent offset passed into `update`/`draw`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WidgetRect {
    /// Top-left corner relative to the parent.
    pub position: Point,
    /// Width and height.
    pub size: Size,
    /// Draw/update order (lower first).
    pub layer: i32,
    /// Placement rule that produced `position`.
    pub alignment: Alignment,
}

impl WidgetRect {
    /// Create an unaligned rectangle on layer 0.
    pub fn new(position: Point, size: Size) -> Self {
        Self {
            position,
            size,
            layer: 0,
            alignment: Alignment::None,
        }
    }

    /// Set the layer.
    pub fn with_layer(mut self, layer: i32) -> Self {
        self.layer = layer;
        self
    }

    /// Place the rectangle inside a parent of the given size.
    pub fn aligned(mut self, alignment: Alignment, parent: Size) -> Self {
        self.alignment = alignment;
        self.position = alignment.resolve(self.position, self.size, parent);
        self
    }

    /// Screen-space bounds given the parent offset.
    pub fn bounds(&self, parent: Vec2) -> Rect {
        Rect::from_origin_size(self.position + parent, self.size)
    }

    /// Bounds shrunk by `border` on all sides.
    pub fn inset_bounds(&self, parent: Vec2, border: f64) -> Rect {
        self.bounds(parent).inset(-border)
    }

    /// Hit test with inclusive min and exclusive max edges.
    pub fn contains(&self, parent: Vec2, point: Point) -> bool {
        self.bounds(parent).contains(point)
    }

    /// Map a screen point into widget-relative coordinates.
    pub fn to_local(&self, parent: Vec2, point: Point) -> Vec2 {
        point - (self.position + parent)
    }
}
