//! Hue ramp and shade square color model used by the color picker.
//!
//! All blending happens on 8-bit channels with the factor clamped to
//! `[0, 1]` and each channel truncated toward zero, so identical inputs
//! always produce bit-identical colors.

use peniko::Color;

pub const BLACK: Color = Color::from_rgba8(0, 0, 0, 255);
pub const WHITE: Color = Color::from_rgba8(255, 255, 255, 255);
pub const RED: Color = Color::from_rgba8(255, 0, 0, 255);
pub const VIOLET: Color = Color::from_rgba8(238, 130, 238, 255);
pub const BLUE: Color = Color::from_rgba8(0, 0, 255, 255);
pub const CYAN: Color = Color::from_rgba8(0, 255, 255, 255);
pub const LIME: Color = Color::from_rgba8(0, 255, 0, 255);
pub const YELLOW: Color = Color::from_rgba8(255, 255, 0, 255);
pub const DIM_GRAY: Color = Color::from_rgba8(105, 105, 105, 255);
pub const LIGHT_GRAY: Color = Color::from_rgba8(211, 211, 211, 255);
pub const TOMATO: Color = Color::from_rgba8(255, 99, 71, 255);
pub const LIME_GREEN: Color = Color::from_rgba8(50, 205, 50, 255);

/// Stops of the hue ramp, top to bottom. First and last are equal so the
/// ramp closes on itself.
pub const HUE_STOPS: [Color; 7] = [RED, VIOLET, BLUE, CYAN, LIME, YELLOW, RED];

/// Number of interpolated segments on the hue ramp.
pub const HUE_SEGMENTS: usize = HUE_STOPS.len() - 1;

/// Raw shade coordinates are divided by this before the bounds check.
pub const SHADE_SCALE: f32 = 0.75;

/// Upper bound accepted for scaled shade coordinates.
pub const SHADE_TOLERANCE: f32 = 1.05;

/// Linear interpolation between two colors.
pub fn lerp(from: Color, to: Color, amount: f32) -> Color {
    let amount = amount.clamp(0.0, 1.0);
    let a = from.to_rgba8();
    let b = to.to_rgba8();
    let channel = |x: u8, y: u8| {
        let x = f32::from(x);
        (x + (f32::from(y) - x) * amount) as u8
    };
    Color::from_rgba8(
        channel(a.r, b.r),
        channel(a.g, b.g),
        channel(a.b, b.b),
        channel(a.a, b.a),
    )
}

/// Color inside hue segment `index` at local `factor`.
pub fn hue_segment(index: usize, factor: f32) -> Color {
    let index = index.min(HUE_SEGMENTS - 1);
    lerp(HUE_STOPS[index], HUE_STOPS[index + 1], factor)
}

/// Saturated color at position `t` along the hue ramp.
///
/// Returns `None` for `t <= 0` (the top pixel row is inert) and for
/// `t > 1`.
pub fn hue_at(t: f32) -> Option<Color> {
    if !(t > 0.0 && t <= 1.0) {
        return None;
    }
    let scaled = t * HUE_SEGMENTS as f32;
    let index = (scaled.floor() as usize).min(HUE_SEGMENTS - 1);
    Some(hue_segment(index, scaled - index as f32))
}

/// Shade `full` by a position in the shade square.
///
/// `x` blends from black toward the hue (top edge) and toward white (bottom
/// edge); `y` blends from the top edge to the bottom edge.
pub fn shade(full: Color, x: f32, y: f32) -> Color {
    lerp(lerp(BLACK, full, x), lerp(BLACK, WHITE, x), y)
}

/// Scale raw shade-area coordinates and apply the soft tolerance window.
pub fn shade_coords(raw_x: f32, raw_y: f32) -> Option<(f32, f32)> {
    let x = raw_x / SHADE_SCALE;
    let y = raw_y / SHADE_SCALE;
    let in_range = |v: f32| (0.0..=SHADE_TOLERANCE).contains(&v);
    (in_range(x) && in_range(y)).then_some((x, y))
}

/// Human readable channel values, e.g. `R:255 G:0 B:0`.
pub fn format_color(color: Color) -> String {
    let c = color.to_rgba8();
    format!("R:{} G:{} B:{}", c.r, c.g, c.b)
}

/// The picker's current selection.
///
/// The fine color is recomputed from `(full, fine_x, fine_y)` whenever one
/// of them changes and is never assigned directly.
#[derive(Debug, Clone, Copy)]
pub struct ColorSelection {
    full: Color,
    fine_x: f32,
    fine_y: f32,
    fine: Color,
}

impl Default for ColorSelection {
    fn default() -> Self {
        Self::new(RED, 1.0, 1.0)
    }
}

impl ColorSelection {
    /// Create a selection from a hue and shade coordinates.
    pub fn new(full: Color, fine_x: f32, fine_y: f32) -> Self {
        Self {
            full,
            fine_x,
            fine_y,
            fine: shade(full, fine_x, fine_y),
        }
    }

    /// The saturated hue.
    pub fn full(&self) -> Color {
        self.full
    }

    /// The shaded output color.
    pub fn fine(&self) -> Color {
        self.fine
    }

    /// Stored shade coordinates.
    pub fn fine_coords(&self) -> (f32, f32) {
        (self.fine_x, self.fine_y)
    }

    /// Pick a hue at ramp position `t`. Returns false if `t` is rejected.
    pub fn select_hue(&mut self, t: f32) -> bool {
        match hue_at(t) {
            Some(full) => {
                self.full = full;
                self.fine = shade(self.full, self.fine_x, self.fine_y);
                true
            }
            None => false,
        }
    }

    /// Pick a shade from raw (unscaled) coordinates. Returns false if rejected.
    pub fn select_shade(&mut self, raw_x: f32, raw_y: f32) -> bool {
        match shade_coords(raw_x, raw_y) {
            Some((x, y)) => {
                self.fine_x = x;
                self.fine_y = y;
                self.fine = shade(self.full, x, y);
                true
            }
            None => false,
        }
    }
}
