//! Color picker: a hue ramp on the right and a shade square on the left.
//!
//! Dragging on the ramp selects the saturated hue, dragging on the square
//! shades it toward black and white. The shaded color is pushed to the
//! bound [`OutputSink`] every time it changes.

use std::ops::Range;

use kurbo::{Point, Size, Vec2};
use peniko::Color;
use viewkit_core::color::{self, format_color};
use viewkit_core::{ColorSelection, FrameContext, OutputSink, WidgetId, WidgetRect};
use viewkit_render::{Font, GuiRenderer};

use crate::sizing::PICKER_BORDER;
use crate::Widget;

/// Normalized x range that addresses the hue ramp.
const HUE_BAND: Range<f32> = 0.85..0.99;
/// Width of the hue ramp relative to the picker.
const RAMP_FRACTION: f64 = 0.2;
/// Side of the shade square relative to the picker.
const SQUARE_FRACTION: f64 = 0.75;
/// Height of the selected color swatch.
const SWATCH_HEIGHT: f64 = 30.0;
/// Width of the hue marker.
const HUE_MARKER_WIDTH: f64 = 10.0;
/// Crosshair arm length, thickness and gap from its center.
const MARKER_LENGTH: f64 = 5.0;
const MARKER_THICKNESS: f64 = 1.0;
const MARKER_OFFSET: f64 = 3.0;
/// Initial marker position, widget relative.
const MARKER_START: Vec2 = Vec2::new(20.0, 20.0);

/// Whether the picker owns the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerPhase {
    #[default]
    Idle,
    Engaged,
}

pub struct ColorPicker {
    id: WidgetId,
    rect: WidgetRect,
    background: Color,
    font: Font,
    border: f64,
    phase: PickerPhase,
    selection: ColorSelection,
    label: String,
    hue_marker: Vec2,
    fine_marker: Vec2,
    sink: Option<Box<dyn OutputSink<Color>>>,
}

impl ColorPicker {
    pub fn new(rect: WidgetRect, background: Color, font: Font) -> Self {
        let selection = ColorSelection::default();
        Self {
            id: WidgetId::new(),
            rect,
            background,
            font,
            border: PICKER_BORDER,
            phase: PickerPhase::Idle,
            label: format_color(selection.fine()),
            selection,
            hue_marker: MARKER_START,
            fine_marker: MARKER_START,
            sink: None,
        }
    }

    pub fn with_border(mut self, border: f64) -> Self {
        self.border = border;
        self
    }

    /// Bind the destination for the shaded color.
    pub fn with_sink(mut self, sink: Box<dyn OutputSink<Color>>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn phase(&self) -> PickerPhase {
        self.phase
    }

    pub fn is_engaged(&self) -> bool {
        self.phase == PickerPhase::Engaged
    }

    pub fn full_color(&self) -> Color {
        self.selection.full()
    }

    pub fn fine_color(&self) -> Color {
        self.selection.fine()
    }

    pub fn selection(&self) -> &ColorSelection {
        &self.selection
    }

    /// Channel readout of the shaded color.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn hue_marker(&self) -> Vec2 {
        self.hue_marker
    }

    pub fn fine_marker(&self) -> Vec2 {
        self.fine_marker
    }

    /// Apply a normalized, clamped pointer position. Returns true if the
    /// selection changed.
    fn pick(&mut self, x: f32, y: f32, local: Vec2) -> bool {
        if HUE_BAND.contains(&x) {
            if !self.selection.select_hue(y) {
                return false;
            }
            self.hue_marker = local;
        } else {
            if !self.selection.select_shade(x, y) {
                return false;
            }
            self.fine_marker = local;
        }
        self.label = format_color(self.selection.fine());
        if let Some(sink) = self.sink.as_mut() {
            sink.set(self.selection.fine());
        }
        true
    }
}

impl Widget for ColorPicker {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn rect(&self) -> &WidgetRect {
        &self.rect
    }

    fn update(&mut self, ctx: &mut FrameContext<'_>, parent: Vec2) {
        if ctx.arbiter.is_blocked(self.id) {
            return;
        }

        let held = ctx.input.is_primary_held();
        if self.phase == PickerPhase::Engaged && !held {
            ctx.arbiter.release(self.id);
            self.phase = PickerPhase::Idle;
        }
        if !held {
            return;
        }

        let content = self.rect.inset_bounds(parent, self.border);
        let pointer = ctx.pointer();
        let x = ((pointer.x - content.x0) / content.width()) as f32;
        let y = ((pointer.y - content.y0) / content.height()) as f32;

        if self.phase == PickerPhase::Idle {
            let inside = (0.0..=1.0).contains(&x) && (0.0..=1.0).contains(&y);
            if !inside || !ctx.input.was_primary_pressed() || !ctx.arbiter.try_engage(self.id) {
                return;
            }
            self.phase = PickerPhase::Engaged;
        }

        ctx.arbiter.mark_used();
        let x = x.clamp(-0.01, 1.0);
        let y = y.clamp(-0.01, 1.01);
        let local = self.rect.to_local(parent, pointer);
        if self.pick(x, y, local) {
            log::trace!("Picker {} selected {}", self.id, self.label);
        }
    }

    fn draw(&self, renderer: &mut dyn GuiRenderer, parent: Vec2, _pointer: Point) {
        let origin = self.rect.position + parent;
        let size = self.rect.size;
        let b = self.border;
        renderer.draw_quad(origin, size, self.background);

        let ramp = Size::new(size.width * RAMP_FRACTION, size.height);
        renderer.draw_hue_ramp(
            origin + Vec2::new(size.width - ramp.width + b, b),
            Size::new(ramp.width - 2.0 * b, ramp.height - 2.0 * b),
            color::WHITE,
        );

        let square = Size::new(size.width * SQUARE_FRACTION, size.height * SQUARE_FRACTION);
        let square_origin = origin + Vec2::new(b, b);
        renderer.draw_quad(square_origin, square, color::WHITE);
        renderer.draw_shade_square(square_origin, square, self.selection.full());

        renderer.draw_quad(
            Point::new(
                origin.x + b + size.width - ramp.width,
                origin.y + self.hue_marker.y - MARKER_THICKNESS,
            ),
            Size::new(HUE_MARKER_WIDTH, 2.0 * MARKER_THICKNESS),
            color::WHITE,
        );

        renderer.draw_quad(
            square_origin + Vec2::new(0.0, square.height + size.height * 0.02),
            Size::new(square.width, SWATCH_HEIGHT),
            self.selection.fine(),
        );

        // Drop shadow first, then the label itself.
        let text = origin + Vec2::new(2.0 * b, 2.0 * b + square.height + size.height * 0.05);
        renderer.draw_text(text + Vec2::new(1.0, 1.0), &self.label, &self.font, color::BLACK);
        renderer.draw_text(text, &self.label, &self.font, color::WHITE);

        let center = origin + self.fine_marker;
        let t = MARKER_THICKNESS;
        let reach = MARKER_LENGTH + MARKER_OFFSET;
        let horizontal = Size::new(MARKER_LENGTH, 2.0 * t);
        let vertical = Size::new(2.0 * t, MARKER_LENGTH);
        renderer.draw_quad(center - Vec2::new(reach, t), horizontal, color::WHITE);
        renderer.draw_quad(center + Vec2::new(MARKER_OFFSET, -t), horizontal, color::WHITE);
        renderer.draw_quad(center - Vec2::new(t, reach), vertical, color::WHITE);
        renderer.draw_quad(center + Vec2::new(-t, MARKER_OFFSET), vertical, color::WHITE);
    }
}
