//! Text button with hover highlight and a click action.

use kurbo::{Point, Size, Vec2};
use viewkit_core::{FrameContext, WidgetId, WidgetRect};
use viewkit_render::{Font, GuiRenderer};

use crate::sizing::BUTTON_BORDER;
use crate::text_block::{TextAlignment, TextBlock};
use crate::theme;
use crate::Widget;

/// Fires its action when the primary button is released over it.
///
/// Buttons never take engagement. While another widget held it at the start
/// of the frame the button is inert: no hover, no click.
pub struct TextButton {
    id: WidgetId,
    rect: WidgetRect,
    block: TextBlock,
    border: f64,
    hovered: bool,
    action: Option<Box<dyn FnMut()>>,
}

impl TextButton {
    pub fn new(rect: WidgetRect, text: impl Into<String>, font: Font) -> Self {
        let block = TextBlock::new(text, font, rect.size);
        Self {
            id: WidgetId::new(),
            rect,
            block,
            border: BUTTON_BORDER,
            hovered: false,
            action: None,
        }
    }

    /// Set the action run on click.
    pub fn on_click(mut self, action: impl FnMut() + 'static) -> Self {
        self.action = Some(Box::new(action));
        self
    }

    pub fn with_border(mut self, border: f64) -> Self {
        self.border = border;
        self
    }

    pub fn with_alignment(mut self, alignment: TextAlignment) -> Self {
        self.block = self.block.with_alignment(alignment, self.rect.size);
        self
    }

    pub fn with_colors(mut self, block: peniko::Color, text: peniko::Color) -> Self {
        self.block = self.block.with_colors(block, text);
        self
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn text(&self) -> &str {
        self.block.text()
    }
}

impl Widget for TextButton {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn rect(&self) -> &WidgetRect {
        &self.rect
    }

    fn update(&mut self, ctx: &mut FrameContext<'_>, parent: Vec2) {
        if ctx.arbiter.was_blocked_at_frame_start(self.id) {
            self.hovered = false;
            return;
        }
        self.hovered = self.rect.contains(parent, ctx.pointer());
        if !self.hovered || !ctx.input.was_primary_clicked() {
            return;
        }
        ctx.arbiter.mark_used();
        log::debug!("Button '{}' clicked", self.block.text());
        if let Some(action) = self.action.as_mut() {
            action();
        }
    }

    fn draw(&self, renderer: &mut dyn GuiRenderer, parent: Vec2, _pointer: Point) {
        let origin = self.rect.position + parent;
        let size = self.rect.size;
        renderer.draw_quad(origin, size, theme::FRAME);

        let fill = if self.hovered {
            theme::BUTTON_HOVER
        } else {
            self.block.block_color
        };
        renderer.draw_quad(
            origin + Vec2::new(self.border, self.border),
            Size::new(size.width - 2.0 * self.border, size.height - 2.0 * self.border),
            fill,
        );

        renderer.draw_text(
            origin + self.block.font_position(),
            self.block.text(),
            self.block.font(),
            self.block.text_color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use viewkit_core::color::{BLACK, LIME_GREEN, TOMATO};
    use viewkit_core::{EngagementArbiter, FrameTime, InputState, MouseButton, PointerEvent};
    use viewkit_render::{CommandRecorder, DrawCommand};

    fn button(clicks: Rc<Cell<u32>>) -> TextButton {
        let rect = WidgetRect::new(Point::new(10.0, 10.0), Size::new(100.0, 30.0));
        TextButton::new(rect, "Apply", Font::monospace(10.0, 5.0)).on_click(move || {
            clicks.set(clicks.get() + 1);
        })
    }

    fn frame(button: &mut TextButton, input: &InputState, arbiter: &mut EngagementArbiter) {
        arbiter.begin_frame();
        let mut ctx = FrameContext::new(FrameTime::default(), input, arbiter);
        button.update(&mut ctx, Vec2::ZERO);
    }

    fn press(at: Point, input: &mut InputState) {
        input.begin_frame();
        input.handle_pointer_event(PointerEvent::Down {
            position: at,
            button: MouseButton::Left,
        });
    }

    fn release(at: Point, input: &mut InputState) {
        input.begin_frame();
        input.handle_pointer_event(PointerEvent::Up {
            position: at,
            button: MouseButton::Left,
        });
    }

    #[test]
    fn test_click_fires_once() {
        let clicks = Rc::new(Cell::new(0));
        let mut button = button(clicks.clone());
        let mut input = InputState::new();
        let mut arbiter = EngagementArbiter::new();
        let inside = Point::new(50.0, 20.0);

        press(inside, &mut input);
        frame(&mut button, &input, &mut arbiter);
        assert_eq!(clicks.get(), 0);

        release(inside, &mut input);
        frame(&mut button, &input, &mut arbiter);
        assert_eq!(clicks.get(), 1);
        assert!(arbiter.was_used());

        // Holding nothing on later frames does not repeat the click.
        input.begin_frame();
        frame(&mut button, &input, &mut arbiter);
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn test_release_outside_does_not_fire() {
        let clicks = Rc::new(Cell::new(0));
        let mut button = button(clicks.clone());
        let mut input = InputState::new();
        let mut arbiter = EngagementArbiter::new();

        press(Point::new(50.0, 20.0), &mut input);
        frame(&mut button, &input, &mut arbiter);
        release(Point::new(300.0, 20.0), &mut input);
        frame(&mut button, &input, &mut arbiter);

        assert_eq!(clicks.get(), 0);
        assert!(!button.is_hovered());
    }

    #[test]
    fn test_click_ignored_while_other_widget_engaged() {
        let clicks = Rc::new(Cell::new(0));
        let mut button = button(clicks.clone());
        let mut input = InputState::new();
        let mut arbiter = EngagementArbiter::new();
        assert!(arbiter.try_engage(WidgetId::new()));

        release(Point::new(50.0, 20.0), &mut input);
        frame(&mut button, &input, &mut arbiter);
        assert_eq!(clicks.get(), 0);
        assert!(!button.is_hovered());
    }

    #[test]
    fn test_hover_fill_color() {
        let mut button = button(Rc::new(Cell::new(0)));
        let mut input = InputState::new();
        let mut arbiter = EngagementArbiter::new();
        input.handle_pointer_event(PointerEvent::Move {
            position: Point::new(20.0, 20.0),
        });
        frame(&mut button, &input, &mut arbiter);

        let mut recorder = CommandRecorder::new(Size::new(800.0, 600.0));
        button.draw(&mut recorder, Vec2::ZERO, input.pointer_position);
        let quads = recorder.quads();
        assert_eq!(quads.len(), 2);
        assert_eq!(quads[1].2.to_rgba8().r, TOMATO.to_rgba8().r);
        assert_eq!(quads[1].2.to_rgba8().g, TOMATO.to_rgba8().g);
        assert_eq!(quads[1].0, Point::new(12.0, 12.0));
        assert_eq!(quads[1].1, Size::new(96.0, 26.0));
        assert_eq!(recorder.texts(), vec!["Apply"]);
    }

    #[test]
    fn test_centered_label_with_custom_colors() {
        let rect = WidgetRect::new(Point::new(10.0, 10.0), Size::new(100.0, 30.0));
        let button = TextButton::new(rect, "Apply", Font::monospace(10.0, 5.0))
            .with_alignment(TextAlignment::Center)
            .with_colors(LIME_GREEN, BLACK);

        let mut recorder = CommandRecorder::new(Size::new(800.0, 600.0));
        button.draw(&mut recorder, Vec2::ZERO, Point::ZERO);
        assert_eq!(recorder.quads()[1].2.to_rgba8().g, LIME_GREEN.to_rgba8().g);

        let (position, color) = recorder
            .commands()
            .iter()
            .find_map(|cmd| match cmd {
                DrawCommand::Text { position, color, .. } => Some((*position, *color)),
                _ => None,
            })
            .unwrap();
        assert_eq!(position, Point::new(47.5, 20.0));
        assert_eq!(color.to_rgba8().r, 0);
    }
}
