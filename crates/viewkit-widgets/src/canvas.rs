//! Container that drives a set of widgets through update and draw.

use kurbo::{Point, Vec2};
use viewkit_core::{EngagementArbiter, FrameContext, FrameTime, InputState, WidgetId};
use viewkit_render::GuiRenderer;

use crate::Widget;

/// Widgets ordered by layer, plus the arbiter they share.
///
/// The host runs one [`update`](Self::update) and then one
/// [`draw`](Self::draw) per frame. Input state is owned by the host, which
/// calls [`InputState::begin_frame`] before feeding the frame's events.
pub struct GuiCanvas {
    widgets: Vec<Box<dyn Widget>>,
    arbiter: EngagementArbiter,
    offset: Vec2,
}

impl Default for GuiCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl GuiCanvas {
    pub fn new() -> Self {
        Self {
            widgets: Vec::new(),
            arbiter: EngagementArbiter::new(),
            offset: Vec2::ZERO,
        }
    }

    /// Offset applied to every widget position.
    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    /// Add a widget. Widgets on the same layer keep insertion order.
    pub fn add(&mut self, widget: Box<dyn Widget>) -> WidgetId {
        let id = widget.id();
        self.widgets.push(widget);
        self.widgets.sort_by_key(|w| w.rect().layer);
        id
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    pub fn arbiter(&self) -> &EngagementArbiter {
        &self.arbiter
    }

    /// Whether the GUI consumed pointer input during the last update.
    pub fn ui_was_used(&self) -> bool {
        self.arbiter.was_used()
    }

    /// Update every widget in layer order.
    pub fn update(&mut self, time: FrameTime, input: &InputState) {
        self.arbiter.begin_frame();
        for widget in &mut self.widgets {
            let mut ctx = FrameContext::new(time, input, &mut self.arbiter);
            widget.update(&mut ctx, self.offset);
        }
    }

    /// Draw every widget in layer order.
    pub fn draw(&self, renderer: &mut dyn GuiRenderer, pointer: Point) {
        for widget in &self.widgets {
            widget.draw(renderer, self.offset, pointer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Size;
    use std::cell::Cell;
    use std::rc::Rc;
    use viewkit_core::color::DIM_GRAY;
    use viewkit_core::{MouseButton, PointerEvent, WidgetRect};
    use viewkit_render::{CommandRecorder, Font};

    use crate::{ColorPicker, TextButton};

    fn font() -> Font {
        Font::monospace(10.0, 5.0)
    }

    #[test]
    fn test_draws_in_layer_order() {
        let mut canvas = GuiCanvas::new();
        let top = WidgetRect::new(Point::ZERO, Size::new(50.0, 20.0)).with_layer(2);
        let bottom = WidgetRect::new(Point::ZERO, Size::new(50.0, 20.0)).with_layer(1);
        canvas.add(Box::new(TextButton::new(top, "top", font())));
        canvas.add(Box::new(TextButton::new(bottom, "bottom", font())));
        assert_eq!(canvas.len(), 2);

        let mut recorder = CommandRecorder::new(Size::new(800.0, 600.0));
        canvas.draw(&mut recorder, Point::ZERO);
        assert_eq!(recorder.texts(), vec!["bottom", "top"]);
    }

    #[test]
    fn test_picker_drag_holds_engagement() {
        let clicks = Rc::new(Cell::new(0));
        let counter = clicks.clone();
        let mut canvas = GuiCanvas::new();
        let picker = WidgetRect::new(Point::ZERO, Size::new(200.0, 200.0));
        canvas.add(Box::new(ColorPicker::new(picker, DIM_GRAY, font())));
        let button = WidgetRect::new(Point::new(100.0, 300.0), Size::new(80.0, 30.0)).with_layer(1);
        canvas.add(Box::new(TextButton::new(button, "go", font()).on_click(move || {
            counter.set(counter.get() + 1);
        })));

        let mut input = InputState::new();
        let time = FrameTime::default();

        input.handle_pointer_event(PointerEvent::Down {
            position: Point::new(50.0, 50.0),
            button: MouseButton::Left,
        });
        canvas.update(time, &input);
        assert!(canvas.arbiter().is_engaged());
        assert!(canvas.ui_was_used());

        // Sweep over the button while dragging.
        input.begin_frame();
        input.handle_pointer_event(PointerEvent::Move {
            position: Point::new(120.0, 310.0),
        });
        canvas.update(time, &input);
        assert!(canvas.arbiter().is_engaged());
        assert_eq!(clicks.get(), 0);

        // Releasing ends the drag.
        input.begin_frame();
        input.handle_pointer_event(PointerEvent::Up {
            position: Point::new(120.0, 310.0),
            button: MouseButton::Left,
        });
        canvas.update(time, &input);
        assert!(!canvas.arbiter().is_engaged());
    }

    /// Press on a picker at layer 0, drag onto a button at `button_layer`,
    /// release there. Returns how often the button fired.
    fn drag_release_over_button(button_layer: i32) -> u32 {
        let clicks = Rc::new(Cell::new(0));
        let counter = clicks.clone();
        let mut canvas = GuiCanvas::new();
        let picker = WidgetRect::new(Point::ZERO, Size::new(200.0, 200.0));
        canvas.add(Box::new(ColorPicker::new(picker, DIM_GRAY, font())));
        let button = WidgetRect::new(Point::new(100.0, 300.0), Size::new(80.0, 30.0))
            .with_layer(button_layer);
        canvas.add(Box::new(TextButton::new(button, "go", font()).on_click(move || {
            counter.set(counter.get() + 1);
        })));

        let mut input = InputState::new();
        let time = FrameTime::default();
        input.handle_pointer_event(PointerEvent::Down {
            position: Point::new(50.0, 50.0),
            button: MouseButton::Left,
        });
        canvas.update(time, &input);
        input.begin_frame();
        input.handle_pointer_event(PointerEvent::Move {
            position: Point::new(120.0, 310.0),
        });
        canvas.update(time, &input);
        input.begin_frame();
        input.handle_pointer_event(PointerEvent::Up {
            position: Point::new(120.0, 310.0),
            button: MouseButton::Left,
        });
        canvas.update(time, &input);
        assert!(!canvas.arbiter().is_engaged());
        clicks.get()
    }

    #[test]
    fn test_drag_release_never_clicks_regardless_of_layer() {
        assert_eq!(drag_release_over_button(1), 0);
        assert_eq!(drag_release_over_button(-1), 0);
    }

    #[test]
    fn test_click_after_drag_fires() {
        let clicks = Rc::new(Cell::new(0));
        let counter = clicks.clone();
        let mut canvas = GuiCanvas::new();
        let picker = WidgetRect::new(Point::ZERO, Size::new(200.0, 200.0));
        canvas.add(Box::new(ColorPicker::new(picker, DIM_GRAY, font())));
        let button = WidgetRect::new(Point::new(100.0, 300.0), Size::new(80.0, 30.0));
        canvas.add(Box::new(TextButton::new(button, "go", font()).on_click(move || {
            counter.set(counter.get() + 1);
        })));

        let mut input = InputState::new();
        let time = FrameTime::default();
        let steps = [
            PointerEvent::Down {
                position: Point::new(50.0, 50.0),
                button: MouseButton::Left,
            },
            PointerEvent::Up {
                position: Point::new(50.0, 50.0),
                button: MouseButton::Left,
            },
            PointerEvent::Down {
                position: Point::new(120.0, 310.0),
                button: MouseButton::Left,
            },
            PointerEvent::Up {
                position: Point::new(120.0, 310.0),
                button: MouseButton::Left,
            },
        ];
        for event in steps {
            input.begin_frame();
            input.handle_pointer_event(event);
            canvas.update(time, &input);
        }
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn test_unused_frame() {
        let mut canvas = GuiCanvas::new().with_offset(Vec2::new(10.0, 10.0));
        let rect = WidgetRect::new(Point::ZERO, Size::new(50.0, 20.0));
        canvas.add(Box::new(TextButton::new(rect, "idle", font())));

        let input = InputState::new();
        canvas.update(FrameTime::default(), &input);
        assert!(!canvas.ui_was_used());
    }
}
