//! Demo canvas and frame loop.

use std::cell::{Cell, RefCell};
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::{PoisonError, RwLock};
use std::thread;
use std::time::Duration;

use kurbo::{Point, Size};
use peniko::Color;
use viewkit_core::color;
use viewkit_core::{
    bind_sink, Content, ContentTable, FrameTime, GuiConfig, InputState, PointerEvent,
    WidgetRect,
};
use viewkit_render::{CommandRecorder, Font};
use viewkit_widgets::{ColorPicker, GuiCanvas, LoadDialog, TextAlignment, TextButton};

use crate::loader::ImageLoader;
use crate::script::Script;

/// Nominal frame length.
const FRAME: Duration = Duration::from_millis(16);

/// Clear color written by the background picker.
pub static BACKGROUND: RwLock<Color> = RwLock::new(color::BLACK);

/// Object the material picker writes into.
#[derive(Debug, Clone)]
pub struct Material {
    pub tint: Color,
}

impl Default for Material {
    fn default() -> Self {
        Self { tint: color::WHITE }
    }
}

fn set_tint(material: &mut Material, tint: Color) {
    material.tint = tint;
}

fn set_background(slot: &mut Color, value: Color) {
    *slot = value;
}

/// What the widgets produced.
#[derive(Debug, Clone)]
pub struct DemoReport {
    pub frames: usize,
    pub tint: Color,
    pub background: Color,
    pub clicks: u32,
    pub loaded: Vec<Content>,
    pub draw_commands: usize,
}

/// Headless host: a canvas, the input it is fed and a recording renderer.
pub struct Demo {
    canvas: GuiCanvas,
    input: InputState,
    time: FrameTime,
    recorder: CommandRecorder,
    material: Rc<RefCell<Material>>,
    clicks: Rc<Cell<u32>>,
    table: ContentTable,
    frames: usize,
    frame_delay: Duration,
}

impl Demo {
    /// Lay out two pickers, a counter button and a load dialog over `images`.
    pub fn new(config: &GuiConfig, images: Vec<PathBuf>) -> Self {
        let font = Font::monospace(config.font_size, config.char_width);
        let material = Rc::new(RefCell::new(Material::default()));
        let clicks = Rc::new(Cell::new(0));
        let table = ContentTable::new();
        let loader = Rc::new(RefCell::new(ImageLoader::new(table.clone(), images)));

        let mut canvas = GuiCanvas::new();

        let picker_rect = WidgetRect::new(Point::ZERO, Size::new(200.0, 200.0));
        canvas.add(Box::new(
            ColorPicker::new(picker_rect, color::DIM_GRAY, font.clone())
                .with_border(config.picker_border)
                .with_sink(bind_sink(Some(material.clone()), set_tint, &BACKGROUND)),
        ));

        let background_rect = WidgetRect::new(Point::new(220.0, 0.0), Size::new(200.0, 200.0));
        canvas.add(Box::new(
            ColorPicker::new(background_rect, color::DIM_GRAY, font.clone())
                .with_border(config.picker_border)
                .with_sink(bind_sink::<Color, Color>(None, set_background, &BACKGROUND)),
        ));

        let counter = clicks.clone();
        let button_rect = WidgetRect::new(Point::new(10.0, 230.0), Size::new(120.0, 30.0));
        canvas.add(Box::new(
            TextButton::new(button_rect, "Count", font.clone())
                .with_border(config.button_border)
                .with_alignment(TextAlignment::Center)
                .with_colors(color::LIME_GREEN, color::BLACK)
                .on_click(move || counter.set(counter.get() + 1)),
        ));

        let dialog_rect =
            WidgetRect::new(Point::new(10.0, 280.0), Size::new(400.0, 30.0)).with_layer(1);
        canvas.add(Box::new(
            LoadDialog::new(dialog_rect, "Texture:", font, loader)
                .with_border(config.button_border)
                .with_preview_width(config.preview_width),
        ));

        log::info!("Demo canvas has {} widgets", canvas.len());
        Self {
            canvas,
            input: InputState::new(),
            time: FrameTime::default(),
            recorder: CommandRecorder::new(Size::new(config.screen_width, config.screen_height)),
            material,
            clicks,
            table,
            frames: 0,
            frame_delay: FRAME,
        }
    }

    /// Real time to sleep after each frame. Zero runs as fast as possible.
    pub fn with_frame_delay(mut self, delay: Duration) -> Self {
        self.frame_delay = delay;
        self
    }

    /// Feed `events`, update, then draw.
    pub fn frame(&mut self, events: &[PointerEvent]) {
        self.input.begin_frame();
        for event in events {
            self.input.handle_pointer_event(event.clone());
        }
        self.canvas.update(self.time, &self.input);
        self.recorder.clear();
        self.canvas.draw(&mut self.recorder, self.input.pointer_position);

        self.frames += 1;
        self.time = self.time.advance(FRAME);
        if !self.frame_delay.is_zero() {
            thread::sleep(self.frame_delay);
        }
    }

    pub fn run(&mut self, script: &Script) -> DemoReport {
        for events in script.frames() {
            self.frame(&events);
        }
        self.report()
    }

    /// Draw calls of the last frame.
    pub fn recorder(&self) -> &CommandRecorder {
        &self.recorder
    }

    pub fn report(&self) -> DemoReport {
        let loaded = (0..self.table.len())
            .filter_map(|index| self.table.get(index))
            .collect();
        DemoReport {
            frames: self.frames,
            tint: self.material.borrow().tint,
            background: *BACKGROUND.read().unwrap_or_else(PoisonError::into_inner),
            clicks: self.clicks.get(),
            loaded,
            draw_commands: self.recorder.commands().len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use viewkit_core::MouseButton;

    fn rgb(color: Color) -> (u8, u8, u8) {
        let c = color.to_rgba8();
        (c.r, c.g, c.b)
    }

    fn demo(images: Vec<PathBuf>) -> Demo {
        Demo::new(&GuiConfig::default(), images).with_frame_delay(Duration::ZERO)
    }

    #[test]
    fn test_builtin_script_without_images() {
        let mut demo = demo(Vec::new());
        let report = demo.run(&Script::builtin());

        assert_eq!(report.frames, Script::builtin().frames().len());
        assert_eq!(report.clicks, 2);
        assert_ne!(rgb(report.tint), (255, 255, 255));
        assert!(report.loaded.is_empty());
        assert!(report.draw_commands > 0);
        assert!(demo.recorder().texts().contains(&"no files"));
    }

    #[test]
    fn test_loads_image_and_previews_it() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("brick.png");
        image::RgbaImage::new(64, 32).save(&path).unwrap();

        let mut demo = demo(vec![path]);
        let at = Point::new(150.0, 295.0);
        demo.frame(&[PointerEvent::Down {
            position: at,
            button: MouseButton::Left,
        }]);
        demo.frame(&[PointerEvent::Up {
            position: at,
            button: MouseButton::Left,
        }]);

        for _ in 0..500 {
            if !demo.report().loaded.is_empty() && !demo.recorder().images().is_empty() {
                break;
            }
            thread::sleep(Duration::from_millis(2));
            demo.frame(&[]);
        }

        let report = demo.report();
        assert_eq!(report.loaded.len(), 1);
        let images = demo.recorder().images();
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].1, Size::new(250.0, 125.0));
    }
}
