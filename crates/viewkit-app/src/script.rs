//! Pointer scripts replayed by the demo host.

use std::path::Path;

use kurbo::Point;
use serde::{Deserialize, Serialize};
use viewkit_core::{MouseButton, PointerEvent};

use crate::error::AppResult;

/// One entry of a script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum ScriptStep {
    /// Deliver one event, then run a frame.
    Pointer { event: PointerEvent },
    /// Run `frames` frames with no new input.
    Wait { frames: u32 },
}

/// Ordered list of steps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    pub steps: Vec<ScriptStep>,
}

impl Script {
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let script = Self::from_json_str(&json)?;
        log::info!(
            "Loaded script with {} steps from {:?}",
            script.steps.len(),
            path.as_ref()
        );
        Ok(script)
    }

    /// Events for each frame, in order. Empty entries are idle frames.
    pub fn frames(&self) -> Vec<Vec<PointerEvent>> {
        let mut frames = Vec::new();
        for step in &self.steps {
            match step {
                ScriptStep::Pointer { event } => frames.push(vec![event.clone()]),
                ScriptStep::Wait { frames: count } => {
                    frames.extend((0..*count).map(|_| Vec::new()));
                }
            }
        }
        frames
    }

    fn push(&mut self, event: PointerEvent) {
        self.steps.push(ScriptStep::Pointer { event });
    }

    fn press(&mut self, x: f64, y: f64) {
        self.push(PointerEvent::Down {
            position: Point::new(x, y),
            button: MouseButton::Left,
        });
    }

    fn release(&mut self, x: f64, y: f64) {
        self.push(PointerEvent::Up {
            position: Point::new(x, y),
            button: MouseButton::Left,
        });
    }

    fn drag(&mut self, x: f64, y: f64) {
        self.push(PointerEvent::Move {
            position: Point::new(x, y),
        });
    }

    fn click(&mut self, x: f64, y: f64) {
        self.press(x, y);
        self.release(x, y);
    }

    /// Script exercising the default demo layout: pick a hue, drag across
    /// the shade square, pick a background, click the button twice and load
    /// one file.
    pub fn builtin() -> Self {
        let mut script = Self::default();
        // Hue ramp of the material picker.
        script.press(185.0, 120.0);
        script.drag(185.0, 140.0);
        script.release(185.0, 140.0);
        // Shade square.
        script.press(40.0, 40.0);
        script.drag(80.0, 90.0);
        script.release(80.0, 90.0);
        // Background picker.
        script.click(260.0, 60.0);
        // Button.
        script.click(60.0, 245.0);
        script.click(60.0, 245.0);
        // Load dialog, then give the worker time to finish.
        script.click(150.0, 295.0);
        script.steps.push(ScriptStep::Wait { frames: 30 });
        // Hover the loaded entry.
        script.drag(150.0, 295.0);
        script
    }
}
