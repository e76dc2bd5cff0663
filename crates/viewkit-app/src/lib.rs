//! viewkit demo host
//!
//! Builds a small widget canvas, replays a pointer script through the frame
//! loop and reports what the widgets produced.

mod demo;
mod error;
mod loader;
mod script;

pub use demo::{Demo, DemoReport, Material};
pub use error::{AppError, AppResult};
pub use loader::ImageLoader;
pub use script::{Script, ScriptStep};
