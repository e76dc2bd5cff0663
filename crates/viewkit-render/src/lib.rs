//! viewkit Render Library
//!
//! Draw primitive abstraction consumed by viewkit widgets, plus backends.
//! The default backend paints onto an egui `Painter`.

mod font;
mod recorder;
mod renderer;

#[cfg(feature = "egui-renderer")]
mod egui_impl;

pub use font::{Font, FontMetrics, MonospaceMetrics};
pub use recorder::{CommandRecorder, DrawCommand};
pub use renderer::{GuiRenderer, RenderResult, RendererError};

#[cfg(feature = "egui-renderer")]
pub use egui_impl::EguiRenderer;
