//! viewkit Core Library
//!
//! Renderer-agnostic building blocks for viewkit widgets: pointer input,
//! engagement arbitration, the picker color model, output sinks, and the
//! asynchronous load contract.

pub mod color;
pub mod config;
pub mod content;
pub mod engagement;
pub mod error;
pub mod input;
pub mod job;
pub mod sink;
pub mod widget;

pub use color::ColorSelection;
pub use config::GuiConfig;
pub use content::{Content, ContentLoader, ContentTable, LoadTicket, TextureHandle};
pub use engagement::EngagementArbiter;
pub use error::{GuiError, Result};
pub use input::{InputState, MouseButton, PointerEvent};
pub use job::{spawn_job, JobCompleter, JobHandle, JobOutcome, LoadError, LoadJob};
pub use sink::{bind_sink, CallbackSink, GlobalSink, InstanceSink, OutputSink};
pub use widget::{Alignment, FrameContext, FrameTime, WidgetId, WidgetRect};
