//! Interactive widgets for the viewkit GUI layer.
//!
//! - **Picker**: hue ramp plus shade square color picker
//! - **Button**: text button with hover highlight and click action
//! - **Load dialog**: button that starts a background load and shows its progress
//! - **Canvas**: host container running update/draw in layer order

pub mod button;
pub mod canvas;
pub mod load_dialog;
pub mod picker;
pub mod text_block;

pub use button::TextButton;
pub use canvas::GuiCanvas;
pub use load_dialog::{LoadDialog, LoadStatus};
pub use picker::{ColorPicker, PickerPhase};
pub use text_block::{TextAlignment, TextBlock};

use kurbo::{Point, Vec2};
use viewkit_core::{FrameContext, WidgetId, WidgetRect};
use viewkit_render::GuiRenderer;

/// A screen-space element driven once per frame by the host.
pub trait Widget {
    /// Stable identity, used for engagement ownership.
    fn id(&self) -> WidgetId;

    /// The widget's rectangle.
    fn rect(&self) -> &WidgetRect;

    /// Read input and advance state. Called before `draw`.
    fn update(&mut self, ctx: &mut FrameContext<'_>, parent: Vec2);

    /// Issue draw primitives. Must not change interaction state.
    fn draw(&self, renderer: &mut dyn GuiRenderer, parent: Vec2, pointer: Point);
}

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Border inside the color picker
    pub const PICKER_BORDER: f64 = 5.0;
    /// Frame width around buttons and load dialogs
    pub const BUTTON_BORDER: f64 = 2.0;
    /// Width of the texture preview shown by load dialogs
    pub const PREVIEW_WIDTH: f64 = 250.0;
    /// Side of the load status indicator
    pub const INDICATOR_SIZE: f64 = 8.0;
}

/// Standard colors used across widgets.
pub mod theme {
    use peniko::Color;
    use viewkit_core::color;

    /// Button frame
    pub const FRAME: Color = color::DIM_GRAY;
    /// Hovered button fill
    pub const BUTTON_HOVER: Color = color::TOMATO;
    /// Hovered load dialog value box
    pub const DIALOG_HOVER: Color = color::LIGHT_GRAY;
    /// Idle load dialog value box
    pub const DIALOG_IDLE: Color = color::DIM_GRAY;
    /// Status indicator: nothing loaded
    pub const STATUS_IDLE: Color = color::RED;
    /// Status indicator: loading
    pub const STATUS_LOADING: Color = color::YELLOW;
    /// Status indicator: loaded
    pub const STATUS_LOADED: Color = color::LIME_GREEN;
}
