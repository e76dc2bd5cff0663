//! Button that starts a background load and reports its progress.
//!
//! A click hands the dialog's current ticket to its [`ContentLoader`], which
//! answers with the ticket to hold next. Each frame the held job is polled
//! without blocking; once it finishes the dialog either shows the loaded
//! label or reports the failure. Hovering a loaded texture shows a preview
//! next to the pointer.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Point, Size, Vec2};
use viewkit_core::color;
use viewkit_core::{
    ContentLoader, FrameContext, LoadJob, LoadTicket, TextureHandle, WidgetId, WidgetRect,
};
use viewkit_render::{Font, GuiRenderer};

use crate::sizing::{BUTTON_BORDER, INDICATOR_SIZE, PREVIEW_WIDTH};
use crate::text_block::TextBlock;
use crate::theme;
use crate::Widget;

const INITIAL_LABEL: &str = "...";
const LOADING_LABEL: &str = "loading...";
const FAILED_LABEL: &str = "Loading failed";

/// Space between the value box and the right edge, before the text border.
const RIGHT_GAP: f64 = 2.0;
/// Value box start used when fitting labels, in font positions.
const FIT_SPACING: f64 = 1.5;
/// Value box start used when drawing, in font positions.
const DRAW_SPACING: f64 = 1.2;
/// Left padding of the label inside the value box.
const LABEL_PADDING: f64 = 4.0;

/// Progress of the dialog's current load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
}

pub struct LoadDialog {
    id: WidgetId,
    rect: WidgetRect,
    block: TextBlock,
    border: f64,
    preview_width: f64,
    hovered: bool,
    status: LoadStatus,
    job: Option<Box<dyn LoadJob>>,
    index: Option<usize>,
    label: String,
    loader: Rc<RefCell<dyn ContentLoader>>,
}

impl LoadDialog {
    /// `declaration` is the fixed text drawn before the value box.
    pub fn new(
        rect: WidgetRect,
        declaration: impl Into<String>,
        font: Font,
        loader: Rc<RefCell<dyn ContentLoader>>,
    ) -> Self {
        let block = TextBlock::new(declaration, font, rect.size);
        Self {
            id: WidgetId::new(),
            rect,
            block,
            border: BUTTON_BORDER,
            preview_width: PREVIEW_WIDTH,
            hovered: false,
            status: LoadStatus::Idle,
            job: None,
            index: None,
            label: INITIAL_LABEL.to_string(),
            loader,
        }
    }

    pub fn with_border(mut self, border: f64) -> Self {
        self.border = border;
        self
    }

    pub fn with_preview_width(mut self, width: f64) -> Self {
        self.preview_width = width;
        self
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn content_index(&self) -> Option<usize> {
        self.index
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Width left for the label inside the value box.
    fn label_width(&self) -> f64 {
        let button_left =
            self.block.text_size().width + self.block.font_position().x * FIT_SPACING;
        self.rect.size.width
            - 2.0 * self.border
            - button_left
            - (RIGHT_GAP + self.block.text_border().x)
    }

    fn poll_job(&mut self) {
        let Some(job) = self.job.as_ref() else {
            return;
        };
        if !job.is_complete() {
            self.status = LoadStatus::Loading;
            return;
        }
        if job.is_faulted() {
            log::warn!("Load for '{}' failed", self.label);
            self.status = LoadStatus::Idle;
            self.label = FAILED_LABEL.to_string();
        } else {
            log::info!("Loaded '{}'", self.label);
            self.status = LoadStatus::Loaded;
        }
        self.job = None;
    }

    fn begin_load(&mut self) {
        let Ok(mut loader) = self.loader.try_borrow_mut() else {
            log::warn!("Content loader is busy, click ignored");
            return;
        };
        let previous = LoadTicket {
            job: self.job.take(),
            index: self.index,
            label: std::mem::take(&mut self.label),
        };
        let ticket = loader.begin_load(previous);
        drop(loader);

        self.job = ticket.job;
        self.index = ticket.index;
        self.label = truncate_to_fit(&ticket.label, self.label_width(), self.block.font());
        self.status = if self.job.is_some() {
            LoadStatus::Loading
        } else {
            LoadStatus::Idle
        };
        log::info!("Started load '{}'", self.label);
    }

    fn preview_texture(&self) -> Option<TextureHandle> {
        let index = self.index?;
        let loader = self.loader.try_borrow().ok()?;
        loader.content(index)?.as_texture().copied()
    }
}

/// Keep as many leading characters of `label` as fit in `width`.
///
/// The average advance of the label itself is used as the character width.
pub fn truncate_to_fit(label: &str, width: f64, font: &Font) -> String {
    let len = label.chars().count();
    if len == 0 {
        return String::new();
    }
    let char_width = font.measure(label).width / len as f64;
    let keep = ((width / char_width).max(0.0) as usize).min(len);
    label.chars().take(keep).collect()
}

/// Where to draw a texture preview at `pointer`, shifted left so it stays
/// inside a viewport of width `viewport_width`.
pub fn preview_placement(
    pointer: Point,
    texture: &TextureHandle,
    preview_width: f64,
    viewport_width: f64,
) -> (Point, Size) {
    let mut position = pointer;
    let overflow = position.x + preview_width - viewport_width;
    if overflow > 0.0 {
        position.x -= overflow;
    }
    let size = Size::new(preview_width, texture.aspect_ratio() * preview_width);
    (position, size)
}

impl Widget for LoadDialog {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn rect(&self) -> &WidgetRect {
        &self.rect
    }

    fn update(&mut self, ctx: &mut FrameContext<'_>, parent: Vec2) {
        self.poll_job();

        if ctx.arbiter.was_blocked_at_frame_start(self.id) {
            self.hovered = false;
            return;
        }
        self.hovered = self.rect.contains(parent, ctx.pointer());
        if !self.hovered || !ctx.input.was_primary_clicked() {
            return;
        }
        ctx.arbiter.mark_used();
        if self.status == LoadStatus::Loading {
            log::debug!("Load already in progress, click ignored");
            return;
        }
        self.begin_load();
    }

    fn draw(&self, renderer: &mut dyn GuiRenderer, parent: Vec2, pointer: Point) {
        let origin = self.rect.position + parent;
        let size = self.rect.size;
        let b = self.border;
        let font_position = self.block.font_position();
        let text_border = self.block.text_border();
        let button_left = self.block.text_size().width + font_position.x * DRAW_SPACING;

        renderer.draw_quad(origin, size, self.block.block_color);

        let value_color = if self.hovered {
            theme::DIALOG_HOVER
        } else {
            theme::DIALOG_IDLE
        };
        renderer.draw_quad(
            origin + Vec2::new(button_left + b, b),
            Size::new(
                size.width - 2.0 * b - button_left - (RIGHT_GAP + text_border.x),
                size.height - 2.0 * b,
            ),
            value_color,
        );

        let indicator_color = match self.status {
            LoadStatus::Idle => theme::STATUS_IDLE,
            LoadStatus::Loading => theme::STATUS_LOADING,
            LoadStatus::Loaded => theme::STATUS_LOADED,
        };
        renderer.draw_quad(
            origin
                + Vec2::new(
                    size.width - (RIGHT_GAP + text_border.x),
                    size.height * 0.5 - INDICATOR_SIZE * 0.5,
                ),
            Size::new(INDICATOR_SIZE, INDICATOR_SIZE),
            indicator_color,
        );

        renderer.draw_text(
            origin + font_position,
            self.block.text(),
            self.block.font(),
            self.block.text_color,
        );
        let description = if self.status == LoadStatus::Loading {
            LOADING_LABEL
        } else {
            &self.label
        };
        renderer.draw_text(
            origin + Vec2::new(button_left + LABEL_PADDING, font_position.y),
            description,
            self.block.font(),
            self.block.text_color,
        );

        if self.status != LoadStatus::Loaded || !self.hovered {
            return;
        }
        if let Some(texture) = self.preview_texture() {
            let viewport = renderer.viewport_size();
            let (position, size) =
                preview_placement(pointer, &texture, self.preview_width, viewport.width);
            renderer.draw_image(position, size, &texture, color::WHITE, true);
        }
    }
}
