//! Loaded content table and the loader contract used by load dialogs.

use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use crate::error::{GuiError, Result};
use crate::job::LoadJob;

/// Renderer-side texture reference with its pixel dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextureHandle {
    /// Identifier the renderer uses to find the texture.
    pub id: u64,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl TextureHandle {
    pub fn new(id: u64, width: u32, height: u32) -> Self {
        Self { id, width, height }
    }

    /// Height over width. Zero-width textures report 0.
    pub fn aspect_ratio(&self) -> f64 {
        if self.width == 0 {
            0.0
        } else {
            f64::from(self.height) / f64::from(self.width)
        }
    }
}

/// A loaded resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Content {
    /// Image-like content that can be previewed.
    Texture(TextureHandle),
    /// A 3D model.
    Model { name: String },
    /// Anything else.
    Other { name: String },
}

impl Content {
    /// The texture, if this content is image-like.
    pub fn as_texture(&self) -> Option<&TextureHandle> {
        match self {
            Content::Texture(texture) => Some(texture),
            _ => None,
        }
    }
}

/// Shared slots for loaded content, written by load jobs and read by widgets.
///
/// Slots are reserved up front so a job knows its index before it starts.
#[derive(Debug, Clone, Default)]
pub struct ContentTable {
    slots: Arc<RwLock<Vec<Option<Content>>>>,
}

impl ContentTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve an empty slot and return its index.
    pub fn reserve(&self) -> usize {
        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        slots.push(None);
        slots.len() - 1
    }

    /// Store content in a reserved slot.
    pub fn fill(&self, index: usize, content: Content) -> Result<()> {
        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        let slot = slots.get_mut(index).ok_or(GuiError::ContentIndex(index))?;
        *slot = Some(content);
        Ok(())
    }

    /// Content at `index`, if loaded.
    pub fn get(&self, index: usize) -> Option<Content> {
        let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
        slots.get(index).cloned().flatten()
    }

    /// Number of reserved slots.
    pub fn len(&self) -> usize {
        self.slots.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// What a load dialog holds between clicks: the job, the slot it fills, and
/// the label to display.
#[derive(Default)]
pub struct LoadTicket {
    pub job: Option<Box<dyn LoadJob>>,
    pub index: Option<usize>,
    pub label: String,
}

impl LoadTicket {
    pub fn new(job: Box<dyn LoadJob>, index: usize, label: impl Into<String>) -> Self {
        Self {
            job: Some(job),
            index: Some(index),
            label: label.into(),
        }
    }
}

impl std::fmt::Debug for LoadTicket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadTicket")
            .field("has_job", &self.job.is_some())
            .field("index", &self.index)
            .field("label", &self.label)
            .finish()
    }
}

/// Starts loads on behalf of a load dialog and resolves finished content.
pub trait ContentLoader {
    /// Start (or continue) a load. Receives the dialog's previous ticket and
    /// returns the ticket to hold from now on.
    fn begin_load(&mut self, previous: LoadTicket) -> LoadTicket;

    /// Resolve a content index.
    fn content(&self, index: usize) -> Option<Content>;
}
