//! Widget base contract shared by every interactive element.
//!
//! Widgets are pure rectangles plus their own interaction state. They read
//! pointer input and the engagement arbiter through a [`FrameContext`] and
//! never talk to each other directly.

mod context;
mod rect;

pub use context::{FrameContext, FrameTime};
pub use rect::{Alignment, WidgetRect};

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WidgetId(Uuid);

impl WidgetId {
    /// Generate a fresh identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for WidgetId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
