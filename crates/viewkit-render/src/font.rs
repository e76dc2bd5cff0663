//! Font handles and text metrics.

use std::fmt;
use std::sync::Arc;

use kurbo::Size;

/// Measures text laid out on a single line.
pub trait FontMetrics: Send + Sync {
    fn measure(&self, text: &str) -> Size;
}

/// Fixed advance width per character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMetrics {
    pub char_width: f64,
    pub line_height: f64,
}

impl FontMetrics for MonospaceMetrics {
    fn measure(&self, text: &str) -> Size {
        Size::new(
            text.chars().count() as f64 * self.char_width,
            self.line_height,
        )
    }
}

/// A font as widgets see it: a point size plus metrics.
#[derive(Clone)]
pub struct Font {
    /// Point size passed to the backend.
    pub size: f64,
    metrics: Arc<dyn FontMetrics>,
}

impl Font {
    pub fn new(size: f64, metrics: Arc<dyn FontMetrics>) -> Self {
        Self { size, metrics }
    }

    /// Monospace font with the given size and advance width.
    pub fn monospace(size: f64, char_width: f64) -> Self {
        Self::new(
            size,
            Arc::new(MonospaceMetrics {
                char_width,
                line_height: size,
            }),
        )
    }

    /// Size of `text` on one line.
    pub fn measure(&self, text: &str) -> Size {
        self.metrics.measure(text)
    }
}

impl fmt::Debug for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Font").field("size", &self.size).finish()
    }
}
