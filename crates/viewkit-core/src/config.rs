//! Runtime configuration for the GUI layer.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GuiError, Result};

/// GUI settings, usually read from a JSON file next to the viewer.
///
/// Every field has a default, so a partial file (or `{}`) is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuiConfig {
    /// Screen width in pixels.
    pub screen_width: f64,
    /// Screen height in pixels.
    pub screen_height: f64,
    /// Width of the hover preview drawn by load dialogs.
    pub preview_width: f64,
    /// Inner border of the color picker.
    pub picker_border: f64,
    /// Border around buttons and load dialogs.
    pub button_border: f64,
    /// Font size in points.
    pub font_size: f64,
    /// Advance width of the monospace fallback font.
    pub char_width: f64,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            screen_width: 1280.0,
            screen_height: 800.0,
            preview_width: 250.0,
            picker_border: 5.0,
            button_border: 2.0,
            font_size: 14.0,
            char_width: 7.0,
        }
    }
}

impl GuiConfig {
    /// Parse from a JSON string and validate.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: GuiConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded GUI config from {:?}", path.as_ref());
        Ok(config)
    }

    /// Reject values no widget can work with.
    pub fn validate(&self) -> Result<()> {
        if self.screen_width <= 0.0 || self.screen_height <= 0.0 {
            return Err(GuiError::Config(format!(
                "screen size must be positive, got {}x{}",
                self.screen_width, self.screen_height
            )));
        }
        if self.preview_width <= 0.0 {
            return Err(GuiError::Config("preview_width must be positive".into()));
        }
        if self.char_width <= 0.0 {
            return Err(GuiError::Config("char_width must be positive".into()));
        }
        if self.picker_border < 0.0 || self.button_border < 0.0 {
            return Err(GuiError::Config("borders must not be negative".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = GuiConfig::from_json_str("{}").unwrap();
        assert_eq!(config, GuiConfig::default());
        assert!((config.preview_width - 250.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_partial_json() {
        let config = GuiConfig::from_json_str(r#"{"screen_width": 1920}"#).unwrap();
        assert!((config.screen_width - 1920.0).abs() < f64::EPSILON);
        assert!((config.screen_height - 800.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let result = GuiConfig::from_json_str(r#"{"screen_width": 0}"#);
        assert!(matches!(result, Err(GuiError::Config(_))));

        let result = GuiConfig::from_json_str(r#"{"picker_border": -1}"#);
        assert!(matches!(result, Err(GuiError::Config(_))));
    }

    #[test]
    fn test_malformed_json() {
        let result = GuiConfig::from_json_str("{ not json");
        assert!(matches!(result, Err(GuiError::Json(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gui.json");
        std::fs::write(&path, r#"{"preview_width": 320, "font_size": 12}"#).unwrap();

        let config = GuiConfig::load(&path).unwrap();
        assert!((config.preview_width - 320.0).abs() < f64::EPSILON);
        assert!((config.font_size - 12.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let result = GuiConfig::load(dir.path().join("nope.json"));
        assert!(matches!(result, Err(GuiError::Io(_))));
    }
}
