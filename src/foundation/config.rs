use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::color::is_hex_color,
    foundation::error::{PinError, PinResult},
    geometry::orientation::Orientation,
};

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Session-start defaults for the editor.
///
/// Every field is optional in JSON; missing fields fall back to
/// [`EditorConfig::default`].
pub struct EditorConfig {
    /// Defaults applied when a text layer is created.
    pub text: TextDefaults,
    /// Defaults applied to the canvas at session start and on reset.
    pub canvas: CanvasDefaults,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Attributes of a freshly created text layer.
pub struct TextDefaults {
    /// Initial content. Must be non-empty, otherwise the new layer would count as deleted.
    pub content: String,
    /// Initial font size in display pixels.
    pub font_size: f64,
    /// Initial text color (hex).
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Canvas attributes before the first geometry derivation.
pub struct CanvasDefaults {
    pub orientation: Orientation,
    /// Background color (hex).
    pub background_color: String,
}

impl Default for TextDefaults {
    fn default() -> Self {
        Self {
            content: "Add text".to_string(),
            font_size: 14.0,
            color: "#000000".to_string(),
        }
    }
}

impl Default for CanvasDefaults {
    fn default() -> Self {
        Self {
            orientation: Orientation::Portrait,
            background_color: "#ffffff".to_string(),
        }
    }
}

impl EditorConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json_str(s: &str) -> PinResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> PinResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read editor config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    pub fn validate(&self) -> PinResult<()> {
        if self.text.content.is_empty() {
            return Err(PinError::validation("text.content must be non-empty"));
        }
        if !self.text.font_size.is_finite() || self.text.font_size <= 0.0 {
            return Err(PinError::validation(
                "text.font_size must be finite and > 0",
            ));
        }
        for (field, value) in [
            ("text.color", &self.text.color),
            ("canvas.background_color", &self.canvas.background_color),
        ] {
            if !is_hex_color(value) {
                return Err(PinError::validation(format!(
                    "{field} must be a hex color, got '{value}'"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
